//! Axis-aligned bounding boxes and the padded overlap test used by every
//! collision query in the engine.

/// A 2D point in world or section-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box (AABB)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// This box inflated by `padding` on all four sides
    pub fn inflated(&self, padding: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - padding,
            self.y - padding,
            self.width + padding * 2.0,
            self.height + padding * 2.0,
        )
    }

    /// This box translated by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Strict intersection test: boxes that merely touch edge-to-edge do
    /// not intersect, so flush placement is always permitted.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Strict overlap test with this box inflated by `padding` on all
    /// four sides; `other` is used as given.
    pub fn overlaps_padded(&self, other: &BoundingBox, padding: f64) -> bool {
        self.inflated(padding).intersects(other)
    }

    /// Signed overlap extents `(x, y)` between this box (inflated by
    /// `padding`) and `other`. An extent `<= 0.0` on either axis means the
    /// boxes are separated or flush on that axis.
    pub fn overlap_extents(&self, other: &BoundingBox, padding: f64) -> (f64, f64) {
        let a = self.inflated(padding);
        let x = a.right().min(other.right()) - a.x.max(other.x);
        let y = a.bottom().min(other.bottom()) - a.y.max(other.y);
        (x, y)
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Smallest box containing every point, or `None` for an empty set
    pub fn around_points(points: &[Point]) -> Option<BoundingBox> {
        let first = points.first()?;
        let mut bounds = BoundingBox::new(first.x, first.y, 0.0, 0.0);
        for point in &points[1..] {
            bounds = bounds.expand_to_include(*point);
        }
        Some(bounds)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_bounding_box_edges() {
        let bb = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bb.right(), 110.0);
        assert_eq!(bb.bottom(), 70.0);
    }

    #[test]
    fn test_bounding_box_center() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let center = bb.center();
        assert_eq!(center.x, 50.0);
        assert_eq!(center.y, 25.0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(bb.contains(Point::new(50.0, 50.0)));
        assert!(bb.contains(Point::new(0.0, 0.0)));
        assert!(bb.contains(Point::new(100.0, 100.0)));
        assert!(!bb.contains(Point::new(-1.0, 50.0)));
        assert!(!bb.contains(Point::new(101.0, 50.0)));
    }

    #[test]
    fn test_bounding_box_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(50.0, 50.0, 100.0, 100.0);
        let c = BoundingBox::new(200.0, 200.0, 50.0, 50.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_flush_boxes_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(100.0, 0.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_padded_overlap_is_one_sided() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(105.0, 0.0, 100.0, 100.0);

        // 5 unit gap: padding 10 on box a bridges it; box b is never padded
        assert!(!a.overlaps_padded(&b, 0.0));
        assert!(a.overlaps_padded(&b, 10.0));
        // Padding of exactly the gap width leaves the boxes flush
        assert!(!a.overlaps_padded(&b, 5.0));
    }

    #[test]
    fn test_overlap_extents() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(70.0, 90.0, 100.0, 100.0);

        let (x, y) = a.overlap_extents(&b, 0.0);
        assert_eq!(x, 30.0);
        assert_eq!(y, 10.0);

        let c = BoundingBox::new(200.0, 0.0, 50.0, 50.0);
        let (x, _) = a.overlap_extents(&c, 0.0);
        assert!(x <= 0.0);
    }

    #[test]
    fn test_bounding_box_union() {
        let a = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        let b = BoundingBox::new(100.0, 100.0, 50.0, 50.0);
        let union = a.union(&b);

        assert_eq!(union.x, 0.0);
        assert_eq!(union.y, 0.0);
        assert_eq!(union.width, 150.0);
        assert_eq!(union.height, 150.0);
    }

    #[test]
    fn test_around_points() {
        let points = [
            Point::new(10.0, 5.0),
            Point::new(-3.0, 20.0),
            Point::new(7.0, 7.0),
        ];
        let bounds = BoundingBox::around_points(&points).unwrap();
        assert_eq!(bounds.x, -3.0);
        assert_eq!(bounds.y, 5.0);
        assert_eq!(bounds.right(), 10.0);
        assert_eq!(bounds.bottom(), 20.0);

        assert!(BoundingBox::around_points(&[]).is_none());
    }
}
