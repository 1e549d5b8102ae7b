//! Section, seat, and row label data model.
//!
//! A `Section` exclusively owns its `Seat`s; deleting a section drops its
//! seats with it. Seats carry two coordinate layers: an immutable `base`
//! position (the canonical grid anchor, with zero stretch/curve) and a
//! mutable `relative` position holding the output of the active transforms.
//! Rotation is never baked into either layer; it is applied as a rigid
//! pivot transform when world coordinates are produced.

use crate::geometry::bbox::{BoundingBox, Point};
use crate::geometry::transform::RotationTransform;
use crate::scene::error::SceneError;

/// Kind of region a section represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Regular grid of individually sold seats
    SeatGrid,
    /// General admission region: no seats, explicit size
    GeneralAdmission,
    /// Decorative/stage zone: no seats, explicit size
    Zone,
}

/// Horizontal anchoring of rows inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Which side of the row a label sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// A single seat inside a section's grid
#[derive(Debug, Clone)]
pub struct Seat {
    row: usize,
    col: usize,
    base: Point,
    relative: Point,
}

impl Seat {
    pub(crate) fn new(row: usize, col: usize, base: Point) -> Self {
        Self {
            row,
            col,
            base,
            relative: base,
        }
    }

    /// Grid row index, fixed at creation
    pub fn row(&self) -> usize {
        self.row
    }

    /// Grid column index, fixed at creation
    pub fn col(&self) -> usize {
        self.col
    }

    /// Canonical grid position with zero stretch/curve applied
    pub fn base(&self) -> Point {
        self.base
    }

    /// Current section-local position after stretch/curve
    pub fn relative(&self) -> Point {
        self.relative
    }

    pub(crate) fn set_relative(&mut self, relative: Point) {
        self.relative = relative;
    }

    /// Re-anchor the canonical grid position. Only row alignment is
    /// allowed to do this; transforms always recompute from `base`.
    pub(crate) fn shift_base_x(&mut self, dx: f64) {
        self.base.x += dx;
    }
}

/// Derived decoration naming a row; regenerated whenever seats move and
/// owning no transform state of its own
#[derive(Debug, Clone)]
pub struct RowLabel {
    pub row: usize,
    pub text: String,
    pub side: LabelSide,
    /// Label extents in the section-local frame
    pub bounds: BoundingBox,
}

/// A rectangular block of seats (or a seatless GA/zone region)
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    kind: SectionKind,
    /// World anchor the section-local frame hangs from
    pub position: Point,
    /// Rotation around the section pivot, in degrees (clockwise positive)
    pub rotation_degrees: f64,
    /// Curve amount, 0-100
    pub curve: f64,
    /// Signed horizontal stretch offset per column step
    pub stretch_h: f64,
    /// Signed vertical stretch offset per row step
    pub stretch_v: f64,
    pub row_alignment: RowAlignment,
    content_width: f64,
    content_height: f64,
    /// Local min corner of the padded seat+label box, kept by the
    /// dimension aggregator so `bounds` stays exact without re-anchoring
    /// seat base positions
    content_origin: Point,
    seats: Vec<Seat>,
    labels: Vec<RowLabel>,
}

impl Section {
    /// Create a seat-grid section with `rows` x `cols` seats spaced by
    /// `(spacing_x, spacing_y)`. Dimensions are left zeroed; callers run
    /// the dimension aggregator once the section is in a scene.
    pub fn seat_grid(
        id: impl Into<String>,
        position: Point,
        rows: usize,
        cols: usize,
        spacing_x: f64,
        spacing_y: f64,
    ) -> Result<Self, SceneError> {
        let id = id.into();
        if rows == 0 || cols == 0 {
            return Err(SceneError::EmptyGrid { section: id });
        }
        if !(spacing_x.is_finite() && spacing_y.is_finite()) || spacing_x <= 0.0 || spacing_y <= 0.0
        {
            return Err(SceneError::InvalidSpacing {
                section: id,
                spacing_x,
                spacing_y,
            });
        }

        let mut seats = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let base = Point::new(col as f64 * spacing_x, row as f64 * spacing_y);
                seats.push(Seat::new(row, col, base));
            }
        }

        Ok(Self {
            id,
            kind: SectionKind::SeatGrid,
            position,
            rotation_degrees: 0.0,
            curve: 0.0,
            stretch_h: 0.0,
            stretch_v: 0.0,
            row_alignment: RowAlignment::Left,
            content_width: 0.0,
            content_height: 0.0,
            content_origin: Point::default(),
            seats,
            labels: vec![],
        })
    }

    /// Create a seatless region (GA or zone) with an explicit size
    pub fn region(
        id: impl Into<String>,
        kind: SectionKind,
        position: Point,
        width: f64,
        height: f64,
    ) -> Result<Self, SceneError> {
        let id = id.into();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(SceneError::InvalidRegionSize {
                section: id,
                width,
                height,
            });
        }
        Ok(Self {
            id,
            kind,
            position,
            rotation_degrees: 0.0,
            curve: 0.0,
            stretch_h: 0.0,
            stretch_v: 0.0,
            row_alignment: RowAlignment::Left,
            content_width: width,
            content_height: height,
            content_origin: Point::default(),
            seats: vec![],
            labels: vec![],
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub(crate) fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    pub fn labels(&self) -> &[RowLabel] {
        &self.labels
    }

    pub(crate) fn set_labels(&mut self, labels: Vec<RowLabel>) {
        self.labels = labels;
    }

    /// Logical content size in the unrotated local frame
    pub fn content_size(&self) -> (f64, f64) {
        (self.content_width, self.content_height)
    }

    pub(crate) fn set_content_geometry(&mut self, origin: Point, width: f64, height: f64) {
        self.content_origin = origin;
        self.content_width = width;
        self.content_height = height;
    }

    /// Unrotated world bounding box of the padded content
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.position.x + self.content_origin.x,
            self.position.y + self.content_origin.y,
            self.content_width,
            self.content_height,
        )
    }

    /// Rotation origin: the geometric center of the unrotated bounds
    pub fn pivot(&self) -> Point {
        self.bounds().center()
    }

    /// World AABB used for all collision queries. For rotated sections
    /// this is the loose box around the rotated corners, so the collision
    /// box tracks the rotation transform.
    pub fn collision_bounds(&self) -> BoundingBox {
        let rotation = RotationTransform::new(self.rotation_degrees, self.pivot());
        rotation.transform_bounds(&self.bounds())
    }

    /// Center of the collision box (the pivot-relative center convention)
    pub fn center(&self) -> Point {
        self.collision_bounds().center()
    }

    /// Place the section so its center lands on `center`
    pub fn set_center(&mut self, center: Point) {
        let current = self.center();
        self.translate(center.x - current.x, center.y - current.y);
    }

    /// Move the whole section. Seats and labels are stored relative to
    /// `position`, so they follow without recomputation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Sorted, deduplicated list of row indices present in the grid
    pub fn row_indices(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.seats.iter().map(Seat::row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// World positions of every seat, with the pivot rotation applied
    pub fn seat_world_positions(&self) -> Vec<Point> {
        let rotation = RotationTransform::new(self.rotation_degrees, self.pivot());
        self.seats
            .iter()
            .map(|seat| {
                rotation.transform_point(Point::new(
                    self.position.x + seat.relative().x,
                    self.position.y + seat.relative().y,
                ))
            })
            .collect()
    }
}
