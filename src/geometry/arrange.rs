//! Multi-section alignment and distribution.
//!
//! Alignment repositions every selected section so a chosen edge or
//! center line matches across the selection, touching only that axis.
//! Distribution spaces the interior of a selection evenly between its
//! two outermost sections, pushing the far endpoint outward when the
//! even gap would fall below the configured minimum. Both finish by
//! refreshing seat/label geometry and running the collision separator.
//!
//! Selections below the required size (two for align, three for
//! distribute) are silent no-ops; the host UI disables the controls
//! independently.

use crate::geometry::bbox::BoundingBox;
use crate::geometry::config::GeometryConfig;
use crate::geometry::separate;
use crate::geometry::transform;
use crate::scene::section::Section;

/// Edge or center line an alignment matches across the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignEdge {
    Left,
    Right,
    CenterX,
    Top,
    Bottom,
    CenterY,
}

impl AlignEdge {
    fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::CenterX)
    }
}

/// Axis a distribution spaces the selection along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Align every selected section on one edge/center coordinate.
///
/// The target is the minimum (left/top), maximum (right/bottom), or mean
/// (centers) of that coordinate across the selection; the other axis is
/// left untouched. Requires at least two sections.
pub fn align(
    sections: &mut [Section],
    selection: &[usize],
    edge: AlignEdge,
    config: &GeometryConfig,
) {
    if selection.len() < 2 {
        return;
    }

    let boxes: Vec<BoundingBox> = selection
        .iter()
        .map(|&i| sections[i].collision_bounds())
        .collect();

    let target = match edge {
        AlignEdge::Left => boxes.iter().map(|b| b.x).fold(f64::INFINITY, f64::min),
        AlignEdge::Right => boxes
            .iter()
            .map(|b| b.right())
            .fold(f64::NEG_INFINITY, f64::max),
        AlignEdge::CenterX => {
            boxes.iter().map(|b| b.center().x).sum::<f64>() / boxes.len() as f64
        }
        AlignEdge::Top => boxes.iter().map(|b| b.y).fold(f64::INFINITY, f64::min),
        AlignEdge::Bottom => boxes
            .iter()
            .map(|b| b.bottom())
            .fold(f64::NEG_INFINITY, f64::max),
        AlignEdge::CenterY => {
            boxes.iter().map(|b| b.center().y).sum::<f64>() / boxes.len() as f64
        }
    };

    for (&i, b) in selection.iter().zip(&boxes) {
        let delta = match edge {
            AlignEdge::Left => target - b.x,
            AlignEdge::Right => target - b.right(),
            AlignEdge::CenterX => target - b.center().x,
            AlignEdge::Top => target - b.y,
            AlignEdge::Bottom => target - b.bottom(),
            AlignEdge::CenterY => target - b.center().y,
        };
        if edge.is_horizontal() {
            sections[i].translate(delta, 0.0);
        } else {
            sections[i].translate(0.0, delta);
        }
    }

    finish(sections, selection, config);
}

/// Space the selection evenly along one axis.
///
/// The outermost two sections anchor the span; interior sections get
/// equal gaps. When the even gap would drop below the configured
/// minimum, the last section is pushed outward by exactly enough to
/// restore it, rather than letting the interior overlap. Requires at
/// least three sections; the first stays fixed and the separator runs
/// over the rest.
pub fn distribute(
    sections: &mut [Section],
    selection: &[usize],
    axis: Axis,
    config: &GeometryConfig,
) {
    if selection.len() < 3 {
        return;
    }

    let mut order: Vec<(usize, BoundingBox)> = selection
        .iter()
        .map(|&i| (i, sections[i].collision_bounds()))
        .collect();
    order.sort_by(|a, b| start(&a.1, axis).total_cmp(&start(&b.1, axis)));

    let first = order[0].1;
    let last = order[order.len() - 1].1;
    let interior = &order[1..order.len() - 1];

    let interior_sum: f64 = interior.iter().map(|(_, b)| extent(b, axis)).sum();
    let gap_count = (order.len() - 1) as f64;
    let span = start(&last, axis) - end(&first, axis);
    let mut gap = (span - interior_sum) / gap_count;

    if gap < config.min_distribution_gap {
        gap = config.min_distribution_gap;
        let target_start = end(&first, axis) + interior_sum + gap * gap_count;
        let delta = target_start - start(&last, axis);
        let last_index = order[order.len() - 1].0;
        shift(&mut sections[last_index], delta, axis);
    }

    let mut cursor = end(&first, axis) + gap;
    let interior: Vec<(usize, BoundingBox)> = interior.to_vec();
    for (i, b) in interior {
        shift(&mut sections[i], cursor - start(&b, axis), axis);
        cursor += extent(&b, axis) + gap;
    }

    // The first (fixed) section never moves, not even to separate
    let moved: Vec<usize> = order[1..].iter().map(|(i, _)| *i).collect();
    finish(sections, &moved, config);
}

/// Refresh derived geometry for the moved sections, then separate
fn finish(sections: &mut [Section], moved: &[usize], config: &GeometryConfig) {
    for &i in moved {
        transform::apply_transforms(&mut sections[i], config);
    }
    separate::resolve_collisions(sections, moved, config);
}

fn start(b: &BoundingBox, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => b.x,
        Axis::Vertical => b.y,
    }
}

fn end(b: &BoundingBox, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => b.right(),
        Axis::Vertical => b.bottom(),
    }
}

fn extent(b: &BoundingBox, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => b.width,
        Axis::Vertical => b.height,
    }
}

fn shift(section: &mut Section, delta: f64, axis: Axis) {
    match axis {
        Axis::Horizontal => section.translate(delta, 0.0),
        Axis::Vertical => section.translate(0.0, delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bbox::Point;
    use crate::scene::section::SectionKind;

    fn region(id: &str, x: f64, y: f64, w: f64, h: f64) -> Section {
        Section::region(id, SectionKind::Zone, Point::new(x, y), w, h).unwrap()
    }

    fn xs(sections: &[Section]) -> Vec<f64> {
        sections.iter().map(|s| s.collision_bounds().x).collect()
    }

    #[test]
    fn test_align_left() {
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),
            region("b", 50.0, 100.0, 30.0, 30.0),
            region("c", 120.0, 200.0, 20.0, 30.0),
        ];
        let config = GeometryConfig::default();
        align(&mut sections, &[0, 1, 2], AlignEdge::Left, &config);
        assert_eq!(xs(&sections), vec![0.0, 0.0, 0.0]);
        // The untouched axis is preserved
        assert_eq!(sections[1].collision_bounds().y, 100.0);
    }

    #[test]
    fn test_align_right() {
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),
            region("b", 50.0, 100.0, 30.0, 30.0),
        ];
        let config = GeometryConfig::default();
        align(&mut sections, &[0, 1], AlignEdge::Right, &config);
        assert_eq!(sections[0].collision_bounds().right(), 80.0);
        assert_eq!(sections[1].collision_bounds().right(), 80.0);
    }

    #[test]
    fn test_align_center_x_uses_mean() {
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),   // center 20
            region("b", 100.0, 100.0, 40.0, 30.0), // center 120
        ];
        let config = GeometryConfig::default();
        align(&mut sections, &[0, 1], AlignEdge::CenterX, &config);
        // Mean of centers 20 and 120
        assert_eq!(sections[0].collision_bounds().center().x, 70.0);
        assert_eq!(sections[1].collision_bounds().center().x, 70.0);
    }

    #[test]
    fn test_align_top_and_bottom() {
        let mut sections = vec![
            region("a", 0.0, 10.0, 40.0, 30.0),
            region("b", 100.0, 50.0, 40.0, 60.0),
        ];
        let config = GeometryConfig::default();
        align(&mut sections, &[0, 1], AlignEdge::Top, &config);
        assert_eq!(sections[0].collision_bounds().y, 10.0);
        assert_eq!(sections[1].collision_bounds().y, 10.0);

        align(&mut sections, &[0, 1], AlignEdge::Bottom, &config);
        assert_eq!(sections[0].collision_bounds().bottom(), 70.0);
        assert_eq!(sections[1].collision_bounds().bottom(), 70.0);
    }

    #[test]
    fn test_align_below_threshold_is_noop() {
        let mut sections = vec![region("a", 5.0, 5.0, 40.0, 30.0)];
        let config = GeometryConfig::default();
        align(&mut sections, &[0], AlignEdge::Left, &config);
        assert_eq!(sections[0].collision_bounds().x, 5.0);
    }

    #[test]
    fn test_distribute_with_room_spaces_evenly() {
        // Wide span, so the computed gap clears the 40 minimum
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),
            region("b", 50.0, 100.0, 30.0, 30.0),
            region("c", 200.0, 200.0, 20.0, 30.0),
        ];
        let config = GeometryConfig::default();
        distribute(&mut sections, &[0, 1, 2], Axis::Horizontal, &config);

        // span = 200 - 40 = 160, interior = 30, gap = (160 - 30) / 2 = 65
        let b = sections[1].collision_bounds();
        assert_eq!(b.x, 105.0);
        // Endpoints stay fixed
        assert_eq!(sections[0].collision_bounds().x, 0.0);
        assert_eq!(sections[2].collision_bounds().x, 200.0);
    }

    #[test]
    fn test_distribute_pushes_last_out_for_min_gap() {
        // x = {0, 50, 120}, widths = {40, 30, 20}.
        // gap = (80 - 30) / 2 = 25 < 40, so the last section moves out
        // and the middle lands at 40 + 40 = 80.
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),
            region("b", 50.0, 100.0, 30.0, 30.0),
            region("c", 120.0, 200.0, 20.0, 30.0),
        ];
        let config = GeometryConfig::default();
        distribute(&mut sections, &[0, 1, 2], Axis::Horizontal, &config);

        assert_eq!(sections[1].collision_bounds().x, 80.0);
        // last pushed to 40 + 30 + 2 * 40 = 150
        assert_eq!(sections[2].collision_bounds().x, 150.0);
        assert_eq!(sections[0].collision_bounds().x, 0.0);
    }

    #[test]
    fn test_distribute_vertical() {
        let mut sections = vec![
            region("a", 0.0, 0.0, 30.0, 40.0),
            region("b", 100.0, 30.0, 30.0, 30.0),
            region("c", 200.0, 300.0, 30.0, 20.0),
        ];
        let config = GeometryConfig::default();
        distribute(&mut sections, &[0, 1, 2], Axis::Vertical, &config);

        // span = 300 - 40 = 260, interior = 30, gap = 115
        assert_eq!(sections[1].collision_bounds().y, 155.0);
        assert_eq!(sections[2].collision_bounds().y, 300.0);
    }

    #[test]
    fn test_distribute_below_threshold_is_noop() {
        let mut sections = vec![
            region("a", 0.0, 0.0, 40.0, 30.0),
            region("b", 300.0, 0.0, 30.0, 30.0),
        ];
        let config = GeometryConfig::default();
        distribute(&mut sections, &[0, 1], Axis::Horizontal, &config);
        assert_eq!(xs(&sections), vec![0.0, 300.0]);
    }

    #[test]
    fn test_distribute_sorts_by_position_not_selection_order() {
        let mut sections = vec![
            region("middle", 50.0, 0.0, 30.0, 30.0),
            region("first", 0.0, 100.0, 40.0, 30.0),
            region("last", 200.0, 200.0, 20.0, 30.0),
        ];
        let config = GeometryConfig::default();
        distribute(&mut sections, &[0, 1, 2], Axis::Horizontal, &config);

        // "first" (x=0) anchors the span even though it was selected second
        assert_eq!(sections[1].collision_bounds().x, 0.0);
        assert_eq!(sections[0].collision_bounds().x, 105.0);
    }

    #[test]
    fn test_align_then_no_overlap_invariant() {
        // Alignment that stacks sections is immediately separated
        let mut sections = vec![
            region("a", 0.0, 0.0, 50.0, 50.0),
            region("b", 60.0, 20.0, 50.0, 50.0),
            region("c", 120.0, 40.0, 50.0, 50.0),
        ];
        let config = GeometryConfig::default();
        align(&mut sections, &[0, 1, 2], AlignEdge::Top, &config);

        for i in 0..sections.len() {
            for j in 0..sections.len() {
                if i != j {
                    let a = sections[i].collision_bounds();
                    let b = sections[j].collision_bounds();
                    assert!(!a.overlaps_padded(&b, 0.0));
                }
            }
        }
    }
}
