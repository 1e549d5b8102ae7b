//! Seat-grid transforms: stretch, arc curve, and pivot rotation.
//!
//! The three layers compose in a fixed order. Stretch and curve are
//! recomputed from each seat's canonical `base` position every time a
//! parameter changes — never incrementally from the previous output — so
//! applying the same parameters twice yields identical seat positions.
//! Rotation is applied last, as a rigid transform around the section
//! pivot, and never touches the stored `relative` coordinates.
//!
//! Out-of-range parameters are clamped, not rejected: curve is clamped to
//! 0-100 and to the section's own safe maximum, and negative stretch is
//! clamped so the seat spacing never drops below the configured floor.

use crate::geometry::bbox::{BoundingBox, Point};
use crate::geometry::config::GeometryConfig;
use crate::geometry::dimensions;
use crate::scene::section::{RowAlignment, Section};

/// A rigid 2D rotation around a center point.
///
/// Uses screen convention: clockwise positive angles in degrees, Y axis
/// pointing down. With Y down, clockwise rotation is the standard matrix:
/// ```text
/// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
/// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    /// Rotation angle in degrees (clockwise positive)
    pub angle_degrees: f64,
    /// Center of rotation, typically the section pivot
    pub center: Point,
}

impl RotationTransform {
    pub fn new(angle_degrees: f64, center: Point) -> Self {
        Self {
            angle_degrees,
            center,
        }
    }

    /// True when the angle is close enough to zero to skip the math
    pub fn is_identity(&self) -> bool {
        self.angle_degrees.abs() < f64::EPSILON
    }

    /// Rotate a point around the center
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        let radians = self.angle_degrees.to_radians();
        let cos_a = radians.cos();
        let sin_a = radians.sin();

        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: self.center.x + dx * cos_a - dy * sin_a,
            y: self.center.y + dx * sin_a + dy * cos_a,
        }
    }

    /// Loose axis-aligned bounds of a rotated box: rotate the four
    /// corners, then take the AABB of the rotated corner points. Slightly
    /// over-estimates for round shapes but keeps collision queries on
    /// plain interval math.
    pub fn transform_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        if self.is_identity() {
            return *bounds;
        }

        let corners = [
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.x, bounds.bottom()),
            Point::new(bounds.right(), bounds.bottom()),
        ];
        let rotated: Vec<Point> = corners.iter().map(|p| self.transform_point(*p)).collect();

        // Four corners in, four points out: around_points cannot be empty
        BoundingBox::around_points(&rotated).unwrap_or(*bounds)
    }
}

/// Recompute every seat's `relative` position from its `base` position
/// under the section's current stretch and curve parameters, then refresh
/// labels and dimensions.
///
/// GA/zone sections have no seats; only their label/dimension pass runs.
pub fn apply_transforms(section: &mut Section, config: &GeometryConfig) {
    if !section.seats().is_empty() {
        let stretched = stretched_positions(section, config);
        let curved = curved_positions(section, &stretched, config);
        for (seat, position) in section.seats_mut().iter_mut().zip(curved) {
            seat.set_relative(position);
        }
    }

    dimensions::position_seats_and_labels(section, config);
    dimensions::recalculate_dimensions(section, config);
}

/// The largest curve value (0-100) that keeps the section's widest row
/// from subtending more than the configured arc angle, so the two row
/// ends cannot fold back into each other. UI sliders clamp to this value;
/// `apply_transforms` clamps to it as well.
pub fn max_curve(section: &Section, config: &GeometryConfig) -> f64 {
    let stretched = stretched_positions(section, config);
    let width = widest_row_span(section, &stretched);
    if width <= f64::EPSILON {
        return 100.0;
    }
    (config.max_arc_angle * config.curve_divisor / width).clamp(0.0, 100.0)
}

/// Re-anchor each row's canonical base positions so rows sit left,
/// centered, or right within the widest row, then reapply transforms.
///
/// This is the one operation allowed to rewrite seat base positions; it
/// redefines the canonical grid that stretch/curve recompute from.
pub fn apply_row_alignment(section: &mut Section, config: &GeometryConfig) {
    if section.seats().is_empty() {
        return;
    }

    let alignment = section.row_alignment;
    let block = span(section.seats().iter().map(|s| s.base().x));

    for row in section.row_indices() {
        let row_span = span(
            section
                .seats()
                .iter()
                .filter(|s| s.row() == row)
                .map(|s| s.base().x),
        );
        let shift = match alignment {
            RowAlignment::Left => block.0 - row_span.0,
            RowAlignment::Center => {
                (block.0 + block.1) / 2.0 - (row_span.0 + row_span.1) / 2.0
            }
            RowAlignment::Right => block.1 - row_span.1,
        };
        if shift.abs() > f64::EPSILON {
            for seat in section.seats_mut().iter_mut().filter(|s| s.row() == row) {
                seat.shift_base_x(shift);
            }
        }
    }

    apply_transforms(section, config);
}

/// Effective (clamped) stretch offsets per column/row step.
///
/// The clamp keeps post-stretch spacing at or above the configured floor,
/// measured against the section's own base spacing; sections too small to
/// measure fall back to the default grid spacing.
fn effective_stretch(section: &Section, config: &GeometryConfig) -> (f64, f64) {
    let floor = config.min_seat_spacing();
    let col_spacing = measured_spacing(section, true).unwrap_or(config.default_grid_spacing);
    let row_spacing = measured_spacing(section, false).unwrap_or(config.default_grid_spacing);
    (
        section.stretch_h.max(floor - col_spacing),
        section.stretch_v.max(floor - row_spacing),
    )
}

/// Smallest positive base gap between adjacent columns (or rows), or
/// `None` for single-column (single-row) sections
fn measured_spacing(section: &Section, columns: bool) -> Option<f64> {
    let mut spacing = f64::INFINITY;
    for a in section.seats() {
        for b in section.seats() {
            let adjacent = if columns {
                a.row() == b.row() && b.col() == a.col() + 1
            } else {
                a.col() == b.col() && b.row() == a.row() + 1
            };
            if adjacent {
                let gap = if columns {
                    (b.base().x - a.base().x).abs()
                } else {
                    (b.base().y - a.base().y).abs()
                };
                if gap > f64::EPSILON && gap < spacing {
                    spacing = gap;
                }
            }
        }
    }
    spacing.is_finite().then_some(spacing)
}

/// Base positions with the effective stretch applied, in seat order
fn stretched_positions(section: &Section, config: &GeometryConfig) -> Vec<Point> {
    let (eff_h, eff_v) = effective_stretch(section, config);
    section
        .seats()
        .iter()
        .map(|seat| {
            Point::new(
                seat.base().x + seat.col() as f64 * eff_h,
                seat.base().y + seat.row() as f64 * eff_v,
            )
        })
        .collect()
}

/// Map the stretch-adjusted grid onto concentric arcs.
///
/// Curvature `k = curve / divisor`, base radius `R = 1/k`. Each row sits
/// on an arc of radius `R + row offset`; within a row, a seat's flat
/// offset from the block center becomes its arc length, so seats step by
/// equal arc length. The curved block is then re-centered on the flat
/// block's center.
fn curved_positions(
    section: &Section,
    stretched: &[Point],
    config: &GeometryConfig,
) -> Vec<Point> {
    let curve = section
        .curve
        .clamp(0.0, 100.0)
        .min(max_curve(section, config));
    if curve <= f64::EPSILON {
        return stretched.to_vec();
    }

    let flat_bounds = match BoundingBox::around_points(stretched) {
        Some(bounds) => bounds,
        None => return stretched.to_vec(),
    };
    let flat_center = flat_bounds.center();
    let first_row_y = stretched.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

    let radius = config.curve_divisor / curve;
    let curved: Vec<Point> = stretched
        .iter()
        .map(|flat| {
            let row_radius = radius + (flat.y - first_row_y);
            let theta = (flat.x - flat_center.x) / row_radius;
            Point::new(
                flat_center.x + row_radius * theta.sin(),
                first_row_y + (row_radius * theta.cos() - radius),
            )
        })
        .collect();

    let curved_center = match BoundingBox::around_points(&curved) {
        Some(bounds) => bounds.center(),
        None => return curved,
    };
    let dx = flat_center.x - curved_center.x;
    let dy = flat_center.y - curved_center.y;
    curved
        .into_iter()
        .map(|p| Point::new(p.x + dx, p.y + dy))
        .collect()
}

/// Horizontal span of the widest row in the given per-seat positions
fn widest_row_span(section: &Section, positions: &[Point]) -> f64 {
    let mut widest = 0.0_f64;
    for row in section.row_indices() {
        let (min, max) = section
            .seats()
            .iter()
            .zip(positions)
            .filter(|(seat, _)| seat.row() == row)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, p)| {
                (lo.min(p.x), hi.max(p.x))
            });
        if max > min {
            widest = widest.max(max - min);
        }
    }
    widest
}

fn span(xs: impl Iterator<Item = f64>) -> (f64, f64) {
    xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    })
}
