//! Dimension aggregation: row label placement and the section's logical
//! content box.
//!
//! `content_width`/`content_height` always describe the padded bounding
//! box of all seats and labels in the section's unrotated local frame.
//! Rotation never feeds back into these values; it is applied at
//! position time only.

use crate::geometry::bbox::{BoundingBox, Point};
use crate::geometry::config::GeometryConfig;
use crate::scene::section::{LabelSide, RowLabel, Section};

/// Regenerate the section's row labels from the current seat positions.
///
/// Labels are derived decorations: one per row per side, anchored on the
/// row's outermost seats, with estimated text metrics. Seatless sections
/// carry no labels.
pub fn position_seats_and_labels(section: &mut Section, config: &GeometryConfig) {
    if section.seats().is_empty() {
        section.set_labels(vec![]);
        return;
    }

    let seat_radius = config.seat_diameter / 2.0;
    let mut labels = Vec::new();

    for row in section.row_indices() {
        let text = row_letter(row);
        let width = estimate_label_width(&text, config);

        let mut leftmost: Option<Point> = None;
        let mut rightmost: Option<Point> = None;
        for seat in section.seats().iter().filter(|s| s.row() == row) {
            let p = seat.relative();
            if leftmost.map_or(true, |lm| p.x < lm.x) {
                leftmost = Some(p);
            }
            if rightmost.map_or(true, |rm| p.x > rm.x) {
                rightmost = Some(p);
            }
        }
        let (leftmost, rightmost) = match (leftmost, rightmost) {
            (Some(l), Some(r)) => (l, r),
            _ => continue,
        };

        labels.push(RowLabel {
            row,
            text: text.clone(),
            side: LabelSide::Left,
            bounds: BoundingBox::new(
                leftmost.x - seat_radius - config.label_gap - width,
                leftmost.y - config.label_height / 2.0,
                width,
                config.label_height,
            ),
        });
        labels.push(RowLabel {
            row,
            text,
            side: LabelSide::Right,
            bounds: BoundingBox::new(
                rightmost.x + seat_radius + config.label_gap,
                rightmost.y - config.label_height / 2.0,
                width,
                config.label_height,
            ),
        });
    }

    section.set_labels(labels);
}

/// Recompute the section's content size and local origin from the union
/// of seat extents (seat centers inflated to the seat diameter) and label
/// extents, plus the section padding.
///
/// Seatless GA/zone sections keep their explicit size.
pub fn recalculate_dimensions(section: &mut Section, config: &GeometryConfig) {
    if section.seats().is_empty() {
        return;
    }

    let seat_radius = config.seat_diameter / 2.0;
    let mut bounds: Option<BoundingBox> = None;

    for seat in section.seats() {
        let p = seat.relative();
        let seat_box = BoundingBox::new(
            p.x - seat_radius,
            p.y - seat_radius,
            config.seat_diameter,
            config.seat_diameter,
        );
        bounds = Some(match bounds {
            Some(b) => b.union(&seat_box),
            None => seat_box,
        });
    }
    for label in section.labels() {
        let label_box = label.bounds;
        bounds = Some(match bounds {
            Some(b) => b.union(&label_box),
            None => label_box,
        });
    }

    if let Some(b) = bounds {
        let padded = b.inflated(config.section_padding);
        section.set_content_geometry(
            Point::new(padded.x, padded.y),
            padded.width,
            padded.height,
        );
    }
}

/// Spreadsheet-style row name: A..Z, AA, AB, ...
pub fn row_letter(row: usize) -> String {
    let mut n = row;
    let mut out = String::new();
    loop {
        out.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    out
}

fn estimate_label_width(text: &str, config: &GeometryConfig) -> f64 {
    text.len() as f64 * config.label_char_width
}
