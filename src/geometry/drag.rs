//! Sliding drag constraint: clamp a pointer-drag delta so the dragged
//! sections can never penetrate a static section, while still sliding
//! freely along whichever axis is not blocked.
//!
//! Each axis is solved independently: the X delta is tested with Y held
//! at its original value, and vice versa. A blocked axis is clamped to
//! the exact distance that leaves the boxes flush, never to open air,
//! and the pair scan repeats until no clamp changes, since shrinking a
//! delta can bring obstacles into range that the larger delta jumped
//! clean over.

use crate::geometry::config::GeometryConfig;
use crate::scene::section::Section;

/// The permitted portion of a requested drag delta
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Clamp `(dx, dy)` for the sections in `moving` against every other
/// section in the scene. Returns the minimum-magnitude clamp across all
/// moving/static pairs; an axis whose requested delta is zero is skipped
/// entirely.
pub fn permitted_drag(
    sections: &[Section],
    moving: &[usize],
    dx: f64,
    dy: f64,
    config: &GeometryConfig,
) -> DragDelta {
    let padding = config.collision_padding;
    let mut dx_allowed = dx;
    let mut dy_allowed = dy;

    // A clamp from a far obstacle can drop the box into the range of a
    // nearer one that tested clear at the larger delta, so rescan the
    // pairs until a full pass leaves both deltas unchanged. Each clamp
    // shrinks a delta to one of finitely many flush distances, so this
    // terminates.
    loop {
        let mut clamped = false;

        for &m in moving {
            let moving_box = sections[m].collision_bounds();
            for (j, other) in sections.iter().enumerate() {
                if moving.contains(&j) {
                    continue;
                }
                let other_box = other.collision_bounds();

                if dx != 0.0
                    && dx_allowed != 0.0
                    && moving_box
                        .translated(dx_allowed, 0.0)
                        .overlaps_padded(&other_box, padding)
                {
                    let flush = if dx_allowed > 0.0 {
                        (other_box.x - moving_box.right() - padding).max(0.0)
                    } else {
                        (other_box.right() - moving_box.x + padding).min(0.0)
                    };
                    if flush.abs() < dx_allowed.abs() {
                        dx_allowed = flush;
                        clamped = true;
                    }
                }

                if dy != 0.0
                    && dy_allowed != 0.0
                    && moving_box
                        .translated(0.0, dy_allowed)
                        .overlaps_padded(&other_box, padding)
                {
                    let flush = if dy_allowed > 0.0 {
                        (other_box.y - moving_box.bottom() - padding).max(0.0)
                    } else {
                        (other_box.bottom() - moving_box.y + padding).min(0.0)
                    };
                    if flush.abs() < dy_allowed.abs() {
                        dy_allowed = flush;
                        clamped = true;
                    }
                }
            }
        }

        if !clamped {
            break;
        }
    }

    DragDelta {
        dx: dx_allowed,
        dy: dy_allowed,
    }
}
