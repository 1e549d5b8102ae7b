//! Collision separation: minimum-translation-vector computation and the
//! iterative relaxation that pushes overlapping sections apart after a
//! discrete layout operation.
//!
//! The relaxation is Gauss-Seidel style: each moved section is pushed out
//! of every box it still overlaps, one pair at a time, using the freshest
//! geometry, and the whole pass repeats until a pass finds no collision
//! or the iteration ceiling is reached. Dense degenerate packings may not
//! converge within the ceiling; the residual overlap is an accepted
//! best-effort result, surfaced by the return value and never an error.

use crate::geometry::bbox::BoundingBox;
use crate::geometry::config::GeometryConfig;
use crate::scene::section::Section;

/// Minimum translation vector separating `a` from `b`, or `None` when the
/// boxes (with `a` inflated by `padding`) do not strictly overlap.
///
/// The push lands on the axis with the smaller positive overlap — so an
/// alignment on the other axis survives the separation — and points away
/// from `b`'s center.
pub fn collision_vector(
    a: &BoundingBox,
    b: &BoundingBox,
    padding: f64,
) -> Option<(f64, f64)> {
    let (overlap_x, overlap_y) = a.overlap_extents(b, padding);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    if overlap_x <= overlap_y {
        let push = if a.center().x < b.center().x {
            -overlap_x
        } else {
            overlap_x
        };
        Some((push, 0.0))
    } else {
        let push = if a.center().y < b.center().y {
            -overlap_y
        } else {
            overlap_y
        };
        Some((0.0, push))
    }
}

/// Relax the sections in `moved` until no moved section overlaps any
/// other section, or the configured pass ceiling is exhausted.
///
/// Returns `true` when a full pass completed with zero collisions.
/// Section geometry is stored relative to the section position, so each
/// push keeps seats and labels in sync without recomputation.
pub fn resolve_collisions(
    sections: &mut [Section],
    moved: &[usize],
    config: &GeometryConfig,
) -> bool {
    for _ in 0..config.separation_passes {
        let mut collided = false;
        for &i in moved {
            for j in 0..sections.len() {
                if j == i {
                    continue;
                }
                let a = sections[i].collision_bounds();
                let b = sections[j].collision_bounds();
                if let Some((dx, dy)) = collision_vector(&a, &b, config.collision_padding) {
                    sections[i].translate(dx, dy);
                    collided = true;
                }
            }
        }
        if !collided {
            return true;
        }
    }
    false
}
