//! Collision and layout geometry engine.
//!
//! This is the interactive core of the editor: AABB collision testing,
//! sliding-drag movement constraint, minimum-translation-vector
//! separation with iterative relaxation, multi-section alignment and
//! distribution, and the seat-grid transforms (stretch, arc curve, pivot
//! rotation) that every layout operation keeps consistent with the
//! collision box.
//!
//! Everything operates synchronously on explicit section slices passed
//! in by the caller; there is no ambient scene state.

pub mod arrange;
pub mod bbox;
pub mod config;
pub mod dimensions;
pub mod drag;
pub mod separate;
pub mod transform;

pub use arrange::{align, distribute, AlignEdge, Axis};
pub use bbox::{BoundingBox, Point};
pub use config::GeometryConfig;
pub use dimensions::{position_seats_and_labels, recalculate_dimensions};
pub use drag::{permitted_drag, DragDelta};
pub use separate::{collision_vector, resolve_collisions};
pub use transform::{
    apply_row_alignment, apply_transforms, max_curve, RotationTransform,
};
