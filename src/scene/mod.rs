//! Scene data model: sections, seats, labels, selections, and the TOML
//! scene description the CLI consumes.

pub mod builder;
pub mod error;
pub mod section;
pub mod selection;
pub mod spec;

pub use builder::Scene;
pub use error::SceneError;
pub use section::{LabelSide, RowAlignment, RowLabel, Seat, Section, SectionKind};
pub use selection::Selection;
pub use spec::{OpSpec, SceneSpec, SectionSpec};
