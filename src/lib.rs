//! Seatplan - collision and layout geometry for venue seating editors
//!
//! This library provides the geometric core of an interactive seating
//! layout editor: sections of seats that can be dragged, aligned,
//! distributed, stretched, curved, and rotated, with AABB collision
//! keeping sections from overlapping throughout.
//!
//! # Example
//!
//! ```rust
//! use seatplan::run_scene;
//!
//! let scene = run_scene(r#"
//!     [[sections]]
//!     id = "orchestra"
//!     rows = 5
//!     cols = 10
//! "#).unwrap();
//! assert_eq!(scene.section("orchestra").unwrap().seats().len(), 50);
//! ```

pub mod geometry;
pub mod scene;

pub use geometry::{
    align, apply_row_alignment, apply_transforms, collision_vector, distribute, max_curve,
    permitted_drag, resolve_collisions, AlignEdge, Axis, BoundingBox, DragDelta, GeometryConfig,
    Point, RotationTransform,
};
pub use scene::{
    RowAlignment, Scene, SceneError, SceneSpec, Seat, Section, SectionKind, Selection,
};

use scene::builder::parse_row_alignment;
use scene::OpSpec;

/// Configuration for the scene pipeline
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Geometry engine configuration
    pub geometry: GeometryConfig,
    /// Debug mode: dump section geometry to stderr after each op
    pub debug: bool,
}

impl RunConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the geometry configuration
    pub fn with_geometry(mut self, config: GeometryConfig) -> Self {
        self.geometry = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Parse a TOML scene, build its sections, and apply its op list with
/// default configuration. This is the main entry point for the library.
pub fn run_scene(source: &str) -> Result<Scene, SceneError> {
    run_scene_with_config(source, RunConfig::default())
}

/// Parse and run a TOML scene with custom configuration
pub fn run_scene_with_config(source: &str, config: RunConfig) -> Result<Scene, SceneError> {
    let spec = SceneSpec::from_toml(source)?;
    let mut scene = Scene::build(&spec, &config.geometry)?;

    for op in &spec.ops {
        apply_op(&mut scene, op, &config.geometry)?;
        if config.debug {
            eprintln!("=== after op '{}' ===", op.action);
            dump_scene(&scene);
        }
    }

    Ok(scene)
}

/// Apply a single editing operation to a scene.
///
/// Geometry semantics (threshold no-ops, parameter clamps) live in the
/// geometry modules; this resolves identifiers and keywords and reports
/// malformed ops.
pub fn apply_op(scene: &mut Scene, op: &OpSpec, config: &GeometryConfig) -> Result<(), SceneError> {
    let selection = scene.select(&op.sections)?;

    match op.action.as_str() {
        "move" => {
            let [dx, dy] = require(op, op.delta, "delta")?;
            for &i in selection.sections() {
                scene.sections[i].translate(dx, dy);
            }
            resolve_collisions(&mut scene.sections, selection.sections(), config);
        }
        "drag" => {
            let [dx, dy] = require(op, op.delta, "delta")?;
            let permitted = permitted_drag(&scene.sections, selection.sections(), dx, dy, config);
            for &i in selection.sections() {
                scene.sections[i].translate(permitted.dx, permitted.dy);
            }
        }
        "align" => {
            let edge = parse_edge(require_ref(op, op.edge.as_deref(), "edge")?)?;
            align(&mut scene.sections, selection.sections(), edge, config);
        }
        "distribute" => {
            let axis = parse_axis(require_ref(op, op.axis.as_deref(), "axis")?)?;
            distribute(&mut scene.sections, selection.sections(), axis, config);
        }
        "curve" => {
            let value = require(op, op.value, "value")?;
            for &i in selection.sections() {
                scene.sections[i].curve = value;
                apply_transforms(&mut scene.sections[i], config);
            }
            resolve_collisions(&mut scene.sections, selection.sections(), config);
        }
        "stretch" => {
            let [h, v] = require(op, op.delta, "delta")?;
            for &i in selection.sections() {
                scene.sections[i].stretch_h = h;
                scene.sections[i].stretch_v = v;
                apply_transforms(&mut scene.sections[i], config);
            }
            resolve_collisions(&mut scene.sections, selection.sections(), config);
        }
        "rotate" => {
            let value = require(op, op.value, "value")?;
            for &i in selection.sections() {
                scene.sections[i].rotation_degrees = value;
                apply_transforms(&mut scene.sections[i], config);
            }
            resolve_collisions(&mut scene.sections, selection.sections(), config);
        }
        "row-align" => {
            let alignment =
                parse_row_alignment(require_ref(op, op.alignment.as_deref(), "alignment")?)?;
            for &i in selection.sections() {
                scene.sections[i].row_alignment = alignment;
                apply_row_alignment(&mut scene.sections[i], config);
            }
            resolve_collisions(&mut scene.sections, selection.sections(), config);
        }
        other => {
            return Err(SceneError::unknown_keyword(
                "action",
                other,
                &[
                    "move",
                    "drag",
                    "align",
                    "distribute",
                    "curve",
                    "stretch",
                    "rotate",
                    "row-align",
                ],
            ))
        }
    }

    Ok(())
}

/// Dump section geometry to stderr, one line per section
pub fn dump_scene(scene: &Scene) {
    for section in &scene.sections {
        let b = section.collision_bounds();
        eprintln!(
            "[{}] x={:.1} y={:.1} w={:.1} h={:.1} rot={:.1} curve={:.1} seats={}",
            section.id(),
            b.x,
            b.y,
            b.width,
            b.height,
            section.rotation_degrees,
            section.curve,
            section.seats().len()
        );
    }
}

fn require<T>(op: &OpSpec, field: Option<T>, name: &str) -> Result<T, SceneError> {
    field.ok_or_else(|| SceneError::missing_field(&op.action, name))
}

fn require_ref<'a>(op: &OpSpec, field: Option<&'a str>, name: &str) -> Result<&'a str, SceneError> {
    field.ok_or_else(|| SceneError::missing_field(&op.action, name))
}

fn parse_edge(value: &str) -> Result<AlignEdge, SceneError> {
    match value {
        "left" => Ok(AlignEdge::Left),
        "right" => Ok(AlignEdge::Right),
        "center-x" => Ok(AlignEdge::CenterX),
        "top" => Ok(AlignEdge::Top),
        "bottom" => Ok(AlignEdge::Bottom),
        "center-y" => Ok(AlignEdge::CenterY),
        other => Err(SceneError::unknown_keyword(
            "edge",
            other,
            &["left", "right", "center-x", "top", "bottom", "center-y"],
        )),
    }
}

fn parse_axis(value: &str) -> Result<Axis, SceneError> {
    match value {
        "horizontal" => Ok(Axis::Horizontal),
        "vertical" => Ok(Axis::Vertical),
        other => Err(SceneError::unknown_keyword(
            "axis",
            other,
            &["horizontal", "vertical"],
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_minimal_scene() {
        let scene = run_scene(
            r#"
            [[sections]]
            id = "main"
            rows = 4
            cols = 6
            "#,
        )
        .unwrap();
        assert_eq!(scene.sections.len(), 1);
        assert_eq!(scene.section("main").unwrap().seats().len(), 24);
    }

    #[test]
    fn test_run_scene_with_align_op() {
        let scene = run_scene(
            r#"
            [[sections]]
            id = "a"
            kind = "zone"
            width = 50.0
            height = 50.0

            [[sections]]
            id = "b"
            kind = "zone"
            position = [100.0, 200.0]
            width = 50.0
            height = 50.0

            [[ops]]
            action = "align"
            sections = ["a", "b"]
            edge = "left"
            "#,
        )
        .unwrap();
        assert_eq!(scene.section("b").unwrap().collision_bounds().x, 0.0);
        assert_eq!(scene.section("b").unwrap().collision_bounds().y, 200.0);
    }

    #[test]
    fn test_unknown_action_reported() {
        let result = run_scene(
            r#"
            [[sections]]
            id = "a"
            rows = 2
            cols = 2

            [[ops]]
            action = "explode"
            sections = ["a"]
            "#,
        );
        assert!(matches!(result, Err(SceneError::UnknownKeyword { .. })));
    }

    #[test]
    fn test_op_with_unknown_section_reported() {
        let result = run_scene(
            r#"
            [[sections]]
            id = "main"
            rows = 2
            cols = 2

            [[ops]]
            action = "curve"
            sections = ["mian"]
            value = 20.0
            "#,
        );
        match result {
            Err(SceneError::UnknownSection { suggestions, .. }) => {
                assert_eq!(suggestions, vec!["main".to_string()]);
            }
            other => panic!("expected UnknownSection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_op_field_reported() {
        let result = run_scene(
            r#"
            [[sections]]
            id = "a"
            rows = 2
            cols = 2

            [[ops]]
            action = "curve"
            sections = ["a"]
            "#,
        );
        assert!(matches!(result, Err(SceneError::MissingOpField { .. })));
    }

    #[test]
    fn test_drag_op_is_constrained() {
        let scene = run_scene(
            r#"
            [[sections]]
            id = "a"
            kind = "zone"
            width = 50.0
            height = 50.0

            [[sections]]
            id = "b"
            kind = "zone"
            position = [80.0, 0.0]
            width = 50.0
            height = 50.0

            [[ops]]
            action = "drag"
            sections = ["a"]
            delta = [100.0, 0.0]
            "#,
        )
        .unwrap();
        // a slides up flush against b instead of passing through it
        assert_eq!(scene.section("a").unwrap().collision_bounds().x, 30.0);
    }
}
