//! TOML scene description.
//!
//! A scene file declares the sections of a venue layout and an ordered
//! list of editing operations to apply to them. The raw structs here
//! mirror the TOML shape one-to-one; the builder validates them into
//! live `Section`s.
//!
//! ```toml
//! [[sections]]
//! id = "orchestra"
//! rows = 10
//! cols = 20
//! position = [0.0, 0.0]
//! curve = 30.0
//!
//! [[sections]]
//! id = "lawn"
//! kind = "ga"
//! position = [0.0, 400.0]
//! width = 500.0
//! height = 200.0
//!
//! [[ops]]
//! action = "align"
//! sections = ["orchestra", "lawn"]
//! edge = "left"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::scene::error::SceneError;

/// A full scene: section declarations plus an ordered op list
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSpec {
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub ops: Vec<OpSpec>,
}

/// Raw section declaration as written in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    /// "grid" (default), "ga", or "zone"
    pub kind: Option<String>,
    pub position: Option<[f64; 2]>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    /// Seat spacing `[x, y]`; defaults to the config grid spacing
    pub spacing: Option<[f64; 2]>,
    pub curve: Option<f64>,
    /// Stretch offsets `[horizontal, vertical]`
    pub stretch: Option<[f64; 2]>,
    pub rotation: Option<f64>,
    /// "left" (default), "center", or "right"
    pub row_alignment: Option<String>,
    /// GA/zone only
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Raw editing operation as written in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct OpSpec {
    /// "move", "drag", "align", "distribute", "curve", "stretch",
    /// "rotate", or "row-align"
    pub action: String,
    #[serde(default)]
    pub sections: Vec<String>,
    /// align: "left", "right", "center-x", "top", "bottom", "center-y"
    pub edge: Option<String>,
    /// distribute: "horizontal" or "vertical"
    pub axis: Option<String>,
    /// move/drag delta, stretch offsets
    pub delta: Option<[f64; 2]>,
    /// curve/rotate amount
    pub value: Option<f64>,
    /// row-align: "left", "center", or "right"
    pub alignment: Option<String>,
}

impl SceneSpec {
    /// Parse a scene from TOML text
    pub fn from_toml(source: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}
