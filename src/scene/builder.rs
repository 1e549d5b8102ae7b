//! Scene construction: turn a validated TOML description into live
//! `Section` objects with their transforms applied.

use std::collections::HashSet;

use crate::geometry::bbox::Point;
use crate::geometry::config::GeometryConfig;
use crate::geometry::transform;
use crate::scene::error::SceneError;
use crate::scene::section::{RowAlignment, Section, SectionKind};
use crate::scene::selection::Selection;
use crate::scene::spec::{SceneSpec, SectionSpec};

/// A materialized scene: the sections of one venue layout
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub sections: Vec<Section>,
}

impl Scene {
    /// Build every section declared in the spec, applying its initial
    /// transforms, and validate identifiers along the way
    pub fn build(spec: &SceneSpec, config: &GeometryConfig) -> Result<Self, SceneError> {
        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(spec.sections.len());

        for decl in &spec.sections {
            if !seen.insert(decl.id.clone()) {
                return Err(SceneError::DuplicateSection {
                    section: decl.id.clone(),
                });
            }
            sections.push(build_section(decl, config)?);
        }

        Ok(Self { sections })
    }

    /// Index of a section by id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    /// Section lookup by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.index_of(id).map(|i| &self.sections[i])
    }

    /// Resolve an id to an index, suggesting near misses on failure
    pub fn resolve(&self, id: &str) -> Result<usize, SceneError> {
        self.index_of(id).ok_or_else(|| {
            let defined: Vec<&str> = self.sections.iter().map(|s| s.id()).collect();
            SceneError::unknown_section(id, find_similar(&defined, id, 2))
        })
    }

    /// Build a fresh selection from a list of ids, preserving order and
    /// dropping duplicates
    pub fn select(&self, ids: &[String]) -> Result<Selection, SceneError> {
        let mut selection = Selection::new();
        for id in ids {
            selection.add_section(self.resolve(id)?);
        }
        Ok(selection)
    }
}

fn build_section(decl: &SectionSpec, config: &GeometryConfig) -> Result<Section, SceneError> {
    let position = decl
        .position
        .map(|[x, y]| Point::new(x, y))
        .unwrap_or_default();

    let kind = match decl.kind.as_deref().unwrap_or("grid") {
        "grid" => SectionKind::SeatGrid,
        "ga" => SectionKind::GeneralAdmission,
        "zone" => SectionKind::Zone,
        other => {
            return Err(SceneError::unknown_keyword(
                "kind",
                other,
                &["grid", "ga", "zone"],
            ))
        }
    };

    let mut section = match kind {
        SectionKind::SeatGrid => {
            let rows = require(decl, decl.rows, "rows")?;
            let cols = require(decl, decl.cols, "cols")?;
            let [sx, sy] = decl
                .spacing
                .unwrap_or([config.default_grid_spacing, config.default_grid_spacing]);
            Section::seat_grid(&decl.id, position, rows, cols, sx, sy)?
        }
        _ => {
            let width = require(decl, decl.width, "width")?;
            let height = require(decl, decl.height, "height")?;
            Section::region(&decl.id, kind, position, width, height)?
        }
    };

    if let Some(curve) = decl.curve {
        section.curve = curve;
    }
    if let Some([h, v]) = decl.stretch {
        section.stretch_h = h;
        section.stretch_v = v;
    }
    if let Some(rotation) = decl.rotation {
        section.rotation_degrees = rotation;
    }
    if let Some(alignment) = &decl.row_alignment {
        section.row_alignment = parse_row_alignment(alignment)?;
    }

    transform::apply_transforms(&mut section, config);
    if section.row_alignment != RowAlignment::Left {
        transform::apply_row_alignment(&mut section, config);
    }
    Ok(section)
}

fn require<T>(decl: &SectionSpec, field: Option<T>, name: &str) -> Result<T, SceneError> {
    field.ok_or_else(|| SceneError::MissingSectionField {
        section: decl.id.clone(),
        field: name.to_string(),
    })
}

pub(crate) fn parse_row_alignment(value: &str) -> Result<RowAlignment, SceneError> {
    match value {
        "left" => Ok(RowAlignment::Left),
        "center" => Ok(RowAlignment::Center),
        "right" => Ok(RowAlignment::Right),
        other => Err(SceneError::unknown_keyword(
            "row_alignment",
            other,
            &["left", "center", "right"],
        )),
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Find defined ids within a maximum edit distance of the target
fn find_similar(defined: &[&str], target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(String, usize)> = defined
        .iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((name.to_string(), dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name)
        .take(3)
        .collect()
}
