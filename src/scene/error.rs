//! Error types for scene construction and the TOML scene description

use thiserror::Error;

/// Errors that can occur while building or operating on a scene.
///
/// Geometry operations themselves never fail: out-of-range transform
/// parameters are clamped and undersized selections are no-ops. Errors are
/// reserved for malformed scene input.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Failed to read a scene file
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the scene TOML
    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Seat grid declared with zero rows or columns
    #[error("section '{section}' has an empty seat grid")]
    EmptyGrid { section: String },

    /// Non-finite or non-positive seat spacing
    #[error("section '{section}' has invalid seat spacing ({spacing_x}, {spacing_y})")]
    InvalidSpacing {
        section: String,
        spacing_x: f64,
        spacing_y: f64,
    },

    /// Non-finite or non-positive GA/zone size
    #[error("section '{section}' has invalid region size {width}x{height}")]
    InvalidRegionSize {
        section: String,
        width: f64,
        height: f64,
    },

    /// Two sections share an identifier
    #[error("duplicate section id '{section}'")]
    DuplicateSection { section: String },

    /// An operation referenced a section the scene does not define
    #[error("unknown section '{section}'{}", format_suggestions(suggestions))]
    UnknownSection {
        section: String,
        suggestions: Vec<String>,
    },

    /// A section declaration is missing a required field
    #[error("section '{section}' is missing required field '{field}'")]
    MissingSectionField { section: String, field: String },

    /// An operation is missing a required field
    #[error("op '{op}' is missing required field '{field}'")]
    MissingOpField { op: String, field: String },

    /// A keyword field holds a value outside its vocabulary
    #[error("unknown {field} '{value}' (expected one of: {expected})")]
    UnknownKeyword {
        field: String,
        value: String,
        expected: String,
    },
}

impl SceneError {
    /// Create an unknown-section error with near-miss suggestions
    pub fn unknown_section(section: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownSection {
            section: section.into(),
            suggestions,
        }
    }

    /// Create a missing-field error for an op
    pub fn missing_field(op: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingOpField {
            op: op.into(),
            field: field.into(),
        }
    }

    /// Create an unknown-keyword error
    pub fn unknown_keyword(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::UnknownKeyword {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_display() {
        let err = SceneError::unknown_section("blacony", vec!["balcony".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("blacony"));
        assert!(msg.contains("did you mean: balcony"));
    }

    #[test]
    fn test_unknown_section_without_suggestions() {
        let err = SceneError::unknown_section("pit", vec![]);
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = SceneError::missing_field("align", "edge");
        assert!(err.to_string().contains("align"));
        assert!(err.to_string().contains("edge"));
    }

    #[test]
    fn test_unknown_keyword_display() {
        let err = SceneError::unknown_keyword("edge", "middle", &["left", "right"]);
        assert!(err.to_string().contains("middle"));
        assert!(err.to_string().contains("left, right"));
    }
}
