//! Configuration for the geometry engine

/// Tunable constants for collision, distribution, and seat-grid transforms
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    /// Padding applied to the moving/first box in collision queries
    pub collision_padding: f64,

    /// Minimum gap enforced between distributed sections
    pub min_distribution_gap: f64,

    /// Seat diameter, used for seat extents and the spacing floor
    pub seat_diameter: f64,

    /// Extra margin added to the seat diameter for the spacing floor
    pub seat_spacing_margin: f64,

    /// Grid spacing fallback for sections too small to measure their own
    pub default_grid_spacing: f64,

    /// Iteration ceiling for the collision separator
    pub separation_passes: usize,

    /// Divisor converting a curve value (0-100) into curvature
    pub curve_divisor: f64,

    /// Largest arc angle (radians) a curved row may subtend
    pub max_arc_angle: f64,

    /// Padding between the seat/label extents and the section edge
    pub section_padding: f64,

    /// Gap between a row label and the nearest seat of its row
    pub label_gap: f64,

    /// Estimated glyph width for row label text
    pub label_char_width: f64,

    /// Estimated line height for row label text
    pub label_height: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            collision_padding: 0.0,
            min_distribution_gap: 40.0,
            seat_diameter: 16.0,
            seat_spacing_margin: 6.0,
            default_grid_spacing: 24.0,
            separation_passes: 20,
            curve_divisor: 2000.0,
            max_arc_angle: 3.3,
            section_padding: 8.0,
            label_gap: 6.0,
            label_char_width: 7.0,
            label_height: 14.0,
        }
    }
}

impl GeometryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest permitted center-to-center seat spacing after stretch
    pub fn min_seat_spacing(&self) -> f64 {
        self.seat_diameter + self.seat_spacing_margin
    }

    /// Set the collision padding
    pub fn with_collision_padding(mut self, padding: f64) -> Self {
        self.collision_padding = padding;
        self
    }

    /// Set the minimum distribution gap
    pub fn with_min_distribution_gap(mut self, gap: f64) -> Self {
        self.min_distribution_gap = gap;
        self
    }

    /// Set the separator iteration ceiling
    pub fn with_separation_passes(mut self, passes: usize) -> Self {
        self.separation_passes = passes;
        self
    }

    /// Set the seat diameter
    pub fn with_seat_diameter(mut self, diameter: f64) -> Self {
        self.seat_diameter = diameter;
        self
    }

    /// Set the fallback grid spacing for degenerate sections
    pub fn with_default_grid_spacing(mut self, spacing: f64) -> Self {
        self.default_grid_spacing = spacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeometryConfig::default();
        assert_eq!(config.collision_padding, 0.0);
        assert_eq!(config.min_distribution_gap, 40.0);
        assert_eq!(config.separation_passes, 20);
        assert_eq!(config.curve_divisor, 2000.0);
        assert_eq!(config.min_seat_spacing(), 22.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeometryConfig::new()
            .with_collision_padding(4.0)
            .with_separation_passes(50)
            .with_min_distribution_gap(60.0);

        assert_eq!(config.collision_padding, 4.0);
        assert_eq!(config.separation_passes, 50);
        assert_eq!(config.min_distribution_gap, 60.0);
    }
}
