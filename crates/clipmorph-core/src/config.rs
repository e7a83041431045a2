//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::path::CURVE_SAMPLES;

/// Default number of points sampled per shape.
pub const DEFAULT_MAX_POINTS: usize = 64;

/// Tuning knobs for the morph pipeline.
///
/// Serializable so hosts can persist shape presets alongside their theme
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphConfig {
    /// Points sampled per shape. Every shape in one call shares this count;
    /// it is what makes per-index interpolation possible.
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    /// Chord subdivisions used to estimate curve lengths.
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
}

fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

fn default_curve_samples() -> usize {
    CURVE_SAMPLES
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            curve_samples: CURVE_SAMPLES,
        }
    }
}

impl MorphConfig {
    /// Config with an explicit point budget and default curve sampling.
    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            max_points,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MorphConfig::default();
        assert_eq!(config.max_points, 64);
        assert_eq!(config.curve_samples, 20);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MorphConfig {
            max_points: 24,
            curve_samples: 40,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MorphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: MorphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MorphConfig::default());
    }
}
