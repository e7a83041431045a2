//! Canonical outline presets for morph states.
//!
//! All presets are authored in the supported command subset and sit inside
//! the unit viewbox. Normalization rescales everything, so the authoring
//! scale is irrelevant; only the proportions matter.

/// Axis-aligned square.
pub const SQUARE: &str = "M0,0 L1,0 L1,1 L0,1 Z";

/// Square rotated 45 degrees.
pub const DIAMOND: &str = "M0.5,0 L1,0.5 L0.5,1 L0,0.5 Z";

/// Triangle with its apex on the top edge.
pub const TRIANGLE: &str = "M0.5,0 L1,1 L0,1 Z";

/// Circle as four cubic arcs (control offset 0.55228 of the radius).
pub const CIRCLE: &str = "M0.5,0 C0.77614,0 1,0.22386 1,0.5 \
                          C1,0.77614 0.77614,1 0.5,1 \
                          C0.22386,1 0,0.77614 0,0.5 \
                          C0,0.22386 0.22386,0 0.5,0 Z";

/// Horizontal pill (stadium) at half the viewbox height.
pub const PILL: &str = "M0.25,0.25 L0.75,0.25 \
                        C0.88807,0.25 1,0.36193 1,0.5 \
                        C1,0.63807 0.88807,0.75 0.75,0.75 \
                        L0.25,0.75 \
                        C0.11193,0.75 0,0.63807 0,0.5 \
                        C0,0.36193 0.11193,0.25 0.25,0.25 Z";

/// All presets with their names.
pub fn all() -> [(&'static str, &'static str); 5] {
    [
        ("square", SQUARE),
        ("diamond", DIAMOND),
        ("triangle", TRIANGLE),
        ("circle", CIRCLE),
        ("pill", PILL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_points;
    use crate::path::{parse_path, validate_path};
    use crate::sample::sample_points;
    use kurbo::Point;

    #[test]
    fn test_presets_are_valid_and_sampleable() {
        for (name, d) in all() {
            assert!(validate_path(d).is_ok(), "{name} failed validation");
            let shape = parse_path(d);
            assert!(shape.total_length > 0.0, "{name} has no length");
            let points = sample_points(&shape, 16);
            assert_eq!(points.len(), 16, "{name} sampled short");
        }
    }

    #[test]
    fn test_presets_fill_the_unit_square() {
        for (name, d) in all() {
            let shape = parse_path(d);
            let mut points = sample_points(&shape, 32);
            normalize_points(&mut points);
            for point in &points {
                assert!(
                    (-1e-6..=1.0 + 1e-6).contains(&point.x)
                        && (-1e-6..=1.0 + 1e-6).contains(&point.y),
                    "{name} escaped the unit square at {point:?}"
                );
            }
        }
    }

    #[test]
    fn test_circle_is_round() {
        let shape = parse_path(CIRCLE);
        let mut points = sample_points(&shape, 64);
        normalize_points(&mut points);
        let center = Point::new(0.5, 0.5);
        for point in &points {
            let radius = (*point - center).hypot();
            assert!((radius - 0.5).abs() < 0.005, "radius {radius} off at {point:?}");
        }
    }
}
