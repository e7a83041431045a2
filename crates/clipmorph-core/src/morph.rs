//! Per-index interpolation between aligned point sets.
//!
//! This is the math a CSS transition performs between two clip-path frames,
//! exposed for callers that drive their own frames. Scheduling stays with
//! the caller.

use kurbo::Point;

use crate::clip;

/// Linearly interpolate two aligned point sets at `t`.
///
/// Truncates to the shorter input, so degenerate sets cannot index out of
/// bounds. `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn interpolate(from: &[Point], to: &[Point], t: f64) -> Vec<Point> {
    from.iter().zip(to).map(|(a, b)| a.lerp(*b, t)).collect()
}

/// Render `count` evenly spaced frames between two aligned sets, endpoints
/// included, as clip-path coordinate strings.
pub fn frames(from: &[Point], to: &[Point], count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![clip::to_clip_path(from)],
        _ => (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                clip::to_clip_path(&interpolate(from, to, t))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> (Vec<Point>, Vec<Point>) {
        (
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![Point::new(0.0, 1.0), Point::new(1.0, 1.0)],
        )
    }

    #[test]
    fn test_endpoints_reproduce_inputs() {
        let (from, to) = endpoints();
        assert_eq!(interpolate(&from, &to, 0.0), from);
        assert_eq!(interpolate(&from, &to, 1.0), to);
    }

    #[test]
    fn test_midpoint() {
        let (from, to) = endpoints();
        let mid = interpolate(&from, &to, 0.5);
        assert_eq!(mid[0], Point::new(0.0, 0.5));
        assert_eq!(mid[1], Point::new(1.0, 0.5));
    }

    #[test]
    fn test_truncates_to_shorter_input() {
        let (from, _) = endpoints();
        let short = vec![Point::new(0.5, 0.5)];
        assert_eq!(interpolate(&from, &short, 0.5).len(), 1);
    }

    #[test]
    fn test_frames_include_endpoints() {
        let (from, to) = endpoints();
        let frames = frames(&from, &to, 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], clip::to_clip_path(&from));
        assert_eq!(frames[2], clip::to_clip_path(&to));
        assert_eq!(frames[1], "0.00% 50.00%, 100.00% 50.00%");
    }
}
