//! Rendering normalized point sets as CSS `polygon()` coordinate lists.

use kurbo::Point;

/// Format a normalized point set as a `polygon()` argument list.
///
/// Each point becomes `"X.XX% Y.YY%"`; coordinates are clamped to
/// `[0, 100]` percent, since padding or amplitude math in callers can push
/// a value a hair past the unit square.
pub fn to_clip_path(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| {
            format!(
                "{:.2}% {:.2}%",
                (point.x * 100.0).clamp(0.0, 100.0),
                (point.y * 100.0).clamp(0.0, 100.0)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
