//! Arc-length sampling: evenly spaced points along a parsed outline.

use kurbo::Point;

use crate::path::PathShape;

/// Sample `n` points evenly spaced by cumulative arc length.
///
/// The outline is treated as a loop: stations sit `total_length / n` apart,
/// with the same gap across the seam back to the first point. Degenerate
/// input yields an empty or collapsed set, and floating-point overrun past
/// the final segment ends the walk early, so callers must tolerate fewer
/// than `n` points.
pub fn sample_points(shape: &PathShape, n: usize) -> Vec<Point> {
    if shape.is_empty() || n == 0 {
        return Vec::new();
    }

    let step = shape.total_length / n as f64;
    let mut points = Vec::with_capacity(n);
    let mut travelled = 0.0;
    let mut index = 0;

    for i in 0..n {
        let target = step * i as f64;
        while index < shape.segments.len() && travelled + shape.segments[index].length < target {
            travelled += shape.segments[index].length;
            index += 1;
        }
        let Some(segment) = shape.segments.get(index) else {
            break;
        };
        let t = if segment.length > 0.0 {
            (target - travelled) / segment.length
        } else {
            0.0
        };
        points.push(segment.eval(t));
    }

    points
}
