//! Bounding-box normalization into the unit square.

use kurbo::Point;

/// Rescale and translate points into `[0, 1] × [0, 1]`, preserving aspect
/// ratio.
///
/// The minimum corner moves to the origin, the longer axis stretches to
/// span `[0, 1]`, and the shorter axis is centered. A shape that collapses
/// to a single point keeps scale 1 and lands at `(0.5, 0.5)`.
pub fn normalize_points(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for point in points.iter() {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;
    let scale = if width.max(height) > 0.0 {
        width.max(height)
    } else {
        1.0
    };

    // The axis that spans the square gets a zero offset.
    let offset_x = (1.0 - width / scale) / 2.0;
    let offset_y = (1.0 - height / scale) / 2.0;

    for point in points.iter_mut() {
        point.x = (point.x - min_x) / scale + offset_x;
        point.y = (point.y - min_y) / scale + offset_y;
    }
}
