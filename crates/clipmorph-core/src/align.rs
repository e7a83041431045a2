//! Winding correction and rotation alignment across shape sets.

use kurbo::Point;

/// Signed area of a closed polygon via the shoelace formula.
///
/// The sign encodes winding direction; fewer than three points have no
/// area.
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

/// Bring every shape into the winding and point correspondence of shape 0.
///
/// The reference (index 0) is never modified. Every other shape is reversed
/// when its winding opposes the reference, then rotated to the index offset
/// that minimizes total squared point-to-point displacement, which is what
/// makes per-index interpolation between shapes visually smooth. Shapes
/// whose cardinality differs from the reference (degenerate inputs) receive
/// the winding fix only.
pub fn align_shapes(shapes: &mut [Vec<Point>]) {
    let Some((reference, rest)) = shapes.split_first_mut() else {
        return;
    };
    let reference_area = signed_area(reference);

    for shape in rest {
        if reference_area * signed_area(shape) < 0.0 {
            shape.reverse();
        }
        if shape.len() == reference.len() && !shape.is_empty() {
            let k = best_rotation(reference, shape);
            if k > 0 {
                log::debug!("rotating shape by {k} of {} points to match the reference", shape.len());
                shape.rotate_left(k);
            }
        }
    }
}

/// Offset `k` minimizing `Σ ‖reference[i] − shape[(i + k) mod n]‖²`.
///
/// Offsets are tried in increasing order and a candidate sum is abandoned
/// as soon as it reaches the best total so far, so the smallest offset wins
/// ties. The pruning only skips work; the argmin is unchanged.
fn best_rotation(reference: &[Point], shape: &[Point]) -> usize {
    let n = reference.len();
    let mut best_offset = 0;
    let mut best_total = f64::INFINITY;

    for k in 0..n {
        let mut total = 0.0;
        for i in 0..n {
            total += (reference[i] - shape[(i + k) % n]).hypot2();
            if total >= best_total {
                break;
            }
        }
        if total < best_total {
            best_total = total;
            best_offset = k;
        }
    }

    best_offset
}
