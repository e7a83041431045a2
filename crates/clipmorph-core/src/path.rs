//! Outline parsing: subset-SVG path strings into measured segments.

use kurbo::{CubicBez, Line, ParamCurve, PathSeg, Point, QuadBez};

use crate::error::MorphError;

/// Default number of chord subdivisions used to estimate a curve's length.
pub const CURVE_SAMPLES: usize = 20;

/// A path segment with its precomputed arc-length estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment geometry (line, quadratic, or cubic).
    pub seg: PathSeg,
    /// Exact length for lines, polyline approximation for curves.
    pub length: f64,
}

impl Segment {
    fn new(seg: PathSeg, curve_samples: usize) -> Self {
        let length = match seg {
            PathSeg::Line(line) => (line.p1 - line.p0).hypot(),
            _ => polyline_length(&seg, curve_samples),
        };
        Self { seg, length }
    }

    /// Evaluate the segment at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        self.seg.eval(t)
    }
}

/// Summed chord length of a fixed-subdivision evaluation of `seg`.
fn polyline_length(seg: &PathSeg, steps: usize) -> f64 {
    let steps = steps.max(1);
    let mut length = 0.0;
    let mut prev = seg.eval(0.0);
    for i in 1..=steps {
        let next = seg.eval(i as f64 / steps as f64);
        length += (next - prev).hypot();
        prev = next;
    }
    length
}

/// An outline parsed into measured segments.
#[derive(Debug, Clone, Default)]
pub struct PathShape {
    /// Segments in path order.
    pub segments: Vec<Segment>,
    /// Sum of all segment lengths.
    pub total_length: f64,
}

impl PathShape {
    /// Check whether the outline has nothing to sample.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn push(&mut self, seg: PathSeg, curve_samples: usize) {
        let segment = Segment::new(seg, curve_samples);
        self.total_length += segment.length;
        self.segments.push(segment);
    }
}

/// Parse an outline string using the default curve subdivision.
pub fn parse_path(d: &str) -> PathShape {
    parse_path_with(d, CURVE_SAMPLES)
}

/// Parse an outline string with an explicit curve subdivision count.
///
/// Supports the absolute commands `M L H V Q C Z`. Parsing is best-effort:
/// unsupported command letters are skipped without touching the current
/// point (which can desynchronize later commands if the input relies on
/// them), and a malformed number ends argument collection for its command.
/// Both conditions are logged rather than reported; use [`validate_path`]
/// first to reject such input outright.
pub fn parse_path_with(d: &str, curve_samples: usize) -> PathShape {
    let mut shape = PathShape::default();
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;

    for (cmd, raw) in commands(d) {
        let args = parse_numbers(raw);
        if let Some(n) = arity(cmd) {
            if n > 0 && args.len() % n != 0 {
                log::warn!(
                    "path command '{cmd}' has an incomplete coordinate group, dropping {} trailing value(s)",
                    args.len() % n
                );
            }
        }
        match cmd {
            'M' => {
                for (i, pair) in args.chunks_exact(2).enumerate() {
                    let point = Point::new(pair[0], pair[1]);
                    if i == 0 {
                        current = point;
                        start = point;
                    } else {
                        // Pairs after the first are implicit line-tos.
                        shape.push(PathSeg::Line(Line::new(current, point)), curve_samples);
                        current = point;
                    }
                }
            }
            'L' => {
                for pair in args.chunks_exact(2) {
                    let to = Point::new(pair[0], pair[1]);
                    shape.push(PathSeg::Line(Line::new(current, to)), curve_samples);
                    current = to;
                }
            }
            'H' => {
                for &x in &args {
                    let to = Point::new(x, current.y);
                    shape.push(PathSeg::Line(Line::new(current, to)), curve_samples);
                    current = to;
                }
            }
            'V' => {
                for &y in &args {
                    let to = Point::new(current.x, y);
                    shape.push(PathSeg::Line(Line::new(current, to)), curve_samples);
                    current = to;
                }
            }
            'Q' => {
                for quad in args.chunks_exact(4) {
                    let ctrl = Point::new(quad[0], quad[1]);
                    let to = Point::new(quad[2], quad[3]);
                    shape.push(PathSeg::Quad(QuadBez::new(current, ctrl, to)), curve_samples);
                    current = to;
                }
            }
            'C' => {
                for cubic in args.chunks_exact(6) {
                    let ctrl1 = Point::new(cubic[0], cubic[1]);
                    let ctrl2 = Point::new(cubic[2], cubic[3]);
                    let to = Point::new(cubic[4], cubic[5]);
                    shape.push(
                        PathSeg::Cubic(CubicBez::new(current, ctrl1, ctrl2, to)),
                        curve_samples,
                    );
                    current = to;
                }
            }
            'Z' => {
                shape.push(PathSeg::Line(Line::new(current, start)), curve_samples);
                current = start;
            }
            other => {
                log::warn!("skipping unsupported path command '{other}'");
            }
        }
    }

    shape
}

/// Strict pre-check for callers that prefer rejection over best-effort skips.
///
/// The pipeline itself never rejects path content; running this first
/// surfaces unsupported commands and malformed numbers as typed errors.
pub fn validate_path(d: &str) -> Result<(), MorphError> {
    for (cmd, raw) in commands(d) {
        if arity(cmd).is_none() {
            return Err(MorphError::UnsupportedCommand(cmd));
        }
        for token in tokens(raw) {
            if !token.parse::<f64>().is_ok_and(f64::is_finite) {
                return Err(MorphError::MalformedNumber(token.to_string()));
            }
        }
    }
    Ok(())
}

/// Coordinate count consumed per repetition of a command, or `None` when the
/// command is unsupported.
fn arity(cmd: char) -> Option<usize> {
    match cmd {
        'M' | 'L' => Some(2),
        'H' | 'V' => Some(1),
        'Q' => Some(4),
        'C' => Some(6),
        'Z' => Some(0),
        _ => None,
    }
}

/// Split path data into (command letter, raw argument text) runs.
///
/// Exponent markers inside numbers ('e'/'E') are not command letters.
fn commands(d: &str) -> Vec<(char, &str)> {
    let starts: Vec<(usize, char)> = d
        .char_indices()
        .filter(|&(_, c)| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
        .collect();

    let mut runs = Vec::with_capacity(starts.len());
    for (i, &(pos, cmd)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(d.len(), |&(next, _)| next);
        runs.push((cmd, &d[pos + cmd.len_utf8()..end]));
    }
    runs
}

/// Whitespace/comma-separated tokens of an argument run.
fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse argument tokens, stopping at the first malformed one.
fn parse_numbers(raw: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    for token in tokens(raw) {
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => numbers.push(n),
            _ => {
                log::warn!("malformed number '{token}' in path data");
                break;
            }
        }
    }
    numbers
}
