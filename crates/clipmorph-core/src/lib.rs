//! clipmorph-core: shape normalization and alignment for clip-path morphing.
//!
//! Turns outline path strings (absolute `M L H V Q C Z` commands) into
//! equal-cardinality, winding-consistent, rotation-aligned point sets and
//! renders them as percentage coordinate lists, ready to drop into a CSS
//! `polygon()` clip-path and interpolate during a transition.
//!
//! # Example
//!
//! ```
//! use clipmorph_core::generate_clip_paths;
//!
//! let frames = generate_clip_paths(
//!     &["M0,0 L10,0 L10,10 L0,10 Z", "M5,0 L10,5 L5,10 L0,5 Z"],
//!     16,
//! )?;
//! assert_eq!(frames.len(), 2);
//! # Ok::<(), clipmorph_core::MorphError>(())
//! ```

#![forbid(unsafe_code)]

pub mod align;
pub mod clip;
pub mod config;
pub mod error;
pub mod morph;
pub mod normalize;
pub mod path;
pub mod sample;
pub mod shapes;

// Re-export kurbo so downstream users share the Point type version.
pub use kurbo;

pub use config::{DEFAULT_MAX_POINTS, MorphConfig};
pub use error::MorphError;
pub use path::{PathShape, Segment, parse_path, validate_path};

use kurbo::Point;

/// Generate one clip-path coordinate string per input outline.
///
/// Every outline is sampled at `max_points` points evenly spaced by arc
/// length, normalized into the unit square, winding-matched and
/// rotation-aligned against the first outline, then formatted as a
/// `polygon()` argument list. Outlines meant to morph into one another must
/// share one call, so they share cardinality and alignment.
pub fn generate_clip_paths<S: AsRef<str>>(
    paths: &[S],
    max_points: usize,
) -> Result<Vec<String>, MorphError> {
    generate_clip_paths_with(paths, &MorphConfig::with_max_points(max_points))
}

/// [`generate_clip_paths`] with explicit tuning.
pub fn generate_clip_paths_with<S: AsRef<str>>(
    paths: &[S],
    config: &MorphConfig,
) -> Result<Vec<String>, MorphError> {
    if config.max_points < 2 {
        return Err(MorphError::PointBudget(config.max_points));
    }

    let mut shapes: Vec<Vec<Point>> = Vec::with_capacity(paths.len());
    for d in paths {
        let shape = path::parse_path_with(d.as_ref(), config.curve_samples);
        let mut points = sample::sample_points(&shape, config.max_points);
        normalize::normalize_points(&mut points);
        shapes.push(points);
    }

    align::align_shapes(&mut shapes);

    Ok(shapes.iter().map(|points| clip::to_clip_path(points)).collect())
}
