//! Error types for the morph pipeline.

use thiserror::Error;

/// Errors surfaced by the engine's strict entry points.
///
/// The sampling pipeline itself is best-effort and never fails on path
/// content; see [`crate::path::validate_path`] for opt-in strictness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MorphError {
    /// The requested point budget cannot describe a polygon edge.
    #[error("point budget must be at least 2, got {0}")]
    PointBudget(usize),

    /// A command letter outside the supported `M L H V Q C Z` subset.
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),

    /// A coordinate token that does not parse as a finite number.
    #[error("malformed number '{0}' in path data")]
    MalformedNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MorphError::PointBudget(1).to_string(),
            "point budget must be at least 2, got 1"
        );
        assert_eq!(
            MorphError::UnsupportedCommand('A').to_string(),
            "unsupported path command 'A'"
        );
    }
}
