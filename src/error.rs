use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while picking from a formation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormationError {
    /// A random pick was requested from a formation with no spawn pools.
    #[error("formation has no spawn pools to pick from")]
    EmptyFormation,
}

/// Errors raised while loading or validating a wave definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read wave file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wave definition: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("wave defines no formations")]
    NoFormations,

    #[error("formation {formation} has no spawn pools")]
    EmptyFormation { formation: usize },

    /// Delays and intervals must be finite and non-negative.
    #[error("formation {formation}: {field} must be a finite, non-negative number (got {value})")]
    InvalidDelay {
        formation: usize,
        field: &'static str,
        value: f32,
    },
}
