use thiserror::Error;

/// Malformed selector composition, reported before any selector exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Composite selector needs at least one input selector")]
    NoInputSelectors,

    #[error("Structured selector needs at least one field")]
    NoStructuredFields,
}

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
