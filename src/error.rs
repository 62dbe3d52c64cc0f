//! Error types for trials and simulation runs.

use thiserror::Error;

/// A broken engine invariant. These indicate a logic defect, never bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("generated {actual} doors, expected {expected}")]
    DoorCountMismatch { expected: usize, actual: usize },

    #[error("{actual} doors remain after elimination, expected 2")]
    SurvivorCount { actual: usize },

    #[error("{actual} prize doors remain after elimination, expected 1")]
    PrizeCount { actual: usize },

    #[error("no chosen door among the remaining doors")]
    UnresolvedPick,
}

/// Rejected simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("door count must be at least 1")]
    NoDoors,

    #[error("trial count must be at least 1")]
    NoTrials,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
