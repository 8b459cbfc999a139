use thiserror::Error;

use crate::api::types::{StarHandle, StarStatus};

/// Failures of field-level operations.
/// The simulators themselves are total and never produce these.
#[derive(Debug, Error)]
pub enum StarfallError {
    #[error("failed to parse field config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid field config: {0}")]
    InvalidConfig(String),

    #[error("unknown star {0}")]
    UnknownStar(StarHandle),

    #[error("{handle} cannot be claimed while {status}")]
    NotOrbiting {
        handle: StarHandle,
        status: StarStatus,
    },

    #[error("star field is full ({0} stars)")]
    Capacity(usize),

    #[error("no star handles left that fit the wire format")]
    HandlesExhausted,
}

pub type Result<T> = std::result::Result<T, StarfallError>;
