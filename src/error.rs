//! Crate-wide error type
//!
//! The per-tick simulation path is infallible; errors arise only while
//! building a simulation (bad parameters, unreadable config) or when parsing
//! a collision mode supplied by the embedder.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or configuration parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Collision mode name that is neither "elastic" nor "inelastic".
    #[error("unknown collision mode: {0:?}")]
    UnknownMode(String),

    /// Config file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
