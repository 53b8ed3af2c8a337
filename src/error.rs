//! Error type shared by the clustering core

use thiserror::Error;

/// Errors raised by point generation and cluster indexing
///
/// There is no I/O in the core, so the only failure is a caller passing
/// something out of range (bad coordinate, negative count, negative zoom).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
