//! Errors returned by endpoint discovery and selection.

use thiserror::Error;

/// Error type for discovery and selection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The endpoint list was empty at the moment of selection.
    ///
    /// Recoverable: supply a non-empty list through
    /// [`Discovery::update`](crate::Discovery::update), or retry later.
    #[error("rpc discovery: no available servers")]
    NoEndpointsAvailable,

    /// An out-of-range or unrecognized selection mode value was supplied.
    ///
    /// This is a caller bug; retrying with the same value fails the same way.
    #[error("rpc discovery: unsupported select mode `{0}`")]
    UnsupportedSelectionMode(String),
}

/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;
