//! Error types for the fallible parts of the crate.
//!
//! Noise evaluation itself never fails. Errors only arise when a noise
//! function is selected by name or sampled through a coordinate slice.

use std::result;

use thiserror::Error;

/// Errors produced when looking up or dispatching a noise function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested name is not a registered noise function.
    #[error("unknown noise function '{0}'")]
    UnknownNoise(String),
    /// The coordinate slice does not match the function's dimensionality.
    #[error("{name} takes {expected} coordinates, got {got}")]
    Dimension {
        /// Registry key of the noise function.
        name: &'static str,
        /// Number of coordinates the function expects.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = result::Result<T, Error>;
