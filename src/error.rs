//! Error types for CIDR parsing and address generation.
//!
//! Provides a unified error taxonomy using `thiserror`.

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing a CIDR block or generating an address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The CIDR string is malformed, the family is unsupported, or the
    /// prefix is out of range
    #[error("invalid CIDR: {0}")]
    InvalidCidr(String),

    /// More host bits requested than the prefix leaves available
    #[error("requested {requested} random host bits but only {available} are available")]
    InvalidBitCount { requested: u32, available: u32 },

    /// The OS entropy source failed to produce bytes
    #[error("random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),
}
