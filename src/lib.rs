//! Random address generation inside IPv4/IPv6 CIDR blocks.
//!
//! Parses a CIDR block, randomizes a chosen number of its host bits from the
//! OS entropy source and renders the result in the family's canonical text
//! form. Works at bit granularity, so non-byte-aligned prefixes and host-bit
//! counts are handled exactly.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod random;

pub use error::{Error, Result};
pub use models::Cidr;
pub use processing::{compute_host_bits, generate};

/// Generate one random address inside `cidr`, rendered as text.
///
/// `host_bits` limits how many of the available host bits are randomized;
/// the remaining host bits are zero. `None` randomizes all of them.
///
/// ```
/// use cidr_random_ip::generate_random_ip;
///
/// let addr = generate_random_ip("192.168.0.0/24", None).unwrap();
/// assert!(addr.starts_with("192.168.0."));
///
/// assert_eq!(
///     generate_random_ip("192.168.0.0/24", Some(0)).unwrap(),
///     "192.168.0.0"
/// );
/// ```
pub fn generate_random_ip(cidr: &str, host_bits: Option<u32>) -> Result<String> {
    let cidr = cidr.parse::<Cidr>()?;
    Ok(generate(&cidr, host_bits)?.to_string())
}
