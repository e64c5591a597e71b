//! CIDR block parsing and bit accounting.
//!
//! Provides the [`Cidr`] struct for representing an IPv4 or IPv6 network in
//! "address/prefix" notation, along with the byte/bit accessors consumed by
//! the generator.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 block (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// An IPv4 or IPv6 network block with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as written, host bits included.
    pub addr: IpAddr,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from a CIDR string (e.g., "10.0.0.0/24" or
    /// "2001:db8::/32").
    ///
    /// Host bits of the written address are kept as given; only the first
    /// `prefix` bits are ever consumed downstream.
    pub fn new(addr_cidr: &str) -> Result<Cidr> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidCidr(format!(
                "expected address/prefix, got '{addr_cidr}'"
            )));
        }
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| Error::InvalidCidr(format!("invalid address '{}'", parts[0])))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| Error::InvalidCidr(format!("invalid prefix '{}'", parts[1])))?;
        let max_length = match addr {
            IpAddr::V4(_) => MAX_LENGTH_V4,
            IpAddr::V6(_) => MAX_LENGTH_V6,
        };
        if prefix > max_length {
            return Err(Error::InvalidCidr(format!(
                "prefix /{prefix} exceeds {max_length} bits for '{}'",
                parts[0]
            )));
        }
        Ok(Cidr { addr, prefix })
    }

    /// Total address width in bits: 32 for IPv4, 128 for IPv6.
    pub fn total_bits(&self) -> u32 {
        match self.addr {
            IpAddr::V4(_) => MAX_LENGTH_V4 as u32,
            IpAddr::V6(_) => MAX_LENGTH_V6 as u32,
        }
    }

    /// Number of host bits left of the prefix.
    pub fn host_bits(&self) -> u32 {
        self.total_bits() - self.prefix as u32
    }

    /// The address as a big-endian byte sequence (4 or 16 bytes).
    pub fn network_bytes(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// The network address with every host bit zeroed.
    pub fn network_address(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let right_len = (MAX_LENGTH_V4 - self.prefix) as u32;
                let bits = u32::from(v4) as u64;
                let masked = (bits >> right_len) << right_len;
                IpAddr::V4(Ipv4Addr::from(masked as u32))
            }
            IpAddr::V6(v6) => {
                let right_len = (MAX_LENGTH_V6 - self.prefix) as u32;
                let bits = u128::from(v6);
                // u128 has no headroom to widen, so /0 is masked by hand
                let masked = if right_len == 128 {
                    0
                } else {
                    (bits >> right_len) << right_len
                };
                IpAddr::V6(Ipv6Addr::from(masked))
            }
        }
    }
}

impl FromStr for Cidr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Cidr> {
        Cidr::new(s)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
