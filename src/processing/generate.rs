//! Random address generation pipeline.
//!
//! Accounting of host bits, entropy draw and bit-plane assembly, in that
//! order. Each call is fully independent.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};
use crate::models::Cidr;
use crate::random;

use super::assemble::assemble;

/// Number of host bits to randomize.
///
/// `None` means all available host bits. An explicit request is returned
/// unchanged, at bit granularity; it only has to fit the available range.
pub fn compute_host_bits(total_bits: u32, prefix_bits: u32, requested: Option<u32>) -> Result<u32> {
    let available = total_bits - prefix_bits;
    match requested {
        None => Ok(available),
        Some(n) if n <= available => Ok(n),
        Some(n) => Err(Error::InvalidBitCount {
            requested: n,
            available,
        }),
    }
}

/// Generate one address inside `cidr`.
///
/// The first `prefix` bits come from the network address, the next
/// `requested` bits (all available host bits when `None`) are drawn from the
/// OS entropy source, and any remaining host bits are zero.
pub fn generate(cidr: &Cidr, requested: Option<u32>) -> Result<IpAddr> {
    let prefix_bits = cidr.prefix as u32;
    let host_bits = compute_host_bits(cidr.total_bits(), prefix_bits, requested)?;
    let random = random::draw_bytes(((host_bits + 7) / 8) as usize)?;
    log::debug!("generate: cidr={cidr} random_host_bits={host_bits}");

    let out = assemble(&cidr.network_bytes(), prefix_bits, host_bits, &random);
    Ok(to_addr(cidr, &out))
}

/// Rebuild an [`IpAddr`] of `cidr`'s family from assembled bytes.
fn to_addr(cidr: &Cidr, bytes: &[u8]) -> IpAddr {
    match cidr.addr {
        IpAddr::V4(_) => {
            let mut octets = [0u8; 4];
            octets.copy_from_slice(bytes);
            IpAddr::V4(Ipv4Addr::from(octets))
        }
        IpAddr::V6(_) => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            IpAddr::V6(Ipv6Addr::from(octets))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_host_bits_defaults_to_available() {
        assert_eq!(compute_host_bits(32, 24, None).unwrap(), 8);
        assert_eq!(compute_host_bits(128, 44, None).unwrap(), 84);
        assert_eq!(compute_host_bits(32, 32, None).unwrap(), 0);
    }

    #[test]
    fn test_compute_host_bits_honors_request() {
        assert_eq!(compute_host_bits(32, 24, Some(0)).unwrap(), 0);
        assert_eq!(compute_host_bits(32, 24, Some(5)).unwrap(), 5);
        // boundary: exactly the available host bits
        assert_eq!(compute_host_bits(32, 24, Some(8)).unwrap(), 8);
    }

    #[test]
    fn test_compute_host_bits_rejects_excess() {
        let err = compute_host_bits(32, 24, Some(9)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBitCount {
                requested: 9,
                available: 8
            }
        ));
    }

    #[test]
    fn test_generate_zero_bits_is_network_address() {
        let cidr = Cidr::new("192.168.0.7/24").unwrap();
        for _ in 0..8 {
            assert_eq!(generate(&cidr, Some(0)).unwrap(), cidr.network_address());
        }
    }

    #[test]
    fn test_generate_full_prefix_is_exact_address() {
        let cidr = Cidr::new("10.1.2.3/32").unwrap();
        assert_eq!(generate(&cidr, None).unwrap().to_string(), "10.1.2.3");

        let cidr = Cidr::new("2001:db8::1/128").unwrap();
        assert_eq!(generate(&cidr, None).unwrap().to_string(), "2001:db8::1");
    }

    #[test]
    fn test_generate_keeps_prefix() {
        let cidr = Cidr::new("10.20.30.0/24").unwrap();
        for _ in 0..32 {
            let addr = generate(&cidr, None).unwrap();
            let got = Cidr {
                addr,
                prefix: cidr.prefix,
            };
            assert_eq!(got.network_address(), cidr.network_address());
        }
    }

    #[test]
    fn test_generate_partial_bits_leaves_tail_zero() {
        // 3 random bits on a /24: the last octet is a multiple of 32
        let cidr = Cidr::new("10.0.0.0/24").unwrap();
        for _ in 0..32 {
            let addr = generate(&cidr, Some(3)).unwrap();
            let IpAddr::V4(v4) = addr else {
                panic!("expected an IPv4 address")
            };
            assert_eq!(v4.octets()[3] % 32, 0);
        }
    }
}
