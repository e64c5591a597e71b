//! Terminal output for generated addresses.

use std::net::IpAddr;

use itertools::Itertools;

/// Render addresses one per line, in generation order.
pub fn render(addrs: &[IpAddr]) -> String {
    addrs.iter().join("\n")
}

/// Print addresses to stdout, one per line.
pub fn print_addresses(addrs: &[IpAddr]) {
    println!("{}", render(addrs));
}
