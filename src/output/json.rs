//! JSON output for generated addresses.

use std::net::IpAddr;

use serde::Serialize;

use crate::models::Cidr;

/// JSON report for one generation run.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    /// The CIDR block the addresses were drawn from.
    pub cidr: &'a Cidr,
    /// The generated addresses, in generation order.
    pub addresses: &'a [IpAddr],
}

/// Render a generation run as pretty-printed JSON.
pub fn render(cidr: &Cidr, addresses: &[IpAddr]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { cidr, addresses })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report() {
        let cidr = Cidr::new("10.0.0.0/24").unwrap();
        let addrs: Vec<IpAddr> = vec!["10.0.0.42".parse().unwrap()];
        let json = render(&cidr, &addrs).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.0/24");
        assert_eq!(value["addresses"][0], "10.0.0.42");
    }
}
