//! Command-line interface.

use std::error::Error;

use clap::Parser;

use crate::models::Cidr;
use crate::output;
use crate::processing;

/// Generate random addresses inside an IPv4 or IPv6 CIDR block.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opt {
    /// CIDR block to draw from, e.g. 192.168.0.0/24 or 2a13:75c1:4c0::/44
    pub cidr: Cidr,

    /// Host bits to randomize; the rest stay zero (default: all available)
    pub bits: Option<u32>,

    /// Number of addresses to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print a JSON report instead of one address per line
    #[arg(long)]
    pub json: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Generate the requested addresses and print them in the selected format.
pub fn run(opt: &Opt) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start run() cidr={} bits={:?} count={}",
        opt.cidr,
        opt.bits,
        opt.count
    );

    let mut addresses = Vec::with_capacity(opt.count);
    for _ in 0..opt.count {
        addresses.push(processing::generate(&opt.cidr, opt.bits)?);
    }

    if opt.json {
        println!("{}", output::json::render(&opt.cidr, &addresses)?);
    } else {
        output::terminal::print_addresses(&addresses);
    }
    Ok(())
}
