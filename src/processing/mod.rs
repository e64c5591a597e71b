//! Address generation logic.
//!
//! This module contains the generation pipeline:
//! - [`assemble`] - bit-level reassembly of network, random and zero bits
//! - [`generate`] - host-bit accounting plus the full pipeline

mod assemble;
mod generate;

// Re-export public functions
pub use assemble::assemble;
pub use generate::{compute_host_bits, generate};
