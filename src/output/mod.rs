//! Output formatting for generated addresses.
//!
//! This module handles rendering generation results:
//! - [`json`] - JSON report output
//! - [`terminal`] - plain line-per-address output

pub mod json;
pub mod terminal;
