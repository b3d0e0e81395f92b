//! Domain types shared by the Baseplate blog crates.

pub mod error;
pub mod fixtures;
pub mod latency;
pub mod types;
