//! Staged HTTP load generator for the listing endpoints.
//!
//! Virtual users ramp up, hold, then ramp down, each issuing GET requests in a
//! loop. The run passes when the 95th percentile latency stays under the
//! configured threshold.

pub mod config;
pub mod report;
pub mod runner;
