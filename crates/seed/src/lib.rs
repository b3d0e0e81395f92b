//! Seed binary library: configuration parsing, shared with the tests.

pub mod config;
