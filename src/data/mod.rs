//! Employee data sources.
//!
//! The fixed roster used by the report and a seeded generator for
//! large synthetic lists used by the benchmark.

pub mod generator;
pub mod roster;

pub use generator::*;
pub use roster::*;
