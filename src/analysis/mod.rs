//! Analysis modules.
//!
//! Aggregations over the roster, the partitioned reductions behind them
//! and the sequential/parallel benchmark.

pub mod aggregator;
pub mod benchmark;
pub mod parallel;

pub use aggregator::*;
pub use benchmark::{run_benchmark, BenchmarkOptions};
