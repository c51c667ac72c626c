mod config;
pub use config::{BenchConfig, Selector};
mod harness;
pub use harness::{compare, measure, run};
mod report;
pub use report::{BenchOutcome, BenchReport, ComparisonReport};
