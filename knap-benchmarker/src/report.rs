use knap_algorithms::Algorithm;
use knap_challenges::Solution;
use knap_utils::{mean_duration, RuntimeStats};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub algorithm: Algorithm,
    pub runtimes: Vec<Duration>,
    /// Solution returned by the final repetition.
    pub solution: Solution,
}

impl BenchReport {
    pub fn iterations(&self) -> usize {
        self.runtimes.len()
    }

    pub fn average(&self) -> Duration {
        mean_duration(&self.runtimes).unwrap_or_default()
    }

    pub fn stats(&self) -> Option<RuntimeStats> {
        RuntimeStats::from_samples(&self.runtimes)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub reports: Vec<BenchReport>,
}

impl ComparisonReport {
    /// `(label, average runtime)` per algorithm, in the order they ran.
    pub fn summary(&self) -> Vec<(&'static str, Duration)> {
        self.reports
            .iter()
            .map(|r| (r.algorithm.label(), r.average()))
            .collect()
    }

    pub fn report(&self, algorithm: Algorithm) -> Option<&BenchReport> {
        self.reports.iter().find(|r| r.algorithm == algorithm)
    }

    /// Whether every algorithm found the same optimal value.
    pub fn agree(&self) -> bool {
        self.reports
            .windows(2)
            .all(|w| w[0].solution.value == w[1].solution.value)
    }

    pub fn fastest(&self) -> Option<&BenchReport> {
        self.reports.iter().min_by_key(|r| r.average())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BenchOutcome {
    Single(BenchReport),
    Comparison(ComparisonReport),
}

impl BenchOutcome {
    pub fn reports(&self) -> &[BenchReport] {
        match self {
            BenchOutcome::Single(report) => std::slice::from_ref(report),
            BenchOutcome::Comparison(comparison) => &comparison.reports,
        }
    }
}
