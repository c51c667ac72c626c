use knap_algorithms::Algorithm;
use knap_challenges::{KnapsackError, KnapsackResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which solver(s) a benchmark runs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    Single(Algorithm),
    CompareAll,
}

impl TryFrom<u8> for Selector {
    type Error = KnapsackError;

    fn try_from(code: u8) -> KnapsackResult<Self> {
        match code {
            1 => Ok(Selector::Single(Algorithm::BruteForce)),
            2 => Ok(Selector::Single(Algorithm::BottomUp)),
            3 => Ok(Selector::Single(Algorithm::TopDown)),
            4 => Ok(Selector::CompareAll),
            _ => Err(unknown_selector(&code.to_string())),
        }
    }
}

impl FromStr for Selector {
    type Err = KnapsackError;

    /// Accepts the numeric codes `1`-`4` or the names `brute_force`,
    /// `bottom_up`, `top_down` and `all`.
    fn from_str(s: &str) -> KnapsackResult<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Selector::try_from(code);
        }
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "all" | "compare_all" => Ok(Selector::CompareAll),
            name => Algorithm::ALL
                .into_iter()
                .find(|a| a.name() == name)
                .map(Selector::Single)
                .ok_or_else(|| unknown_selector(s)),
        }
    }
}

fn unknown_selector(s: &str) -> KnapsackError {
    KnapsackError::invalid_configuration(format!(
        "unknown algorithm '{}'. Expected 1 (brute_force), 2 (bottom_up), 3 (top_down) or 4 (all)",
        s
    ))
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Single(algorithm) => write!(f, "{}", algorithm.name()),
            Selector::CompareAll => write!(f, "all"),
        }
    }
}

/// Built once by the caller and handed to [`crate::run`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub selector: Selector,
    pub iterations: usize,
}

impl BenchConfig {
    pub fn new(selector: Selector, iterations: i64) -> KnapsackResult<Self> {
        Ok(Self {
            selector,
            iterations: validate_iterations(iterations)?,
        })
    }
}

fn validate_iterations(iterations: i64) -> KnapsackResult<usize> {
    if iterations <= 0 {
        return Err(KnapsackError::invalid_configuration(format!(
            "iterations must be positive, got {}",
            iterations
        )));
    }
    usize::try_from(iterations).map_err(|_| {
        KnapsackError::invalid_configuration(format!("iterations {} is too large", iterations))
    })
}
