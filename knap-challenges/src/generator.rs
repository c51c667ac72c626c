use crate::error::{KnapsackError, KnapsackResult};
use crate::knapsack::{Item, Problem};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Half-open range `low..high` of item attributes. `low == high` always
/// yields `low`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub low: u64,
    pub high: u64,
}

impl Range {
    pub fn new(low: u64, high: u64) -> KnapsackResult<Self> {
        if low > high {
            return Err(KnapsackError::invalid_configuration(format!(
                "range {}-{} has its lower bound above its upper bound",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        if self.low == self.high {
            self.low
        } else {
            rng.gen_range(self.low..self.high)
        }
    }
}

impl FromStr for Range {
    type Err = KnapsackError;

    fn from_str(s: &str) -> KnapsackResult<Self> {
        let parse = |v: &str| {
            v.trim().parse::<u64>().map_err(|_| {
                KnapsackError::invalid_configuration(format!(
                    "range '{}' must be of the form 'low-high' with non-negative integers",
                    s
                ))
            })
        };
        match s.split_once('-') {
            Some((low, high)) => Range::new(parse(low)?, parse(high)?),
            None => Err(KnapsackError::invalid_configuration(format!(
                "range '{}' must be of the form 'low-high'",
                s
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub capacity: u64,
    pub num_items: usize,
    pub weights: Range,
    pub benefits: Range,
}

pub fn generate_problem(config: &GeneratorConfig, seed: &[u8; 32]) -> KnapsackResult<Problem> {
    let mut rng = SmallRng::from_seed(*seed);
    let weights: Vec<u64> = (0..config.num_items)
        .map(|_| config.weights.sample(&mut rng))
        .collect();
    let benefits: Vec<u64> = (0..config.num_items)
        .map(|_| config.benefits.sample(&mut rng))
        .collect();
    let items = weights
        .into_iter()
        .zip(benefits)
        .map(|(weight, benefit)| Item::new(weight, benefit))
        .collect();
    Problem::new(config.capacity, items)
}

/// Expands a 64-bit seed into the 32 bytes `generate_problem` expects.
pub fn seed_from_u64(seed: u64) -> [u8; 32] {
    StdRng::seed_from_u64(seed).gen()
}
