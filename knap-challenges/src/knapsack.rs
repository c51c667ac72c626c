use crate::error::{KnapsackError, KnapsackResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u64,
    pub benefit: u64,
}

impl Item {
    pub fn new(weight: u64, benefit: u64) -> Self {
        Self { weight, benefit }
    }
}

/// A 0/1 knapsack instance. Items are addressed by their 1-based position
/// in the input sequence.
///
/// The fields are private so a `Problem` can only exist once validated: the
/// total weight and total benefit of all items fit in a `u64`, so no sum
/// computed by a solver can overflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "ProblemData")]
pub struct Problem {
    capacity: u64,
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct ProblemData {
    capacity: u64,
    items: Vec<Item>,
}

impl TryFrom<ProblemData> for Problem {
    type Error = KnapsackError;

    fn try_from(data: ProblemData) -> KnapsackResult<Self> {
        Problem::new(data.capacity, data.items)
    }
}

impl Problem {
    pub fn new(capacity: u64, items: Vec<Item>) -> KnapsackResult<Self> {
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
            .ok_or_else(|| KnapsackError::invalid_problem("total weight of all items overflows u64"))?;
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.benefit))
            .ok_or_else(|| {
                KnapsackError::invalid_problem("total benefit of all items overflows u64")
            })?;
        Ok(Self { capacity, items })
    }

    /// Builds a problem from signed inputs as they come out of a parser,
    /// rejecting negative values and mismatched lengths.
    pub fn from_parts(capacity: i64, weights: &[i64], benefits: &[i64]) -> KnapsackResult<Self> {
        if capacity < 0 {
            return Err(KnapsackError::invalid_problem(format!(
                "capacity must be non-negative, got {}",
                capacity
            )));
        }
        if weights.len() != benefits.len() {
            return Err(KnapsackError::invalid_problem(format!(
                "got {} weights but {} benefits",
                weights.len(),
                benefits.len()
            )));
        }
        let mut items = Vec::with_capacity(weights.len());
        for (i, (&weight, &benefit)) in weights.iter().zip(benefits).enumerate() {
            if weight < 0 {
                return Err(KnapsackError::invalid_problem(format!(
                    "item {} has negative weight {}",
                    i + 1,
                    weight
                )));
            }
            if benefit < 0 {
                return Err(KnapsackError::invalid_problem(format!(
                    "item {} has negative benefit {}",
                    i + 1,
                    benefit
                )));
            }
            items.push(Item::new(weight as u64, benefit as u64));
        }
        Problem::new(capacity as u64, items)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Item at 1-based `position`.
    pub fn item(&self, position: usize) -> Option<&Item> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn weights(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(|item| item.weight)
    }

    pub fn benefits(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(|item| item.benefit)
    }

    pub fn weight_of<'a>(&self, positions: impl IntoIterator<Item = &'a usize>) -> KnapsackResult<u64> {
        self.sum_over(positions, |item| item.weight)
    }

    pub fn benefit_of<'a>(&self, positions: impl IntoIterator<Item = &'a usize>) -> KnapsackResult<u64> {
        self.sum_over(positions, |item| item.benefit)
    }

    fn sum_over<'a>(
        &self,
        positions: impl IntoIterator<Item = &'a usize>,
        field: impl Fn(&Item) -> u64,
    ) -> KnapsackResult<u64> {
        positions.into_iter().try_fold(0u64, |acc, &position| -> KnapsackResult<u64> {
            let item = self.item(position).ok_or_else(|| {
                KnapsackError::invalid_solution(format!(
                    "item ({}) is out of bounds 1..={}",
                    position,
                    self.num_items()
                ))
            })?;
            // totals are bounded at construction
            Ok(acc + field(item))
        })
    }

    /// Checks that `solution` is feasible and that its reported value
    /// matches the benefit of its items. Optimality is not checked.
    pub fn verify_solution(&self, solution: &Solution) -> KnapsackResult<()> {
        let total_weight = self.weight_of(&solution.items)?;
        if total_weight > self.capacity {
            return Err(KnapsackError::invalid_solution(format!(
                "total weight ({}) exceeded capacity ({})",
                total_weight, self.capacity
            )));
        }
        let total_benefit = self.benefit_of(&solution.items)?;
        if total_benefit != solution.value {
            return Err(KnapsackError::invalid_solution(format!(
                "reported value ({}) does not match total benefit ({})",
                solution.value, total_benefit
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    pub value: u64,
    pub items: BTreeSet<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends this sub-solution with the item at `position`.
    pub fn including(mut self, position: usize, benefit: u64) -> Self {
        self.value += benefit;
        self.items.insert(position);
        self
    }

    pub fn positions(&self) -> Vec<usize> {
        self.items.iter().copied().collect()
    }
}
