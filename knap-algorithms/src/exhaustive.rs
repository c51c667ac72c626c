//! Exhaustive search over every include/exclude combination.
//!
//! O(2^n) time. Only meant for small instances and for cross-checking the
//! dynamic-programming solvers. The search tree is walked with an explicit
//! work stack, so deep instances never exhaust the thread's stack.
use knap_challenges::{Item, KnapsackResult, Problem, Solution};

/// Item count above which a solve is logged as likely to be slow.
pub const SLOW_NUM_ITEMS: usize = 25;

pub fn solve(problem: &Problem) -> KnapsackResult<Solution> {
    if problem.num_items() > SLOW_NUM_ITEMS {
        log::warn!(
            "exhaustive search over {} items explores up to 2^{} subsets",
            problem.num_items(),
            problem.num_items()
        );
    }
    let solution = solve_from(problem.capacity(), problem.items(), problem.num_items());
    log::debug!(
        "exhaustive: value {} with items {:?}",
        solution.value,
        solution.items
    );
    Ok(solution)
}

enum Step {
    Visit { current: usize, capacity: u64, value: u64 },
    Take(usize),
    Untake,
}

/// Best solution using items at positions `1..=current` within `capacity`.
///
/// Items are decided from `current` down to 1 and the branch that includes
/// an item is explored first. A later leaf only replaces the best one when it
/// is strictly better, so on equal value the including branch wins.
///
/// Unlike a `capacity == 0` cut-off, every item is decided, so zero-weight
/// items still count once the knapsack is full.
pub fn solve_from(capacity: u64, items: &[Item], current: usize) -> Solution {
    let mut best: Option<Solution> = None;
    let mut taken: Vec<usize> = Vec::new();
    let mut stack = vec![Step::Visit {
        current,
        capacity,
        value: 0,
    }];
    while let Some(step) = stack.pop() {
        match step {
            Step::Visit {
                current: 0, value, ..
            } => {
                if best.as_ref().map_or(true, |best| value > best.value) {
                    best = Some(Solution {
                        value,
                        items: taken.iter().copied().collect(),
                    });
                }
            }
            Step::Visit {
                current,
                capacity,
                value,
            } => {
                let item = &items[current - 1];
                stack.push(Step::Visit {
                    current: current - 1,
                    capacity,
                    value,
                });
                if item.weight <= capacity {
                    stack.push(Step::Untake);
                    stack.push(Step::Visit {
                        current: current - 1,
                        capacity: capacity - item.weight,
                        value: value + item.benefit,
                    });
                    stack.push(Step::Take(current));
                }
            }
            Step::Take(position) => taken.push(position),
            Step::Untake => {
                taken.pop();
            }
        }
    }
    best.unwrap_or_default()
}
