//! Top-down dynamic programming with a `(index, capacity)` memo.
//!
//! Same O(n * capacity) bound as tabulation, but only the states reachable
//! from `(0, capacity)` are ever computed.
//!
//! The recursion decides items from the last position to the first: state
//! `k` decides the item at position `n - k` and its memo entry holds the best
//! value over positions `1..=n - k`. Deciding in the same order as the
//! exhaustive search keeps the chosen sets identical on ties.
//!
//! Pending states live on a heap-allocated work stack rather than the call
//! stack, so the depth of the recursion is bounded by memory, not by the
//! thread's stack size. The memo keeps values only; the chosen positions are
//! rebuilt from it once the top state is known.
use crate::table::Table;
use knap_challenges::{Item, KnapsackError, KnapsackResult, Problem, Solution};

/// `num_items x (capacity + 1)` cache of computed values. `None` marks a
/// state that has not been computed yet.
#[derive(Debug, Clone)]
pub struct MemoTable {
    table: Table<Option<u64>>,
}

impl MemoTable {
    pub fn new(num_items: usize, capacity: u64) -> KnapsackResult<Self> {
        Ok(Self {
            table: Table::new(num_items, capacity, None)?,
        })
    }

    pub fn for_problem(problem: &Problem) -> KnapsackResult<Self> {
        Self::new(problem.num_items(), problem.capacity())
    }

    pub fn num_items(&self) -> usize {
        self.table.rows()
    }

    pub fn capacity(&self) -> u64 {
        (self.table.columns() - 1) as u64
    }

    pub fn get(&self, index: usize, capacity: usize) -> Option<u64> {
        self.table.get(index, capacity).copied().flatten()
    }

    /// Stores `value` for `(index, capacity)` unless the state already
    /// holds one. Returns whether the entry was written.
    pub fn insert(&mut self, index: usize, capacity: usize, value: u64) -> bool {
        let entry = &mut self.table[(index, capacity)];
        if entry.is_some() {
            return false;
        }
        *entry = Some(value);
        true
    }

    /// Number of states computed so far.
    pub fn populated(&self) -> usize {
        self.table.iter().filter(|entry| entry.is_some()).count()
    }

    /// Value of state `(index, capacity)`, where `index == num_items` is the
    /// empty suffix.
    fn value(&self, index: usize, capacity: u64) -> Option<u64> {
        if index == self.num_items() {
            Some(0)
        } else {
            self.get(index, capacity as usize)
        }
    }
}

pub fn solve(problem: &Problem) -> KnapsackResult<Solution> {
    let mut memo = MemoTable::for_problem(problem)?;
    solve_with_memo(problem, &mut memo)
}

pub fn solve_with_memo(problem: &Problem, memo: &mut MemoTable) -> KnapsackResult<Solution> {
    if memo.num_items() != problem.num_items() || memo.capacity() != problem.capacity() {
        return Err(KnapsackError::invalid_configuration(format!(
            "memo of shape {} x {} does not fit a problem with {} items and capacity {}",
            memo.num_items(),
            memo.capacity() + 1,
            problem.num_items(),
            problem.capacity()
        )));
    }
    let solution = solve_from(problem.capacity(), problem.items(), 0, memo)?;
    log::debug!(
        "memoized: {} of {} states computed, value {} with items {:?}",
        memo.populated(),
        memo.num_items() * (memo.capacity() as usize + 1),
        solution.value,
        solution.items
    );
    Ok(solution)
}

/// Best solution over positions `1..=items.len() - current` within
/// `capacity`, reading and filling `memo`.
///
/// Unlike a `capacity == 0` cut-off, every remaining item is decided, so
/// zero-weight items still count once the knapsack is full.
pub fn solve_from(
    capacity: u64,
    items: &[Item],
    current: usize,
    memo: &mut MemoTable,
) -> KnapsackResult<Solution> {
    if memo.num_items() != items.len() || capacity > memo.capacity() || current > items.len() {
        return Err(KnapsackError::invalid_configuration(format!(
            "state ({}, {}) lies outside the {} x {} memo",
            current,
            capacity,
            memo.num_items(),
            memo.capacity() + 1
        )));
    }
    fill(capacity, items, current, memo);
    Ok(reconstruct(capacity, items, current, memo))
}

/// Computes state `(current, capacity)` and every state it depends on.
fn fill(capacity: u64, items: &[Item], current: usize, memo: &mut MemoTable) {
    let n = items.len();
    let mut pending = vec![(current, capacity)];
    while let Some(&(index, capacity)) = pending.last() {
        if memo.value(index, capacity).is_some() {
            pending.pop();
            continue;
        }
        let item = &items[n - index - 1];
        let excluded = memo.value(index + 1, capacity);
        // `Some(None)` when the item does not fit
        let included = if item.weight <= capacity {
            memo.value(index + 1, capacity - item.weight)
                .map(|value| Some(value + item.benefit))
        } else {
            Some(None)
        };
        match (excluded, included) {
            (Some(excluded), Some(included)) => {
                pending.pop();
                let best = included.map_or(excluded, |included| included.max(excluded));
                memo.insert(index, capacity as usize, best);
            }
            (excluded, included) => {
                if included.is_none() {
                    pending.push((index + 1, capacity - item.weight));
                }
                if excluded.is_none() {
                    pending.push((index + 1, capacity));
                }
            }
        }
    }
}

/// Walks the filled memo from `(current, capacity)`, taking an item whenever
/// taking it reaches the stored value.
fn reconstruct(capacity: u64, items: &[Item], current: usize, memo: &MemoTable) -> Solution {
    let n = items.len();
    let mut solution = Solution::new();
    let mut remaining = capacity;
    for index in current..n {
        let position = n - index;
        let item = &items[position - 1];
        if item.weight > remaining {
            continue;
        }
        let included = memo
            .value(index + 1, remaining - item.weight)
            .map(|value| value + item.benefit);
        if included.is_some() && included == memo.value(index, remaining) {
            solution = solution.including(position, item.benefit);
            remaining -= item.weight;
        }
    }
    debug_assert_eq!(Some(solution.value), memo.value(current, capacity));
    solution
}
