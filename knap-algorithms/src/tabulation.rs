//! Bottom-up dynamic programming.
//!
//! `V[i][w]` is the best benefit achievable with items `1..=i` within weight
//! `w`. Filling the `(n + 1) x (capacity + 1)` table costs O(n * capacity)
//! time and space. This is pseudo-polynomial: capacity is a magnitude, not a
//! count, so doubling the number of bits in the capacity squares the work.
use crate::table::Table;
use knap_challenges::{Item, KnapsackResult, Problem, Solution};

pub fn solve(problem: &Problem) -> KnapsackResult<Solution> {
    let table = build_table(problem.capacity(), problem.items())?;
    let solution = reconstruct(&table, problem.items());
    log::debug!(
        "tabulation: {} x {} table, value {} with items {:?}",
        table.rows(),
        table.columns(),
        solution.value,
        solution.items
    );
    Ok(solution)
}

pub fn build_table(capacity: u64, items: &[Item]) -> KnapsackResult<Table<u64>> {
    let mut table = Table::new(items.len() + 1, capacity, 0u64)?;
    let columns = table.columns();
    for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
        for w in 0..columns {
            let excluded = table[(i - 1, w)];
            table[(i, w)] = if item.weight > w as u64 {
                excluded
            } else {
                excluded.max(item.benefit + table[(i - 1, w - item.weight as usize)])
            };
        }
    }
    Ok(table)
}

/// Walks the table back from `(n, capacity)`. Item `i` is taken whenever
/// taking it reaches `V[i][w]`, so on equal value the item is included.
pub fn reconstruct(table: &Table<u64>, items: &[Item]) -> Solution {
    let mut solution = Solution::new();
    let mut w = table.columns() - 1;
    let mut i = items.len();
    while i > 0 {
        let item = &items[i - 1];
        if item.weight <= w as u64 {
            let remaining = w - item.weight as usize;
            if table[(i, w)] == item.benefit + table[(i - 1, remaining)] {
                solution = solution.including(i, item.benefit);
                w = remaining;
            }
        }
        i -= 1;
    }
    debug_assert_eq!(solution.value, table[(items.len(), table.columns() - 1)]);
    solution
}
