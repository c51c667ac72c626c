//! Text format: the first non-empty line holds the capacity, every further
//! non-empty line holds one item as `weight,benefit`.
use crate::error::{KnapsackError, KnapsackResult};
use crate::knapsack::Problem;
use std::{fs, path::Path};

pub fn load_problem(path: impl AsRef<Path>) -> KnapsackResult<Problem> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        KnapsackError::invalid_problem(format!("failed to read {}: {}", path.display(), e))
    })?;
    let problem = parse_problem(&contents)?;
    log::debug!(
        "loaded {} items with capacity {} from {}",
        problem.num_items(),
        problem.capacity(),
        path.display()
    );
    Ok(problem)
}

pub fn parse_problem(contents: &str) -> KnapsackResult<Problem> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, capacity_line) = lines
        .next()
        .ok_or_else(|| KnapsackError::invalid_problem("input is empty, expected a capacity"))?;
    let capacity = parse_field(capacity_line, "capacity", line_no)?;

    let mut weights = Vec::new();
    let mut benefits = Vec::new();
    for (line_no, line) in lines {
        let (weight, benefit) = line.split_once(',').ok_or_else(|| {
            KnapsackError::invalid_problem(format!(
                "line {}: expected 'weight,benefit', got '{}'",
                line_no, line
            ))
        })?;
        weights.push(parse_field(weight, "weight", line_no)?);
        benefits.push(parse_field(benefit, "benefit", line_no)?);
    }

    Problem::from_parts(capacity, &weights, &benefits)
}

fn parse_field(field: &str, name: &str, line_no: usize) -> KnapsackResult<i64> {
    field.trim().parse::<i64>().map_err(|e| {
        KnapsackError::invalid_problem(format!(
            "line {}: {} '{}' is not an integer ({})",
            line_no,
            name,
            field.trim(),
            e
        ))
    })
}

/// Writes `problem` in the format read by [`parse_problem`].
pub fn format_problem(problem: &Problem) -> String {
    let mut out = format!("{}\n", problem.capacity());
    for item in problem.items() {
        out.push_str(&format!("{},{}\n", item.weight, item.benefit));
    }
    out
}
