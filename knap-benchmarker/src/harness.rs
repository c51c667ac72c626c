use crate::config::{BenchConfig, Selector};
use crate::report::{BenchOutcome, BenchReport, ComparisonReport};
use knap_algorithms::Algorithm;
use knap_challenges::{KnapsackError, KnapsackResult, Problem, Solution};
use knap_utils::format_duration;
use logging_timer::time;
use std::time::Instant;

/// Runs `algorithm` on `problem` `iterations` times and records the
/// wall-clock time of each run. Only the last run's solution is kept; the
/// solvers are deterministic so earlier runs return the same one.
pub fn measure(
    algorithm: Algorithm,
    problem: &Problem,
    iterations: usize,
) -> KnapsackResult<BenchReport> {
    check_iterations(iterations)?;
    let solve = algorithm.solve_fn();
    let mut runtimes = Vec::with_capacity(iterations);
    let mut solution = Solution::new();
    for _ in 0..iterations {
        let start = Instant::now();
        solution = solve(problem)?;
        runtimes.push(start.elapsed());
    }
    let report = BenchReport {
        algorithm,
        runtimes,
        solution,
    };
    log::info!(
        "{}: value {} over {} iterations, average {}",
        algorithm.label(),
        report.solution.value,
        iterations,
        format_duration(report.average())
    );
    Ok(report)
}

/// Measures every algorithm on the same problem.
#[time]
pub fn compare(problem: &Problem, iterations: usize) -> KnapsackResult<ComparisonReport> {
    check_iterations(iterations)?;
    let reports = Algorithm::ALL
        .into_iter()
        .map(|algorithm| measure(algorithm, problem, iterations))
        .collect::<KnapsackResult<Vec<_>>>()?;
    let comparison = ComparisonReport { reports };
    if !comparison.agree() {
        log::warn!(
            "solvers disagree on the optimal value: {:?}",
            comparison
                .reports
                .iter()
                .map(|r| (r.algorithm.name(), r.solution.value))
                .collect::<Vec<_>>()
        );
    }
    Ok(comparison)
}

pub fn run(config: &BenchConfig, problem: &Problem) -> KnapsackResult<BenchOutcome> {
    log::debug!(
        "running {} for {} iterations on {} items with capacity {}",
        config.selector,
        config.iterations,
        problem.num_items(),
        problem.capacity()
    );
    match config.selector {
        Selector::Single(algorithm) => {
            measure(algorithm, problem, config.iterations).map(BenchOutcome::Single)
        }
        Selector::CompareAll => compare(problem, config.iterations).map(BenchOutcome::Comparison),
    }
}

fn check_iterations(iterations: usize) -> KnapsackResult<()> {
    if iterations == 0 {
        return Err(KnapsackError::invalid_configuration(
            "iterations must be positive, got 0",
        ));
    }
    Ok(())
}
