use knap_challenges::{KnapsackResult, Problem, Solution};
use serde::{Deserialize, Serialize};

pub mod exhaustive;
pub mod memoized;
pub mod tabulation;
mod table;
pub use table::{Table, MAX_TABLE_BYTES};

/// The interchangeable exact solvers. All of them return the same optimal
/// value and, since every solver prefers inclusion on ties, the same set of
/// positions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BruteForce,
    BottomUp,
    TopDown,
}

pub type SolveFn = fn(&Problem) -> KnapsackResult<Solution>;

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BruteForce,
        Algorithm::BottomUp,
        Algorithm::TopDown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::BottomUp => "bottom_up",
            Algorithm::TopDown => "top_down",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute force",
            Algorithm::BottomUp => "Bottom up",
            Algorithm::TopDown => "Top down",
        }
    }

    pub fn solve_fn(&self) -> SolveFn {
        match self {
            Algorithm::BruteForce => exhaustive::solve,
            Algorithm::BottomUp => tabulation::solve,
            Algorithm::TopDown => memoized::solve,
        }
    }

    pub fn solve(&self, problem: &Problem) -> KnapsackResult<Solution> {
        (self.solve_fn())(problem)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
