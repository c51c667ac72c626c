pub mod error;
pub use error::{KnapsackError, KnapsackResult};
pub mod generator;
pub mod knapsack;
pub use knapsack::{Item, Problem, Solution};
pub mod loader;
