#[derive(Debug, Clone, PartialEq)]
pub enum KnapsackError {
    InvalidProblem {
        reason: String,
    },
    InvalidConfiguration {
        reason: String,
    },
    InvalidSolution {
        reason: String,
    },
    ResourceExhaustion {
        rows: usize,
        columns: usize,
        limit: usize,
    },
}

impl KnapsackError {
    pub fn invalid_problem(reason: impl Into<String>) -> Self {
        KnapsackError::InvalidProblem {
            reason: reason.into(),
        }
    }

    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        KnapsackError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn invalid_solution(reason: impl Into<String>) -> Self {
        KnapsackError::InvalidSolution {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnapsackError::InvalidProblem { reason } => {
                write!(f, "Invalid problem: {}", reason)
            }
            KnapsackError::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
            KnapsackError::InvalidSolution { reason } => {
                write!(f, "Invalid solution: {}", reason)
            }
            KnapsackError::ResourceExhaustion {
                rows,
                columns,
                limit,
            } => write!(
                f,
                "A {} x {} table exceeds the limit of {} bytes. Reduce the capacity or the number of items",
                rows, columns, limit
            ),
        }
    }
}

impl std::error::Error for KnapsackError {}

pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;
