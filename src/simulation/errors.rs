use crate::environment::EnvironmentError;
use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid simulation configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Round {got} recorded out of order (expected {expected})")]
    OutOfOrderRecord { expected: u64, got: u64 },
    #[error("Result set is frozen")]
    FrozenResultSet,
    #[error("Policy failed at round {round}: {source}")]
    Policy { round: u64, source: PolicyError },
    #[error("Environment failed at round {round}: {source}")]
    Environment {
        round: u64,
        source: EnvironmentError,
    },
}
