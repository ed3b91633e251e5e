use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Arm index {index} out of range ({num_arms} arms)")]
    InvalidArmIndex { index: usize, num_arms: usize },
    #[error("Invalid environment configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Reward sampling failed: {0}")]
    SamplingError(String),
}
