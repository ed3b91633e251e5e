use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Arm index {index} out of range ({num_arms} arms)")]
    InvalidArmIndex { index: usize, num_arms: usize },
    #[error("No arms to select from")]
    NoArmsAvailable,
    #[error("Posterior sampling failed: {0}")]
    SamplingError(String),
}
