pub mod epsilon_greedy;
pub mod errors;
pub mod random;
pub mod thompson_sampling;
pub mod ucb;

mod policy;
mod rng;

pub use policy::{ArmStats, Policy, PolicyStats, PolicyType};
pub use rng::MaybeSeededRng;
