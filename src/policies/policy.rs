use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::random::Random;
use super::thompson_sampling::ThompsonSampling;
use super::ucb::Ucb;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub mean_reward: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

/// Policy configurations as they appear in the config file. `into_policy`
/// builds the concrete agent once the arm count is known.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum PolicyType {
    Random {
        seed: Option<u64>,
    },
    EpsilonGreedy {
        epsilon: f64,
        seed: Option<u64>,
    },
    Ucb {},
    ThompsonSampling {
        threshold: Option<f64>,
        seed: Option<u64>,
    },
}

impl PolicyType {
    pub fn into_policy(self, num_arms: usize) -> Box<dyn Policy + Send> {
        match self {
            PolicyType::Random { seed } => Box::new(Random::new(num_arms, seed)),
            PolicyType::EpsilonGreedy { epsilon, seed } => {
                Box::new(EpsilonGreedy::new(num_arms, epsilon, seed))
            }
            PolicyType::Ucb {} => Box::new(Ucb::new(num_arms)),
            PolicyType::ThompsonSampling { threshold, seed } => {
                Box::new(ThompsonSampling::new(num_arms, threshold, seed))
            }
        }
    }
}

pub trait Policy: Send {
    fn name(&self) -> &'static str;
    /// Chooses the next arm to pull. Mutates only the policy's RNG, never its
    /// per-arm statistics.
    fn select(&mut self) -> Result<usize, PolicyError>;
    /// Integrates one observed reward. Called exactly once per round,
    /// immediately after the corresponding `select`.
    fn update(&mut self, arm_index: usize, reward: f64) -> Result<(), PolicyError>;
    fn stats(&self) -> PolicyStats;
}

/// Index of the largest value, ties broken by lowest index.
pub(super) fn argmax(values: &[f64]) -> Result<usize, PolicyError> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, best_v)) if v <= best_v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
        .ok_or(PolicyError::NoArmsAvailable)
}

pub(super) fn check_arm_index(index: usize, num_arms: usize) -> Result<(), PolicyError> {
    if index < num_arms {
        Ok(())
    } else {
        Err(PolicyError::InvalidArmIndex { index, num_arms })
    }
}
