use super::errors::PolicyError;
use super::policy::{argmax, check_arm_index, ArmStats, Policy, PolicyStats};
use super::rng::MaybeSeededRng;

use rand::Rng;

/// Epsilon-greedy: with probability `epsilon` pick a uniformly random arm,
/// otherwise exploit the arm with the best running mean reward.
pub struct EpsilonGreedy {
    counts: Vec<u64>,
    estimates: Vec<f64>,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, epsilon: f64, seed: Option<u64>) -> Self {
        Self {
            counts: vec![0; num_arms],
            estimates: vec![0.0; num_arms],
            epsilon,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn select(&mut self) -> Result<usize, PolicyError> {
        if self.counts.is_empty() {
            return Err(PolicyError::NoArmsAvailable);
        }

        if self.rng.get_rng().random::<f64>() < self.epsilon {
            Ok(self.rng.get_rng().random_range(0..self.counts.len()))
        } else {
            argmax(&self.estimates)
        }
    }

    fn update(&mut self, arm_index: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm_index(arm_index, self.counts.len())?;

        self.counts[arm_index] += 1;
        self.estimates[arm_index] +=
            (reward - self.estimates[arm_index]) / (self.counts[arm_index] as f64);

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self
                .counts
                .iter()
                .zip(&self.estimates)
                .map(|(&pulls, &mean_reward)| ArmStats { pulls, mean_reward })
                .collect(),
        }
    }
}
