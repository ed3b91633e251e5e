use super::errors::PolicyError;
use super::policy::{argmax, check_arm_index, ArmStats, Policy, PolicyStats};
use super::rng::MaybeSeededRng;

use rand_distr::{Beta, Distribution};

const DEFAULT_THRESHOLD: f64 = 0.5;

/// Thompson sampling with a Beta(1, 1) prior per arm, treating rewards as
/// Bernoulli outcomes. Continuous rewards are mapped to a success when they
/// reach `threshold`; on {0, 1} rewards the mapping is the identity.
pub struct ThompsonSampling {
    alpha: Vec<f64>,
    beta: Vec<f64>,
    counts: Vec<u64>,
    threshold: f64,
    rng: MaybeSeededRng,
}

impl ThompsonSampling {
    pub fn new(num_arms: usize, threshold: Option<f64>, seed: Option<u64>) -> Self {
        Self {
            alpha: vec![1.0; num_arms],
            beta: vec![1.0; num_arms],
            counts: vec![0; num_arms],
            threshold: threshold.unwrap_or(DEFAULT_THRESHOLD),
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for ThompsonSampling {
    fn name(&self) -> &'static str {
        "thompson_sampling"
    }

    fn select(&mut self) -> Result<usize, PolicyError> {
        if self.alpha.is_empty() {
            return Err(PolicyError::NoArmsAvailable);
        }

        let samples = self
            .alpha
            .iter()
            .zip(&self.beta)
            .map(|(&alpha, &beta)| {
                Beta::new(alpha, beta)
                    .map_err(|e| PolicyError::SamplingError(e.to_string()))
                    .map(|dist| dist.sample(self.rng.get_rng()))
            })
            .collect::<Result<Vec<f64>, PolicyError>>()?;

        argmax(&samples)
    }

    fn update(&mut self, arm_index: usize, reward: f64) -> Result<(), PolicyError> {
        check_arm_index(arm_index, self.alpha.len())?;

        let success = if reward >= self.threshold { 1.0 } else { 0.0 };
        self.alpha[arm_index] += success;
        self.beta[arm_index] += 1.0 - success;
        self.counts[arm_index] += 1;

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self
                .counts
                .iter()
                .zip(self.alpha.iter().zip(&self.beta))
                .map(|(&pulls, (&alpha, &beta))| ArmStats {
                    pulls,
                    mean_reward: alpha / (alpha + beta),
                })
                .collect(),
        }
    }
}
