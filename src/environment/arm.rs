use super::errors::EnvironmentError;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Normal};
use serde::Deserialize;

/// One reward source with a fixed true mean, unknown to the agents.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum Arm {
    /// Pays 1.0 with probability `mean`, else 0.0.
    Bernoulli { mean: f64 },
    /// Pays a draw from Normal(`mean`, `std_dev`).
    Gaussian { mean: f64, std_dev: f64 },
}

impl Arm {
    pub fn true_mean(&self) -> f64 {
        match self {
            Arm::Bernoulli { mean } => *mean,
            Arm::Gaussian { mean, .. } => *mean,
        }
    }

    pub(super) fn validate(&self) -> Result<(), EnvironmentError> {
        match self {
            Arm::Bernoulli { mean } if !(0.0..=1.0).contains(mean) => {
                Err(EnvironmentError::InvalidConfiguration(format!(
                    "Bernoulli mean {} outside [0, 1]",
                    mean
                )))
            }
            Arm::Gaussian { std_dev, .. } if !std_dev.is_finite() || *std_dev < 0.0 => {
                Err(EnvironmentError::InvalidConfiguration(format!(
                    "Gaussian std_dev {} must be finite and non-negative",
                    std_dev
                )))
            }
            _ => Ok(()),
        }
    }

    pub(super) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, EnvironmentError> {
        match self {
            Arm::Bernoulli { mean } => {
                let success = Bernoulli::new(*mean)
                    .map_err(|e| EnvironmentError::SamplingError(e.to_string()))?
                    .sample(rng);
                Ok(if success { 1.0 } else { 0.0 })
            }
            Arm::Gaussian { mean, std_dev } => Ok(Normal::new(*mean, *std_dev)
                .map_err(|e| EnvironmentError::SamplingError(e.to_string()))?
                .sample(rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    #[test]
    fn true_mean() {
        assert_eq!(Arm::Bernoulli { mean: 0.3 }.true_mean(), 0.3);
        assert_eq!(
            Arm::Gaussian {
                mean: 1.5,
                std_dev: 0.2
            }
            .true_mean(),
            1.5
        );
    }

    #[test]
    fn bernoulli_rewards_are_binary() {
        let arm = Arm::Bernoulli { mean: 0.5 };
        let mut rng = SmallRng::seed_from_u64(SEED);
        for _ in 0..100 {
            let reward = arm.sample(&mut rng).unwrap();
            assert!(reward == 0.0 || reward == 1.0);
        }
    }

    #[test]
    fn bernoulli_empirical_mean() {
        let arm = Arm::Bernoulli { mean: 0.7 };
        let mut rng = SmallRng::seed_from_u64(SEED);
        let total: f64 = (0..10_000)
            .map(|_| arm.sample(&mut rng).unwrap())
            .sum();
        assert!((total / 10_000.0 - 0.7).abs() < 0.05);
    }

    #[test]
    fn gaussian_empirical_mean() {
        let arm = Arm::Gaussian {
            mean: 2.0,
            std_dev: 0.5,
        };
        let mut rng = SmallRng::seed_from_u64(SEED);
        let total: f64 = (0..10_000)
            .map(|_| arm.sample(&mut rng).unwrap())
            .sum();
        assert!((total / 10_000.0 - 2.0).abs() < 0.05);
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        assert!(Arm::Bernoulli { mean: 1.2 }.validate().is_err());
        assert!(Arm::Bernoulli { mean: -0.1 }.validate().is_err());
        assert!(Arm::Gaussian {
            mean: 0.0,
            std_dev: -1.0
        }
        .validate()
        .is_err());
        assert!(Arm::Bernoulli { mean: 0.5 }.validate().is_ok());
    }
}
