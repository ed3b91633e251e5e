mod arm;
mod errors;

pub use arm::Arm;
pub use errors::EnvironmentError;

use crate::policies::MaybeSeededRng;

/// The bandit: a fixed, ordered set of arms (index = arm id) with its own
/// random source. Arms never change after construction, so the optimal mean
/// is computed once and cached.
#[derive(Debug)]
pub struct Environment {
    arms: Vec<Arm>,
    optimal_mean: f64,
    rng: MaybeSeededRng,
}

impl Environment {
    pub fn new(arms: Vec<Arm>, seed: Option<u64>) -> Result<Self, EnvironmentError> {
        if arms.is_empty() {
            return Err(EnvironmentError::InvalidConfiguration(
                "environment needs at least one arm".to_string(),
            ));
        }
        for arm in &arms {
            arm.validate()?;
        }

        let optimal_mean = arms
            .iter()
            .map(Arm::true_mean)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            arms,
            optimal_mean,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn num_arms(&self) -> usize {
        self.arms.len()
    }

    pub fn optimal_mean(&self) -> f64 {
        self.optimal_mean
    }

    pub fn true_mean(&self, arm_index: usize) -> Result<f64, EnvironmentError> {
        self.arm(arm_index).map(Arm::true_mean)
    }

    /// Draws one stochastic reward from the named arm.
    pub fn sample(&mut self, arm_index: usize) -> Result<f64, EnvironmentError> {
        let arm = self
            .arms
            .get(arm_index)
            .ok_or(EnvironmentError::InvalidArmIndex {
                index: arm_index,
                num_arms: self.arms.len(),
            })?;
        arm.sample(self.rng.get_rng())
    }

    fn arm(&self, arm_index: usize) -> Result<&Arm, EnvironmentError> {
        self.arms.get(arm_index).ok_or(EnvironmentError::InvalidArmIndex {
            index: arm_index,
            num_arms: self.arms.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    fn two_arms() -> Vec<Arm> {
        vec![Arm::Bernoulli { mean: 0.3 }, Arm::Bernoulli { mean: 0.7 }]
    }

    #[test]
    fn empty_arm_set_is_rejected() {
        assert!(Environment::new(vec![], Some(SEED)).is_err());
    }

    #[test]
    fn invalid_arm_parameters_are_rejected() {
        let arms = vec![Arm::Bernoulli { mean: 1.5 }];
        assert!(Environment::new(arms, Some(SEED)).is_err());
    }

    #[test]
    fn optimal_mean_is_the_best_arm() {
        let env = Environment::new(two_arms(), Some(SEED)).unwrap();
        assert_eq!(env.optimal_mean(), 0.7);
    }

    #[test]
    fn sample_out_of_range() {
        let mut env = Environment::new(two_arms(), Some(SEED)).unwrap();
        assert!(env.sample(2).is_err());
    }

    #[test]
    fn true_mean_by_index() {
        let env = Environment::new(two_arms(), Some(SEED)).unwrap();
        assert_eq!(env.true_mean(0).unwrap(), 0.3);
        assert_eq!(env.true_mean(1).unwrap(), 0.7);
        assert!(env.true_mean(2).is_err());
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let mut first = Environment::new(two_arms(), Some(SEED)).unwrap();
        let mut second = Environment::new(two_arms(), Some(SEED)).unwrap();

        for _ in 0..50 {
            assert_eq!(first.sample(1).unwrap(), second.sample(1).unwrap());
        }
    }
}
