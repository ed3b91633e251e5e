use super::errors::PolicyError;
use super::policy::{check_arm_index, ArmStats, Policy, PolicyStats};
use super::rng::MaybeSeededRng;

use rand::Rng;

/// Uniform baseline: every round picks an arm uniformly at random and learns
/// nothing from the rewards.
pub struct Random {
    num_arms: usize,
    rng: MaybeSeededRng,
}

impl Random {
    pub fn new(num_arms: usize, seed: Option<u64>) -> Self {
        Self {
            num_arms,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self) -> Result<usize, PolicyError> {
        if self.num_arms == 0 {
            return Err(PolicyError::NoArmsAvailable);
        }
        Ok(self.rng.get_rng().random_range(0..self.num_arms))
    }

    fn update(&mut self, arm_index: usize, _reward: f64) -> Result<(), PolicyError> {
        check_arm_index(arm_index, self.num_arms)
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: (0..self.num_arms)
                .map(|_| ArmStats {
                    pulls: 0,
                    mean_reward: 0.0,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn select_in_range() {
        let mut policy = Random::new(4, Some(SEED));
        for _ in 0..100 {
            assert!(policy.select().unwrap() < 4);
        }
    }

    #[test]
    fn select_empty() {
        let mut policy = Random::new(0, Some(SEED));
        assert!(policy.select().is_err());
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let mut policy = Random::new(4, Some(SEED));
        let mut pulls = [0u32; 4];
        for _ in 0..4000 {
            pulls[policy.select().unwrap()] += 1;
        }

        // expect ~1000 per arm; allow generous slack
        for &count in &pulls {
            assert!((850..=1150).contains(&count), "pulls: {:?}", pulls);
        }
    }

    #[test]
    fn update_is_noop_but_checks_bounds() {
        let mut policy = Random::new(2, Some(SEED));
        assert!(policy.update(1, 1.0).is_ok());
        assert!(policy.update(2, 1.0).is_err());
    }
}
