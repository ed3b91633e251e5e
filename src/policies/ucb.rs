use super::errors::PolicyError;
use super::policy::{argmax, check_arm_index, ArmStats, Policy, PolicyStats};

/// UCB1: after pulling every arm once, select the arm maximizing the running
/// mean plus a confidence bonus `sqrt(2 ln t / n)` that shrinks with
/// observations of the arm and grows with the round number.
pub struct Ucb {
    counts: Vec<u64>,
    estimates: Vec<f64>,
}

impl Ucb {
    pub fn new(num_arms: usize) -> Self {
        Self {
            counts: vec![0; num_arms],
            estimates: vec![0.0; num_arms],
        }
    }

    /// Confidence bonus for an arm pulled `count` times at round `t`
    /// (1-indexed).
    fn confidence(t: u64, count: u64) -> f64 {
        (2.0 * (t as f64).ln() / (count as f64)).sqrt()
    }
}

impl Policy for Ucb {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn select(&mut self) -> Result<usize, PolicyError> {
        if self.counts.is_empty() {
            return Err(PolicyError::NoArmsAvailable);
        }

        // pull each arm once before trusting any estimate
        if let Some(unpulled) = self.counts.iter().position(|&count| count == 0) {
            return Ok(unpulled);
        }

        // one update per round so far, hence the current round index
        let t = self.counts.iter().sum::<u64>() + 1;
        let scores = self
            .counts
            .iter()
            .zip(&self.estimates)
            .map(|(&count, &estimate)| estimate + Self::confidence(t, count))
            .collect::<Vec<f64>>();

        argmax(&scores)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_exploration_visits_arms_in_order() {
        let mut policy = Ucb::new(4);
        for expected in 0..4 {
            let arm = policy.select().unwrap();
            assert_eq!(arm, expected);
            policy.update(arm, 0.0).unwrap();
        }
    }

    #[test]
    fn confidence_decreases_with_count() {
        assert!(Ucb::confidence(100, 1) > Ucb::confidence(100, 2));
        assert!(Ucb::confidence(100, 2) > Ucb::confidence(100, 50));
    }

    #[test]
    fn confidence_increases_with_round() {
        assert!(Ucb::confidence(100, 5) < Ucb::confidence(200, 5));
        assert!(Ucb::confidence(200, 5) < Ucb::confidence(10_000, 5));
    }

    #[test]
    fn confidence_non_negative() {
        for t in [1, 2, 10, 1000] {
            for count in [1, 2, 100] {
                assert!(Ucb::confidence(t, count) >= 0.0);
            }
        }
    }

    #[test]
    fn prefers_better_estimate_once_bonuses_even_out() {
        let mut policy = Ucb::new(2);
        // equal pull counts, different means
        for _ in 0..10 {
            policy.update(0, 0.0).unwrap();
            policy.update(1, 1.0).unwrap();
        }
        assert_eq!(policy.select().unwrap(), 1);
    }

    #[test]
    fn update_invalid_arm() {
        let mut policy = Ucb::new(2);
        assert!(policy.update(5, 1.0).is_err());
    }
}
