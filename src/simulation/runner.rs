use super::errors::SimulationError;
use super::results::ResultSet;
use crate::environment::Environment;
use crate::policies::Policy;

use tracing::debug;

/// Drives one policy against the environment for exactly `num_rounds` rounds,
/// recording the realized reward and cumulative pseudo-regret each round.
///
/// Pseudo-regret compares the optimal arm's true mean with the chosen arm's
/// true mean, so it measures the quality of the decision rather than the luck
/// of the draw.
pub fn run(
    policy: &mut dyn Policy,
    environment: &mut Environment,
    num_rounds: u64,
) -> Result<ResultSet, SimulationError> {
    if num_rounds == 0 {
        return Err(SimulationError::InvalidConfiguration(
            "num_rounds must be positive".to_string(),
        ));
    }

    let mut results = ResultSet::new();
    let mut cumulative_reward = 0.0;
    let mut cumulative_regret = 0.0;

    for round in 1..=num_rounds {
        let arm_index = policy
            .select()
            .map_err(|source| SimulationError::Policy { round, source })?;
        let reward = environment
            .sample(arm_index)
            .map_err(|source| SimulationError::Environment { round, source })?;
        policy
            .update(arm_index, reward)
            .map_err(|source| SimulationError::Policy { round, source })?;

        let regret = environment.optimal_mean()
            - environment
                .true_mean(arm_index)
                .map_err(|source| SimulationError::Environment { round, source })?;

        cumulative_reward += reward;
        cumulative_regret += regret;
        results.record(round, reward, cumulative_reward, cumulative_regret)?;

        debug!(
            round,
            arm_index, reward, cumulative_reward, cumulative_regret, "round complete"
        );
    }

    results.finalize();
    Ok(results)
}
