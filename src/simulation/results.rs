use super::errors::SimulationError;

use serde::Serialize;

/// One row of a trajectory: what happened on a single round and the running
/// totals up to and including it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundRecord {
    pub round: u64,
    pub reward: f64,
    pub cumulative_reward: f64,
    pub cumulative_regret: f64,
}

/// Append-only trajectory of a single run. Rounds must arrive as the exact
/// contiguous sequence 1..=n; `finalize` freezes the set once the run is
/// complete.
#[derive(Debug, Default, Serialize)]
pub struct ResultSet {
    records: Vec<RoundRecord>,
    #[serde(skip)]
    frozen: bool,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        round: u64,
        reward: f64,
        cumulative_reward: f64,
        cumulative_regret: f64,
    ) -> Result<(), SimulationError> {
        if self.frozen {
            return Err(SimulationError::FrozenResultSet);
        }

        let expected = self.records.last().map_or(1, |last| last.round + 1);
        if round != expected {
            return Err(SimulationError::OutOfOrderRecord {
                expected,
                got: round,
            });
        }

        self.records.push(RoundRecord {
            round,
            reward,
            cumulative_reward,
            cumulative_regret,
        });

        Ok(())
    }

    pub fn finalize(&mut self) {
        self.frozen = true;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn final_cumulative_reward(&self) -> f64 {
        self.records
            .last()
            .map_or(0.0, |last| last.cumulative_reward)
    }

    pub fn final_cumulative_regret(&self) -> f64 {
        self.records
            .last()
            .map_or(0.0, |last| last.cumulative_regret)
    }
}
