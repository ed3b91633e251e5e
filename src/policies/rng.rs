use rand::{rngs::SmallRng, SeedableRng};

/// Small RNG that remembers whether it was explicitly seeded, so a run can be
/// reproduced exactly when a seed is configured.
#[derive(Debug, Clone)]
pub struct MaybeSeededRng {
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
