use anyhow::{anyhow, Result};
use games_planestrike::Observation;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Trait for strike selection
pub trait Policy: Send {
    /// Select a flattened cell index given the current observation
    fn select_action(&mut self, observation: &Observation) -> Result<u32>;
}

/// Random policy that strikes cells uniformly at random
pub struct RandomPolicy {
    rng: ChaCha20Rng,
    avoid_repeats: bool,
}

impl RandomPolicy {
    pub fn new(avoid_repeats: bool) -> Self {
        Self { rng: ChaCha20Rng::from_entropy(), avoid_repeats }
    }

    pub fn with_seed(avoid_repeats: bool, seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed), avoid_repeats }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, observation: &Observation) -> Result<u32> {
        let cells = observation.as_slice();
        if cells.is_empty() {
            return Err(anyhow!("Observation has no cells to strike"));
        }

        if !self.avoid_repeats {
            return Ok(self.rng.gen_range(0..cells.len()) as u32);
        }

        // Untried cells are encoded as 0.0
        let untried: Vec<u32> = cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0.0)
            .map(|(i, _)| i as u32)
            .collect();

        untried
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("No untried cells left to strike"))
    }
}
