use rand::rngs::SmallRng;

use crate::{ai, board::Board};

use super::Player;

/// AI player that fires where the remaining fleet most likely hides.
pub struct AiPlayer {
    rng: SmallRng,
}

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Player for AiPlayer {
    fn next_move(&mut self, shadow: &Board) -> anyhow::Result<String> {
        let mv = ai::choose_target(shadow, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("no unexplored cell left to fire at"))?;
        log::debug!("AI fires at {}", mv);
        Ok(mv.to_string())
    }
}
