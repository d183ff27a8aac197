use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::{board::Board, common::ShotResult, coord::Move, coord::MoveParseError};

use super::Player;

/// What happened to the inputs of a [`ScriptedPlayer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Inputs that failed to parse, in order.
    pub rejected: Vec<String>,
    /// Results reported for the moves that were sent.
    pub results: Vec<(Move, ShotResult)>,
}

/// Replays a fixed sequence of inputs, malformed ones included. Running out
/// of inputs ends the game with an error, like a closed console.
pub struct ScriptedPlayer {
    inputs: VecDeque<String>,
    transcript: Arc<Mutex<Transcript>>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Arc::new(Mutex::new(Transcript::default())),
        }
    }

    /// Shared handle to the transcript; stays readable after the player has
    /// been handed to a `PlayerNode`.
    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        Arc::clone(&self.transcript)
    }

    fn record(&self, f: impl FnOnce(&mut Transcript)) {
        if let Ok(mut transcript) = self.transcript.lock() {
            f(&mut transcript);
        }
    }
}

impl Player for ScriptedPlayer {
    fn next_move(&mut self, _shadow: &Board) -> anyhow::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted moves exhausted"))
    }

    fn reject_move(&mut self, input: &str, _err: &MoveParseError) {
        self.record(|t| t.rejected.push(input.to_string()));
    }

    fn handle_shot_result(&mut self, mv: Move, result: ShotResult) {
        self.record(|t| t.results.push((mv, result)));
    }
}
