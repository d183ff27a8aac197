//! Move sources.
//!
//! A [`Player`] supplies candidate moves for our half-turns and is told how
//! each exchange turned out:
//! - CliPlayer: reads moves typed on the console
//! - AiPlayer: probability-based targeting over the shadow board
//! - ScriptedPlayer: replays a fixed list of inputs

use crate::{board::Board, common::ShotResult, coord::Move, coord::MoveParseError};

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Produce the next candidate move in its two-character text form. The
    /// caller parses it and asks again if it is malformed, so a source may
    /// return anything; an error means the source itself is gone.
    fn next_move(&mut self, shadow: &Board) -> anyhow::Result<String>;

    /// The last candidate from [`Player::next_move`] did not parse.
    fn reject_move(&mut self, _input: &str, _err: &MoveParseError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _mv: Move, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _mv: Move, _result: ShotResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;
