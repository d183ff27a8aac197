use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::{board::Board, common::ShotResult, coord::Move, coord::MoveParseError};

use super::Player;

/// Interactive player. Input is split on whitespace, so several moves may
/// be typed on one line and are used one per turn.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    pending: VecDeque<String>,
}

impl CliPlayer {
    /// Read from stdin and talk on stdout.
    pub fn new() -> Self {
        Self::with_io(io::BufReader::new(io::stdin()), io::stdout())
    }

    pub fn with_io<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            pending: VecDeque::new(),
        }
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            log::debug!("console write failed: {}", e);
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn next_move(&mut self, _shadow: &Board) -> anyhow::Result<String> {
        write!(self.output, "Your turn (e.g. B7): ")?;
        self.output.flush()?;
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed while waiting for a move"));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("input closed while waiting for a move"))
    }

    fn reject_move(&mut self, input: &str, err: &MoveParseError) {
        self.say(format_args!("✗ Invalid move '{}': {}", input, err));
    }

    fn handle_shot_result(&mut self, mv: Move, result: ShotResult) {
        match result {
            ShotResult::Miss => self.say(format_args!("💧 Miss at {}.", mv)),
            ShotResult::Hit => self.say(format_args!("🎯 Hit at {}!", mv)),
            ShotResult::Kill => self.say(format_args!("💥 Ship sunk at {}!", mv)),
        }
    }

    fn handle_opponent_shot(&mut self, mv: Move, result: ShotResult) {
        match result {
            ShotResult::Miss => self.say(format_args!("✓ Enemy missed at {}.", mv)),
            ShotResult::Hit => self.say(format_args!("⚠️  Enemy hit your ship at {}!", mv)),
            ShotResult::Kill => self.say(format_args!("💀 Enemy sank your ship at {}!", mv)),
        }
    }
}
