//! The turn loop: one player, its game state and the connection to the peer.

use std::io::{self, Write};

use crate::{
    coord::Move,
    game::{GameEngine, GameStatus, Role, TurnState},
    player::Player,
    protocol::{Message, MessageKind},
    render::render_pair,
    transport::Transport,
};

pub struct PlayerNode {
    player: Box<dyn Player>,
    engine: GameEngine,
    transport: Box<dyn Transport>,
    view: Box<dyn Write + Send>,
    state: TurnState,
    shots_fired: usize,
    shots_received: usize,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, engine: GameEngine, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            engine,
            transport,
            view: Box::new(io::sink()),
            state: TurnState::MyTurn,
            shots_fired: 0,
            shots_received: 0,
        }
    }

    /// Draw both boards to `view` before every half-turn and once at the end.
    pub fn with_view<W: Write + Send + 'static>(mut self, view: W) -> Self {
        self.view = Box::new(view);
        self
    }

    /// Play until either fleet is sunk. Each half-turn is exactly one
    /// exchange on the transport, so both peers stop after the same one.
    /// Any transport or protocol error ends the game.
    pub async fn run(&mut self, role: Role) -> anyhow::Result<GameStatus> {
        self.state = role.initial_turn();
        log::info!("game started as {:?}, first half-turn: {:?}", role, self.state);

        while !self.engine.is_over() {
            self.draw()?;
            match self.state {
                TurnState::MyTurn => self.make_turn().await?,
                TurnState::OpponentTurn => self.wait_for_turn().await?,
            }
            self.state = self.state.next();
        }

        self.draw()?;
        let status = self.engine.status();
        log::info!(
            "game over: {:?} after {} shots fired and {} received",
            status,
            self.shots_fired,
            self.shots_received
        );
        Ok(status)
    }

    /// Our half-turn: fire at a move from the player and record the result.
    async fn make_turn(&mut self) -> anyhow::Result<()> {
        let mv = self.read_move()?;
        self.transport.send(Message::Move(mv)).await?;
        let result = match self.transport.recv(MessageKind::Result).await? {
            Message::Result(result) => result,
            other => return Err(anyhow::anyhow!("Expected a shot result, got {:?}", other)),
        };
        log::debug!("fired at {}: {:?}", mv, result);
        self.engine.record_shot(mv, result);
        self.player.handle_shot_result(mv, result);
        self.shots_fired += 1;
        Ok(())
    }

    /// The opponent's half-turn: resolve its move and report the result.
    async fn wait_for_turn(&mut self) -> anyhow::Result<()> {
        writeln!(self.view, "Waiting for turn...")?;
        self.view.flush()?;
        let mv = match self.transport.recv(MessageKind::Move).await? {
            Message::Move(mv) => mv,
            other => return Err(anyhow::anyhow!("Expected a move, got {:?}", other)),
        };
        let result = self.engine.opponent_shot(mv);
        log::debug!("opponent fired at {}: {:?}", mv, result);
        self.transport.send(Message::Result(result)).await?;
        self.player.handle_opponent_shot(mv, result);
        self.shots_received += 1;
        Ok(())
    }

    /// Ask the player until it produces a well-formed move. Malformed input
    /// never reaches the wire.
    fn read_move(&mut self) -> anyhow::Result<Move> {
        loop {
            let raw = self.player.next_move(self.engine.shadow())?;
            match raw.parse::<Move>() {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    log::debug!("rejected move input {:?}: {}", raw, e);
                    self.player.reject_move(&raw, &e);
                }
            }
        }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let mut text = String::new();
        render_pair(self.engine.board(), self.engine.shadow(), &mut text)?;
        self.view.write_all(text.as_bytes())?;
        self.view.flush()?;
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Whose half-turn would come next.
    pub fn turn(&self) -> TurnState {
        self.state
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn shots_received(&self) -> usize {
        self.shots_received
    }
}
