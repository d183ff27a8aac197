use crate::{
    board::Board,
    common::ShotResult,
    coord::Move,
};

/// Which side of the connection a peer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Listens for the connection and lets the other side shoot first.
    Server,
    /// Connects to the server and shoots first.
    Client,
}

impl Role {
    /// The side that connects holds the initiative, which settles who moves
    /// first without any handshake.
    pub fn initial_turn(self) -> TurnState {
        match self {
            Role::Server => TurnState::OpponentTurn,
            Role::Client => TurnState::MyTurn,
        }
    }
}

/// Whose half-turn comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    /// We pick a move, send it and wait for its result.
    MyTurn,
    /// We wait for a move, resolve it and send back the result.
    OpponentTurn,
}

impl TurnState {
    /// Turns strictly alternate after every half-turn, whatever the result.
    pub fn next(self) -> Self {
        match self {
            TurnState::MyTurn => TurnState::OpponentTurn,
            TurnState::OpponentTurn => TurnState::MyTurn,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic holding the player's own board and the shadow board
/// reconstructed from the results of our shots.
pub struct GameEngine {
    board: Board,
    shadow: Board,
}

impl GameEngine {
    /// Start a game defending `board` against an opponent we know nothing about.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            shadow: Board::shadow(),
        }
    }

    /// Start a game with a random fleet derived from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Board::from_seed(seed))
    }

    /// Our own, authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// What we know about the opponent's board.
    pub fn shadow(&self) -> &Board {
        &self.shadow
    }

    /// Handle an opponent shot on the player's board.
    pub fn opponent_shot(&mut self, mv: Move) -> ShotResult {
        self.board.shoot(mv)
    }

    /// Record the result the opponent reported for our shot.
    pub fn record_shot(&mut self, mv: Move, result: ShotResult) {
        self.shadow.apply(mv, result);
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.is_loser() {
            GameStatus::Lost
        } else if self.shadow.is_loser() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}
