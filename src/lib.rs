#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod player_node;
pub mod protocol;
mod render;
mod ship;
#[cfg(feature = "std")]
pub mod transport;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_node::*;
pub use protocol::*;
pub use render::render_pair;
pub use ship::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
