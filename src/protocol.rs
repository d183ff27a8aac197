//! Wire format of the turn exchange.
//!
//! There is no framing: the receiver always knows from the turn state which
//! message comes next, so each one is a fixed number of bytes.
//!
//! | message | bytes | content                         |
//! |---------|-------|---------------------------------|
//! | move    | 2     | column `A`–`I`, row `1`–`9`     |
//! | result  | 1     | `0` miss, `1` hit, `2` kill     |

use core::fmt;

use crate::common::ShotResult;
use crate::coord::{Move, MoveParseError};

/// Length of an encoded move.
pub const MOVE_LEN: usize = 2;
/// Length of an encoded shot result.
pub const RESULT_LEN: usize = 1;
/// Length of the largest message.
pub const MAX_MESSAGE_LEN: usize = MOVE_LEN;

const MISS_CODE: u8 = 0;
const HIT_CODE: u8 = 1;
const KILL_CODE: u8 = 2;

impl ShotResult {
    /// One-byte wire code.
    pub const fn code(self) -> u8 {
        match self {
            ShotResult::Miss => MISS_CODE,
            ShotResult::Hit => HIT_CODE,
            ShotResult::Kill => KILL_CODE,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, ProtocolError> {
        match code {
            MISS_CODE => Ok(ShotResult::Miss),
            HIT_CODE => Ok(ShotResult::Hit),
            KILL_CODE => Ok(ShotResult::Kill),
            other => Err(ProtocolError::InvalidResultCode(other)),
        }
    }
}

/// Messages exchanged between the two peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The sender fires at this cell.
    Move(Move),
    /// Outcome of the last move the receiver sent.
    Result(ShotResult),
}

/// Which message the receiver is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Move,
    Result,
}

impl MessageKind {
    /// Exact number of bytes a message of this kind occupies on the wire.
    pub const fn wire_len(self) -> usize {
        match self {
            MessageKind::Move => MOVE_LEN,
            MessageKind::Result => RESULT_LEN,
        }
    }
}

/// Errors decoding bytes received from the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The two move bytes are not a valid cell.
    InvalidMove(MoveParseError),
    /// The result byte is not one of the known codes.
    InvalidResultCode(u8),
    /// The buffer does not have the exact size of the expected message.
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidMove(e) => write!(f, "Invalid move from peer: {}", e),
            ProtocolError::InvalidResultCode(code) => {
                write!(f, "Invalid shot result code from peer: {}", code)
            }
            ProtocolError::LengthMismatch { expected, got } => {
                write!(f, "Expected a {}-byte message, got {} bytes", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

impl From<MoveParseError> for ProtocolError {
    fn from(err: MoveParseError) -> Self {
        ProtocolError::InvalidMove(err)
    }
}

/// An encoded message, at most [`MAX_MESSAGE_LEN`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    buf: [u8; MAX_MESSAGE_LEN],
    len: usize,
}

impl Encoded {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Move(_) => MessageKind::Move,
            Message::Result(_) => MessageKind::Result,
        }
    }

    pub fn encode(&self) -> Encoded {
        let mut buf = [0u8; MAX_MESSAGE_LEN];
        let len = match self {
            Message::Move(mv) => {
                buf[..MOVE_LEN].copy_from_slice(&mv.to_bytes());
                MOVE_LEN
            }
            Message::Result(res) => {
                buf[0] = res.code();
                RESULT_LEN
            }
        };
        Encoded { buf, len }
    }

    /// Decode exactly one message of `kind` from `bytes`.
    pub fn decode(kind: MessageKind, bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() != kind.wire_len() {
            return Err(ProtocolError::LengthMismatch {
                expected: kind.wire_len(),
                got: bytes.len(),
            });
        }
        match kind {
            MessageKind::Move => Ok(Message::Move(Move::from_bytes([bytes[0], bytes[1]])?)),
            MessageKind::Result => Ok(Message::Result(ShotResult::from_code(bytes[0])?)),
        }
    }
}
