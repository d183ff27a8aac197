//! Byte-stream transports carrying the fixed-size turn messages.
//!
//! Every operation transfers exactly one whole message or fails: partial
//! reads and writes are completed by `read_exact`/`write_all`, and an early
//! end of stream is reported as a closed connection.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::{Message, MessageKind, MAX_MESSAGE_LEN};

#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    /// Wait for the next message, which the turn state says is of `kind`.
    async fn recv(&mut self, kind: MessageKind) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;

/// Write all bytes of `msg` and flush them.
pub(crate) async fn write_message<W>(writer: &mut W, msg: Message) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin + Send,
{
    let encoded = msg.encode();
    writer.write_all(encoded.as_bytes()).await.map_err(write_error)?;
    writer.flush().await.map_err(write_error)?;
    log::trace!("sent {:?} as {:?}", msg, encoded.as_bytes());
    Ok(())
}

/// Read exactly one message of `kind`.
pub(crate) async fn read_message<R>(reader: &mut R, kind: MessageKind) -> anyhow::Result<Message>
where
    R: AsyncRead + Unpin + Send,
{
    let mut buf = [0u8; MAX_MESSAGE_LEN];
    let bytes = &mut buf[..kind.wire_len()];
    reader.read_exact(bytes).await.map_err(read_error)?;
    log::trace!("received {:?} bytes {:?}", kind, bytes);
    let msg = Message::decode(kind, bytes)?;
    Ok(msg)
}

fn read_error(e: io::Error) -> anyhow::Error {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => anyhow::anyhow!("Connection closed by peer"),
        io::ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("Read error: {}", e),
    }
}

fn write_error(e: io::Error) -> anyhow::Error {
    match e.kind() {
        io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionReset => {
            anyhow::anyhow!("Connection closed by peer")
        }
        _ => anyhow::anyhow!("Write error: {}", e),
    }
}
