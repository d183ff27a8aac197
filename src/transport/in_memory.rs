use tokio::io::{duplex, DuplexStream};

use crate::protocol::{Message, MessageKind};
use crate::transport::{read_message, write_message, Transport};

/// Buffer size of each direction of the in-memory pipe.
const PIPE_CAPACITY: usize = 64;

/// Transport over an in-process byte pipe. It carries exactly the bytes a
/// socket would, which lets two peers play a full game inside one runtime.
pub struct InMemoryTransport {
    stream: DuplexStream,
}

impl InMemoryTransport {
    /// Wrap one end of a pipe created with `tokio::io::duplex`.
    pub fn new(stream: DuplexStream) -> Self {
        Self { stream }
    }

    /// Two transports connected to each other.
    pub fn pair() -> (Self, Self) {
        let (a, b) = duplex(PIPE_CAPACITY);
        (Self::new(a), Self::new(b))
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        write_message(&mut self.stream, msg).await
    }

    async fn recv(&mut self, kind: MessageKind) -> anyhow::Result<Message> {
        read_message(&mut self.stream, kind).await
    }
}
