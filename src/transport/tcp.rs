use std::future::Future;
use std::net::SocketAddr;

use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::{Message, MessageKind};
use crate::transport::{read_message, write_message, Transport};

/// Transport over an established TCP connection. Without a timeout a silent
/// peer blocks the game forever.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Option<Duration>,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        if let Err(e) = stream.set_nodelay(true) {
            log::debug!("could not disable Nagle's algorithm: {}", e);
        }
        Self {
            stream,
            timeout_duration: None,
        }
    }

    /// Bound each single send or receive; `None` waits forever.
    pub fn set_timeout(&mut self, timeout_duration: Option<Duration>) {
        self.timeout_duration = timeout_duration;
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    pub fn peer_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    async fn bounded<T, F>(limit: Option<Duration>, what: &str, op: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match limit {
            Some(d) => timeout(d, op)
                .await
                .map_err(|_| anyhow::anyhow!("{} timeout after {:?}", what, d))?,
            None => op.await,
        }
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let limit = self.timeout_duration;
        Self::bounded(limit, "Send", write_message(&mut self.stream, msg)).await
    }

    async fn recv(&mut self, kind: MessageKind) -> anyhow::Result<Message> {
        let limit = self.timeout_duration;
        Self::bounded(limit, "Receive", read_message(&mut self.stream, kind)).await
    }
}
