//! Endpoints that misbehave at the transport level

#![allow(dead_code)]

use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::{TcpListener, TcpSocket};

/// A port that is bound but never listened on; connections are refused.
///
/// Holding the socket keeps the port reserved for the life of the test.
pub struct DeadEndpoint {
    pub addr: SocketAddr,
    _socket: TcpSocket,
}

impl DeadEndpoint {
    pub fn bind() -> Result<Self> {
        let socket = TcpSocket::new_v4()?;
        socket.bind("127.0.0.1:0".parse()?)?;
        let addr = socket.local_addr()?;
        Ok(Self {
            addr,
            _socket: socket,
        })
    }
}

/// Accepts TCP connections but never answers the WebSocket handshake
pub struct HungEndpoint {
    pub addr: SocketAddr,
    _listener: TcpListener,
}

impl HungEndpoint {
    pub async fn bind() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        Ok(Self {
            addr,
            _listener: listener,
        })
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }
}
