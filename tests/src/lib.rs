//! Loopback fixtures shared by the integration tests.

use std::net::Ipv4Addr;
use std::time::Duration;

use portscout_common::scan::PortRange;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const HTTP_REPLY: &[u8] = b"HTTP/1.0 200 OK\r\nServer: portscout-fixture\r\nContent-Length: 0\r\n\r\n";

/// How long fixture servers keep an accepted connection open.
const HOLD_OPEN: Duration = Duration::from_secs(5);

/// Three consecutive loopback ports: nothing listens on the first, the second
/// accepts and stays silent, the third answers like an HTTP server.
pub struct LoopbackTarget {
    pub closed: u16,
    pub silent: u16,
    pub http: u16,
    servers: Vec<JoinHandle<()>>,
}

impl LoopbackTarget {
    pub async fn start() -> anyhow::Result<Self> {
        for _ in 0..64 {
            let probe = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
            let closed = probe.local_addr()?.port();
            if closed > u16::MAX - 2 {
                continue;
            }

            let Ok(silent_listener) = TcpListener::bind((Ipv4Addr::LOCALHOST, closed + 1)).await else {
                continue;
            };
            let Ok(http_listener) = TcpListener::bind((Ipv4Addr::LOCALHOST, closed + 2)).await else {
                continue;
            };
            drop(probe);

            let servers = vec![
                tokio::spawn(serve_silent(silent_listener)),
                tokio::spawn(serve_http(http_listener)),
            ];

            return Ok(Self {
                closed,
                silent: closed + 1,
                http: closed + 2,
                servers,
            });
        }
        anyhow::bail!("could not reserve three consecutive loopback ports")
    }

    pub fn range(&self) -> PortRange {
        PortRange::new(self.closed, self.http).expect("fixture ports are ascending")
    }
}

impl Drop for LoopbackTarget {
    fn drop(&mut self) {
        for server in &self.servers {
            server.abort();
        }
    }
}

async fn serve_silent(listener: TcpListener) {
    while let Ok((socket, _)) = listener.accept().await {
        tokio::spawn(async move {
            tokio::time::sleep(HOLD_OPEN).await;
            drop(socket);
        });
    }
}

async fn serve_http(listener: TcpListener) {
    while let Ok((mut socket, _)) = listener.accept().await {
        tokio::spawn(async move {
            let mut request = [0u8; 256];
            if socket.read(&mut request).await.is_ok() {
                let _ = socket.write_all(HTTP_REPLY).await;
            }
            tokio::time::sleep(HOLD_OPEN).await;
        });
    }
}
