use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use portscout_common::config::ScanConfig;
use portscout_common::scan::ProbeOutcome;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::scanner::Prober;

/// Sent to every open port to coax a reply out of it.
pub const HTTP_PROBE: &[u8] = b"HEAD / HTTP/1.0\r\n\r\n";

/// Full-connect prober.
///
/// A completed handshake is all it takes for a port to count as open. The
/// banner exchange afterwards is opportunistic and never changes that verdict.
#[derive(Debug, Clone)]
pub struct TcpProber {
    connect_timeout: Duration,
    banner_timeout: Duration,
    banner_limit: usize,
    grab_banners: bool,
}

impl TcpProber {
    pub fn new(cfg: &ScanConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout,
            banner_timeout: cfg.effective_banner_timeout(),
            banner_limit: cfg.banner_limit.max(1),
            grab_banners: cfg.grab_banners,
        }
    }

    /// Sends [`HTTP_PROBE`] and reads a single reply, consuming the stream.
    async fn grab_banner(&self, mut stream: TcpStream) -> Option<String> {
        let mut buf: Vec<u8> = vec![0u8; self.banner_limit];

        let exchange = async {
            stream.write_all(HTTP_PROBE).await?;
            stream.read(&mut buf).await
        };

        let read: usize = match timeout(self.banner_timeout, exchange).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => {
                trace!("Banner exchange failed: {e}");
                return None;
            }
            Err(_elapsed) => return None,
        };

        decode_banner(&buf[..read])
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, ip: IpAddr, port: u16) -> ProbeOutcome {
        let socket_addr: SocketAddr = SocketAddr::new(ip, port);

        let stream: TcpStream = match timeout(self.connect_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                trace!("{socket_addr} closed: {e}");
                return ProbeOutcome::Closed;
            }
            Err(_elapsed) => {
                trace!("{socket_addr} timed out");
                return ProbeOutcome::Closed;
            }
        };

        debug!("{socket_addr} is open");

        let banner: Option<String> = if self.grab_banners {
            self.grab_banner(stream).await
        } else {
            None
        };

        ProbeOutcome::Open { banner }
    }
}

/// Strict UTF-8, trimmed, and non-empty; anything else is no banner at all.
pub fn decode_banner(bytes: &[u8]) -> Option<String> {
    let text: &str = std::str::from_utf8(bytes).ok()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
