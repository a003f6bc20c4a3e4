//! The central **abstraction** for port scanning operations.
//!
//! This module defines the seams the [`ScanCoordinator`](crate::ScanCoordinator)
//! depends on: a [`HostResolver`] that turns user input into an address and a
//! [`Prober`] that decides whether a single port is open. Concrete strategies
//! live elsewhere ([`resolver::DnsResolver`], [`crate::network::tcp::TcpProber`]).
//!
//! **Architectural Note:**
//! The coordinator and the [`ProbePool`] only ever talk to these traits. Tests
//! swap in in-memory implementations to drive thousands of probes without
//! touching the network.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use portscout_common::error::ScanError;
use portscout_common::scan::{ProbeOutcome, ResolvedTarget};

mod pool;
pub mod resolver;

pub use pool::{PoolRun, ProbePool};

/// Receives the number of ports probed so far.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Decides the state of one `(ip, port)` pair.
///
/// Implementations must not fail: every network error is folded into
/// [`ProbeOutcome::Closed`] or an open port without banner. This is what keeps
/// a single bad port from aborting the scan.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, ip: IpAddr, port: u16) -> ProbeOutcome;
}

/// Turns a host string into the single address that will be scanned.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> Result<ResolvedTarget, ScanError>;
}

/// Shared stop switch for a running scan.
///
/// Cloning hands out another handle to the same switch. Once stopped, no new
/// port is dispatched; probes already in flight run to completion.
#[derive(Debug, Clone, Default)]
pub struct ScanControl {
    stopped: Arc<AtomicBool>,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}
