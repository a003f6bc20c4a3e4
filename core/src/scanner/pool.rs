use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use portscout_common::scan::{PortRange, ProbeOutcome};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, error};

use crate::scanner::{ProgressCallback, Prober, ScanControl};

/// A fixed set of workers draining one port range.
///
/// Every worker pulls the next port from a shared cursor, runs the probe to
/// completion and only then takes another port, so at most `capacity` probes
/// are in flight. The pool lives for a single [`ProbePool::run`] call.
pub struct ProbePool {
    prober: Arc<dyn Prober>,
    capacity: usize,
}

/// Everything the pool observed, in completion order.
#[derive(Debug, Default)]
pub struct PoolRun {
    pub outcomes: Vec<(u16, ProbeOutcome)>,
    /// True when the pool stopped before every port of the range was probed.
    pub interrupted: bool,
}

impl ProbePool {
    pub fn new(prober: Arc<dyn Prober>, capacity: usize) -> Self {
        Self {
            prober,
            capacity: capacity.max(1),
        }
    }

    pub async fn run(
        &self,
        ip: IpAddr,
        ports: PortRange,
        control: &ScanControl,
        deadline: Option<Instant>,
        on_progress: Option<ProgressCallback>,
    ) -> PoolRun {
        let cursor = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel::<(u16, ProbeOutcome)>();
        let worker_count: usize = self.capacity.min(ports.len());
        let mut workers = JoinSet::new();

        debug!("Starting {worker_count} probe workers for {ip} ports {ports}");

        for _ in 0..worker_count {
            let prober = Arc::clone(&self.prober);
            let cursor = Arc::clone(&cursor);
            let control = control.clone();
            let tx = tx.clone();

            workers.spawn(async move {
                loop {
                    if control.is_stopped() || deadline.is_some_and(|d| Instant::now() >= d) {
                        break;
                    }
                    let Some(port) = ports.nth(cursor.fetch_add(1, Ordering::Relaxed)) else {
                        break;
                    };
                    let outcome = prober.probe(ip, port).await;
                    if tx.send((port, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let mut outcomes: Vec<(u16, ProbeOutcome)> = Vec::with_capacity(ports.len());
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
            if let Some(callback) = &on_progress {
                callback(outcomes.len());
            }
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("Probe worker for {ip} ended abnormally: {e}");
            }
        }

        let interrupted = outcomes.len() < ports.len();
        if interrupted {
            debug!("Pool for {ip} stopped after {} of {} ports", outcomes.len(), ports.len());
        }

        PoolRun {
            outcomes,
            interrupted,
        }
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
