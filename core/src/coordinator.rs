//! # Scan Coordinator
//!
//! Implements the core "Port Scan" use case.
//!
//! One call to [`ScanCoordinator::scan`] resolves the host, drains the
//! request's port range through a [`ProbePool`], names the services on the
//! open ports and hands back a sorted [`ScanReport`].

use std::sync::Arc;

use portscout_common::config::ScanConfig;
use portscout_common::error::ScanError;
use portscout_common::scan::{OpenPortRecord, PortRange, ProbeOutcome, ResolvedTarget, ScanReport, ScanRequest};
use portscout_common::services;
use tokio::time::Instant;
use tracing::info;

use crate::network::tcp::TcpProber;
use crate::scanner::resolver::DnsResolver;
use crate::scanner::{HostResolver, PoolRun, ProbePool, Prober, ProgressCallback, ScanControl};

/// Application Service for port scans.
///
/// Orchestrates a scan by:
/// 1. delegating name resolution to the [`HostResolver`] trait.
/// 2. fanning probes out through a per-scan [`ProbePool`].
/// 3. enriching open ports with their well-known service names.
pub struct ScanCoordinator {
    resolver: Box<dyn HostResolver>,
    prober: Arc<dyn Prober>,
    config: ScanConfig,
}

impl ScanCoordinator {
    /// Coordinator backed by the system resolver and real TCP connects.
    pub fn new(config: ScanConfig) -> Self {
        let resolver = Box::new(DnsResolver::new(config.resolve_timeout));
        let prober = Arc::new(TcpProber::new(&config));
        Self::with_parts(resolver, prober, config)
    }

    pub fn with_parts(
        resolver: Box<dyn HostResolver>,
        prober: Arc<dyn Prober>,
        config: ScanConfig,
    ) -> Self {
        Self {
            resolver,
            prober,
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Runs `request` to completion.
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        self.scan_with(request, &ScanControl::new(), None).await
    }

    /// Runs `request`, stopping early if `control` is stopped or the
    /// configured deadline passes. `on_progress` sees the number of probed ports.
    ///
    /// Only resolution can fail; once probing starts a report is always built.
    pub async fn scan_with(
        &self,
        request: &ScanRequest,
        control: &ScanControl,
        on_progress: Option<ProgressCallback>,
    ) -> Result<ScanReport, ScanError> {
        let target: ResolvedTarget = self.resolver.resolve(request.host()).await?;
        let ports: PortRange = request.port_range();

        info!(
            "Scanning {} ({}) ports {} with {} probes in flight",
            target.original_host,
            target.ip,
            ports,
            self.config.effective_concurrency().min(ports.len())
        );

        let start_time: Instant = Instant::now();
        let deadline: Option<Instant> = self.config.deadline.map(|budget| start_time + budget);

        let pool = ProbePool::new(Arc::clone(&self.prober), self.config.effective_concurrency());
        let run: PoolRun = pool.run(target.ip, ports, control, deadline, on_progress).await;

        let total_ports_scanned: usize = run.outcomes.len();
        let open_ports: Vec<OpenPortRecord> = run
            .outcomes
            .into_iter()
            .filter_map(|(port, outcome)| match outcome {
                ProbeOutcome::Open { banner } => {
                    Some(OpenPortRecord::new(port, services::service_name(port), banner))
                }
                ProbeOutcome::Closed => None,
            })
            .collect();

        let report = ScanReport::new(
            target.ip,
            target.original_host,
            request.scan_type().clone(),
            start_time.elapsed(),
            open_ports,
            total_ports_scanned,
            run.interrupted,
        );

        info!(
            "Scan of {} finished in {:.2}s: {} open of {} probed",
            report.ip, report.elapsed_time, report.open_ports_count, report.total_ports_scanned
        );

        Ok(report)
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
