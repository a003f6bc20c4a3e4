use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scan::ScanType;

/// Banner value reported for open ports that did not answer the probe.
pub const BANNER_PLACEHOLDER: &str = "-";

/// What a single probe learned about a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The handshake completed. `banner` holds the reply to the probe, if a
    /// readable one arrived in time.
    Open { banner: Option<String> },
    /// Refused, filtered or timed out. These are not told apart.
    Closed,
}

impl ProbeOutcome {
    pub fn is_open(&self) -> bool {
        matches!(self, ProbeOutcome::Open { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPortRecord {
    pub port: u16,
    pub service: String,
    pub banner: String,
}

impl OpenPortRecord {
    pub fn new(port: u16, service: &str, banner: Option<String>) -> Self {
        Self {
            port,
            service: service.to_string(),
            banner: banner.unwrap_or_else(|| BANNER_PLACEHOLDER.to_string()),
        }
    }

    pub fn has_banner(&self) -> bool {
        self.banner != BANNER_PLACEHOLDER
    }
}

/// Final result of one scan, serialised as-is on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub ip: IpAddr,
    pub host: String,
    pub scan_type: ScanType,
    /// Wall-clock seconds, rounded to two decimals.
    pub elapsed_time: f64,
    /// Strictly ascending by port.
    pub open_ports: Vec<OpenPortRecord>,
    pub total_ports_scanned: usize,
    pub open_ports_count: usize,
    /// Set when the scan was stopped before every port was probed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub interrupted: bool,
}

impl ScanReport {
    /// Builds a report, sorting `open_ports` and deriving the count from it.
    pub fn new(
        ip: IpAddr,
        host: String,
        scan_type: ScanType,
        elapsed: Duration,
        mut open_ports: Vec<OpenPortRecord>,
        total_ports_scanned: usize,
        interrupted: bool,
    ) -> Self {
        open_ports.sort_by_key(|record| record.port);
        open_ports.dedup_by_key(|record| record.port);
        Self {
            ip,
            host,
            scan_type,
            elapsed_time: round_elapsed(elapsed),
            open_ports_count: open_ports.len(),
            open_ports,
            total_ports_scanned,
            interrupted,
        }
    }

    pub fn open_port_numbers(&self) -> Vec<u16> {
        self.open_ports.iter().map(|record| record.port).collect()
    }
}

/// Seconds rounded to two decimal places.
pub fn round_elapsed(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
