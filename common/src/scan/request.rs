use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::scan::PortRange;

/// Scan profile chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScanType {
    /// Well-known ports, 1 through 1024.
    #[default]
    Basic,
    /// The full port space, 1 through 65535.
    Aggressive,
    /// Any label we do not recognise. Scans like [`ScanType::Basic`] but keeps
    /// the label so it can be echoed back to the caller.
    Fallback(String),
}

impl ScanType {
    /// Normalises a user supplied label (trimmed, case-insensitive).
    ///
    /// Unknown labels are never an error: they fall back to the basic range.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        match lower.as_str() {
            "" | "basic" => ScanType::Basic,
            "aggressive" => ScanType::Aggressive,
            _ => ScanType::Fallback(lower),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ScanType::Basic => "basic",
            ScanType::Aggressive => "aggressive",
            ScanType::Fallback(label) => label,
        }
    }

    pub fn port_range(&self) -> PortRange {
        match self {
            ScanType::Aggressive => PortRange::FULL,
            ScanType::Basic | ScanType::Fallback(_) => PortRange::BASIC,
        }
    }
}

impl FromStr for ScanType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ScanType::from_label(s))
    }
}

impl From<String> for ScanType {
    fn from(label: String) -> Self {
        ScanType::from_label(&label)
    }
}

impl From<ScanType> for String {
    fn from(scan_type: ScanType) -> Self {
        scan_type.label().to_string()
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated request to scan one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    host: String,
    scan_type: ScanType,
    ports: Option<PortRange>,
}

impl ScanRequest {
    /// Trims `host` and rejects it when nothing is left.
    pub fn new(host: &str, scan_type: ScanType) -> Result<Self, ScanError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ScanError::EmptyHost);
        }
        Ok(Self {
            host: host.to_string(),
            scan_type,
            ports: None,
        })
    }

    /// Scans `ports` instead of the range implied by the scan type.
    pub fn with_ports(mut self, ports: PortRange) -> Self {
        self.ports = Some(ports);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scan_type(&self) -> &ScanType {
        &self.scan_type
    }

    pub fn port_range(&self) -> PortRange {
        self.ports.unwrap_or_else(|| self.scan_type.port_range())
    }
}

/// The host as the user typed it, paired with the address it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub original_host: String,
    pub ip: IpAddr,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_type_labels() {
        assert_eq!(ScanType::from_label("basic"), ScanType::Basic);
        assert_eq!(ScanType::from_label("  AGGRESSIVE "), ScanType::Aggressive);
        assert_eq!(ScanType::from_label(""), ScanType::Basic);
        assert_eq!(
            ScanType::from_label("Stealthy"),
            ScanType::Fallback("stealthy".to_string())
        );
        assert_eq!(ScanType::from_label("Stealthy").label(), "stealthy");
    }

    #[test]
    fn test_range_sizes_per_scan_type() {
        assert_eq!(ScanType::Basic.port_range().len(), 1024);
        assert_eq!(ScanType::Aggressive.port_range().len(), 65535);
        assert_eq!(ScanType::from_label("whatever").port_range().len(), 1024);
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(
            ScanRequest::new("   ", ScanType::Basic),
            Err(ScanError::EmptyHost)
        );
        assert_eq!(ScanRequest::new("", ScanType::Basic), Err(ScanError::EmptyHost));

        let request = ScanRequest::new("  example.com\n", ScanType::Aggressive).unwrap();
        assert_eq!(request.host(), "example.com");
        assert_eq!(request.port_range(), PortRange::FULL);
    }

    #[test]
    fn test_port_override_keeps_scan_type() {
        let ports = PortRange::new(7000, 7002).unwrap();
        let request = ScanRequest::new("127.0.0.1", ScanType::Aggressive)
            .unwrap()
            .with_ports(ports);
        assert_eq!(request.port_range().len(), 3);
        assert_eq!(request.scan_type(), &ScanType::Aggressive);
    }
}
