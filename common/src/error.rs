use thiserror::Error;

/// Failures that stop a scan before (or instead of) producing a report.
///
/// Anything that goes wrong on an individual port is folded into a
/// [`ProbeOutcome`](crate::scan::ProbeOutcome) and never shows up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Host is required")]
    EmptyHost,

    #[error("Could not resolve host")]
    Resolution { host: String },

    #[error("invalid port range '{input}': {reason}")]
    InvalidPortRange { input: String, reason: String },
}

