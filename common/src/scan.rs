//! # Scan Domain Model
//!
//! The values that flow through a single scan: the validated
//! [`ScanRequest`], the [`PortRange`] it expands to, the per-port
//! [`ProbeOutcome`] and the final [`ScanReport`].

mod range;
mod report;
mod request;

pub use range::PortRange;
pub use report::{BANNER_PLACEHOLDER, OpenPortRecord, ProbeOutcome, ScanReport, round_elapsed};
pub use request::{ResolvedTarget, ScanRequest, ScanType};
