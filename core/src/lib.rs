//! # Portscout Core
//!
//! The scanning engine: host resolution, the TCP connect prober, the bounded
//! probe pool and the [`ScanCoordinator`] that ties them into one report.

pub mod coordinator;
pub mod network;
pub mod scanner;

pub use coordinator::ScanCoordinator;
pub use scanner::{HostResolver, ProgressCallback, Prober, ScanControl};
