//! # Portscout Common
//!
//! Types shared by every crate in the workspace: the scan domain model, the
//! wire bodies exchanged with outer adapters, the error taxonomy, runtime
//! configuration and the well-known service table.

pub mod config;
pub mod error;
pub mod log;
pub mod scan;
pub mod services;
pub mod wire;
