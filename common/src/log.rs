//! Logging macros layered on top of `tracing`.
//!
//! These emit regular `tracing` events so the subscriber installed by the
//! binary decides how (and whether) they are rendered.

pub use tracing;

/// Target used for events that announce a successful step.
pub const SUCCESS_TARGET: &str = "portscout::success";

/// Target used for raw, pre-formatted terminal output.
pub const PRINT_TARGET: &str = "portscout::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: "portscout::success", $($arg)*)
    };
}
