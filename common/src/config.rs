use std::time::Duration;

/// Per-port connect timeout used when nothing else is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
/// Upper bound on simultaneously in-flight probes.
pub const DEFAULT_CONCURRENCY: usize = 200;
/// Maximum number of bytes read from an open port as its banner.
pub const DEFAULT_BANNER_LIMIT: usize = 1024;
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Presentation settings for the command line front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the startup banner.
    pub no_banner: bool,
    /// Emit the report as JSON on stdout instead of the terminal tree.
    pub json: bool,
    /// 0 prints everything, 1 drops decorations, 2 and above prints only results.
    pub quiet: u8,
}

/// Tunables of the scanning engine.
///
/// The defaults reproduce the reference behaviour: a one second connect
/// timeout, 200 probes in flight and a 1024 byte banner.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub connect_timeout: Duration,
    /// Budget for writing the probe and reading the reply. Clamped to
    /// `connect_timeout` by [`ScanConfig::effective_banner_timeout`].
    pub banner_timeout: Duration,
    pub banner_limit: usize,
    pub concurrency: usize,
    pub grab_banners: bool,
    pub resolve_timeout: Duration,
    /// Wall-clock budget for the whole scan. Once it passes no new port is
    /// dispatched and the report is built from what was probed.
    pub deadline: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            banner_timeout: DEFAULT_CONNECT_TIMEOUT,
            banner_limit: DEFAULT_BANNER_LIMIT,
            concurrency: DEFAULT_CONCURRENCY,
            grab_banners: true,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            deadline: None,
        }
    }
}

impl ScanConfig {
    /// Pool size actually used; a zero concurrency would never make progress.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    pub fn effective_banner_timeout(&self) -> Duration {
        self.banner_timeout.min(self.connect_timeout)
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
