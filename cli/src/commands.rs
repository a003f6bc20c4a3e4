pub mod scan;
pub mod service;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use portscout_common::config::{
    Config, DEFAULT_BANNER_LIMIT, DEFAULT_CONCURRENCY, DEFAULT_RESOLVE_TIMEOUT, ScanConfig,
};
use portscout_common::scan::PortRange;

#[derive(Parser)]
#[command(name = "portscout")]
#[command(version, about = "A full-connect TCP port scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Reduce output; repeat for less
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Hide the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the TCP ports of a host
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Look up the well-known service name of one or more ports
    #[command(alias = "n")]
    Service {
        #[arg(required = true)]
        ports: Vec<u16>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Hostname or IP address to scan
    pub target: String,

    /// Scan profile: "basic" (1-1024) or "aggressive" (1-65535)
    #[arg(short = 't', long = "type", default_value = "basic")]
    pub scan_type: String,

    /// Explicit port range such as "22" or "7000-7002"; overrides the profile's range
    #[arg(short, long)]
    pub ports: Option<PortRange>,

    /// Connect timeout per port, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Time allowed for the banner exchange, in milliseconds (capped at the connect timeout)
    #[arg(long, default_value_t = 1000)]
    pub banner_timeout_ms: u64,

    /// Maximum number of probes in flight
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Do not send the HTTP probe to open ports
    #[arg(long)]
    pub no_grab: bool,

    /// Stop dispatching new ports after this many seconds
    #[arg(long)]
    pub deadline: Option<f64>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            json: self.json,
            quiet: self.quiet,
        }
    }
}

impl ScanArgs {
    pub fn scan_config(&self) -> anyhow::Result<ScanConfig> {
        let deadline: Option<Duration> = self
            .deadline
            .map(Duration::try_from_secs_f64)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid deadline: {e}"))?;

        Ok(ScanConfig {
            connect_timeout: Duration::from_millis(self.timeout_ms),
            banner_timeout: Duration::from_millis(self.banner_timeout_ms),
            banner_limit: DEFAULT_BANNER_LIMIT,
            concurrency: self.concurrency,
            grab_banners: !self.no_grab,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            deadline,
        })
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
