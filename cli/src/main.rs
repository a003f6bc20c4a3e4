mod commands;
mod terminal;

use commands::{CommandLine, Commands, scan, service};
use portscout_common::config::Config;
use terminal::{logging, print, spinner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    spinner::init(!cfg.json && cfg.quiet < 2);
    logging::init_logging(log_directives(&cfg));
    print::banner(cfg.no_banner || cfg.json, cfg.quiet);

    match commands.command {
        Commands::Scan(args) => {
            print::header("starting scanner", cfg.quiet);
            scan::scan(args, &cfg).await
        }
        Commands::Service { ports } => service::service(ports, &cfg),
    }
}

/// JSON mode keeps stdout clean; `-qq` keeps the results but drops engine chatter.
fn log_directives(cfg: &Config) -> &'static str {
    match (cfg.json, cfg.quiet) {
        (true, _) => "warn",
        (false, 0..=1) => "info",
        (false, _) => "warn,portscout::print=info,portscout::success=info",
    }
}
