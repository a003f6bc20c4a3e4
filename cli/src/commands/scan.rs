use std::sync::Arc;

use anyhow::Context;
use colored::*;
use portscout_common::config::Config;
use portscout_common::scan::{ScanReport, ScanRequest, ScanType};
use portscout_common::success;
use portscout_common::wire::ErrorBody;
use portscout_core::{ProgressCallback, ScanControl, ScanCoordinator};
use tracing::warn;

use crate::commands::ScanArgs;
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn scan(args: ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let mut request = ScanRequest::new(&args.target, ScanType::from_label(&args.scan_type))
        .map_err(|e| report_failure(e, cfg))?;
    if let Some(ports) = args.ports {
        request = request.with_ports(ports);
    }

    let coordinator = ScanCoordinator::new(args.scan_config()?);

    let control = ScanControl::new();
    let interrupt_watcher = spawn_interrupt_watcher(control.clone());

    spinner::start_scan_progress(request.port_range().len() as u64);
    let on_progress: ProgressCallback = Arc::new(spinner::report_scan_progress);

    let result = coordinator.scan_with(&request, &control, Some(on_progress)).await;

    spinner::finish_scan_progress();
    interrupt_watcher.abort();

    let report: ScanReport = result.map_err(|e| report_failure(e, cfg))?;

    if cfg.json {
        let body = serde_json::to_string_pretty(&report).context("serialising scan report")?;
        println!("{body}");
        return Ok(());
    }

    scan_ends(&report, cfg);
    Ok(())
}

/// Stops the scan on Ctrl-C so the probed ports still make it into a report.
fn spawn_interrupt_watcher(control: ScanControl) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, waiting for in-flight probes to finish");
            control.stop();
        }
    })
}

/// In JSON mode the failure is also written to stdout as an error body.
fn report_failure(err: portscout_common::error::ScanError, cfg: &Config) -> anyhow::Error {
    if cfg.json {
        let body = ErrorBody::from(&err);
        if let Ok(json) = serde_json::to_string(&body) {
            println!("{json}");
        }
    }
    anyhow::Error::new(err)
}

fn scan_ends(report: &ScanReport, cfg: &Config) {
    if report.interrupted {
        warn!(
            "Scan stopped early, {} ports were probed",
            report.total_ports_scanned
        );
    }

    if report.open_ports.is_empty() {
        no_ports_found(cfg);
        print_summary(report, cfg);
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::header("Open Ports", cfg.quiet);
    print_target(report, cfg);
    print_ports(report, cfg);
    print_summary(report, cfg);
}

fn no_ports_found(cfg: &Config) {
    print::header("ZERO OPEN PORTS", cfg.quiet);
    if cfg.quiet == 0 {
        print::no_results();
    }
}

fn print_target(report: &ScanReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    const KEY_WIDTH: usize = 9;
    print::aligned_line("Host", report.host.color(colors::TEXT_DEFAULT), KEY_WIDTH);
    print::aligned_line("Address", format::ip_to_colored(&report.ip), KEY_WIDTH);
    print::aligned_line("Profile", report.scan_type.label().color(colors::ACCENT), KEY_WIDTH);
    mprint!();
}

fn print_ports(report: &ScanReport, cfg: &Config) {
    for (idx, record) in report.open_ports.iter().enumerate() {
        match cfg.quiet {
            2.. => print::print(&format!(
                "{}/tcp {}",
                record.port,
                format::service_to_colored(&record.service)
            )),
            _ => {
                print::tree_head(&format!("{}/tcp", record.port), &record.service);
                print::as_tree_one_level(format::record_to_details(record));
            }
        }
        if cfg.quiet < 2 && idx + 1 != report.open_ports.len() {
            mprint!();
        }
    }
}

fn print_summary(report: &ScanReport, cfg: &Config) {
    let open: ColoredString = format!("{} open ports", report.open_ports_count).bold().green();
    let total: ColoredString = format!("{} scanned", report.total_ports_scanned).bold();
    let total_time: ColoredString = format!("{:.2}s", report.elapsed_time).bold().yellow();
    let output: &ColoredString = &format!("Scan Complete: {open} of {total} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
            print::end_of_program();
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
