use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TIP: &str = "Press Ctrl-C to stop early and keep partial results";

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();
static SHOW_PROGRESS: AtomicBool = AtomicBool::new(false);

/// Decides whether scan progress is drawn. While nothing is drawn, log lines
/// go straight to stderr.
pub fn init(show_progress: bool) {
    SHOW_PROGRESS.store(show_progress, Ordering::Relaxed);
}

pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(ProgressBar::hidden)
}

/// Turns the shared bar into a port counter for a scan of `total` ports.
pub fn start_scan_progress(total: u64) {
    let pb = get_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.blue} {msg} [{bar:30.green/bright_black}] {pos}/{len} ports",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .tick_strings(&[
        "▁▁▁▁▁",
        "▁▂▂▂▁",
        "▁▄▂▄▁",
        "▂▄▆▄▂",
        "▄▆█▆▄",
        "▂▄▆▄▂",
        "▁▄▂▄▁",
        "▁▂▂▂▁",
    ])
    .progress_chars("━╸ ");

    pb.set_style(style);
    pb.set_length(total);
    pb.set_position(0);
    pb.set_message(format!("{}", TIP.italic().white()));
    if SHOW_PROGRESS.load(Ordering::Relaxed) {
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.enable_steady_tick(Duration::from_millis(100));
    }
}

pub fn finish_scan_progress() {
    let pb = get_spinner();
    pb.disable_steady_tick();
    pb.finish_and_clear();
    pb.set_draw_target(ProgressDrawTarget::hidden());
}

pub fn report_scan_progress(count: usize) {
    get_spinner().set_position(count as u64);
}

pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        let pb = get_spinner();
        if pb.is_hidden() {
            eprintln!("{msg}");
        } else {
            pb.println(msg);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
