use colored::*;
use portscout_common::scan::OpenPortRecord;
use portscout_common::services::UNKNOWN_SERVICE;
use std::net::IpAddr;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Longest banner excerpt shown in the terminal tree.
const BANNER_PREVIEW_WIDTH: usize = 48;

pub fn ip_to_colored(ip: &IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(ipv4_addr) => ipv4_addr.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(ipv6_addr) => ipv6_addr.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn service_to_colored(service: &str) -> ColoredString {
    if service == UNKNOWN_SERVICE {
        service.color(colors::UNKNOWN)
    } else {
        service.color(colors::SERVICE)
    }
}

pub fn record_to_details(record: &OpenPortRecord) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("State".to_string(), "open".green().bold()),
        ("Service".to_string(), service_to_colored(&record.service)),
    ];

    if record.has_banner() {
        details.push(("Banner".to_string(), banner_preview(&record.banner).color(colors::BANNER)));
    }

    details
}

/// First line of a banner, shortened to fit a terminal row.
pub fn banner_preview(banner: &str) -> String {
    let first_line: &str = banner.lines().next().unwrap_or_default().trim();
    if first_line.chars().count() <= BANNER_PREVIEW_WIDTH {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(BANNER_PREVIEW_WIDTH - 1).collect();
    format!("{cut}…")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_preview_keeps_first_line() {
        let banner = "HTTP/1.0 200 OK\r\nServer: nginx\r\n";
        assert_eq!(banner_preview(banner), "HTTP/1.0 200 OK");
    }

    #[test]
    fn test_banner_preview_truncates_long_lines() {
        let banner = "x".repeat(200);
        let preview = banner_preview(&banner);
        assert_eq!(preview.chars().count(), BANNER_PREVIEW_WIDTH);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn test_details_skip_missing_banner() {
        let record = OpenPortRecord::new(7001, "unknown", None);
        let details = record_to_details(&record);
        assert_eq!(details.len(), 2);
        assert!(details.iter().all(|(key, _)| key != "Banner"));
    }
}
