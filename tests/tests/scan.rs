use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use portscout_common::config::ScanConfig;
use portscout_common::error::ScanError;
use portscout_common::scan::{BANNER_PLACEHOLDER, PortRange, ScanReport, ScanRequest, ScanType};
use portscout_core::ScanCoordinator;
use portscout_integration_tests::LoopbackTarget;

async fn scan_fixture(target: &LoopbackTarget, config: ScanConfig) -> ScanReport {
    let request = ScanRequest::new("127.0.0.1", ScanType::Basic)
        .unwrap()
        .with_ports(target.range());
    ScanCoordinator::new(config).scan(&request).await.unwrap()
}

/// Closed, silent and HTTP ports side by side: only the latter two are
/// reported and only the HTTP one carries a banner.
#[tokio::test]
async fn loopback_fixture_reports_open_ports_with_banners() {
    let target = LoopbackTarget::start().await.unwrap();

    let report = scan_fixture(&target, ScanConfig::default()).await;

    assert_eq!(report.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(report.host, "127.0.0.1");
    assert_eq!(report.total_ports_scanned, 3);
    assert_eq!(report.open_ports_count, 2);
    assert_eq!(report.open_port_numbers(), vec![target.silent, target.http]);
    assert!(!report.interrupted);

    let silent = &report.open_ports[0];
    assert_eq!(silent.banner, BANNER_PLACEHOLDER);

    let http = &report.open_ports[1];
    assert!(
        http.banner.starts_with("HTTP/1.0 200 OK"),
        "unexpected banner {:?}",
        http.banner
    );
}

#[tokio::test]
async fn repeated_scans_find_the_same_ports() {
    let target = LoopbackTarget::start().await.unwrap();
    let config = ScanConfig {
        banner_timeout: Duration::from_millis(200),
        ..ScanConfig::default()
    };

    let first = scan_fixture(&target, config.clone()).await;
    let second = scan_fixture(&target, config).await;

    assert_eq!(first.open_port_numbers(), second.open_port_numbers());
}

#[tokio::test]
async fn silent_port_is_open_once_banner_wait_elapses() {
    let target = LoopbackTarget::start().await.unwrap();
    let config = ScanConfig {
        banner_timeout: Duration::from_millis(150),
        ..ScanConfig::default()
    };
    let request = ScanRequest::new("localhost", ScanType::Basic)
        .unwrap()
        .with_ports(PortRange::new(target.silent, target.silent).unwrap());

    let report = ScanCoordinator::new(config).scan(&request).await.unwrap();

    assert!(report.ip.is_loopback());
    assert_eq!(report.open_port_numbers(), vec![target.silent]);
    assert_eq!(report.open_ports[0].banner, BANNER_PLACEHOLDER);
    assert_eq!(report.total_ports_scanned, 1);
}

#[test]
fn empty_host_is_rejected_before_scanning() {
    assert_eq!(
        ScanRequest::new("   ", ScanType::Aggressive),
        Err(ScanError::EmptyHost)
    );
}

#[tokio::test]
async fn unresolvable_host_produces_no_report() {
    let request = ScanRequest::new("this-host-does-not-exist.invalid", ScanType::Basic).unwrap();

    let result = ScanCoordinator::new(ScanConfig::default()).scan(&request).await;

    assert!(matches!(result, Err(ScanError::Resolution { .. })));
}

#[tokio::test]
async fn zero_deadline_returns_empty_interrupted_report() {
    let target = LoopbackTarget::start().await.unwrap();
    let config = ScanConfig {
        deadline: Some(Duration::ZERO),
        ..ScanConfig::default()
    };

    let report = scan_fixture(&target, config).await;

    assert!(report.interrupted);
    assert_eq!(report.total_ports_scanned, 0);
    assert_eq!(report.open_ports_count, 0);
}

#[tokio::test]
async fn report_serialises_to_the_wire_shape() {
    let target = LoopbackTarget::start().await.unwrap();
    let report = scan_fixture(&target, ScanConfig::default()).await;

    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["ip"], "127.0.0.1");
    assert_eq!(value["scan_type"], "basic");
    assert_eq!(value["total_ports_scanned"], 3);
    assert_eq!(value["open_ports_count"], 2);
    assert!(value["elapsed_time"].as_f64().unwrap() >= 0.0);
    assert_eq!(value["open_ports"][0]["port"], target.silent);
    assert_eq!(value["open_ports"][0]["service"], "unknown");
    assert_eq!(value["open_ports"][0]["banner"], "-");
    assert!(value.get("interrupted").is_none());
}
