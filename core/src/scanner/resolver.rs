use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use portscout_common::error::ScanError;
use portscout_common::scan::ResolvedTarget;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

use crate::scanner::HostResolver;

/// Resolves hosts through the system resolver.
pub struct DnsResolver {
    lookup_timeout: Duration,
}

impl DnsResolver {
    pub fn new(lookup_timeout: Duration) -> Self {
        Self { lookup_timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<ResolvedTarget, ScanError> {
        let ip: IpAddr = resolve_host(host, self.lookup_timeout).await?;
        Ok(ResolvedTarget {
            original_host: host.to_string(),
            ip,
        })
    }
}

/// Returns the address `host` should be scanned at.
///
/// IP literals (optionally in brackets) are returned as-is. Names get one
/// forward lookup; the first IPv4 answer wins, otherwise the first answer of
/// any family.
pub async fn resolve_host(host: &str, lookup_timeout: Duration) -> Result<IpAddr, ScanError> {
    let host = host.trim();
    let unbracketed = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    if let Ok(ip) = unbracketed.parse::<IpAddr>() {
        return Ok(ip);
    }

    let failure = || ScanError::Resolution {
        host: host.to_string(),
    };

    if host.is_empty() {
        return Err(failure());
    }

    let addrs: Vec<SocketAddr> = match timeout(lookup_timeout, lookup_host((host, 0))).await {
        Ok(Ok(addrs)) => addrs.collect(),
        Ok(Err(e)) => {
            debug!("Lookup of {host} failed: {e}");
            return Err(failure());
        }
        Err(_elapsed) => {
            debug!("Lookup of {host} timed out after {lookup_timeout:?}");
            return Err(failure());
        }
    };

    pick_address(&addrs).ok_or_else(failure)
}

fn pick_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
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
    use std::net::{Ipv4Addr, Ipv6Addr};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn ip_literals_skip_the_lookup() {
        assert_eq!(
            resolve_host("192.0.2.7", TIMEOUT).await,
            Ok(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7)))
        );
        assert_eq!(
            resolve_host("[::1]", TIMEOUT).await,
            Ok(IpAddr::V6(Ipv6Addr::LOCALHOST))
        );
    }

    #[tokio::test]
    async fn localhost_resolves() {
        let ip = resolve_host("localhost", TIMEOUT).await.unwrap();
        assert!(ip.is_loopback());
    }

    #[tokio::test]
    async fn invalid_tld_fails_to_resolve() {
        let err = resolve_host("this-host-does-not-exist.invalid", TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ScanError::Resolution {
                host: "this-host-does-not-exist.invalid".to_string()
            }
        );
    }

    #[tokio::test]
    async fn resolver_keeps_original_host() {
        let target = DnsResolver::new(TIMEOUT).resolve("127.0.0.1").await.unwrap();
        assert_eq!(target.original_host, "127.0.0.1");
        assert_eq!(target.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn ipv4_answers_are_preferred() {
        let addrs: Vec<SocketAddr> = vec![
            "[2001:db8::1]:0".parse().unwrap(),
            "198.51.100.4:0".parse().unwrap(),
        ];
        assert_eq!(
            pick_address(&addrs),
            Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 4)))
        );

        let v6_only: Vec<SocketAddr> = vec!["[2001:db8::1]:0".parse().unwrap()];
        assert_eq!(pick_address(&v6_only), Some("2001:db8::1".parse().unwrap()));
        assert_eq!(pick_address(&[]), None);
    }
}
