//! Well-known TCP port to service name table.
//!
//! Names follow the IANA service registry (as shipped in `/etc/services`).

pub const UNKNOWN_SERVICE: &str = "unknown";

/// Conventional service name for `port`, or `"unknown"`.
pub fn service_name(port: u16) -> &'static str {
    lookup(port).unwrap_or(UNKNOWN_SERVICE)
}

/// Like [`service_name`] but keeps "not in the table" distinguishable.
pub fn lookup(port: u16) -> Option<&'static str> {
    let name = match port {
        1 => "tcpmux",
        7 => "echo",
        9 => "discard",
        11 => "systat",
        13 => "daytime",
        15 => "netstat",
        17 => "qotd",
        19 => "chargen",
        20 => "ftp-data",
        21 => "ftp",
        22 => "ssh",
        23 => "telnet",
        25 => "smtp",
        37 => "time",
        43 => "whois",
        49 => "tacacs",
        53 => "domain",
        70 => "gopher",
        79 => "finger",
        80 => "http",
        88 => "kerberos",
        102 => "iso-tsap",
        104 => "acr-nema",
        110 => "pop3",
        111 => "sunrpc",
        113 => "auth",
        119 => "nntp",
        123 => "ntp",
        135 => "epmap",
        137 => "netbios-ns",
        138 => "netbios-dgm",
        139 => "netbios-ssn",
        143 => "imap",
        161 => "snmp",
        162 => "snmp-trap",
        163 => "cmip-man",
        164 => "cmip-agent",
        174 => "mailq",
        179 => "bgp",
        199 => "smux",
        209 => "qmtp",
        210 => "z3950",
        345 => "pawserv",
        346 => "zserv",
        347 => "fatserv",
        369 => "rpc2portmap",
        370 => "codaauth2",
        389 => "ldap",
        427 => "svrloc",
        443 => "https",
        444 => "snpp",
        445 => "microsoft-ds",
        464 => "kpasswd",
        465 => "submissions",
        487 => "saft",
        500 => "isakmp",
        512 => "exec",
        513 => "login",
        514 => "shell",
        515 => "printer",
        538 => "gdomap",
        540 => "uucp",
        543 => "klogin",
        544 => "kshell",
        546 => "dhcpv6-client",
        547 => "dhcpv6-server",
        548 => "afpovertcp",
        554 => "rtsp",
        563 => "nntps",
        587 => "submission",
        607 => "nqs",
        628 => "qmqp",
        631 => "ipp",
        636 => "ldaps",
        646 => "ldp",
        655 => "tinc",
        706 => "silc",
        749 => "kerberos-adm",
        750 => "kerberos4",
        751 => "kerberos-master",
        754 => "krb-prop",
        853 => "domain-s",
        873 => "rsync",
        901 => "swat",
        989 => "ftps-data",
        990 => "ftps",
        992 => "telnets",
        993 => "imaps",
        995 => "pop3s",
        1080 => "socks",
        1194 => "openvpn",
        1433 => "ms-sql-s",
        1434 => "ms-sql-m",
        1521 => "ncube-lm",
        1723 => "pptp",
        1812 => "radius",
        1813 => "radius-acct",
        1883 => "mqtt",
        2049 => "nfs",
        2181 => "zookeeper",
        2375 => "docker",
        2376 => "docker-s",
        3128 => "squid",
        3260 => "iscsi-target",
        3306 => "mysql",
        3389 => "ms-wbt-server",
        3690 => "svn",
        4369 => "epmd",
        5060 => "sip",
        5061 => "sip-tls",
        5222 => "xmpp-client",
        5269 => "xmpp-server",
        5353 => "mdns",
        5432 => "postgresql",
        5671 => "amqps",
        5672 => "amqp",
        5900 => "rfb",
        6000 => "x11",
        6379 => "redis",
        6443 => "sun-sr-https",
        6667 => "ircd",
        8080 => "http-alt",
        8443 => "pcsync-https",
        8883 => "secure-mqtt",
        9000 => "cslistener",
        9092 => "XmlIpcRegSvc",
        9100 => "jetdirect",
        9200 => "wap-wsp",
        9418 => "git",
        11211 => "memcache",
        27017 => "mongodb",
        _ => return None,
    };
    Some(name)
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
    fn test_well_known_ports() {
        assert_eq!(service_name(22), "ssh");
        assert_eq!(service_name(80), "http");
        assert_eq!(service_name(443), "https");
        assert_eq!(service_name(53), "domain");
        assert_eq!(service_name(5432), "postgresql");
    }

    #[test]
    fn test_unknown_ports() {
        assert_eq!(service_name(0), UNKNOWN_SERVICE);
        assert_eq!(service_name(7001), "unknown");
        assert_eq!(service_name(u16::MAX), "unknown");
        assert!(lookup(7002).is_none());
    }
}
