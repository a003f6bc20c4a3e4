use std::fmt;
use std::str::FromStr;

use crate::error::ScanError;

/// A closed, contiguous interval of TCP ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Ports 1 through 1024.
    pub const BASIC: PortRange = PortRange { start: 1, end: 1024 };
    /// The whole port space, 1 through 65535.
    pub const FULL: PortRange = PortRange { start: 1, end: u16::MAX };

    pub fn new(start: u16, end: u16) -> Result<Self, ScanError> {
        if start == 0 {
            return Err(invalid(&format!("{start}-{end}"), "port 0 cannot be scanned"));
        }
        if start > end {
            return Err(invalid(
                &format!("{start}-{end}"),
                &format!("start {start} is greater than end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range. Never zero.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the `index`-th port of the range, if there is one.
    pub fn nth(&self, index: usize) -> Option<u16> {
        if index >= self.len() {
            return None;
        }
        // index < len <= 65535, so the sum stays inside u16.
        Some(self.start + index as u16)
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + use<> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for PortRange {
    type Err = ScanError;

    /// Parses either a single port ("443") or an inclusive range ("7000-7002").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start_str, end_str) = s.split_once('-').unwrap_or((s, s));

        let start = parse_port(start_str.trim(), s)?;
        let end = parse_port(end_str.trim(), s)?;

        PortRange::new(start, end).map_err(|e| match e {
            ScanError::InvalidPortRange { reason, .. } => invalid(s, &reason),
            other => other,
        })
    }
}

fn parse_port(port_str: &str, original: &str) -> Result<u16, ScanError> {
    port_str
        .parse::<u16>()
        .map_err(|e| invalid(original, &format!("'{port_str}' is not a port: {e}")))
}

fn invalid(input: &str, reason: &str) -> ScanError {
    ScanError::InvalidPortRange {
        input: input.to_string(),
        reason: reason.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_sizes() {
        assert_eq!(PortRange::BASIC.len(), 1024);
        assert_eq!(PortRange::FULL.len(), 65535);
        assert_eq!(PortRange::FULL.nth(65534), Some(65535));
        assert_eq!(PortRange::FULL.nth(65535), None);
    }

    #[test]
    fn test_from_str_parsing() {
        assert_eq!("80".parse::<PortRange>(), PortRange::new(80, 80));
        assert_eq!("7000-7002".parse::<PortRange>(), PortRange::new(7000, 7002));
        assert_eq!(" 1 - 1024 ".parse::<PortRange>(), Ok(PortRange::BASIC));

        // --- Error Cases ---

        assert!("0-10".parse::<PortRange>().is_err());
        assert!("10-1".parse::<PortRange>().is_err());
        assert!("1-65536".parse::<PortRange>().is_err());
        assert!("http".parse::<PortRange>().is_err());
        assert!("".parse::<PortRange>().is_err());
    }

    #[test]
    fn iter_and_nth_agree() {
        let range = PortRange::new(7000, 7002).unwrap();
        let ports: Vec<u16> = range.iter().collect();
        assert_eq!(ports, vec![7000, 7001, 7002]);
        assert_eq!(range.nth(2), Some(7002));
        assert!(range.contains(7001));
        assert!(!range.contains(7003));
        assert_eq!(range.to_string(), "7000-7002");
    }
}
