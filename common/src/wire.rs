//! Bodies exchanged with an outer adapter (HTTP or otherwise).
//!
//! A successful scan is sent as a [`ScanReport`](crate::scan::ScanReport)
//! directly; these types cover the request and the non-report replies.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::scan::{ScanRequest, ScanType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequestBody {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub scan_type: Option<String>,
}

impl TryFrom<ScanRequestBody> for ScanRequest {
    type Error = ScanError;

    fn try_from(body: ScanRequestBody) -> Result<Self, Self::Error> {
        let scan_type = body
            .scan_type
            .as_deref()
            .map(ScanType::from_label)
            .unwrap_or_default();
        ScanRequest::new(&body.host, scan_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&ScanError> for ErrorBody {
    fn from(err: &ScanError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

impl HealthBody {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
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
    fn test_request_body_defaults_to_basic() {
        let body: ScanRequestBody = serde_json::from_str(r#"{"host": " scanme.nmap.org "}"#).unwrap();
        let request = ScanRequest::try_from(body).unwrap();
        assert_eq!(request.host(), "scanme.nmap.org");
        assert_eq!(request.scan_type(), &ScanType::Basic);
    }

    #[test]
    fn test_request_body_missing_host_is_rejected() {
        let body: ScanRequestBody = serde_json::from_str(r#"{"scan_type": "aggressive"}"#).unwrap();
        let err = ScanRequest::try_from(body).unwrap_err();
        assert_eq!(err, ScanError::EmptyHost);

        let value = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "Host is required" }));
    }

    #[test]
    fn test_health_body() {
        let value = serde_json::to_value(HealthBody::ok()).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok" }));
    }
}
