use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Sent,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AlertStatus::Sent => "sent",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sent" => Some(AlertStatus::Sent),
            "acknowledged" => Some(AlertStatus::Acknowledged),
            "resolved" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, AlertStatus::Resolved)
    }
}

/// A message sent to a driver, with its handling state.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: String,
    pub driver_id: String,
    pub sent_at: DateTime<Utc>,
    pub status: AlertStatus,
    pub message: String,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Format the n-th alert id (1-based): `AH-001`.
pub fn alert_id(n: usize) -> String {
    format!("AH-{n:03}")
}
