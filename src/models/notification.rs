use chrono::{DateTime, Utc};
use serde::Serialize;

use super::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Critical,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Critical | Status::Danger => NotificationKind::Critical,
            Status::Caution => NotificationKind::Warning,
            Status::Normal => NotificationKind::Info,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            NotificationKind::Critical => "critical",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(NotificationKind::Critical),
            "warning" => Some(NotificationKind::Warning),
            "info" => Some(NotificationKind::Info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub driver_id: String,
    pub driver_name: String,
    pub message: String,
    pub location: String,
    pub at: DateTime<Utc>,
    pub read: bool,
}
