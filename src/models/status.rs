use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Severity of a driver's current condition, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Caution,
    Danger,
    Critical,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Normal,
        Status::Caution,
        Status::Danger,
        Status::Critical,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Caution => "caution",
            Status::Danger => "danger",
            Status::Critical => "critical",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Status::Normal),
            "caution" => Some(Status::Caution),
            "danger" => Some(Status::Danger),
            "critical" => Some(Status::Critical),
            _ => None,
        }
    }

    /// Inclusive risk-level band used when generating seed records.
    pub fn risk_band(&self) -> (u8, u8) {
        match self {
            Status::Critical => (85, 100),
            Status::Danger => (70, 84),
            Status::Caution => (50, 69),
            Status::Normal => (0, 49),
        }
    }
}
