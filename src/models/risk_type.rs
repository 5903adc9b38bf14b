use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    None,
    Intoxication,
    Drowsiness,
    Speeding,
    Reckless,
}

impl RiskType {
    /// The four fault categories, in the order seed data cycles through them.
    pub const FAULTS: [RiskType; 4] = [
        RiskType::Intoxication,
        RiskType::Drowsiness,
        RiskType::Speeding,
        RiskType::Reckless,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            RiskType::None => "none",
            RiskType::Intoxication => "intoxication",
            RiskType::Drowsiness => "drowsiness",
            RiskType::Speeding => "speeding",
            RiskType::Reckless => "reckless",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(RiskType::None),
            "intoxication" => Some(RiskType::Intoxication),
            "drowsiness" => Some(RiskType::Drowsiness),
            "speeding" => Some(RiskType::Speeding),
            "reckless" => Some(RiskType::Reckless),
            _ => None,
        }
    }

    /// Short human label used in notifications and tables.
    pub fn label(&self) -> &'static str {
        match self {
            RiskType::None => "no risk",
            RiskType::Intoxication => "suspected intoxication",
            RiskType::Drowsiness => "drowsy driving",
            RiskType::Speeding => "speeding",
            RiskType::Reckless => "reckless driving",
        }
    }
}
