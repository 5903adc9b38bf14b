use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingStatus {
    Driving,
    Resting,
}

impl DrivingStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DrivingStatus::Driving => "driving",
            DrivingStatus::Resting => "resting",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "driving" => Some(DrivingStatus::Driving),
            "resting" => Some(DrivingStatus::Resting),
            _ => None,
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DrivingStatus::Driving)
    }
}
