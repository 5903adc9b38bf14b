//! Fleet-wide aggregates for the stats and top-driver views.

use serde::Serialize;

use crate::models::driver::DriverRecord;
use crate::models::risk_type::RiskType;
use crate::models::status::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub by_status: Vec<(Status, usize)>,
    pub driving_now: usize,
    pub average_risk: u8,
    pub high_risk: usize,
    pub by_risk_type: Vec<(RiskType, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDriver {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub score: u8,
    pub safety_days: u32,
    pub total_trips: u32,
    pub no_violations: u32,
}

pub struct AnalyticsLogic;

impl AnalyticsLogic {
    pub fn stats(drivers: &[DriverRecord], threshold: u8) -> FleetStats {
        let total = drivers.len();

        let by_status = Status::ALL
            .iter()
            .map(|s| (*s, drivers.iter().filter(|d| d.status == *s).count()))
            .collect();

        let by_risk_type = RiskType::FAULTS
            .iter()
            .map(|r| (*r, drivers.iter().filter(|d| d.risk_type == *r).count()))
            .collect();

        let average_risk = if total == 0 {
            0
        } else {
            let sum: usize = drivers.iter().map(|d| d.risk_level as usize).sum();
            (sum / total) as u8
        };

        FleetStats {
            total,
            by_status,
            driving_now: drivers
                .iter()
                .filter(|d| d.driving_status.is_driving())
                .count(),
            average_risk,
            high_risk: drivers.iter().filter(|d| d.risk_level >= threshold).count(),
            by_risk_type,
        }
    }

    /// Best-scoring drivers among those currently in normal status.
    pub fn top_drivers(drivers: &[DriverRecord], limit: usize) -> Vec<TopDriver> {
        let mut normal: Vec<&DriverRecord> = drivers
            .iter()
            .filter(|d| d.status == Status::Normal && d.average_score > 0)
            .collect();
        normal.sort_by(|a, b| b.average_score.cmp(&a.average_score).then(a.id.cmp(&b.id)));

        normal
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, d)| {
                let hours = d.monthly_minutes / 60;
                TopDriver {
                    rank: i + 1,
                    id: d.id.clone(),
                    name: d.name.clone(),
                    score: d.average_score,
                    safety_days: hours / 24,
                    total_trips: hours,
                    no_violations: hours.saturating_sub(u32::from(d.risk_level) / 10),
                }
            })
            .collect()
    }
}
