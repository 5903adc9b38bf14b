use clap::ValueEnum;

use crate::models::driver::DriverRecord;
use crate::models::risk_type::RiskType;
use crate::models::status::Status;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Highest risk level first
    #[default]
    Risk,
    /// Most recent detection first
    Recent,
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub status: Option<Status>,
    pub risk_type: Option<RiskType>,
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn matches(&self, d: &DriverRecord) -> bool {
        let term_ok = self.term.as_deref().is_none_or(|t| d.matches_term(t));
        let status_ok = self.status.is_none_or(|s| d.status == s);
        let risk_ok = self.risk_type.is_none_or(|r| d.risk_type == r);
        term_ok && status_ok && risk_ok
    }
}

pub struct SearchLogic;

impl SearchLogic {
    /// Filter then sort. Ties always fall back to id order.
    pub fn run(drivers: &[DriverRecord], query: &SearchQuery) -> Vec<DriverRecord> {
        let mut out: Vec<DriverRecord> = drivers
            .iter()
            .filter(|d| query.matches(d))
            .cloned()
            .collect();

        match query.sort {
            SortKey::Risk => {
                out.sort_by(|a, b| b.risk_level.cmp(&a.risk_level).then(a.id.cmp(&b.id)))
            }
            SortKey::Recent => {
                out.sort_by(|a, b| b.last_event_at.cmp(&a.last_event_at).then(a.id.cmp(&b.id)))
            }
        }

        out
    }

    /// Pick records by id, keeping the order of `ids` and skipping unknown ones.
    pub fn select(drivers: &[DriverRecord], ids: &[String]) -> Vec<DriverRecord> {
        ids.iter()
            .filter_map(|id| drivers.iter().find(|d| d.id.eq_ignore_ascii_case(id)))
            .cloned()
            .collect()
    }
}
