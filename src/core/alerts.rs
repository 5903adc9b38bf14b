//! Alert history: manual and automatic sends, acknowledgement, resolution.
//! Delivery to real devices is out of scope; "sending" records the alert.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::store::DriverStore;
use crate::db::alerts;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::alert::{Alert, AlertStatus, alert_id};
use crate::models::driver::DriverRecord;
use crate::models::risk_type::RiskType;

/// Canned message for a risk type.
pub fn template_for(risk: RiskType) -> &'static str {
    match risk {
        RiskType::Intoxication => {
            "Intoxicated driving detected. Stop the vehicle in a safe place immediately."
        }
        RiskType::Drowsiness => "Drowsy driving detected. Take a rest at the nearest service area.",
        RiskType::Speeding => "Speeding detected. Please keep to the speed limit.",
        RiskType::Reckless => "Reckless driving detected. Please drive safely.",
        RiskType::None => "Please check in with dispatch.",
    }
}

pub struct AlertLogic;

impl AlertLogic {
    pub fn history(store: &DriverStore) -> AppResult<Vec<Alert>> {
        Ok(alerts::load_alerts(store.conn())?)
    }

    /// Drivers at or above `threshold`, highest risk first.
    pub fn high_risk(drivers: &[DriverRecord], threshold: u8) -> Vec<DriverRecord> {
        let mut out: Vec<DriverRecord> = drivers
            .iter()
            .filter(|d| d.risk_level >= threshold)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.risk_level.cmp(&a.risk_level).then(a.id.cmp(&b.id)));
        out
    }

    /// Record one alert per driver.
    ///
    /// A non-empty `message` wins; otherwise `template`, otherwise each
    /// driver's own risk type picks the text.
    pub fn send(
        store: &mut DriverStore,
        driver_ids: &[String],
        template: Option<RiskType>,
        message: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Alert>> {
        if driver_ids.is_empty() {
            return Err(AppError::EmptySelection);
        }

        let mut targets = Vec::with_capacity(driver_ids.len());
        for id in driver_ids {
            targets.push(store.require(id)?);
        }

        let custom = message.map(str::trim).filter(|m| !m.is_empty());
        let mut sent = Vec::with_capacity(targets.len());

        for d in &targets {
            let text = match custom {
                Some(m) => m.to_string(),
                None => template_for(template.unwrap_or(d.risk_type)).to_string(),
            };
            sent.push(Self::record(store, d, text, now)?);
        }

        Ok(sent)
    }

    /// Alert every high-risk driver that has no open alert yet.
    pub fn auto_send(
        store: &mut DriverStore,
        enabled: bool,
        threshold: u8,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Alert>> {
        if !enabled {
            return Ok(Vec::new());
        }

        let candidates = Self::high_risk(&store.all()?, threshold);
        let mut sent = Vec::new();

        for d in &candidates {
            if alerts::has_open_alert(store.conn(), &d.id)? {
                continue;
            }
            let text = template_for(d.risk_type).to_string();
            sent.push(Self::record(store, d, text, now)?);
        }

        info!(count = sent.len(), threshold, "automatic alerts sent");
        Ok(sent)
    }

    pub fn acknowledge(store: &mut DriverStore, id: &str, now: DateTime<Utc>) -> AppResult<Alert> {
        let alert = Self::require(store, id)?;
        if alert.status == AlertStatus::Sent {
            alerts::set_alert_status(store.conn(), id, AlertStatus::Acknowledged, None)?;
            ttlog(store.conn(), now, "alert_ack", id, "Alert acknowledged")?;
        }
        Self::require(store, id)
    }

    /// Mark resolved. Resolving twice keeps the first resolution time.
    pub fn resolve(store: &mut DriverStore, id: &str, now: DateTime<Utc>) -> AppResult<Alert> {
        let alert = Self::require(store, id)?;
        if alert.status.is_open() {
            alerts::set_alert_status(store.conn(), id, AlertStatus::Resolved, Some(now))?;
            ttlog(store.conn(), now, "alert_resolve", id, "Alert resolved")?;
        }
        Self::require(store, id)
    }

    fn require(store: &DriverStore, id: &str) -> AppResult<Alert> {
        alerts::load_alert(store.conn(), id)?.ok_or_else(|| AppError::UnknownAlert(id.to_string()))
    }

    fn record(
        store: &mut DriverStore,
        driver: &DriverRecord,
        message: String,
        now: DateTime<Utc>,
    ) -> AppResult<Alert> {
        let n = alerts::count_alerts(store.conn())? + 1;
        let alert = Alert {
            id: alert_id(n),
            driver_id: driver.id.clone(),
            sent_at: now,
            status: AlertStatus::Sent,
            message,
            resolved_at: None,
        };

        alerts::insert_alert(store.conn(), &alert)?;
        ttlog(store.conn(), now, "alert_send", &driver.id, &alert.message)?;
        Ok(alert)
    }
}
