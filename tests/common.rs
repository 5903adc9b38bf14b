#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, TimeZone, Utc};
use fleetwatch::models::driver::DriverRecord;
use fleetwatch::models::driving_status::DrivingStatus;
use fleetwatch::models::risk_type::RiskType;
use fleetwatch::models::status::Status;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Clock value passed to `--clock` in CLI tests.
pub const CLOCK: &str = "2026-01-12T09:00:00Z";

pub fn fw() -> Command {
    cargo_bin_cmd!("fleetwatch")
}

/// `fleetwatch --config <missing file> --clock CLOCK`, so tests never read the
/// user's real configuration.
pub fn fw_at(name: &str) -> Command {
    let mut cmd = fw();
    cmd.args(["--config", &temp_config(name), "--clock", CLOCK]);
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap()
}

/// Config path inside the temp dir; any previous file is removed.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleetwatch.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleetwatch_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A resting record with the given counters.
pub fn resting(id: &str, today: u32, monthly: u32) -> DriverRecord {
    DriverRecord {
        id: id.to_string(),
        name: format!("Driver {id}"),
        status: Status::Caution,
        risk_type: RiskType::Drowsiness,
        risk_level: 60,
        location: "Seoul Mapo-gu Sangam-dong".to_string(),
        vehicle_type: "Kia Ray".to_string(),
        average_score: 80,
        last_event_at: t0() - Duration::minutes(5),
        driving_status: DrivingStatus::Resting,
        driving_started_at: None,
        today_minutes: today,
        monthly_minutes: monthly,
    }
}

/// A driving record that started `started_ago` minutes before `t0()`.
pub fn driving(id: &str, today: u32, monthly: u32, started_ago: i64) -> DriverRecord {
    DriverRecord {
        driving_status: DrivingStatus::Driving,
        driving_started_at: Some(t0() - Duration::minutes(started_ago)),
        ..resting(id, today, monthly)
    }
}
