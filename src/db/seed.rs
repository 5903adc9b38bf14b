//! Deterministic mock fleet used to populate the in-memory store at startup.
//!
//! Risk type for a non-normal driver is picked from the fault list by its
//! position in the fleet. That is a data-generation shortcut only.

use crate::core::alerts::template_for;
use crate::db::{alerts, log::ttlog, notifications, queries};
use crate::errors::AppResult;
use crate::models::alert::{Alert, AlertStatus, alert_id};
use crate::models::driver::DriverRecord;
use crate::models::driving_status::DrivingStatus;
use crate::models::notification::{Notification, NotificationKind};
use crate::models::risk_type::RiskType;
use crate::models::status::Status;
use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

pub const FLEET_SIZE: usize = 30;

const LOCATIONS: [&str; 20] = [
    "Seoul Gangnam-gu Teheran-ro",
    "Seoul Gangnam-gu Yeoksam-dong",
    "Seoul Gangnam-gu Nonhyeon-dong",
    "Seoul Gangnam-gu Sinsa-dong",
    "Seoul Gangnam-gu Cheongdam-dong",
    "Seoul Gangnam-gu Samseong-dong",
    "Seoul Songpa-gu Jamsil-dong",
    "Seoul Mapo-gu Sangam-dong",
    "Seoul Yongsan-gu Ichon-dong",
    "Seoul Seongdong-gu Seongsu-dong",
    "Seongnam Bundang-gu Jeongja-dong",
    "Yongin Suji-gu Jukjeon-dong",
    "Suwon Yeongtong-gu Mangpo-dong",
    "Hanam Misa-dong",
    "Gwacheon Jungang-ro",
    "Goyang Ilsanseo-gu Juyeop-dong",
    "Bucheon Jung-dong",
    "Gimpo Gurae-dong",
    "Uijeongbu Minrak-dong",
    "Incheon Yeonsu-gu Songdo-dong",
];

const NAMES: [&str; FLEET_SIZE] = [
    "Kim Minsu", "Park Jiyoung", "Lee Cheolho", "Jung Sujin", "Choi Dongwook", "Han Seoyeon",
    "Yoon Taehyun", "Kang Miyoung", "Song Junhyuk", "Lim Jieun", "Oh Sungho", "Bae Sua",
    "Jeon Hyejin", "Cho Minseok", "Hwang Seoyun", "Shin Dongwook", "Yoo Nayoung", "Hong Junho",
    "Moon Jihye", "Yang Sunghoon", "Nam Daeun", "Ko Minjun", "No Seoyeon", "Ryu Taeyoung",
    "Ma Jieun", "Bang Hyunwoo", "Seo Yujin", "Ahn Junho", "Eom Jihye", "Won Dongwook",
];

const VEHICLES: [&str; 16] = [
    "Hyundai Porter II", "Kia Bongo III", "Hyundai Mighty", "Kia Carnival",
    "Hyundai Starex", "Kia Ray", "Hyundai Grand Starex", "Kia Soul",
    "Hyundai Santa Fe", "Kia Seltos", "Hyundai Kona", "Kia Niro",
    "Hyundai Avante", "Kia K3", "Hyundai Sonata", "Kia K5",
];

pub fn driver_id(n: usize) -> String {
    format!("DRV-{n:03}")
}

/// Build the fleet relative to `now`. Same `now`, same records.
pub fn seed_drivers(now: DateTime<Utc>) -> Vec<DriverRecord> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let status = Status::ALL[i % Status::ALL.len()];
            let risk_type = if status == Status::Normal {
                RiskType::None
            } else {
                RiskType::FAULTS[(i + 1 + i / 4) % RiskType::FAULTS.len()]
            };

            let (lo, hi) = status.risk_band();
            let span = (hi - lo) as usize + 1;
            let risk_level = lo + ((i * 37 + 11) % span) as u8;

            let driving = i % 2 == 0;
            let driving_started_at =
                driving.then(|| now - Duration::minutes(10 + ((i * 37) % 171) as i64));

            DriverRecord {
                id: driver_id(i + 1),
                name: name.to_string(),
                status,
                risk_type,
                risk_level,
                location: LOCATIONS[i % LOCATIONS.len()].to_string(),
                vehicle_type: VEHICLES[(i * 5) % VEHICLES.len()].to_string(),
                average_score: 75 + ((i * 7) % 21) as u8,
                last_event_at: now - Duration::minutes(1 + ((i * 11) % 30) as i64),
                driving_status: if driving {
                    DrivingStatus::Driving
                } else {
                    DrivingStatus::Resting
                },
                driving_started_at,
                today_minutes: 60 + ((i * 29) % 341) as u32,
                monthly_minutes: 1500 + ((i * 53) % 1501) as u32,
            }
        })
        .collect()
}

fn seed_alerts(drivers: &[DriverRecord], now: DateTime<Utc>) -> Vec<Alert> {
    let history = [
        (3, 60, AlertStatus::Resolved, Some(47)),
        (2, 57, AlertStatus::Acknowledged, None),
        (7, 64, AlertStatus::Sent, None),
    ];

    history
        .iter()
        .enumerate()
        .filter_map(|(n, (idx, sent_ago, status, resolved_ago))| {
            let d = drivers.get(*idx)?;
            Some(Alert {
                id: alert_id(n + 1),
                driver_id: d.id.clone(),
                sent_at: now - Duration::minutes(*sent_ago),
                status: *status,
                message: template_for(d.risk_type).to_string(),
                resolved_at: resolved_ago.map(|m| now - Duration::minutes(m)),
            })
        })
        .collect()
}

fn seed_notifications(drivers: &[DriverRecord]) -> Vec<Notification> {
    let mut alarming: Vec<&DriverRecord> = drivers
        .iter()
        .filter(|d| d.status != Status::Normal)
        .collect();
    alarming.sort_by(|a, b| b.last_event_at.cmp(&a.last_event_at).then(a.id.cmp(&b.id)));

    alarming
        .into_iter()
        .take(5)
        .enumerate()
        .map(|(n, d)| Notification {
            id: format!("N-{:03}", n + 1),
            kind: NotificationKind::for_status(d.status),
            driver_id: d.id.clone(),
            driver_name: d.name.clone(),
            message: format!("{} detected", d.risk_type.label()),
            location: d.location.clone(),
            at: d.last_event_at,
            read: n >= 3,
        })
        .collect()
}

/// Populate an empty store.
pub fn seed_all(conn: &Connection, now: DateTime<Utc>) -> AppResult<()> {
    let drivers = seed_drivers(now);

    for d in &drivers {
        queries::insert_driver(conn, d)?;
    }
    for a in seed_alerts(&drivers, now) {
        alerts::insert_alert(conn, &a)?;
    }
    for n in seed_notifications(&drivers) {
        notifications::insert_notification(conn, &n)?;
    }

    ttlog(
        conn,
        now,
        "seed",
        "drivers",
        &format!("Seeded {} drivers", drivers.len()),
    )?;
    Ok(())
}
