mod common;
use chrono::Duration;
use common::{driving, resting, t0};
use fleetwatch::core::tracker::{elapsed_minutes, transition};
use fleetwatch::models::driver::{DrivingSession, InvariantViolation};
use fleetwatch::models::driving_status::DrivingStatus;
use fleetwatch::{live_minutes, toggle_driving_status};

#[test]
fn test_resting_to_driving_sets_start_and_keeps_counters() {
    let r = resting("DRV-100", 150, 2100);

    let d = toggle_driving_status(&r, t0());

    assert_eq!(d.driving_status, DrivingStatus::Driving);
    assert_eq!(d.driving_started_at, Some(t0()));
    assert_eq!(d.today_minutes, 150);
    assert_eq!(d.monthly_minutes, 2100);
    assert!(d.is_consistent());
}

#[test]
fn test_round_trip_accrues_elapsed_minutes_once() {
    let r = resting("DRV-100", 10, 500);

    for m in [1_i64, 7, 59, 60, 61, 240] {
        let d = toggle_driving_status(&r, t0());
        let back = toggle_driving_status(&d, t0() + Duration::minutes(m));

        assert_eq!(back.driving_status, DrivingStatus::Resting);
        assert_eq!(back.driving_started_at, None);
        assert_eq!(back.today_minutes, 10 + m as u32, "m = {m}");
        assert_eq!(back.monthly_minutes, 500 + m as u32, "m = {m}");
    }
}

#[test]
fn test_partial_minutes_are_floored() {
    let d = driving("DRV-100", 0, 0, 0);

    let back = toggle_driving_status(&d, t0() + Duration::seconds(59));
    assert_eq!(back.today_minutes, 0);

    let back = toggle_driving_status(&d, t0() + Duration::seconds(119));
    assert_eq!(back.today_minutes, 1);
    assert_eq!(back.monthly_minutes, 1);
}

#[test]
fn test_scenario_45_minute_session() {
    let r = resting("DRV-100", 150, 2100);

    let d = toggle_driving_status(&r, t0());
    let at = t0() + Duration::minutes(45);

    let live = live_minutes(&d, at);
    assert_eq!(live.current_session, 45);
    assert_eq!(live.today, 195);
    assert_eq!(live.monthly, 2145);

    let back = toggle_driving_status(&d, at);
    assert_eq!(back.today_minutes, 195);
    assert_eq!(back.monthly_minutes, 2145);
    assert_eq!(back.driving_started_at, None);
    assert_eq!(back.driving_status, DrivingStatus::Resting);
}

#[test]
fn test_live_minutes_is_idempotent_and_read_only() {
    let d = driving("DRV-100", 150, 2100, 30);
    let snapshot = d.clone();
    let at = t0() + Duration::minutes(12);

    let a = live_minutes(&d, at);
    let b = live_minutes(&d, at);

    assert_eq!(a, b);
    assert_eq!(a.current_session, 42);
    assert_eq!(d, snapshot);
}

#[test]
fn test_live_minutes_while_resting_equals_accrued() {
    let r = resting("DRV-100", 150, 2100);

    let live = live_minutes(&r, t0() + Duration::hours(5));

    assert_eq!(live.today, 150);
    assert_eq!(live.monthly, 2100);
    assert_eq!(live.current_session, 0);
}

#[test]
fn test_double_toggle_with_zero_elapsed() {
    let r = resting("DRV-100", 150, 2100);

    let d = toggle_driving_status(&r, t0());
    let back = toggle_driving_status(&d, t0());

    assert_eq!(d.driving_status, DrivingStatus::Driving);
    assert_eq!(back.driving_status, DrivingStatus::Resting);
    assert_eq!(back.today_minutes, 150);
    assert_eq!(back.monthly_minutes, 2100);
    assert_eq!(back.driving_started_at, None);
}

#[test]
fn test_driving_without_start_is_a_no_op() {
    let mut broken = driving("DRV-100", 150, 2100, 30);
    broken.driving_started_at = None;

    let out = toggle_driving_status(&broken, t0() + Duration::minutes(90));

    assert_eq!(out, broken);
    assert_eq!(
        transition(&broken, t0()).unwrap_err(),
        InvariantViolation::DrivingWithoutStart
    );
}

#[test]
fn test_resting_with_start_is_a_no_op() {
    let mut broken = resting("DRV-100", 150, 2100);
    broken.driving_started_at = Some(t0());

    let out = toggle_driving_status(&broken, t0() + Duration::minutes(90));

    assert_eq!(out, broken);
    assert_eq!(
        broken.session().unwrap_err(),
        InvariantViolation::RestingWithStart
    );
}

#[test]
fn test_live_minutes_on_broken_record_reports_stored_counters() {
    let mut broken = driving("DRV-100", 150, 2100, 30);
    broken.driving_started_at = None;

    let live = live_minutes(&broken, t0());

    assert_eq!(live.today, 150);
    assert_eq!(live.monthly, 2100);
    assert_eq!(live.current_session, 0);
}

#[test]
fn test_invariant_holds_after_every_toggle() {
    let mut r = resting("DRV-100", 0, 0);
    let mut now = t0();

    for step in 0..10 {
        r = toggle_driving_status(&r, now);
        assert!(r.is_consistent(), "step {step}");
        assert_eq!(
            r.driving_status == DrivingStatus::Driving,
            r.driving_started_at.is_some()
        );
        now += Duration::minutes(17);
    }

    // five driving sessions of 17 minutes each
    assert_eq!(r.today_minutes, 85);
    assert_eq!(r.monthly_minutes, 85);
}

#[test]
fn test_clock_going_backwards_accrues_nothing() {
    let d = driving("DRV-100", 150, 2100, 0);

    assert_eq!(elapsed_minutes(t0(), t0() - Duration::minutes(5)), 0);

    let back = toggle_driving_status(&d, t0() - Duration::minutes(5));
    assert_eq!(back.today_minutes, 150);
    assert_eq!(back.driving_status, DrivingStatus::Resting);
}

#[test]
fn test_session_view_matches_fields() {
    let d = driving("DRV-100", 0, 0, 20);
    assert_eq!(
        d.session(),
        Ok(DrivingSession::Driving {
            started_at: t0() - Duration::minutes(20)
        })
    );
    assert_eq!(resting("DRV-101", 0, 0).session(), Ok(DrivingSession::Resting));
}
