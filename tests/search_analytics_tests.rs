mod common;
use common::t0;
use fleetwatch::core::analytics::AnalyticsLogic;
use fleetwatch::core::search::{SearchLogic, SearchQuery, SortKey};
use fleetwatch::core::store::DriverStore;
use fleetwatch::models::risk_type::RiskType;
use fleetwatch::models::status::Status;

fn fleet() -> Vec<fleetwatch::models::driver::DriverRecord> {
    DriverStore::open(t0()).unwrap().all().unwrap()
}

fn ids(list: &[fleetwatch::models::driver::DriverRecord]) -> Vec<&str> {
    list.iter().map(|d| d.id.as_str()).collect()
}

#[test]
fn test_empty_query_returns_everyone_by_risk() {
    let drivers = fleet();
    let out = SearchLogic::run(&drivers, &SearchQuery::default());

    assert_eq!(out.len(), 30);
    assert_eq!(&ids(&out)[..3], &["DRV-008", "DRV-024", "DRV-004"]);
    assert!(out.windows(2).all(|w| w[0].risk_level >= w[1].risk_level));
}

#[test]
fn test_term_matches_location_case_insensitively() {
    let drivers = fleet();
    let query = SearchQuery {
        term: Some("GANGNAM".into()),
        ..Default::default()
    };

    let out = SearchLogic::run(&drivers, &query);

    assert_eq!(out.len(), 12);
    assert!(out.iter().all(|d| d.location.contains("Gangnam")));
}

#[test]
fn test_term_matches_name_and_id() {
    let drivers = fleet();

    let by_name = SearchLogic::run(
        &drivers,
        &SearchQuery {
            term: Some("park ji".into()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&by_name), vec!["DRV-002"]);

    let by_id = SearchLogic::run(
        &drivers,
        &SearchQuery {
            term: Some("drv-017".into()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&by_id), vec!["DRV-017"]);
}

#[test]
fn test_risk_type_filter_with_ties_by_id() {
    let drivers = fleet();
    let query = SearchQuery {
        risk_type: Some(RiskType::Drowsiness),
        ..Default::default()
    };

    let out = SearchLogic::run(&drivers, &query);

    assert_eq!(
        ids(&out),
        vec!["DRV-008", "DRV-024", "DRV-027", "DRV-011", "DRV-014", "DRV-030"]
    );
}

#[test]
fn test_status_filter_and_recent_sort() {
    let drivers = fleet();
    let query = SearchQuery {
        status: Some(Status::Critical),
        sort: SortKey::Recent,
        ..Default::default()
    };

    let out = SearchLogic::run(&drivers, &query);

    assert_eq!(out.len(), 7);
    assert_eq!(&ids(&out)[..2], &["DRV-012", "DRV-004"]);
    assert!(out.iter().all(|d| d.status == Status::Critical));
}

#[test]
fn test_no_match_is_empty() {
    let drivers = fleet();
    let query = SearchQuery {
        term: Some("nowhere-at-all".into()),
        ..Default::default()
    };
    assert!(SearchLogic::run(&drivers, &query).is_empty());
}

#[test]
fn test_select_keeps_requested_order() {
    let drivers = fleet();
    let wanted = vec!["drv-010".to_string(), "DRV-404".into(), "DRV-002".into()];

    let out = SearchLogic::select(&drivers, &wanted);

    assert_eq!(ids(&out), vec!["DRV-010", "DRV-002"]);
}

#[test]
fn test_fleet_stats() {
    let drivers = fleet();
    let stats = AnalyticsLogic::stats(&drivers, 70);

    assert_eq!(stats.total, 30);
    assert_eq!(
        stats.by_status,
        vec![
            (Status::Normal, 8),
            (Status::Caution, 8),
            (Status::Danger, 7),
            (Status::Critical, 7),
        ]
    );
    assert_eq!(stats.driving_now, 15);
    assert_eq!(stats.average_risk, 59);
    assert_eq!(stats.high_risk, 14);
    assert_eq!(
        stats.by_risk_type,
        vec![
            (RiskType::Intoxication, 6),
            (RiskType::Drowsiness, 6),
            (RiskType::Speeding, 5),
            (RiskType::Reckless, 5),
        ]
    );
}

#[test]
fn test_stats_on_empty_fleet() {
    let stats = AnalyticsLogic::stats(&[], 70);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_risk, 0);
    assert_eq!(stats.high_risk, 0);
}

#[test]
fn test_top_drivers() {
    let drivers = fleet();
    let top = AnalyticsLogic::top_drivers(&drivers, 5);

    let got: Vec<(&str, u8)> = top.iter().map(|t| (t.id.as_str(), t.score)).collect();
    assert_eq!(
        got,
        vec![
            ("DRV-009", 89),
            ("DRV-021", 89),
            ("DRV-005", 82),
            ("DRV-017", 82),
            ("DRV-029", 82),
        ]
    );

    let first = &top[0];
    assert_eq!(first.rank, 1);
    assert_eq!(first.total_trips, 32);
    assert_eq!(first.safety_days, 1);
    assert_eq!(first.no_violations, 32);
}

#[test]
fn test_top_drivers_limit_larger_than_pool() {
    let drivers = fleet();
    let top = AnalyticsLogic::top_drivers(&drivers, 100);
    assert_eq!(top.len(), 8);
    assert_eq!(top.last().unwrap().rank, 8);
}
