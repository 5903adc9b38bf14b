mod common;
use common::{fw, fw_at, temp_config};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_help_lists_commands() {
    fw().arg("--help")
        .assert()
        .success()
        .stdout(contains("toggle"))
        .stdout(contains("watch"))
        .stdout(contains("alerts"));
}

#[test]
fn test_list_shows_whole_fleet() {
    fw_at("cli_list")
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Drivers (30)"))
        .stdout(contains("DRV-001"))
        .stdout(contains("DRV-030"));
}

#[test]
fn test_list_limit_keeps_highest_risk() {
    fw_at("cli_list_limit")
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("DRV-008"))
        .stdout(contains("DRV-024"))
        .stdout(contains("DRV-004").not());
}

#[test]
fn test_search_by_location() {
    fw_at("cli_search")
        .args(["search", "songdo"])
        .assert()
        .success()
        .stdout(contains("Search results (1)"))
        .stdout(contains("DRV-020"))
        .stdout(contains("Incheon Yeonsu-gu Songdo-dong"));
}

#[test]
fn test_search_without_match() {
    fw_at("cli_search_none")
        .args(["search", "atlantis"])
        .assert()
        .success()
        .stdout(contains("No drivers match the search."));
}

#[test]
fn test_show_includes_running_session() {
    fw_at("cli_show")
        .args(["show", "DRV-001"])
        .assert()
        .success()
        .stdout(contains("Kim Minsu (DRV-001)"))
        .stdout(contains("Today          : 1h 10m (70 min)"))
        .stdout(contains("This month     : 25h 10m (1510 min)"))
        .stdout(contains("Current session: 10m (10 min)"));
}

#[test]
fn test_live_readout() {
    fw_at("cli_live")
        .args(["live", "DRV-001"])
        .assert()
        .success()
        .stdout(contains(
            "DRV-001 live: today 70 min (1h 10m) | month 1510 min (25h 10m) | session 10 min",
        ));
}

#[test]
fn test_toggle_resting_driver() {
    fw_at("cli_toggle")
        .args(["toggle", "DRV-002"])
        .assert()
        .success()
        .stdout(contains("DRV-002 Park Jiyoung: resting → driving"))
        .stdout(contains("Stored: today 89 min | month 1553 min"))
        .stdout(contains("Accrued").not());
}

#[test]
fn test_toggle_driving_driver_accrues() {
    fw_at("cli_toggle_stop")
        .args(["toggle", "DRV-003"])
        .assert()
        .success()
        .stdout(contains("driving → resting"))
        .stdout(contains("Accrued 84 min"))
        .stdout(contains("Stored: today 202 min | month 1690 min"));
}

#[test]
fn test_unknown_driver_fails() {
    fw_at("cli_unknown")
        .args(["toggle", "DRV-999"])
        .assert()
        .failure()
        .stderr(contains("Unknown driver: DRV-999"));
}

#[test]
fn test_bad_clock_value_fails() {
    fw().args(["--config", &temp_config("cli_bad_clock"), "--clock", "yesterday", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_advance_requires_pinned_clock() {
    fw().args(["--config", &temp_config("cli_advance"), "advance", "5"])
        .assert()
        .failure()
        .stderr(contains("advance needs a pinned clock"));
}

#[test]
fn test_update_rejects_out_of_range_level() {
    fw_at("cli_update_bad")
        .args(["update", "DRV-002", "--risk-level", "150"])
        .assert()
        .failure()
        .stderr(contains("Invalid risk level: 150"));
}

#[test]
fn test_shell_session_accrues_driving_time() {
    fw_at("cli_shell")
        .arg("shell")
        .write_stdin(
            "# start a shift\n\
             toggle DRV-002\n\
             advance 45\n\
             live DRV-002\n\
             toggle DRV-002\n\
             exit\n\
             live DRV-001\n",
        )
        .assert()
        .success()
        .stdout(contains("resting → driving"))
        .stdout(contains("Clock is now 2026-01-12 09:45Z"))
        .stdout(contains(
            "DRV-002 live: today 134 min (2h 14m) | month 1598 min (26h 38m) | session 45 min",
        ))
        .stdout(contains("Accrued 45 min"))
        .stdout(contains("Stored: today 134 min | month 1598 min"))
        // nothing after `exit` runs
        .stdout(contains("DRV-001 live").not());
}

#[test]
fn test_shell_keeps_going_after_errors() {
    fw_at("cli_shell_errors")
        .arg("shell")
        .write_stdin("toggle DRV-999\nfrobnicate\nupdate DRV-005 --location 'Hanam Misa-dong'\nshow DRV-005\n")
        .assert()
        .success()
        .stderr(contains("Unknown driver: DRV-999"))
        .stdout(contains("DRV-005 updated"))
        .stdout(contains("Location       : Hanam Misa-dong"));
}

#[test]
fn test_shell_alert_flow() {
    fw_at("cli_shell_alerts")
        .arg("shell")
        .write_stdin(
            "alerts send DRV-002 DRV-010 --message \"Call dispatch\"\n\
             alerts ack AH-004\n\
             alerts resolve AH-004\n\
             alerts list\n",
        )
        .assert()
        .success()
        .stdout(contains("AH-004 sent to DRV-002: Call dispatch"))
        .stdout(contains("AH-005 sent to DRV-010: Call dispatch"))
        .stdout(contains("AH-004 is acknowledged"))
        .stdout(contains("AH-004 is resolved"))
        .stdout(contains("Alert history (5)"));
}

#[test]
fn test_alerts_auto_sends_once_per_driver() {
    fw_at("cli_alerts_auto")
        .args(["alerts", "auto"])
        .assert()
        .success()
        .stdout(contains("Automatic alerts sent (12)"));
}

#[test]
fn test_alerts_auto_disabled_by_config() {
    let cfg = temp_config("cli_alerts_auto_off");
    fs::write(&cfg, "auto_alert: false\n").unwrap();

    fw().args(["--config", &cfg, "alerts", "auto"])
        .assert()
        .success()
        .stdout(contains("Automatic alerts are disabled"));

    fs::remove_file(&cfg).ok();
}

#[test]
fn test_alerts_high_risk() {
    fw_at("cli_high_risk")
        .args(["alerts", "high-risk", "--threshold", "95"])
        .assert()
        .success()
        .stdout(contains("4 driver(s) at or above risk level 95."));
}

#[test]
fn test_notifications_read_all() {
    fw_at("cli_notifications")
        .arg("notifications")
        .assert()
        .success()
        .stdout(contains("Notifications (3 unread)"));

    fw_at("cli_notifications_all")
        .args(["notifications", "--read-all"])
        .assert()
        .success()
        .stdout(contains("3 notification(s) marked as read"))
        .stdout(contains("Notifications (0 unread)"));
}

#[test]
fn test_stats_and_top() {
    fw_at("cli_stats")
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Drivers        : 30"))
        .stdout(contains("Driving now    : 15"))
        .stdout(contains("Average risk   : 59"))
        .stdout(contains("High risk      : 14 (level >= 70)"));

    fw_at("cli_top")
        .args(["top", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("Top 2 drivers"))
        .stdout(contains("DRV-009"))
        .stdout(contains("DRV-021"));
}

#[test]
fn test_init_and_config_check() {
    let cfg = temp_config("cli_init");

    fw().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));
    assert!(fs::metadata(&cfg).is_ok());

    fw().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    fw().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete."));

    fs::write(&cfg, "alert_threshold: 80\n").unwrap();
    fw().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing key 'auto_alert'"));

    fs::remove_file(&cfg).ok();
}

#[test]
fn test_log_records_toggles_in_session() {
    fw_at("cli_log")
        .arg("shell")
        .write_stdin("toggle DRV-002\nlog --print\n")
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("started driving"));
}

#[test]
fn test_watch_with_fixed_ticks() {
    fw_at("cli_watch")
        .args(["watch", "DRV-001", "--interval-ms", "10", "--ticks", "2"])
        .assert()
        .success()
        .stdout(contains("DRV-001 live: today 70 min").count(2));
}

#[test]
fn test_watch_with_zero_ticks_prints_no_readout() {
    fw_at("cli_watch_zero")
        .args(["watch", "DRV-001", "--interval-ms", "10", "--ticks", "0"])
        .assert()
        .success()
        .stdout(contains("after 0 refresh(es)"))
        .stdout(contains("DRV-001 live").not());
}

#[test]
fn test_shell_reports_unclosed_quote_and_continues() {
    fw_at("cli_shell_quote")
        .arg("shell")
        .write_stdin("update DRV-005 --location 'Hanam Misa-dong\nlive DRV-001\n")
        .assert()
        .success()
        .stderr(contains("missing closing quote"))
        .stdout(contains("DRV-005 updated").not())
        .stdout(contains("DRV-001 live: today 70 min"));
}
