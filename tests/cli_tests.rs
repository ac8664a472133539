use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rtg, temp_file, write_page};

/// Point every run at a config file that does not exist, so defaults apply
fn no_config(name: &str) -> String {
    temp_file(name, "conf")
}

#[test]
fn test_check_accepts_later_logout() {
    let cfg = no_config("check_ok");
    rtg()
        .args(["--config", &cfg, "check", "09:00", "17:00"])
        .assert()
        .success()
        .stdout(contains("Accepted"));
}

#[test]
fn test_check_rejects_earlier_logout() {
    let cfg = no_config("check_reversed");
    rtg()
        .args(["--config", &cfg, "check", "17:00", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Log Out time must be later than Log In time!"));
}

#[test]
fn test_check_rejects_equal_times_with_options() {
    let cfg = no_config("check_equal");
    rtg()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Submission rejected"));
}

#[test]
fn test_check_rejects_unpadded_time() {
    let cfg = no_config("check_unpadded");
    rtg()
        .args(["--config", &cfg, "check", "9:00", "17:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9:00"));
}

#[test]
fn test_today_prints_single_day_window() {
    let cfg = no_config("today");
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    rtg()
        .args(["--config", &cfg, "today"])
        .assert()
        .success()
        .stdout(contains(format!("min: {}", today)).and(contains(format!("max: {}", today))));
}

#[test]
fn test_simulate_accepts_valid_page() {
    let cfg = no_config("simulate_ok");
    let page = write_page("simulate_ok", "08:30", "17:15");
    rtg()
        .args(["--config", &cfg, "simulate", "--page", &page, "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("#date min=2025-09-01 max=2025-09-01"))
        .stdout(contains("Submission accepted"));
}

#[test]
fn test_simulate_rejects_and_alerts() {
    let cfg = no_config("simulate_reject");
    let page = write_page("simulate_reject", "12:00", "12:00");
    rtg()
        .args(["--config", &cfg, "simulate", "--page", &page])
        .assert()
        .failure()
        .stderr(contains("[alert]"))
        .stderr(contains("Log Out time must be later than Log In time!"));
}

#[test]
fn test_simulate_missing_date_control() {
    let cfg = no_config("simulate_missing");
    let page = temp_file("simulate_missing", "yaml");
    fs::write(
        &page,
        "elements:\n  login-time: { value: \"09:00\" }\n  logout-time: { value: \"10:00\" }\n",
    )
    .unwrap();

    rtg()
        .args(["--config", &cfg, "simulate", "--page", &page])
        .assert()
        .failure()
        .stderr(contains("Required form control not found: #date"));
}

#[test]
fn test_simulate_uses_configured_ids() {
    let cfg = temp_file("simulate_custom_ids", "conf");
    fs::write(&cfg, "date_field: day\nlogin_field: start\nlogout_field: end\n").unwrap();

    let page = temp_file("simulate_custom_ids", "yaml");
    fs::write(
        &page,
        "elements:\n  day: {}\n  start: { value: \"07:00\" }\n  end: { value: \"15:00\" }\n",
    )
    .unwrap();

    rtg()
        .args(["--config", &cfg, "simulate", "--page", &page, "--date", "2025-02-28"])
        .assert()
        .success()
        .stdout(contains("#day min=2025-02-28"));
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_file("init_print", "conf");

    rtg().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    rtg()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_field: date"))
        .stdout(contains("logout_field: logout-time"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = temp_file("init_test_mode", "conf");
    rtg()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(fs::metadata(&cfg).is_err());
}
