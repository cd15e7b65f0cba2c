use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{fixture, rbm, setup_test_config, status_at, temp_out, temp_roster, FIXTURE_DATE};

#[test]
fn test_status_text_panels() {
    let cfg = setup_test_config("status_text");

    status_at(&cfg, "10:05")
        .assert()
        .success()
        .stdout(contains("escala.csv"))
        .stdout(contains("10:05:00"))
        .stdout(contains("On break now (1)"))
        .stdout(contains("Next to break (1)"))
        .stdout(contains("Recently ended (1)"))
        .stdout(contains("Ana Silva"))
        .stdout(contains("Bruno Costa"))
        .stdout(contains("Carla Souza"))
        .stdout(contains("Davi Lima").not())
        .stdout(contains("Eva Rocha").not());
}

#[test]
fn test_status_csv_partition() {
    let cfg = setup_test_config("status_csv");

    let out = status_at(&cfg, "10:05")
        .args(["--format", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "bucket,operator,kind,start,end",
            "on_break,Ana Silva,D1,10:00,10:10",
            "upcoming,Bruno Costa,D1,10:12,10:22",
            "recently_ended,Carla Souza,D1,09:45,09:55",
        ]
    );
}

#[test]
fn test_status_json_snapshot() {
    let cfg = setup_test_config("status_json");

    let out = status_at(&cfg, "10:05")
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["now"], "2025-03-10T10:05:00");
    assert_eq!(v["on_break"][0]["operator_name"], "Ana Silva");
    assert_eq!(v["on_break"][0]["break_item"]["kind"], "first_rest");
    assert_eq!(v["on_break"][0]["break_item"]["end"], "2025-03-10T10:10:00");
    assert_eq!(v["upcoming"].as_array().unwrap().len(), 1);
    assert_eq!(v["recently_ended"].as_array().unwrap().len(), 1);
}

#[test]
fn test_status_exact_end_is_in_no_panel() {
    let cfg = setup_test_config("status_exact_end");

    // Ana's first rest ends at 10:10; Carla's ended 15 minutes earlier at 09:55
    status_at(&cfg, "10:10")
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(contains("Ana Silva").not())
        .stdout(contains("Carla Souza").not())
        .stdout(contains("upcoming,Bruno Costa"));
}

#[test]
fn test_status_day_off() {
    let cfg = setup_test_config("status_day_off");

    status_at(&cfg, "10:05")
        .args(["--format", "csv", "--off", "Bruno Costa@10:12"])
        .assert()
        .success()
        .stdout(contains("Bruno Costa").not())
        .stdout(contains("on_break,Ana Silva"));
}

#[test]
fn test_status_day_off_unknown_name_is_ignored() {
    let cfg = setup_test_config("status_day_off_unknown");

    status_at(&cfg, "10:05")
        .args(["--format", "csv", "--off", "Zé Ninguém@08:00"])
        .assert()
        .success()
        .stdout(contains("upcoming,Bruno Costa"));
}

#[test]
fn test_status_day_off_malformed() {
    let cfg = setup_test_config("status_day_off_bad");

    status_at(&cfg, "10:05")
        .args(["--off", "Bruno Costa 10:12"])
        .assert()
        .failure()
        .stderr(contains("Invalid day-off value"));
}

#[test]
fn test_status_invalid_at() {
    let cfg = setup_test_config("status_bad_at");

    status_at(&cfg, "10h05")
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 10h05"));
}

#[test]
fn test_status_output_file() {
    let cfg = setup_test_config("status_output");
    let out = temp_out("status_output", "csv");

    status_at(&cfg, "10:05")
        .args(["--format", "csv", "--output", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("written"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("bucket,operator,kind,start,end"));
    assert!(content.contains("recently_ended,Carla Souza"));
}

#[test]
fn test_status_invalid_time_in_file() {
    let cfg = setup_test_config("status_invalid_time");
    let roster = temp_roster(
        "invalid_time",
        "NOME,1º DESCANSO,ALIMENTAÇÃO INI,2º DESCANSO\nAna,10:00,12:00,15:00\nBia,10:00,1200,15:00\n",
    );

    rbm()
        .args(["--config", &cfg, "status", &roster, "--date", FIXTURE_DATE, "--at", "10:05"])
        .assert()
        .failure()
        .stderr(contains("invalid time format"))
        .stderr(contains("1200"))
        .stdout(contains("Ana").not());
}

#[test]
fn test_status_missing_columns() {
    let cfg = setup_test_config("status_missing_cols");
    let roster = temp_roster("missing_cols", "NOME,1º DESCANSO\nAna,10:00\n");

    rbm()
        .args(["--config", &cfg, "status", &roster, "--at", "10:05"])
        .assert()
        .failure()
        .stderr(contains("ALIMENTAÇÃO INI"))
        .stderr(contains("2º DESCANSO"));
}

#[test]
fn test_status_empty_file() {
    let cfg = setup_test_config("status_empty");
    let roster = temp_roster("empty", "NOME,1º DESCANSO,ALIMENTAÇÃO INI,2º DESCANSO\n\n   \n");

    rbm()
        .args(["--config", &cfg, "status", &roster, "--at", "10:05"])
        .assert()
        .failure()
        .stderr(contains("empty or in the wrong format"));
}

#[test]
fn test_status_missing_file() {
    let cfg = setup_test_config("status_no_file");

    rbm()
        .args(["--config", &cfg, "status", &fixture("does_not_exist.csv")])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_status_windows_from_config() {
    let cfg = setup_test_config("status_cfg_windows");
    fs::write(&cfg, "upcoming_window_minutes: 60\nrecent_window_minutes: 5\n").unwrap();

    // with a one-hour look-ahead Davi (11:00) becomes upcoming; with a
    // five-minute look-behind Carla (ended 09:55) is gone
    status_at(&cfg, "10:05")
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(contains("upcoming,Davi Lima"))
        .stdout(contains("Carla Souza").not());
}

#[test]
fn test_status_rejects_oversized_window() {
    let cfg = setup_test_config("status_cfg_huge_window");
    fs::write(&cfg, "recent_window_minutes: 9000000000000000\n").unwrap();

    status_at(&cfg, "10:05")
        .args(["--format", "csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn test_status_output_refuses_existing_file() {
    let cfg = setup_test_config("status_output_exists");
    let out = temp_out("status_output_exists", "csv");
    fs::write(&out, "keep me").unwrap();

    status_at(&cfg, "10:05")
        .args(["--format", "csv", "--output", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    status_at(&cfg, "10:05")
        .args(["--format", "csv", "--output", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("bucket,"));
}
