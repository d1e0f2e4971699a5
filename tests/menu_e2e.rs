use assert_cmd::Command;
use predicates::prelude::*;

fn parklot(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("parklot").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[test]
fn test_arrival_status_departure() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .write_stdin("1\nABC123\n2024-01-01\nno\n3\nABC123\n2\nABC123\n2024-01-11\n3\nABC123\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Car ABC123 entered at 2024-01-01"))
        .stdout(predicate::str::contains(
            "Car ABC123 is currently parked since 2024-01-01",
        ))
        .stdout(predicate::str::contains("Number of days: 10 days"))
        .stdout(predicate::str::contains("Cost: 1200 kr"))
        .stdout(predicate::str::contains("Car ABC123 is not parked at the moment."))
        .stdout(predicate::str::contains("Exiting program..."));
}

#[test]
fn test_history_table() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .write_stdin(
            "1\nEV0001\n2024-01-01\nyes\n2\nEV0001\n2024-02-01\n1\nABC123\n2024-01-03\nno\n4\nq\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Parking history sorted by entrance date"))
        .stdout(predicate::str::contains("2450kr"))
        .stdout(predicate::str::contains("Charging used"));
}

#[test]
fn test_invalid_option() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .write_stdin("9\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}

#[test]
fn test_capacity_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .arg("--capacity")
        .arg("1")
        .write_stdin("1\nAAA111\n2024-01-01\nno\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parking lot is full."));
}

#[test]
fn test_eof_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting program..."));
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "lot_name": "HARBOUR LOT", "currency": "SEK" }"#,
    )
    .unwrap();

    parklot(temp_dir.path())
        .write_stdin("1\nABC123\n2024-01-01\nno\n2\nABC123\n2024-01-02\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# HARBOUR LOT"))
        .stdout(predicate::str::contains("Cost: 120 SEK"));
}

#[test]
fn test_init_then_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("conf");

    parklot(&config_dir)
        .arg("--unbounded")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config"));
    assert!(config_dir.join("config.json").exists());

    parklot(&config_dir)
        .arg("config")
        .arg("capacity")
        .assert()
        .success()
        .stdout(predicate::str::contains("unbounded"));

    parklot(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("later-rate = 50"))
        .stdout(predicate::str::contains("max-stay-days = 30"));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    parklot(temp_dir.path())
        .arg("--capacity")
        .arg("0")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}
