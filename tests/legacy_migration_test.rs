use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Journal written by the pre-versioning implementation: a bare array with
/// zero-value end times and no break lists
const LEGACY_JOURNAL: &str = r#"[
  {
    "id": "20230110",
    "start_time": "2023-01-10T09:00:00+01:00",
    "end_time": "2023-01-10T17:00:00+01:00",
    "notes": [{"Contents": "migrated note", "Tags": ["old"]}]
  },
  {
    "id": "20230111",
    "start_time": "2023-01-11T09:00:00+01:00",
    "end_time": "0001-01-01T00:00:00Z",
    "notes": null
  }
]"#;

fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let journal_path = temp.path().join("journal.json");
    let config_path = temp.path().join("worklog.toml");
    fs::write(&journal_path, LEGACY_JOURNAL).unwrap();
    fs::write(
        &config_path,
        format!(
            "journal_path = \"{}\"\nmin_work_time = \"8h\"\nmax_work_time = \"10h\"\nlunch_time = \"1h\"\n",
            journal_path.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();
    (temp, config_path, journal_path)
}

#[test]
fn test_legacy_journal_migrates_on_load() {
    let (_temp, config_path, journal_path) = setup();

    cargo::cargo_bin_cmd!("worklog")
        .args([
            "report",
            "--month",
            "2023-01",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Report: 2023-01"))
        .stdout(predicate::str::contains("migrated note"));

    // Any command that loads the journal rewrites it at the current
    // schema version with materialized break lists
    let raw = fs::read_to_string(&journal_path).unwrap();
    assert!(raw.contains(r#""version":1"#));
    assert!(raw.contains(r#""breaks":[]"#));
    assert!(!raw.starts_with('['));
}

#[test]
fn test_legacy_open_entry_round_trips_as_ongoing() {
    let (_temp, config_path, _journal_path) = setup();

    cargo::cargo_bin_cmd!("worklog")
        .args([
            "break",
            "list",
            "2023-01-11",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No breaks recorded."));
}
