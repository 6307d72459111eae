use chrono::NaiveDate;
use predicates::str::contains;
use rcheckin::errors::AppError;
use rcheckin::export::{ExportFormat, ExportLogic, HEADERS};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{TestEnv, sample_records};

fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rcheckin_{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_default_file_name() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");
    assert_eq!(
        ExportFormat::Xlsx.default_file_name(day),
        "construction-checkins-2024-03-05.xlsx"
    );
    assert_eq!(
        ExportFormat::Csv.default_file_name(day),
        "construction-checkins-2024-03-05.csv"
    );
}

#[test]
fn test_csv_has_fixed_columns() {
    let path = temp_out("lib_csv", "csv");
    ExportLogic::export(&sample_records(), ExportFormat::Csv, &path, false).expect("export");

    let content = fs::read_to_string(&path).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(HEADERS.join(",").as_str()));
    assert_eq!(lines.count(), 5);
    assert!(content.contains("Alice Smith,03/05/2024,08:00 AM,Tuesday,40.7128,-74.006"));
    assert!(content.contains("\"12 Main St, New York\""));
}

#[test]
fn test_empty_csv_still_has_header() {
    let path = temp_out("lib_empty_csv", "csv");
    ExportLogic::export(&[], ExportFormat::Csv, &path, false).expect("export");

    let content = fs::read_to_string(&path).expect("read csv");
    assert_eq!(content.trim_end(), HEADERS.join(","));
}

#[test]
fn test_json_rows_use_column_names() {
    let path = temp_out("lib_json", "json");
    ExportLogic::export(&sample_records(), ExportFormat::Json, &path, false).expect("export");

    let rows: Value = serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 5);

    let first = rows[0].as_object().expect("object");
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    for h in HEADERS {
        assert!(keys.contains(&h), "missing column {h}");
    }
    assert_eq!(first["Employee Name"], "Alice Smith");
}

#[test]
fn test_xlsx_is_written() {
    let path = temp_out("lib_xlsx", "xlsx");
    ExportLogic::export(&sample_records(), ExportFormat::Xlsx, &path, false).expect("export");

    let bytes = fs::read(&path).expect("read xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_relative_path_is_rejected() {
    let err = ExportLogic::export(
        &sample_records(),
        ExportFormat::Csv,
        std::path::Path::new("relative.csv"),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Export(_)));
    assert!(err.to_string().starts_with("Failed to export data:"));
}

#[test]
fn test_force_overwrites_existing_file() {
    let path = temp_out("lib_force", "csv");
    fs::write(&path, "old").expect("seed file");

    ExportLogic::export(&sample_records(), ExportFormat::Csv, &path, true).expect("export");
    let content = fs::read_to_string(&path).expect("read");
    assert!(content.starts_with("Employee Name"));
}

#[test]
fn test_cli_export_csv_filtered() {
    let env = TestEnv::ready("export_csv_filtered");
    let out = env.out_path("smith.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out, "--name", "smith"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().all(|l| l.starts_with("Alice Smith,")));
    // newest first
    assert!(lines[1].contains("03/19/2024"));
}

#[test]
fn test_cli_export_empty_result_warns() {
    let env = TestEnv::ready("export_empty");
    let out = env.out_path("none.json");

    env.cmd()
        .args(["export", "--format", "json", "--file", &out, "--name", "nobody"])
        .assert()
        .success()
        .stdout(contains("writing headers only"));

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    assert_eq!(rows.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_cli_export_xlsx_default() {
    let env = TestEnv::ready("export_xlsx");
    let out = env.out_path("all.xlsx");

    env.cmd()
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(fs::read(&out).expect("read").starts_with(b"PK"));
}

#[test]
fn test_cli_export_refuses_overwrite_without_force() {
    let env = TestEnv::ready("export_no_overwrite");
    let out = env.out_path("keep.csv");
    fs::write(&out, "keep me").expect("seed");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Failed to export data"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_cli_export_requires_login() {
    let env = TestEnv::new("export_requires_login");
    env.import_sample();
    let out = env.out_path("denied.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));

    assert!(!std::path::Path::new(&out).exists());
}
