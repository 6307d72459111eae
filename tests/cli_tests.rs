use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{ADMIN_PASSWORD, TestEnv};

fn json_stdout(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find(['[', '{']).expect("json in output");
    serde_json::from_str(&stdout[start..]).expect("valid json")
}

#[test]
fn test_list_requires_login() {
    let env = TestEnv::new("list_requires_login");
    env.import_sample();

    env.cmd()
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn test_login_wrong_password_fails() {
    let env = TestEnv::new("login_wrong_password");

    env.cmd()
        .args(["login", "--password", "wrong"])
        .assert()
        .failure()
        .stdout(contains("Signing in..."))
        .stderr(contains("Invalid username or password. Please try again."));

    assert!(!env.session_file().exists());
}

#[test]
fn test_login_wrong_username_fails() {
    let env = TestEnv::new("login_wrong_username");

    env.cmd()
        .args(["login", "--username", "root", "--password", ADMIN_PASSWORD])
        .assert()
        .failure();

    assert!(!env.session_file().exists());
}

#[test]
fn test_login_creates_session_and_status_reports_it() {
    let env = TestEnv::new("login_status");

    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Not signed in"));

    env.cmd()
        .args(["login", "-u", " admin ", "-p", ADMIN_PASSWORD])
        .assert()
        .success()
        .stdout(contains("Signed in as admin"));

    assert!(env.session_file().exists());
    let raw = std::fs::read_to_string(env.session_file()).expect("session file");
    let session: Value = serde_json::from_str(&raw).expect("session json");
    assert_eq!(session["authenticated"], Value::Bool(true));
    assert_eq!(session["token"].as_str().map(str::len), Some(64));

    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Signed in. Session expires at").and(contains("Record source: cache")));

    env.cmd()
        .args(["login", "--password", ADMIN_PASSWORD])
        .assert()
        .success()
        .stdout(contains("Already signed in"));
}

#[test]
fn test_expired_session_is_removed() {
    let env = TestEnv::new("expired_session");
    env.import_sample();

    std::fs::write(
        env.session_file(),
        r#"{"authenticated":true,"timestamp":1000,"expires":2000,"token":"old"}"#,
    )
    .expect("write session");

    env.cmd().args(["list"]).assert().failure();
    assert!(!env.session_file().exists());
}

#[test]
fn test_list_all_newest_first() {
    let env = TestEnv::ready("list_all");

    let output = env.cmd().args(["list", "--json"]).output().expect("run list");
    assert!(output.status.success());

    let rows = json_stdout(&output);
    let ids: Vec<&str> = rows
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["42", "c1", "a2", "b1", "a1"]);

    assert_eq!(rows[0]["when"], "03/21/2024 • 07:45 AM");
    assert_eq!(
        rows[0]["map_url"],
        "https://maps.google.com/?q=40.7306,-73.9352"
    );
}

#[test]
fn test_list_table_shows_counts() {
    let env = TestEnv::ready("list_table");

    env.cmd()
        .args(["list", "--name", "ali"])
        .assert()
        .success()
        .stdout(
            contains("(of 5 from cache)")
                .and(contains("Alice Smith"))
                .and(contains("Carla Alicea"))
                .and(contains("Bob Jones").not()),
        );
}

#[test]
fn test_list_filters_by_date() {
    let env = TestEnv::ready("list_date");

    let output = env
        .cmd()
        .args(["list", "--date", "2024-03-05", "--json"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let rows = json_stdout(&output);
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["when"].as_str().unwrap().starts_with("03/05/2024")));
}

#[test]
fn test_list_invalid_date_shows_nothing() {
    let env = TestEnv::ready("list_invalid_date");

    env.cmd()
        .args(["list", "--date", "2024-13-01"])
        .assert()
        .success()
        .stdout(contains("not a valid date").and(contains("No check-in records found.")));
}

#[test]
fn test_show_record() {
    let env = TestEnv::ready("show_record");

    env.cmd()
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(
            contains("Bob Jones")
                .and(contains("77 Dock Rd, Brooklyn"))
                .and(contains("40.730600, -73.935200"))
                .and(contains("https://maps.google.com/?q=40.7306,-73.9352")),
        );

    env.cmd()
        .args(["show", "c1"])
        .assert()
        .success()
        .stdout(contains("--"));

    env.cmd()
        .args(["show", "zzz"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_stats_json() {
    let env = TestEnv::ready("stats_json");

    let output = env.cmd().args(["stats", "--json"]).output().expect("run stats");
    assert!(output.status.success());

    let stats = json_stdout(&output);
    assert_eq!(stats["total_employees"], 3);
    assert_eq!(stats["total_checkins"], 5);

    let employees = stats["employees"].as_array().expect("array");
    let names: Vec<&str> = employees.iter().filter_map(|e| e["name"].as_str()).collect();
    // newest record first in the store: Bob is met before Alice
    assert_eq!(names, vec!["Bob Jones", "Alice Smith", "Carla Alicea"]);

    let pct: Vec<u64> = employees
        .iter()
        .filter_map(|e| e["percentage"].as_u64())
        .collect();
    assert_eq!(pct, vec![40, 40, 20]);
    assert_eq!(employees[1]["avg_per_week"], "1.0");
    assert_eq!(employees[0]["share_label"], "40% of total check-ins");
}

#[test]
fn test_stats_table() {
    let env = TestEnv::ready("stats_table");

    env.cmd()
        .args(["stats"])
        .assert()
        .success()
        .stdout(
            contains("Total Employees: 3")
                .and(contains("Total Check-ins: 5"))
                .and(contains("20% of total check-ins")),
        );
}

#[test]
fn test_logout_ends_session() {
    let env = TestEnv::ready("logout");

    env.cmd()
        .args(["logout"])
        .assert()
        .success()
        .stdout(contains("Signed out."));

    assert!(!env.session_file().exists());

    env.cmd()
        .args(["stats"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));

    env.cmd()
        .args(["logout"])
        .assert()
        .success()
        .stdout(contains("No active session."));
}

#[test]
fn test_remote_source_without_url_fails() {
    let env = TestEnv::ready("remote_unconfigured");

    env.cmd()
        .args(["--source", "remote", "list"])
        .assert()
        .failure()
        .stderr(contains("not configured"));
}

#[test]
fn test_import_reports_counts() {
    let env = TestEnv::new("import_counts");
    env.import_sample();

    let path = env.home.join("sample.json");
    env.cmd()
        .args(["import", "--file", &path.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Imported 5 records (5 in cache)"));
}

#[test]
fn test_log_print_shows_audit_entries() {
    let env = TestEnv::ready("log_print");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &env.out_path("log.csv")])
        .assert()
        .success();

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("import")
                .and(contains("login"))
                .and(contains("export"))
                .and(contains("migration_applied")),
        );
}

#[test]
fn test_config_print_masks_password() {
    let env = TestEnv::new("config_print");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("[REDACTED]").and(contains(ADMIN_PASSWORD).not()));
}

#[test]
fn test_db_info() {
    let env = TestEnv::new("db_info");
    env.import_sample();

    env.cmd()
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees"));
}

#[test]
fn test_config_check_and_migrate() {
    let env = TestEnv::new("config_migrate");

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("store")));

    env.cmd()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    // user values survive the migration
    env.login();
}

#[test]
fn test_init_does_not_write_env_secrets_to_config() {
    let env = TestEnv::new("init_env_secrets");

    env.cmd()
        .env("SUPABASE_ANON_KEY", "ENV-ONLY-ANON-KEY")
        .env("RCHECKIN_ADMIN_PASSWORD", "ENV-ONLY-PASSWORD")
        .args(["init"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(env.config_file()).expect("read config");
    assert!(!saved.contains("ENV-ONLY-ANON-KEY"));
    assert!(!saved.contains("ENV-ONLY-PASSWORD"));
    assert!(saved.contains(ADMIN_PASSWORD));
}

#[test]
fn test_huge_session_timeout_is_a_config_error() {
    let env = TestEnv::new("huge_session_timeout");
    env.write_config("9000000000000000");

    env.cmd()
        .args(["status"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error").and(contains("too large")));
}

#[test]
fn test_non_positive_session_timeout_is_rejected() {
    let env = TestEnv::new("negative_session_timeout");
    env.write_config("-5");

    env.cmd()
        .args(["login", "--password", ADMIN_PASSWORD])
        .assert()
        .code(1)
        .stderr(contains("Configuration error").and(contains("greater than 0")));

    assert!(!env.session_file().exists());

    env.write_config("0");
    env.cmd().args(["list"]).assert().code(1).stderr(contains("greater than 0"));
}

#[test]
fn test_first_run_json_output_is_not_mixed_with_migration_notices() {
    let env = TestEnv::new("json_first_run");
    // a valid session, but the cache has never been opened
    std::fs::write(
        env.session_file(),
        r#"{"authenticated":true,"timestamp":1,"expires":9999999999999,"token":"t"}"#,
    )
    .expect("write session");

    let output = env.cmd().args(["list", "--json"]).output().expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Value = serde_json::from_str(&stdout).expect("stdout is only json");
    assert_eq!(rows, Value::Array(vec![]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Migration applied"));
}
