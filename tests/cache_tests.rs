use rcheckin::core::sync::{import_file, sync_cache};
use rcheckin::db::initialize::init_db;
use rcheckin::db::log::load_log;
use rcheckin::db::pool::DbPool;
use rcheckin::db::queries::{count_checkins, load_all_checkins, upsert_checkins};
use rcheckin::errors::{AppError, AppResult};
use rcheckin::models::CheckinRecord;
use rcheckin::store::{CacheStore, MemoryStore, RecordStore};
use std::env;
use std::fs;

mod common;
use common::{record, sample_json, sample_records};

fn ready_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

struct DownStore;

impl RecordStore for DownStore {
    fn label(&self) -> &str {
        "down"
    }

    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>> {
        Err(AppError::Fetch("service unavailable".to_string()))
    }
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = ready_pool();
    init_db(&pool.conn).expect("second init");

    let applied = load_log(&pool.conn)
        .expect("load log")
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn test_cache_round_trips_records_newest_first() {
    let mut pool = ready_pool();
    upsert_checkins(&mut pool.conn, &sample_records()).expect("upsert");

    let loaded = load_all_checkins(&pool.conn).expect("load");
    let ids: Vec<&str> = loaded.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["42", "c1", "a2", "b1", "a1"]);

    let bob = loaded.iter().find(|r| r.id == "b1").expect("b1");
    assert_eq!(bob.photo_url, "");
    let original = sample_records().into_iter().find(|r| r.id == "b1").expect("b1");
    assert_eq!(*bob, original);
}

#[test]
fn test_upsert_replaces_by_id() {
    let mut pool = ready_pool();
    upsert_checkins(&mut pool.conn, &sample_records()).expect("upsert");

    let changed = record("a1", "Alice Smith-Jones", "03/05/2024", "2024-03-05T08:00:00Z");
    upsert_checkins(&mut pool.conn, &[changed]).expect("upsert again");

    assert_eq!(count_checkins(&pool.conn).expect("count"), 5);
    let loaded = load_all_checkins(&pool.conn).expect("load");
    assert!(loaded.iter().any(|r| r.employee_name == "Alice Smith-Jones"));
}

#[test]
fn test_sync_replaces_cache_contents() {
    let mut pool = ready_pool();
    upsert_checkins(
        &mut pool.conn,
        &[record("old", "Gone", "01/01/2024", "2024-01-01T08:00:00Z")],
    )
    .expect("seed");

    let remote = MemoryStore::new(sample_records());
    let n = sync_cache(&remote, &mut pool).expect("sync");

    assert_eq!(n, 5);
    let store = CacheStore::from_pool(pool);
    let ids: Vec<String> = store
        .fetch_all()
        .expect("fetch")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert!(!ids.contains(&"old".to_string()));
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_failed_sync_leaves_cache_untouched() {
    let mut pool = ready_pool();
    upsert_checkins(&mut pool.conn, &sample_records()).expect("seed");

    assert!(sync_cache(&DownStore, &mut pool).is_err());
    assert_eq!(count_checkins(&pool.conn).expect("count"), 5);
}

#[test]
fn test_import_file() {
    let mut path = env::temp_dir();
    path.push("rcheckin_import_test.json");
    fs::write(&path, sample_json()).expect("write sample");

    let mut pool = ready_pool();
    assert_eq!(import_file(&path, &mut pool).expect("import"), 5);

    fs::write(&path, "{ not an array").expect("write broken");
    assert!(import_file(&path, &mut pool).is_err());
    assert_eq!(count_checkins(&pool.conn).expect("count"), 5);
}
