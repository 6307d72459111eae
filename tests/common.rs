#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use rcheckin::models::CheckinRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret-2812";

pub fn rcc() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Isolated HOME with its own config file, session file and cache.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("rcheckin_test_{}", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(home.join(".rcheckin")).expect("create config dir");
        fs::create_dir_all(home.join("rcheckin")).expect("create appdata dir");

        let db = home.join("cache.sqlite").to_string_lossy().to_string();

        let env = Self { home, db };
        env.write_config("24");
        env
    }

    /// Rewrite the config file with another `session_timeout_hours` value.
    pub fn write_config(&self, session_timeout_hours: &str) {
        let yaml = format!(
            "database: '{}'\nsource: cache\nauth:\n  provider: local\n  username: {}\n  password: {}\nsession_timeout_hours: {}\nlogin_delay_ms: 0\n",
            self.db, ADMIN_USER, ADMIN_PASSWORD, session_timeout_hours
        );
        // Linux/macOS read ~/.rcheckin, Windows reads %APPDATA%/rcheckin
        fs::write(self.home.join(".rcheckin").join("rcheckin.conf"), &yaml).expect("write config");
        fs::write(self.home.join("rcheckin").join("rcheckin.conf"), &yaml).expect("write config");
    }

    /// Command bound to this environment, with `--db` pointing at the test cache.
    pub fn cmd(&self) -> Command {
        let mut cmd = rcc();
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env_remove("SUPABASE_URL")
            .env_remove("SUPABASE_ANON_KEY")
            .env_remove("RCHECKIN_ADMIN_USERNAME")
            .env_remove("RCHECKIN_ADMIN_PASSWORD")
            .args(["--db", &self.db]);
        cmd
    }

    pub fn session_file(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.home.join("rcheckin").join("construction_admin_session.json")
        } else {
            self.home.join(".rcheckin").join("construction_admin_session.json")
        }
    }

    /// Path of the config file this platform reads.
    pub fn config_file(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.home.join("rcheckin").join("rcheckin.conf")
        } else {
            self.home.join(".rcheckin").join("rcheckin.conf")
        }
    }

    pub fn out_path(&self, file: &str) -> String {
        self.home.join(file).to_string_lossy().to_string()
    }

    /// Import the sample rows into the cache.
    pub fn import_sample(&self) {
        let path = self.home.join("sample.json");
        fs::write(&path, sample_json()).expect("write sample");

        self.cmd()
            .args(["import", "--file", &path.to_string_lossy()])
            .assert()
            .success();
    }

    pub fn login(&self) {
        self.cmd()
            .args(["login", "--password", ADMIN_PASSWORD])
            .assert()
            .success();
    }

    /// Fresh env with sample data imported and an admin signed in.
    pub fn ready(name: &str) -> Self {
        let env = Self::new(name);
        env.import_sample();
        env.login();
        env
    }
}

/// Five check-ins by three employees, in the shape the hosted table returns.
pub fn sample_json() -> &'static str {
    r#"[
  {
    "id": "a1",
    "employee_name": "Alice Smith",
    "date": "03/05/2024",
    "time": "08:00 AM",
    "day_of_week": "Tuesday",
    "latitude": 40.7128,
    "longitude": -74.006,
    "address": "12 Main St, New York",
    "photo_url": "https://photos.example.com/a1.jpg",
    "created_at": "2024-03-05T08:00:00+00:00"
  },
  {
    "id": "b1",
    "employee_name": "Bob Jones",
    "date": "03/05/2024",
    "time": "08:15 AM",
    "day_of_week": "Tuesday",
    "latitude": 40.7306,
    "longitude": -73.9352,
    "address": "77 Dock Rd, Brooklyn",
    "photo_url": null,
    "created_at": "2024-03-05T08:15:00+00:00"
  },
  {
    "id": "a2",
    "employee_name": "Alice Smith",
    "date": "03/19/2024",
    "time": "08:00 AM",
    "day_of_week": "Tuesday",
    "latitude": 40.7128,
    "longitude": -74.006,
    "address": "12 Main St, New York",
    "photo_url": "https://photos.example.com/a2.jpg",
    "created_at": "2024-03-19T08:00:00+00:00"
  },
  {
    "id": "c1",
    "employee_name": "Carla Alicea",
    "date": "03/20/2024",
    "time": "09:00 AM",
    "day_of_week": "Wednesday",
    "latitude": 40.6782,
    "longitude": -73.9442,
    "address": null,
    "photo_url": "https://photos.example.com/c1.jpg",
    "created_at": "2024-03-20 09:00:00"
  },
  {
    "id": 42,
    "employee_name": "Bob Jones",
    "date": "03/21/2024",
    "time": "07:45 AM",
    "day_of_week": "Thursday",
    "latitude": 40.7306,
    "longitude": -73.9352,
    "address": "77 Dock Rd, Brooklyn",
    "photo_url": "https://photos.example.com/b2.jpg",
    "created_at": "2024-03-21T07:45:00Z"
  }
]"#
}

pub fn sample_records() -> Vec<CheckinRecord> {
    serde_json::from_str(sample_json()).expect("parse sample")
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

/// Minimal record for library tests.
pub fn record(id: &str, name: &str, date: &str, created_at: &str) -> CheckinRecord {
    CheckinRecord {
        id: id.to_string(),
        employee_name: name.to_string(),
        date: date.to_string(),
        time: "08:00 AM".to_string(),
        day_of_week: String::new(),
        latitude: 0.0,
        longitude: 0.0,
        address: String::new(),
        photo_url: String::new(),
        created_at: ts(created_at),
    }
}
