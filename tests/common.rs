#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Day every CLI test pretends is today.
pub const TODAY: &str = "2025-06-15";

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabit")
}

/// Isolated environment: own config dir and own SQLite file in temp dir.
pub struct TestEnv {
    pub home: PathBuf,
    pub db_path: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("rhabit_test_{}", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");

        let db_path = home.join("rhabit.sqlite").to_string_lossy().to_string();
        Self { home, db_path }
    }

    /// Command with --db, the fixed day and the isolated config dir.
    pub fn cmd(&self) -> Command {
        let mut c = rhb();
        c.env("RHABIT_HOME", &self.home)
            .env_remove("RHABIT_LOG")
            .args(["--db", &self.db_path, "--today", TODAY]);
        c
    }

    /// Same as [`cmd`](Self::cmd), acting as `user`.
    pub fn as_user(&self, user: &str) -> Command {
        let mut c = self.cmd();
        c.args(["--user", user]);
        c
    }

    /// Acting as `user` on the real wall clock in time zone `tz` (no `--today`).
    pub fn wall_clock_as(&self, user: &str, tz: &str) -> Command {
        let mut c = rhb();
        c.env("RHABIT_HOME", &self.home)
            .env("TZ", tz)
            .env_remove("RHABIT_LOG")
            .args(["--db", &self.db_path, "--user", user]);
        c
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn register(&self, user: &str) {
        self.cmd()
            .args(["user", "register", user])
            .assert()
            .success();
    }

    /// Create a habit and return its id (ids start at 1 in a fresh DB).
    pub fn add_habit(&self, user: &str, name: &str, habit_type: &str, since: Option<&str>) -> i64 {
        let mut c = self.as_user(user);
        c.args(["habit", "add", name, "--type", habit_type]);
        if let Some(s) = since {
            c.args(["--since", s]);
        }
        c.assert().success();

        let out = self
            .as_user(user)
            .args(["habit", "list", "--json"])
            .output()
            .expect("habit list");
        let habits: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json list");
        habits
            .as_array()
            .and_then(|a| a.iter().find(|h| h["name"] == name))
            .and_then(|h| h["id"].as_i64())
            .expect("created habit in list")
    }

    pub fn track(&self, user: &str, habit: i64, date: &str) {
        self.as_user(user)
            .args(["track", &habit.to_string(), date])
            .assert()
            .success();
    }

    pub fn stats(&self, user: &str, habit: i64) -> serde_json::Value {
        let out = self
            .as_user(user)
            .args(["stats", &habit.to_string(), "--json"])
            .output()
            .expect("stats");
        assert!(out.status.success(), "stats failed: {:?}", out);
        serde_json::from_slice(&out.stdout).expect("stats json")
    }
}

/// `TODAY` shifted back by `n` days, formatted YYYY-MM-DD.
pub fn days_ago(n: i64) -> String {
    let today = chrono::NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").expect("TODAY");
    (today - chrono::Duration::days(n)).to_string()
}
