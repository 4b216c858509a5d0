#![allow(dead_code)]
use arbeitszeit::core::state::AppState;
use arbeitszeit::db::store::Store;
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn arb() -> Command {
    cargo_bin_cmd!("arbeitszeit")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_arbeitszeit.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    arb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one session through the CLI with a pinned clock.
pub fn track(db_path: &str, start: &str, stop: &str, category: &str, note: &str) {
    arb()
        .args(["--db", db_path, "--now", start, "start", "-c", category, "-n", note])
        .assert()
        .success();
    arb()
        .args(["--db", db_path, "--now", stop, "stop"])
        .assert()
        .success();
}

/// Fresh DB with three sessions on 2026-01-05 and 2026-01-06.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    track(db_path, "2026-01-05T08:00:00Z", "2026-01-05T09:30:00Z", "Unterricht", "Mathe 7b");
    track(db_path, "2026-01-05T13:00:00Z", "2026-01-05T13:45:00Z", "Korrekturen", "Deutsch 8a");
    track(db_path, "2026-01-06T10:00:00Z", "2026-01-06T10:20:00Z", "Unterricht", "");
}

/// Read the persisted documents back through the library.
pub fn load_state(db_path: &str) -> AppState {
    let store = Store::open(db_path).expect("open store");
    AppState::load(&store).expect("load state")
}
