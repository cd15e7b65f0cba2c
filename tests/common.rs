#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference day every fixture time is anchored on.
pub const FIXTURE_DATE: &str = "2025-03-10";

pub fn rbm() -> Command {
    cargo_bin_cmd!("rbreakmonitor")
}

/// Path of a file under tests/fixtures
pub fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbreakmonitor.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write `content` to a roster file inside tempdir and return its path
pub fn temp_roster(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.csv", name));
    fs::write(&path, content).expect("write roster");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `status` on the shared fixture at a fixed instant, with a throwaway config
pub fn status_at(cfg: &str, at: &str) -> Command {
    let mut cmd = rbm();
    cmd.args([
        "--config",
        cfg,
        "status",
        &fixture("escala.csv"),
        "--date",
        FIXTURE_DATE,
        "--at",
        at,
    ]);
    cmd
}
