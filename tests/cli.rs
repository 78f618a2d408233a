use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fitcoach(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitcoach").unwrap();
    cmd.env("FITCOACH_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FITCOACH_LOG");
    cmd
}

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn write_plan(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const QUICK_PLAN: &str = "title: Quick Core
focus: Core
difficulty: Easy
totalDuration: 5
steps:
  - name: Crunches
    type: strength
    duration: 2
  - name: Breather
    type: rest
    duration: 1
";

#[test]
fn plan_validate_demo() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["plan", "validate"])
        .arg(demo("leg-day.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Leg Day"))
        .stdout(predicate::str::contains("7 steps"));
}

#[test]
fn plan_show_json_demo() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["-o", "json", "plan", "show"])
        .arg(demo("hiit-core.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"HIIT Core Blast\""))
        .stdout(predicate::str::contains("\"step_count\": 6"));
}

#[test]
fn empty_plan_is_rejected() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(&home, "empty.yaml", "title: Nothing\nsteps: []\n");

    fitcoach(home.path())
        .args(["plan", "validate"])
        .arg(&plan)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid session"));

    fitcoach(home.path())
        .args(["play", "--plain"])
        .arg(&plan)
        .assert()
        .code(2);
}

#[test]
fn missing_plan_exit_code() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["plan", "show", "does-not-exist.yaml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn play_plain_records_log() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(&home, "quick.yaml", QUICK_PLAN);

    fitcoach(home.path())
        .args(["play", "--plain", "--tick-ms", "1"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] Crunches"))
        .stdout(predicate::str::contains("[2/2] Breather"))
        .stdout(predicate::str::contains("Session Complete!"));

    fitcoach(home.path())
        .args(["-o", "json", "log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"title\": \"Quick Core\""))
        .stdout(predicate::str::contains("\"duration_minutes\": 5"));
}

#[test]
fn piped_play_warns_on_stderr() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(
        &home,
        "blink.yaml",
        "title: Blink\nsteps:\n  - name: Blink\n    type: rest\n    duration: 0\n",
    );

    // stdout is a pipe here, so play falls back to the line-oriented player
    fitcoach(home.path())
        .args(["play", "--tick-ms", "1"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] Blink"))
        .stderr(predicate::str::contains("step has zero duration"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn play_no_record_leaves_log_empty() {
    let home = TempDir::new().unwrap();
    let plan = write_plan(&home, "quick.yaml", QUICK_PLAN);

    fitcoach(home.path())
        .args(["play", "--plain", "--no-record", "--tick-ms", "1"])
        .arg(&plan)
        .assert()
        .success();

    fitcoach(home.path())
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged"));
}

#[test]
fn log_add_delete_roundtrip() {
    let home = TempDir::new().unwrap();

    fitcoach(home.path())
        .args([
            "log",
            "add",
            "--title",
            "Evening Run",
            "--focus",
            "Cardio",
            "--minutes",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Evening Run"));

    fitcoach(home.path())
        .args(["log", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted workout log #1"));

    fitcoach(home.path())
        .args(["log", "delete", "1"])
        .assert()
        .code(3);
}

#[test]
fn log_clear_needs_force() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["log", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn progress_after_logging() {
    let home = TempDir::new().unwrap();

    fitcoach(home.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged yet"));

    fitcoach(home.path())
        .args([
            "log",
            "add",
            "-t",
            "Push Day",
            "-f",
            "Upper Body",
            "-m",
            "40",
        ])
        .assert()
        .success();

    fitcoach(home.path())
        .args(["-o", "json", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sessions_completed\": 1"))
        .stdout(predicate::str::contains("\"current_streak\": 1"))
        .stdout(predicate::str::contains("\"level\": \"resting\""));
}

#[test]
fn config_default_output_json() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    fitcoach(home.path())
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn bad_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "player: [not, a, map]\n").unwrap();

    fitcoach(home.path())
        .arg("progress")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn log_file_is_written() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["-v", "progress"])
        .assert()
        .success();
    assert!(home.path().join("logs").join("fitcoach.log").exists());
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    fitcoach(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitcoach"));
}
