//! End-to-end tests for the `git-level` binary.
//!
//! Each test runs the compiled binary in a temp directory with an empty
//! config file, pointed at a local wiremock server via `--api-base`.

use std::fs;
use std::path::Path;
use std::process::{Command as StdCommand, Output};

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Fixtures
// =============================================================================

/// Temp working directory with an empty config file.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("config.toml"), "").expect("failed to write config");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command for the binary, isolated from the user's environment.
    fn command(&self, api_base: &str) -> StdCommand {
        let mut cmd = StdCommand::new(assert_cmd::cargo::cargo_bin("git-level"));
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path())
            .env("GITHUB_TOKEN", "ghp_test")
            .env_remove("RUST_LOG")
            .env_remove("GIT_LEVEL_CONFIG")
            .arg("--config")
            .arg(self.path().join("config.toml"))
            .arg("--api-base")
            .arg(api_base);
        cmd
    }
}

/// Run a command off the async runtime.
async fn run(mut cmd: StdCommand) -> Output {
    tokio::task::spawn_blocking(move || cmd.output())
        .await
        .expect("command task panicked")
        .expect("failed to run git-level")
}

/// Server for `octocat`: two owned repos (175 bytes) and one fork.
async fn github() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "a", "full_name": "octocat/a", "fork": false},
            {"name": "b", "full_name": "octocat/b", "fork": false},
            {"name": "c", "full_name": "octocat/c", "fork": true}
        ])))
        .mount(&server)
        .await;

    for (full_name, body) in [
        ("octocat/a", json!({"Go": 100, "Rust": 50})),
        ("octocat/b", json!({"Go": 25})),
        ("octocat/c", json!({"C": 1_000_000})),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/languages", full_name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/users/ghost/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    server
}

// =============================================================================
// Argument Handling
// =============================================================================

#[test]
fn help_describes_tool() {
    Command::cargo_bin("git-level")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("developer level"))
        .stdout(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn version_prints_name() {
    Command::cargo_bin("git-level")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("git-level"));
}

#[test]
fn missing_username_is_usage_error() {
    Command::cargo_bin("git-level")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("USERNAME"));
}

#[test]
fn invalid_username_is_usage_error() {
    Command::cargo_bin("git-level")
        .unwrap()
        .arg("-bad")
        .assert()
        .code(2);
}

#[test]
fn malformed_config_file_fails() {
    let ws = Workspace::new();
    fs::write(ws.path().join("config.toml"), "lang = ").unwrap();

    let output = ws
        .command("http://127.0.0.1:1")
        .arg("octocat")
        .output()
        .unwrap();

    output
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("config.toml"));
}

// =============================================================================
// Full Runs
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn english_run_prints_summary_and_writes_card() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.args(["octocat", "--lang=en"]);
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetching data for GitHub user: octocat..."))
        .stdout(predicate::str::contains("--- Your Git Level ---"))
        .stdout(predicate::str::contains("Total Bytes: 175 B"))
        .stdout(predicate::str::contains("Level: 1"))
        .stdout(predicate::str::contains("Rank: Hello World Habitants"))
        .stdout(predicate::str::contains("Next Level Exp: 4825 B"))
        .stdout(predicate::str::contains("SVG stats card saved to:"));

    let svg = fs::read_to_string(ws.path().join("output/git-level.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("octocat&apos;s Git Level"));
    assert!(svg.contains("Hello World Habitants"));
}

#[tokio::test(flavor = "multi_thread")]
async fn default_language_is_japanese() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.arg("octocat");
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank: Hello Worldの住人"));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_lang_warns_and_falls_back() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.args(["octocat", "--lang=fr"]);
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid language specified: fr"))
        .stdout(predicate::str::contains("Rank: Hello Worldの住人"));
}

#[tokio::test(flavor = "multi_thread")]
async fn include_forks_counts_fork_bytes() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.args(["octocat", "--lang=en", "--include-forks"]);
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Bytes: 1000175 B"))
        .stdout(predicate::str::contains("Rank: Framework Master"));
}

#[tokio::test(flavor = "multi_thread")]
async fn json_mode_prints_only_stats() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.args(["octocat", "--lang=en", "--json", "--output", "badges/card.svg"]);
    let output = run(cmd).await;

    assert!(output.status.success());
    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["totalBytes"], 175);
    assert_eq!(stats["level"], 1);
    assert_eq!(stats["rank"], "Hello World Habitants");
    assert_eq!(stats["nextLevelExp"], 4825);

    assert!(ws.path().join("badges/card.svg").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn config_file_sets_language_and_output() {
    let server = github().await;
    let ws = Workspace::new();
    fs::write(
        ws.path().join("config.toml"),
        "lang = \"en\"\noutput = \"from-config.svg\"\n",
    )
    .unwrap();

    let mut cmd = ws.command(&server.uri());
    cmd.arg("octocat");
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank: Hello World Habitants"));
    assert!(ws.path().join("from-config.svg").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_token_warns() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.env_remove("GITHUB_TOKEN").arg("octocat");
    let output = run(cmd).await;

    output
        .assert()
        .success()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_fails() {
    let server = github().await;
    let ws = Workspace::new();

    let mut cmd = ws.command(&server.uri());
    cmd.arg("ghost");
    let output = run(cmd).await;

    output
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("not found: user 'ghost'"));
    assert!(!ws.path().join("output/git-level.svg").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_api_fails() {
    let ws = Workspace::new();

    let mut cmd = ws.command("http://127.0.0.1:1");
    cmd.arg("octocat");
    let output = run(cmd).await;

    output
        .assert()
        .code(1)
        .stderr(predicate::str::contains("network error"));
}
