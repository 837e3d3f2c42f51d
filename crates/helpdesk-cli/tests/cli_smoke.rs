//! End-to-end smoke tests driving the `helpdesk` binary against a
//! temporary archive.

use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "helpdesk-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn config_path(&self) -> PathBuf {
        let config_path = self.path.join("helpdesk.toml");
        let contents = format!(
            "data_dir = {:?}\nlog_dir = {:?}\n",
            self.path.join("data").display().to_string(),
            self.path.join("logs").display().to_string(),
        );
        fs::write(&config_path, contents).expect("config should write");
        config_path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_helpdesk<I, S>(config: &Path, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_helpdesk");
    Command::new(bin)
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("helpdesk command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn json_output(output: &Output) -> Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout is not JSON ({err})\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn demo_then_queue_decisions_update_the_archive() {
    let dir = TempDirGuard::new("flow");
    let config = dir.config_path();

    let demo = json_output(&run_helpdesk(&config, ["demo", "--json"]));
    assert_eq!(demo["tickets"], 4);
    assert_eq!(demo["submissions"], 4);
    assert_eq!(demo["users"], 3);

    // The most urgent seeded submission is ticket 5.
    let approved = json_output(&run_helpdesk(&config, ["queue", "approve", "--json"]));
    assert_eq!(approved["ticket"]["id"], 5);

    let rejected = json_output(&run_helpdesk(&config, ["queue", "reject", "--json"]));
    assert_eq!(rejected["ticket"]["id"], 7);

    // Decisions persisted: the queue shrank and the log grew.
    let queue = json_output(&run_helpdesk(&config, ["queue", "list", "--json"]));
    assert_eq!(queue["count"], 2);

    let tickets = json_output(&run_helpdesk(
        &config,
        ["tickets", "list", "--by", "id", "--json"],
    ));
    assert_eq!(tickets["count"], 5);

    let views = json_output(&run_helpdesk(&config, ["tickets", "views", "--json"]));
    assert_eq!(views["count"], 11);
}

#[test]
fn submit_validates_and_extends_the_id_sequence() {
    let dir = TempDirGuard::new("submit");
    let config = dir.config_path();
    assert_success(&run_helpdesk(&config, ["demo"]));

    let submitted = json_output(&run_helpdesk(
        &config,
        [
            "submit",
            "--title",
            "Install cupholders",
            "--description",
            "The saucer cabin has nowhere to put a mug",
            "--creator",
            "user1",
            "--assignee",
            "user2",
            "--est-hours",
            "6",
            "--due-in-days",
            "14",
            "--json",
        ],
    ));
    assert_eq!(submitted["id"], 9);

    // Blank titles are rejected before anything mutates.
    let rejected = run_helpdesk(
        &config,
        [
            "submit",
            "--title",
            "",
            "--description",
            "no title given",
            "--creator",
            "user1",
            "--assignee",
            "user2",
            "--est-hours",
            "6",
            "--due-in-days",
            "14",
        ],
    );
    assert!(!rejected.status.success());
    assert!(
        String::from_utf8_lossy(&rejected.stderr).contains("title cannot be blank"),
        "stderr: {}",
        String::from_utf8_lossy(&rejected.stderr)
    );

    let queue = json_output(&run_helpdesk(&config, ["queue", "list", "--json"]));
    assert_eq!(queue["count"], 5);
}

#[test]
fn accounts_round_trip_through_the_binary() {
    let dir = TempDirGuard::new("users");
    let config = dir.config_path();
    assert_success(&run_helpdesk(&config, ["demo"]));

    assert_success(&run_helpdesk(
        &config,
        [
            "users", "add", "carol", "--password", "hunter2", "--confirm", "hunter2",
        ],
    ));

    let login = json_output(&run_helpdesk(
        &config,
        ["users", "login", "carol", "--password", "hunter2", "--json"],
    ));
    assert_eq!(login["name"], "carol");

    let wrong = run_helpdesk(
        &config,
        ["users", "login", "carol", "--password", "wrong"],
    );
    assert!(!wrong.status.success());

    let users = json_output(&run_helpdesk(&config, ["users", "list", "--json"]));
    assert_eq!(users["count"], 4);

    // The audit trail recorded the account activity.
    let users_log = dir.path().join("logs").join("users.log");
    let trail = fs::read_to_string(users_log).expect("audit trail exists");
    assert!(trail.contains("Account created: carol"));
}

#[test]
fn product_removal_cascades_over_the_records() {
    let dir = TempDirGuard::new("products");
    let config = dir.config_path();
    assert_success(&run_helpdesk(&config, ["demo"]));

    // Demo product 2 ("Arc Reactor") backs exactly one queued submission.
    let removed = json_output(&run_helpdesk(
        &config,
        ["products", "remove", "2", "--json"],
    ));
    assert_eq!(removed["name"], "Arc Reactor");
    assert_eq!(removed["ticketsRemoved"], 0);
    assert_eq!(removed["submissionsRemoved"], 1);

    let products = json_output(&run_helpdesk(&config, ["products", "list", "--json"]));
    assert_eq!(products["count"], 2);

    let queue = json_output(&run_helpdesk(&config, ["queue", "list", "--json"]));
    assert_eq!(queue["count"], 3);
}
