//! End-to-end tests for the `todo` binary
//!
//! Each test gets its own temporary HOME so the real task file and config are
//! never touched.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct Sandbox {
    home: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempfile::TempDir::new().unwrap(),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.home.path().join(".todo.yaml")
    }

    fn config_path(&self) -> PathBuf {
        self.home.path().join("todo-config.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_todo"))
            .args(args)
            .env("HOME", self.home.path())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("TODO_FILE")
            .env_remove("TODO_CONFIG")
            .env_remove("TODO_DEBUG")
            .output()
            .expect("Failed to run todo")
    }

    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "todo {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn fail(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(output.status.code(), Some(1), "todo {:?} should fail", args);
        String::from_utf8(output.stdout).unwrap()
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_add_and_list_persists_between_runs() {
    let sb = Sandbox::new();
    sb.ok(&["add", "buy", "milk"]);
    sb.ok(&["add", "call mom"]);

    assert_eq!(sb.ok(&[]), "0) buy milk\n1) call mom\n");
    assert_eq!(sb.ok(&["-misc", "list"]), "0) buy milk\n1) call mom\n");
    assert!(read(&sb.store_path()).contains("buy milk"));
}

#[test]
fn test_removing_last_task_drops_category() {
    let sb = Sandbox::new();
    sb.ok(&["-errands", "add", "post office"]);
    sb.ok(&["add", "keep me"]);
    assert_eq!(sb.ok(&["cat"]), "errands\nmisc\n");

    sb.ok(&["-errands", "ok", "0"]);
    assert_eq!(sb.ok(&["categories"]), "misc\n");
    assert!(!read(&sb.store_path()).contains("errands"));
}

#[test]
fn test_errors_exit_with_one_and_print_to_stdout() {
    let sb = Sandbox::new();
    sb.ok(&["add", "only"]);

    let out = sb.fail(&["frobnicate"]);
    assert!(out.contains("Unknown command: frobnicate"));

    let out = sb.fail(&["ex", "0"]);
    assert!(out.contains("'exchange' needs at least 2 argument(s)"));

    let out = sb.fail(&["rm", "3"]);
    assert!(out.contains("Index 3 out of range"));

    let out = sb.fail(&["up", "0"]);
    assert!(out.contains("already at the top"));

    let out = sb.fail(&["down", "0"]);
    assert!(out.contains("already at the bottom"));

    let out = sb.fail(&["-ghost"]);
    assert!(out.contains("No such category: ghost"));
}

#[test]
fn test_failed_command_does_not_write() {
    let sb = Sandbox::new();
    sb.ok(&["add", "a"]);
    sb.ok(&["add", "b"]);
    let before = read(&sb.store_path());

    sb.fail(&["rm", "0", "9"]);
    assert_eq!(read(&sb.store_path()), before);
}

#[test]
fn test_reads_do_not_create_store_file() {
    let sb = Sandbox::new();
    assert_eq!(sb.ok(&["cat"]), "");
    assert_eq!(sb.ok(&["top"]), "");
    assert!(!sb.store_path().exists());
}

#[test]
fn test_move_and_reorder() {
    let sb = Sandbox::new();
    for task in ["a", "b", "c"] {
        sb.ok(&["add", task]);
    }
    sb.ok(&["down", "0", "5"]);
    assert_eq!(sb.ok(&[]), "0) b\n1) c\n2) a\n");

    sb.ok(&["ex", "0", "1"]);
    assert_eq!(sb.ok(&[]), "0) c\n1) b\n2) a\n");

    let out = sb.ok(&["mv", "2", "work"]);
    assert!(out.ends_with("0) a\n"));
    assert_eq!(sb.ok(&["-work"]), "0) a\n");
    assert_eq!(sb.ok(&["list", "--all"]), "misc:\n  0) c\n  1) b\n\nwork:\n  0) a\n");
}

#[test]
fn test_malformed_store_is_fatal() {
    let sb = Sandbox::new();
    fs::write(sb.store_path(), "misc: [unterminated\n").unwrap();

    let out = sb.fail(&[]);
    assert!(out.contains("Malformed task file"));
}

#[test]
fn test_file_option_and_config() {
    let sb = Sandbox::new();
    let custom = sb.home.path().join("lists/tasks.yaml");
    let custom_arg = custom.to_str().unwrap();

    sb.ok(&["--file", custom_arg, "add", "elsewhere"]);
    assert!(custom.exists());
    assert!(!sb.store_path().exists());

    fs::write(
        sb.config_path(),
        "default_category = \"inbox\"\nlenient_list = true\nbackup = false\n",
    )
    .unwrap();

    let config = sb.config_path();
    let config_arg = config.to_str().unwrap();

    assert_eq!(sb.ok(&["--config", config_arg]), "No tasks in 'inbox'.\n");
    sb.ok(&["--config", config_arg, "add", "sort mail"]);
    sb.ok(&["--config", config_arg, "add", "reply"]);
    assert_eq!(sb.ok(&["-inbox"]), "0) sort mail\n1) reply\n");
    assert!(!sb.home.path().join(".todo.yaml.bak").exists());
}

#[test]
fn test_json_and_help() {
    let sb = Sandbox::new();
    sb.ok(&["add", "first"]);

    let value: serde_json::Value = serde_json::from_str(&sb.ok(&["--json", "list"])).unwrap();
    assert_eq!(value["tasks"], serde_json::json!(["first"]));

    assert!(sb.ok(&["help"]).contains("remove <id...>"));
    assert!(sb.ok(&["--completions", "bash"]).contains("todo"));
}
