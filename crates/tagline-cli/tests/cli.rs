//! End-to-end tests for the `tagline` binary.
#![expect(clippy::expect_used, reason = "tests fail fast on fixture setup errors")]

use std::fs;
use std::path::PathBuf;
use std::str;

use assert_cmd::Command;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const SETTINGS: &str = r#"{
    "customSets": {
        "all-tags-except-one": {"source": "tags", "ignore": "Animated"},
        "ext-ani-tag": {"source": "extension tags", "only": "mp4 webm gif Animated"}
    },
    "onlyOne": [["mp4", "webm", "gif", "Animated"]],
    "ignore": "mp4 webm gif",
    "selectedSets": "all-tags-except-one ext-ani-tag"
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("fixture file should be written");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace {
        dir: TempDir::new().expect("temporary directory should be created"),
    }
}

fn tagline() -> Command {
    let mut command = Command::cargo_bin("tagline").expect("binary exists");
    command.env_remove("TAGLINE_LOG_LEVEL");
    command
}

fn stdout_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stdout).expect("stdout is UTF-8")
}

fn stderr_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stderr).expect("stderr is UTF-8")
}

#[rstest]
fn prints_line_for_record_file(workspace: Workspace) {
    let settings = workspace.write("settings.json", SETTINGS);
    let record = workspace.write(
        "record.json",
        r#"{"tags": "Animated 3D Overwatch Tracer", "extension": "mp4"}"#,
    );
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .arg(&record)
        .output()
        .expect("runs");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "3D Overwatch Tracer\n");
}

#[rstest]
fn reads_record_arrays_from_stdin(workspace: Workspace) {
    let settings = workspace.write("settings.json", SETTINGS);
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .write_stdin(
            r#"[
                {"tags": "Animated 3D Overwatch Tracer", "extension": "mp4"},
                {"tags": "Animated 3D Overwatch Tracer", "extension": "png"}
            ]"#,
        )
        .output()
        .expect("runs");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "3D Overwatch Tracer\n3D Overwatch Tracer Animated\n"
    );
}

#[rstest]
fn dash_reads_stdin_between_files(workspace: Workspace) {
    let settings = workspace.write("settings.json", r#"{"selectedSets": "tags"}"#);
    let first = workspace.write("first.json", r#"{"tags": "first"}"#);
    let last = workspace.write("last.json", r#"{"tags": "last"}"#);
    let output = tagline()
        .arg("-s")
        .arg(&settings)
        .arg(&first)
        .arg("-")
        .arg(&last)
        .write_stdin(r#"{"tags": "middle"}"#)
        .output()
        .expect("runs");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "first\nmiddle\nlast\n");
}

#[rstest]
fn prints_json_array_with_flag(workspace: Workspace) {
    let settings = workspace.write(
        "settings.json",
        r#"{"selectedSets": "tags", "bytesLimit": 10, "joiner": ", "}"#,
    );
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .arg("--json")
        .write_stdin(r#"[{"tags": ["にしてみた", "風景", "自然"]}, {"tags": "a b"}]"#)
        .output()
        .expect("runs");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let lines: Vec<String> =
        serde_json::from_str(stdout_of(&output)).expect("output should be a JSON array");
    assert_eq!(lines, ["風景", "a, b"]);
}

#[rstest]
#[case("{\"selectedSets\": ", "failed to load settings")]
#[case(r#"{"limitType": "words"}"#, "unknown length mode")]
fn rejects_invalid_settings(
    workspace: Workspace,
    #[case] contents: &str,
    #[case] message: &str,
) {
    let settings = workspace.write("settings.json", contents);
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .write_stdin("{}")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).contains(message),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[rstest]
fn missing_record_file_fails(workspace: Workspace) {
    let settings = workspace.write("settings.json", r#"{"selectedSets": "tags"}"#);
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .arg(workspace.dir.path().join("absent.json"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to read records"));
}

#[rstest]
fn invalid_log_level_environment_exits_with_config_status(workspace: Workspace) {
    let settings = workspace.write("settings.json", r#"{"selectedSets": "tags"}"#);
    let output = tagline()
        .env("TAGLINE_LOG_LEVEL", "chatty")
        .arg("--settings")
        .arg(&settings)
        .write_stdin("{}")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("unknown log level"));
}

#[rstest]
fn skipped_settings_entries_are_logged(workspace: Workspace) {
    let settings = workspace.write(
        "settings.json",
        r#"{"selectedSets": "tags", "replace": ["loose"]}"#,
    );
    let output = tagline()
        .arg("--settings")
        .arg(&settings)
        .write_stdin(r#"{"tags": "a"}"#)
        .output()
        .expect("runs");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "a\n");
    assert!(stderr_of(&output).contains("malformed replacement"));
}
