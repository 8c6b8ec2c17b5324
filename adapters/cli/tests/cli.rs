use std::{fs, path::Path, process::Command};

const SCENARIO: &str = r#"
version = 1

[worm]
name = "Rocky"
radius = 2.0
direction = 3.045

[[actions]]
kind = "move"
steps = 5

[[actions]]
kind = "move"
steps = -1

[[actions]]
kind = "jump"
"#;

fn worms() -> Command {
    Command::new(env!("CARGO_BIN_EXE_worms"))
}

fn write_scenario(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("scenario.toml");
    fs::write(&path, contents).expect("write scenario");
    path
}

#[test]
fn run_prints_one_line_per_action_and_final_state() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_scenario(dir.path(), SCENARIO);

    let output = worms().arg("run").arg(&path).output().expect("run worms");
    assert!(output.status.success(), "worms run should succeed");

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected output: {stdout}");
    assert!(lines[0].starts_with("moved from (0.000000, 0.000000) to (-9.953386, 0.964425)"));
    assert!(lines[1].starts_with("rejected Move"));
    assert!(lines[2].starts_with("jumped from"));
    assert!(lines[3].ends_with("0/35588 AP"));
}

#[test]
fn run_emits_json_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_scenario(dir.path(), SCENARIO);

    let output = worms()
        .args(["run", "--json"])
        .arg(&path)
        .output()
        .expect("run worms");
    assert!(output.status.success());

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(snapshot["name"], "Rocky");
    assert_eq!(snapshot["action_points"], 0);
    assert_eq!(snapshot["max_action_points"], 35_588);
}

#[test]
fn invalid_worm_fails_with_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_scenario(
        dir.path(),
        "version = 1\n[worm]\nname = \"joske\"\nradius = 2.0\ndirection = 0.0\n",
    );

    let output = worms().arg("run").arg(&path).output().expect("run worms");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(stderr.contains("cannot create worm `joske`"), "stderr: {stderr}");
}

#[test]
fn inspect_accepts_negative_direction() {
    let output = worms()
        .args([
            "inspect",
            "--name",
            "Fred",
            "--radius",
            "10",
            "--direction",
            "-2.3",
        ])
        .output()
        .expect("run worms");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.starts_with("Fred at (0.000000, 0.000000)"));
    assert!(stdout.contains("cannot jump"));
}
