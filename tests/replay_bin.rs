use std::process::Command;

fn replay(args: &[&str]) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");
    Command::new(env!("CARGO_BIN_EXE_replay"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run replay binary")
}

#[test]
fn replay_json_reports_winner() {
    let output = replay(&["--moves", "0,1,0,1,0,1,0", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["status"]["Won"], "A");
    assert_eq!(v["winning_line"]["direction"], "Up");
}

#[test]
fn replay_text_shows_board_and_rejection() {
    let output = replay(&["--moves", "3,9"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("|.|.|.|X|.|.|.|"));
    assert!(stdout.contains("Lime's turn"));
    assert!(stdout.contains("ignored: column 9 is out of range"));
}

#[test]
fn replay_rejects_malformed_moves() {
    let output = replay(&["--moves", "1,x"]);
    assert!(!output.status.success());
}
