use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_termo")
}

#[test]
fn test_validate_empty_form_lists_all_errors() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state");

    let output = Command::new(bin())
        .args(["validate", "--fresh", "--json"])
        .env("TERMO_STATE_DIR", &state)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["status"], "invalid");
    // Name, RG, CPF and contract are missing; the deadline default (45) is
    // above the minimum so it is not reported.
    assert_eq!(value["errors"].as_array().unwrap().len(), 4);
}

#[test]
fn test_validate_short_deadline_reported() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state");

    let output = Command::new(bin())
        .args(["validate", "--fresh", "--days", "20"])
        .env("TERMO_STATE_DIR", &state)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Prazo informado (20) menor do que o mínimo permitido (30)"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn test_validate_complete_form_passes() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state");

    let output = Command::new(bin())
        .args([
            "validate",
            "--fresh",
            "--name",
            "Maria da Silva",
            "--contract",
            "C-123",
            "--rg",
            "1.234.567-8",
            "--cpf",
            "123.456.789-00",
        ])
        .env("TERMO_STATE_DIR", &state)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Formulário completo."));
}

#[test]
fn test_validate_respects_config_minimum() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state");
    std::fs::write(dir.path().join("termo.toml"), "[deadline]\nmin_days = 50\n").unwrap();

    let output = Command::new(bin())
        .args([
            "validate",
            "--fresh",
            "--name",
            "Maria da Silva",
            "--contract",
            "C-123",
            "--rg",
            "1.234.567-8",
            "--cpf",
            "123.456.789-00",
            "--days",
            "45",
            "--json",
        ])
        .env("TERMO_STATE_DIR", &state)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_no_command_without_tty_prints_hint() {
    let dir = tempdir().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No command provided."));
    assert!(stdout.contains("termo --help"));
}

#[test]
fn test_no_command_json_emits_hint_event() {
    let dir = tempdir().unwrap();
    let output = Command::new(bin())
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["event"], "interactive");
}
