use std::fs;

use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("dx-assistant").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn analyze_prints_json_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("symptoms.csv"),
        "Disease,Symptom_1,Symptom_2\nInfluenza,fever,cough\n",
    )
    .unwrap();

    let output = Command::cargo_bin("dx-assistant")
        .expect("binary exists")
        .env("DATA_DIR", dir.path())
        .env("RUST_LOG", "error")
        .args(["analyze", "--symptoms", "fever and cough"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], serde_json::json!(true));
    assert_eq!(report["diseases"][0]["name"], serde_json::json!("Influenza"));
}
