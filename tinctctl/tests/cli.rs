use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    let output = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for sub in ["hex-to-hsl", "hsl-to-hex", "derive", "presets", "preview"] {
        assert!(text.contains(sub), "help missing '{sub}'");
    }
}

#[test]
fn preview_help_documents_overrides() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.arg("preview")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--preset")
                .and(predicate::str::contains("--radius"))
                .and(predicate::str::contains("--font")),
        );
}

#[test]
fn hex_to_hsl_prints_triple() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.args(["hex-to-hsl", "#343D79"])
        .assert()
        .success()
        .stdout("232 40% 34%\n");
}

#[test]
fn hex_without_hash_is_rejected() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.args(["hex-to-hsl", "343D79"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn hsl_to_hex_prints_lowercase_hex() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.args(["hsl-to-hex", "30 90% 55%"])
        .assert()
        .success()
        .stdout("#f48c25\n");
}

#[test]
fn derive_emits_json_palette() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    let output = cmd
        .env_remove("TINCT_CONFIG_PATH")
        .env_remove("TINCT_CONFIG_JSON")
        .args([
            "derive",
            "--primary",
            "#3c8cdd",
            "--accent",
            "170 60% 45%",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["--primary"], "210 70% 55%");
    assert_eq!(value["--secondary"], "210 55% 35%");
    assert_eq!(value["--ring"], "210 80% 60%");
}

#[test]
fn presets_can_be_filtered() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.env_remove("TINCT_CONFIG_PATH")
        .env_remove("TINCT_CONFIG_JSON")
        .args(["presets", "--group", "settings"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Default Purple")
                .and(predicate::str::contains("Sunset Orange"))
                .and(predicate::str::contains("Verdant Greens").not()),
        );
}

#[test]
fn inline_json_config_adds_presets() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.env_remove("TINCT_CONFIG_PATH")
        .env(
            "TINCT_CONFIG_JSON",
            r#"{"presets":[{"name":"Rose","primary":"350 80% 60%","accent":"20 70% 50%"}]}"#,
        )
        .args(["presets", "--group", "custom"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rose"));
}

#[test]
fn preview_uses_config_file_stylesheet() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[stylesheet]\nbackground = \"222 47% 11%\"\nradius = \"1rem\""
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.arg("--config")
        .arg(file.path())
        .args(["preview", "--preset", "oceanic tones", "--radius", "2.7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--background: 222 47% 11%;")
                .and(predicate::str::contains("--accent: 170 60% 45%;"))
                .and(predicate::str::contains("--radius: 1.5rem;")),
        );
}

#[test]
fn preview_accepts_hsl_primary_and_picked_secondary() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.env_remove("TINCT_CONFIG_PATH")
        .env_remove("TINCT_CONFIG_JSON")
        .args([
            "preview",
            "--primary",
            "210 70% 55%",
            "--secondary",
            "#f4f4f5",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--primary: 210 70% 55%;")
                .and(predicate::str::contains("--secondary: 240 5% 96%;"))
                .and(predicate::str::contains("--ring: 210 80% 60%;")),
        );
}

#[test]
fn preview_without_overrides_echoes_stylesheet() {
    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.env_remove("TINCT_CONFIG_PATH")
        .env_remove("TINCT_CONFIG_JSON")
        .arg("preview")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(":root {\n  --primary: 258 36% 51%;")
                .and(predicate::str::contains("--radius: 0.5rem;")),
        );
}

#[test]
fn invalid_config_fails_with_guard_rail_message() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[derivation]\nlight_threshold = 140.0").unwrap();

    let mut cmd = cargo_bin_cmd!("tinctctl");
    cmd.arg("--config")
        .arg(file.path())
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("light_threshold"));
}
