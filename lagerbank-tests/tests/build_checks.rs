//! Build-Zeit Prüfungen für lagerbank-config
//!
//! Diese Tests starten `cargo check` für lagerbank-config mit verschiedenen
//! Feature-Kombinationen. Jeder Test nutzt ein eigenes Target-Verzeichnis
//! unter `target/build-checks/`, damit der äußere Build nicht blockiert wird.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// ============================================================================
// Helper
// ============================================================================

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("lagerbank-tests liegt im Workspace")
        .to_path_buf()
}

/// `cargo check -p lagerbank-config` mit sauberem Environment
fn cargo_check(target_name: &str, args: &[&str]) -> Command {
    let root = workspace_root();
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    let mut cmd = Command::new(cargo);
    cmd.current_dir(&root)
        .args(["check", "-p", "lagerbank-config", "--color", "never"])
        .args(args)
        .env(
            "CARGO_TARGET_DIR",
            root.join("target").join("build-checks").join(target_name),
        )
        .env_remove("LAGERBANK_LCD_I2C_ADDRESS")
        .env_remove("LAGERBANK_OLED_I2C_ADDRESS")
        .env_remove("LAGERBANK_ENV_FILE");
    cmd
}

fn run(cmd: &mut Command) -> (Output, String) {
    let output = cmd.output().expect("cargo konnte nicht gestartet werden");
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stderr)
}

// ============================================================================
// Tests: Display-Auswahl
// ============================================================================

#[test]
fn test_oled_only_builds() {
    let (output, stderr) = run(&mut cargo_check(
        "display",
        &["--no-default-features", "--features", "display-oled"],
    ));
    assert!(output.status.success(), "{}", stderr);
}

#[test]
fn test_both_display_types_fail_to_build() {
    // display-lcd ist Default, dazu display-oled
    let (output, stderr) = run(&mut cargo_check("display", &["--features", "display-oled"]));
    assert!(!output.status.success());
    assert!(
        stderr.contains("dürfen nicht gleichzeitig aktiv sein"),
        "{}",
        stderr
    );
}

#[test]
fn test_no_display_type_fails_to_build() {
    let (output, stderr) = run(&mut cargo_check("display", &["--no-default-features"]));
    assert!(!output.status.success());
    assert!(stderr.contains("Kein Display-Typ gewählt"), "{}", stderr);
}

// ============================================================================
// Tests: .env Datei
// ============================================================================

#[test]
fn test_env_file_created_after_first_build_is_read() {
    let env_file = std::env::temp_dir().join(format!(
        "lagerbank-build-check-{}.env",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&env_file);

    let check = || {
        let mut cmd = cargo_check("env-file", &[]);
        cmd.env("LAGERBANK_ENV_FILE", &env_file);
        run(&mut cmd)
    };

    // 1. Build ohne Datei: Standardadresse
    let (output, stderr) = check();
    assert!(output.status.success(), "{}", stderr);

    // 2. Datei mit reservierter Adresse anlegen: Build muss sie lesen und abbrechen
    std::fs::write(&env_file, "LAGERBANK_LCD_I2C_ADDRESS=0x7F\n").unwrap();
    let (output, stderr) = check();
    let _ = std::fs::remove_file(&env_file);
    assert!(!output.status.success(), "alte Adresse wurde weiterverwendet");
    assert!(stderr.contains("Ungültige I2C-Adresse"), "{}", stderr);

    // 3. Datei wieder entfernt: Standardwerte gelten erneut
    let (output, stderr) = check();
    assert!(output.status.success(), "{}", stderr);
}
