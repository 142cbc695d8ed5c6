// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht manuelle Einstellungen (I2C-Adressen) an den Compiler weiter

use std::path::PathBuf;

/// Environment-Variablen, die zur Compile-Zeit eingebacken werden
const FORWARDED_VARS: [&str; 2] = ["LAGERBANK_LCD_I2C_ADDRESS", "LAGERBANK_OLED_I2C_ADDRESS"];

fn main() {
    // .env liegt neben dieser Cargo.toml, LAGERBANK_ENV_FILE kann auf eine andere Datei zeigen
    let env_file = match std::env::var_os("LAGERBANK_ENV_FILE") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env"),
    };

    // Immer beobachten, auch wenn die Datei (noch) nicht existiert.
    // Sonst wird eine später angelegte .env nie gelesen.
    println!("cargo:rerun-if-env-changed=LAGERBANK_ENV_FILE");
    println!("cargo:rerun-if-changed={}", env_file.display());

    // Lade .env file für Hardware-Einstellungen
    // Fehlt die Datei, gelten die Standardwerte
    match dotenvy::from_path(&env_file) {
        Ok(()) => {}
        Err(e) if e.not_found() => {}
        Err(e) => println!(
            "cargo:warning={} konnte nicht gelesen werden: {}",
            env_file.display(),
            e
        ),
    }

    // Gebe Einstellungen an Rust-Compiler weiter
    // Die Werte werden in option_env!() gelesen und zur Compile-Zeit geprüft
    for name in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value.trim());
        }
    }
}
