//! Lagerbank Config - Build-Zeit Konfiguration für das Lagerbank Display
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Konstanten, die zur Compile-Zeit aus den
//! Cargo-Features aufgelöst werden:
//!
//! - Board-Kennung (`esp32`, `esp8266`, `arduino-uno`, ...) → I2C-Pins
//! - Display-Typ (`display-lcd` oder `display-oled`) → Adresse, Größe, Texte
//! - Erweiterungen (`buzzer`, `led-status`, ...) → zusätzliche Pins und Zeiten
//! - `debug-mode` → Debug-Ausgaben über defmt

#![no_std]

#[macro_use]
mod debug;

pub mod board;
pub mod config;
pub mod display;
pub mod error;
pub mod features;
pub mod settings;
pub mod tn_number;

// Re-exports für einfachen Zugriff
pub use board::{BOARD, Board, I2cPins, Pin, SCL_PIN, SDA_PIN, TargetEnv};
pub use config::{CONFIG, Config};
pub use debug::DEBUG_MODE;
pub use display::{DISPLAY, DisplayKind, DisplayProfile, LcdSettings, OledSettings};
pub use error::{
    ERROR_DISPLAY_INIT, ERROR_I2C_CONNECTION, ERROR_INVALID_DATA, ERROR_NONE,
    ERROR_SERIAL_TIMEOUT, ErrorCode, UnknownErrorCode,
};
pub use features::Features;
pub use settings::*;
pub use tn_number::TnNumber;

#[cfg(feature = "display-lcd")]
pub use display::lcd::*;
#[cfg(feature = "display-oled")]
pub use display::oled::*;

#[cfg(feature = "buzzer")]
pub use features::buzzer::*;
#[cfg(feature = "led-status")]
pub use features::led_status::*;
#[cfg(feature = "button-input")]
pub use features::button_input::*;
