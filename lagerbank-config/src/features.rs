//! Erweiterte Features (optional)
//!
//! Jedes Feature wird über ein Cargo-Feature aktiviert.
//! Ist ein Feature deaktiviert, existieren seine Konstanten nicht.

/// Welche Erweiterungen in diesem Build aktiv sind
///
/// Die Konstanten eines Features existieren nur, wenn es aktiv ist:
///
#[cfg_attr(not(feature = "buzzer"), doc = "```compile_fail")]
#[cfg_attr(feature = "buzzer", doc = "```")]
/// let _ = (lagerbank_config::BUZZER_PIN, lagerbank_config::BEEP_DURATION);
/// ```
///
#[cfg_attr(not(feature = "led-status"), doc = "```compile_fail")]
#[cfg_attr(feature = "led-status", doc = "```")]
/// let _ = (lagerbank_config::LED_CONNECTED_PIN, lagerbank_config::LED_ERROR_PIN);
/// ```
///
#[cfg_attr(not(feature = "button-input"), doc = "```compile_fail")]
#[cfg_attr(feature = "button-input", doc = "```")]
/// let _ = (lagerbank_config::BUTTON_PIN, lagerbank_config::BUTTON_DEBOUNCE_DELAY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Features {
    /// Akustische Signale
    pub buzzer: bool,
    /// Status LEDs
    pub led_status: bool,
    /// Taster für manuelle Eingabe
    pub button_input: bool,
    /// Temperaturanzeige
    pub temperature: bool,
    /// Uhrzeitanzeige
    pub clock: bool,
}

impl Features {
    pub const NONE: Self = Self {
        buzzer: false,
        led_status: false,
        button_input: false,
        temperature: false,
        clock: false,
    };

    /// Features des aktuellen Builds
    pub const ENABLED: Self = Self {
        buzzer: cfg!(feature = "buzzer"),
        led_status: cfg!(feature = "led-status"),
        button_input: cfg!(feature = "button-input"),
        temperature: cfg!(feature = "temperature"),
        clock: cfg!(feature = "clock"),
    };

    /// Anzahl aktiver Features
    pub const fn count(&self) -> usize {
        self.buzzer as usize
            + self.led_status as usize
            + self.button_input as usize
            + self.temperature as usize
            + self.clock as usize
    }
}

// ============================================================================
// Feature-Konstanten
// ============================================================================

#[cfg(feature = "buzzer")]
pub mod buzzer {
    pub const BUZZER_PIN: u8 = 8;
    /// Dauer eines Signaltons in ms
    pub const BEEP_DURATION: u32 = 100;
}

#[cfg(feature = "led-status")]
pub mod led_status {
    pub const LED_CONNECTED_PIN: u8 = 13;
    pub const LED_ERROR_PIN: u8 = 12;
}

#[cfg(feature = "button-input")]
pub mod button_input {
    pub const BUTTON_PIN: u8 = 2;
    /// Entprell-Zeit in ms
    pub const BUTTON_DEBOUNCE_DELAY: u32 = 50;
}

#[cfg(feature = "defmt")]
impl defmt::Format for Features {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Features {{ buzzer: {}, led: {}, button: {}, temp: {}, clock: {} }}",
            self.buzzer,
            self.led_status,
            self.button_input,
            self.temperature,
            self.clock
        )
    }
}
