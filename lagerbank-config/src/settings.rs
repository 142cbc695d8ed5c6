// Projekt-Konfiguration: Serielle Schnittstelle, Timing und Standardwerte

// ============================================================================
// Serielle Kommunikation
// ============================================================================

/// Baudrate der seriellen Verbindung zum Kassen-PC
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// Timeout beim Lesen einer Zeile in ms
pub const SERIAL_TIMEOUT: u32 = 1000;

// ============================================================================
// Timing Einstellungen (alle Werte in ms)
// ============================================================================

/// 30 Sekunden bis Reset auf "---"
pub const DISPLAY_TIMEOUT: u32 = 30_000;

/// 2 Sekunden Willkommensnachricht
pub const WELCOME_SCREEN_DURATION: u32 = 2_000;

/// Verzögerung pro Durchlauf der Hauptschleife
pub const LOOP_DELAY: u32 = 100;

/// 5 Sekunden zwischen I2C Scans
pub const SCAN_DELAY: u32 = 5_000;

// ============================================================================
// Standard Werte
// ============================================================================

/// Anzeige, solange keine TN-Nummer empfangen wurde
pub const DEFAULT_TN_NUMBER: &str = "---";

pub const EMPTY_TN_NUMBER: &str = "";

/// Maximale Länge einer TN-Nummer in Zeichen
pub const MAX_TN_LENGTH: usize = 10;

// Platzhalter muss selbst eine gültige TN-Nummer sein
const _: () = {
    let bytes = DEFAULT_TN_NUMBER.as_bytes();
    assert!(bytes.len() <= MAX_TN_LENGTH);
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_graphic());
        i += 1;
    }
};

// ============================================================================
// Gruppierte Sicht
// ============================================================================

/// Einstellungen der seriellen Schnittstelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub timeout_ms: u32,
}

impl SerialSettings {
    pub const DEFAULT: Self = Self {
        baud_rate: SERIAL_BAUD_RATE,
        timeout_ms: SERIAL_TIMEOUT,
    };
}

/// Zeitkonstanten der Hauptschleife
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub display_timeout_ms: u32,
    pub welcome_screen_ms: u32,
    pub loop_delay_ms: u32,
    pub scan_delay_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        display_timeout_ms: DISPLAY_TIMEOUT,
        welcome_screen_ms: WELCOME_SCREEN_DURATION,
        loop_delay_ms: LOOP_DELAY,
        scan_delay_ms: SCAN_DELAY,
    };
}
