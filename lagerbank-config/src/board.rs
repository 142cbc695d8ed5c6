//! Mikrocontroller-Auswahl
//!
//! Die Board-Kennung kommt von der Build-Toolchain (als Cargo-Feature).
//! Daraus wird genau ein Board-Profil mit den I2C-Pins aufgelöst.

use core::fmt;

/// Board-Kennungen, die zur Build-Zeit gesetzt sind
///
/// Mehrere Kennungen gleichzeitig sind erlaubt, [`Board::detect`]
/// entscheidet dann nach fester Priorität.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetEnv {
    pub esp32: bool,
    pub esp8266: bool,
    pub arduino_uno: bool,
    pub arduino_nano: bool,
    pub arduino_mega2560: bool,
}

impl TargetEnv {
    /// Keine Kennung gesetzt (→ Generic)
    pub const NONE: Self = Self {
        esp32: false,
        esp8266: false,
        arduino_uno: false,
        arduino_nano: false,
        arduino_mega2560: false,
    };

    /// Kennungen des aktuellen Builds
    pub const CURRENT: Self = Self {
        esp32: cfg!(feature = "esp32"),
        esp8266: cfg!(feature = "esp8266"),
        arduino_uno: cfg!(feature = "arduino-uno"),
        arduino_nano: cfg!(feature = "arduino-nano"),
        arduino_mega2560: cfg!(feature = "arduino-mega2560"),
    };
}

/// Unterstützte Mikrocontroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Board {
    Esp32,
    Esp8266,
    /// Arduino Uno und Nano teilen sich das Pin-Layout
    ArduinoUnoNano,
    ArduinoMega,
    /// Fallback für unbekannte Boards (Uno-kompatible Pins)
    Generic,
}

impl Board {
    /// Alle Boards in Prioritäts-Reihenfolge
    pub const ALL: [Board; 5] = [
        Board::Esp32,
        Board::Esp8266,
        Board::ArduinoUnoNano,
        Board::ArduinoMega,
        Board::Generic,
    ];

    /// Löst das Board aus den Build-Kennungen auf
    ///
    /// Die erste passende Kennung gewinnt:
    /// ESP32 > ESP8266 > Uno/Nano > Mega2560 > Generic
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use lagerbank_config::{Board, TargetEnv};
    /// let env = TargetEnv { esp8266: true, arduino_uno: true, ..TargetEnv::NONE };
    /// assert_eq!(Board::detect(env), Board::Esp8266);
    /// assert_eq!(Board::detect(TargetEnv::NONE), Board::Generic);
    /// ```
    pub const fn detect(env: TargetEnv) -> Board {
        if env.esp32 {
            Board::Esp32
        } else if env.esp8266 {
            Board::Esp8266
        } else if env.arduino_uno || env.arduino_nano {
            Board::ArduinoUnoNano
        } else if env.arduino_mega2560 {
            Board::ArduinoMega
        } else {
            Board::Generic
        }
    }

    /// I2C-Pins (SDA, SCL) für dieses Board
    pub const fn i2c_pins(self) -> I2cPins {
        match self {
            Board::Esp32 => I2cPins::new(Pin::Digital(21), Pin::Digital(22)),
            // D2 / D1 auf NodeMCU / Wemos D1
            Board::Esp8266 => I2cPins::new(Pin::Digital(4), Pin::Digital(5)),
            Board::ArduinoUnoNano => I2cPins::new(Pin::Analog(4), Pin::Analog(5)),
            Board::ArduinoMega => I2cPins::new(Pin::Digital(20), Pin::Digital(21)),
            Board::Generic => I2cPins::new(Pin::Analog(4), Pin::Analog(5)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Board::Esp32 => "ESP32",
            Board::Esp8266 => "ESP8266",
            Board::ArduinoUnoNano => "Arduino Uno/Nano",
            Board::ArduinoMega => "Arduino Mega 2560",
            Board::Generic => "Generic",
        }
    }
}

/// Pin-Bezeichnung wie auf dem Board aufgedruckt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pin {
    /// Digitaler Pin / GPIO-Nummer
    Digital(u8),
    /// Analoger Pin (`A4` → `Analog(4)`)
    Analog(u8),
}

impl Pin {
    /// Vergleich in const-Kontexten (PartialEq ist dort nicht verfügbar)
    pub const fn same_as(self, other: Pin) -> bool {
        match (self, other) {
            (Pin::Digital(a), Pin::Digital(b)) => a == b,
            (Pin::Analog(a), Pin::Analog(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::Digital(n) => write!(f, "{}", n),
            Pin::Analog(n) => write!(f, "A{}", n),
        }
    }
}

/// Datenleitung (SDA) und Taktleitung (SCL) des I2C-Busses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I2cPins {
    pub sda: Pin,
    pub scl: Pin,
}

impl I2cPins {
    pub const fn new(sda: Pin, scl: Pin) -> Self {
        Self { sda, scl }
    }

    /// SDA und SCL liegen auf verschiedenen Pins
    pub const fn is_distinct(&self) -> bool {
        !self.sda.same_as(self.scl)
    }
}

/// Aktives Board dieses Builds
pub const BOARD: Board = Board::detect(TargetEnv::CURRENT);

/// I2C Datenleitung
pub const SDA_PIN: Pin = BOARD.i2c_pins().sda;

/// I2C Taktleitung
pub const SCL_PIN: Pin = BOARD.i2c_pins().scl;

const _: () = assert!(
    BOARD.i2c_pins().is_distinct(),
    "SDA und SCL müssen auf verschiedenen Pins liegen"
);

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Board {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pin {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Pin::Digital(n) => defmt::write!(fmt, "{}", n),
            Pin::Analog(n) => defmt::write!(fmt, "A{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_without_identifier_is_generic() {
        assert_eq!(Board::detect(TargetEnv::NONE), Board::Generic);
    }

    #[test]
    fn test_detect_single_identifiers() {
        let cases = [
            (TargetEnv { esp32: true, ..TargetEnv::NONE }, Board::Esp32),
            (TargetEnv { esp8266: true, ..TargetEnv::NONE }, Board::Esp8266),
            (TargetEnv { arduino_uno: true, ..TargetEnv::NONE }, Board::ArduinoUnoNano),
            (TargetEnv { arduino_nano: true, ..TargetEnv::NONE }, Board::ArduinoUnoNano),
            (TargetEnv { arduino_mega2560: true, ..TargetEnv::NONE }, Board::ArduinoMega),
        ];
        for (env, expected) in cases {
            assert_eq!(Board::detect(env), expected);
        }
    }

    #[test]
    fn test_detect_priority_esp32_wins() {
        let env = TargetEnv {
            esp32: true,
            esp8266: true,
            arduino_uno: true,
            arduino_nano: true,
            arduino_mega2560: true,
        };
        assert_eq!(Board::detect(env), Board::Esp32);
    }

    #[test]
    fn test_detect_priority_uno_before_mega() {
        let env = TargetEnv {
            arduino_nano: true,
            arduino_mega2560: true,
            ..TargetEnv::NONE
        };
        assert_eq!(Board::detect(env), Board::ArduinoUnoNano);
    }

    #[test]
    fn test_esp32_pins() {
        let pins = Board::Esp32.i2c_pins();
        assert_eq!(pins.sda, Pin::Digital(21));
        assert_eq!(pins.scl, Pin::Digital(22));
    }

    #[test]
    fn test_generic_uses_uno_pins() {
        assert_eq!(Board::Generic.i2c_pins(), Board::ArduinoUnoNano.i2c_pins());
    }

    #[test]
    fn test_all_boards_have_distinct_pins() {
        for board in Board::ALL {
            assert!(board.i2c_pins().is_distinct(), "{:?}", board);
        }
    }

    #[test]
    fn test_pin_same_as() {
        assert!(Pin::Analog(4).same_as(Pin::Analog(4)));
        assert!(!Pin::Analog(4).same_as(Pin::Digital(4)));
        assert!(!Pin::Digital(20).same_as(Pin::Digital(21)));
    }
}
