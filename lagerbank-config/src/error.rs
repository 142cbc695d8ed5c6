//! Fehlercodes
//!
//! Die Codes werden von der Firmware gemeldet (Display-Fehlerzeile,
//! Status-LED). Die Zahlenwerte sind stabil und dürfen sich nicht ändern.

use core::fmt;

pub const ERROR_NONE: u8 = 0;
pub const ERROR_DISPLAY_INIT: u8 = 1;
pub const ERROR_I2C_CONNECTION: u8 = 2;
pub const ERROR_SERIAL_TIMEOUT: u8 = 3;
pub const ERROR_INVALID_DATA: u8 = 4;

/// Fehler-Kategorien der Display-Firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorCode {
    None = ERROR_NONE,
    /// Display antwortet nicht bei der Initialisierung
    DisplayInit = ERROR_DISPLAY_INIT,
    /// Kein Gerät unter der I2C-Adresse gefunden
    I2cConnection = ERROR_I2C_CONNECTION,
    /// Keine vollständige Zeile innerhalb von SERIAL_TIMEOUT
    SerialTimeout = ERROR_SERIAL_TIMEOUT,
    /// Empfangene TN-Nummer ist ungültig
    InvalidData = ERROR_INVALID_DATA,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::None,
        ErrorCode::DisplayInit,
        ErrorCode::I2cConnection,
        ErrorCode::SerialTimeout,
        ErrorCode::InvalidData,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_error(self) -> bool {
        !matches!(self, ErrorCode::None)
    }

    /// Kurzbeschreibung für die Fehlerzeile des Displays
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::None => "Kein Fehler",
            ErrorCode::DisplayInit => "Display Init",
            ErrorCode::I2cConnection => "I2C Verbindung",
            ErrorCode::SerialTimeout => "Serial Timeout",
            ErrorCode::InvalidData => "Ungueltige Daten",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{} {}", self.code(), self.description())
    }
}

/// Zahlenwert ohne zugehörigen Fehlercode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode(pub u8);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unbekannter Fehlercode {}", self.0)
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            ERROR_NONE => Ok(ErrorCode::None),
            ERROR_DISPLAY_INIT => Ok(ErrorCode::DisplayInit),
            ERROR_I2C_CONNECTION => Ok(ErrorCode::I2cConnection),
            ERROR_SERIAL_TIMEOUT => Ok(ErrorCode::SerialTimeout),
            ERROR_INVALID_DATA => Ok(ErrorCode::InvalidData),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ErrorCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "E{=u8} {=str}", self.code(), self.description())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for UnknownErrorCode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "UnknownErrorCode({=u8})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::None.code(), 0);
        assert_eq!(ErrorCode::DisplayInit.code(), 1);
        assert_eq!(ErrorCode::I2cConnection.code(), 2);
        assert_eq!(ErrorCode::SerialTimeout.code(), 3);
        assert_eq!(ErrorCode::InvalidData.code(), 4);
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ErrorCode::ALL.iter().enumerate() {
            for b in &ErrorCode::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_try_from_known_code() {
        assert_eq!(ErrorCode::try_from(2), Ok(ErrorCode::I2cConnection));
        assert_eq!(u8::from(ErrorCode::SerialTimeout), ERROR_SERIAL_TIMEOUT);
    }

    #[test]
    fn test_try_from_unknown_code() {
        assert_eq!(ErrorCode::try_from(5), Err(UnknownErrorCode(5)));
        assert_eq!(ErrorCode::try_from(255), Err(UnknownErrorCode(255)));
    }

    #[test]
    fn test_is_error() {
        assert!(!ErrorCode::None.is_error());
        assert!(ErrorCode::DisplayInit.is_error());
        assert!(ErrorCode::InvalidData.is_error());
    }
}
