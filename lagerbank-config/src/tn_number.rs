//! TN-Nummer (Teilnehmer-Nummer)
//!
//! Die Kasse sendet die Nummer als eine Zeile über die serielle Schnittstelle,
//! abgeschlossen mit `\n`. Ist kein Teilnehmer ausgewählt, kommt `---`.

use core::fmt;

use heapless::String;

use crate::error::ErrorCode;
use crate::settings::{DEFAULT_TN_NUMBER, MAX_TN_LENGTH};

/// Geprüfte TN-Nummer mit fester Kapazität
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TnNumber {
    value: String<MAX_TN_LENGTH>,
}

impl TnNumber {
    /// Leere Nummer (Display zeigt nichts an)
    pub const fn empty() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Platzhalter `---` (kein Teilnehmer ausgewählt)
    pub fn placeholder() -> Self {
        // Kann nicht fehlschlagen: Länge und Zeichen von DEFAULT_TN_NUMBER
        // prüft der const-Block direkt unter der Definition in settings.rs
        Self::parse(DEFAULT_TN_NUMBER).unwrap_or_else(|_| Self::empty())
    }

    /// Prüft eine empfangene Zeile
    ///
    /// Zeilenende und umgebende Leerzeichen werden entfernt.
    ///
    /// # Fehlerbehandlung
    /// Gibt `ErrorCode::InvalidData` zurück wenn die Nummer länger als
    /// `MAX_TN_LENGTH` ist oder nicht druckbare Zeichen enthält.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use lagerbank_config::{ErrorCode, TnNumber};
    /// let tn = TnNumber::parse("1042\r\n").unwrap();
    /// assert_eq!(tn.as_str(), "1042");
    /// assert_eq!(TnNumber::parse("12345678901"), Err(ErrorCode::InvalidData));
    /// ```
    pub fn parse(line: &str) -> Result<Self, ErrorCode> {
        let trimmed = line.trim();

        // LCD-Zeichensatz: nur druckbares ASCII
        if !trimmed.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
            return Err(ErrorCode::InvalidData);
        }

        let mut value = String::new();
        value
            .push_str(trimmed)
            .map_err(|_| ErrorCode::InvalidData)?;
        Ok(Self { value })
    }

    /// Wie [`TnNumber::parse`], aber direkt aus dem seriellen Puffer
    pub fn from_bytes(line: &[u8]) -> Result<Self, ErrorCode> {
        let text = core::str::from_utf8(line).map_err(|_| ErrorCode::InvalidData)?;
        Self::parse(text)
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.as_str() == DEFAULT_TN_NUMBER
    }
}

impl fmt::Display for TnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TnNumber {
    type Error = ErrorCode;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        Self::parse(line)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TnNumber {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "TnNumber({=str})", self.as_str())
    }
}
