//! Display-Typ Auswahl
//!
//! Genau einer der Features `display-lcd` oder `display-oled` muss aktiv sein.
//! Der aktive Typ bestimmt Adresse, Größe und Anzeigetexte.

// Compile-Zeit Prüfung: genau ein Display-Typ
#[cfg(all(feature = "display-lcd", feature = "display-oled"))]
compile_error!(
    "`display-lcd` und `display-oled` dürfen nicht gleichzeitig aktiv sein. \
     Für OLED: `--no-default-features --features display-oled`"
);

#[cfg(not(any(feature = "display-lcd", feature = "display-oled")))]
compile_error!(
    "Kein Display-Typ gewählt. Aktiviere `display-lcd` oder `display-oled`."
);

/// Kleinste gültige 7-Bit I2C-Adresse (0x00-0x07 sind reserviert)
pub const I2C_ADDRESS_MIN: u8 = 0x08;

/// Größte gültige 7-Bit I2C-Adresse (0x78-0x7F sind reserviert)
pub const I2C_ADDRESS_MAX: u8 = 0x77;

/// Liest eine I2C-Adresse aus einem String
///
/// Akzeptiert Hex (`0x27`, `0X3C`) und Dezimal (`39`).
/// Gibt `None` zurück bei ungültigem Format oder reservierter Adresse.
///
/// # Beispiele
///
/// ```
/// # use lagerbank_config::display::parse_i2c_address;
/// assert_eq!(parse_i2c_address("0x3F"), Some(0x3F));
/// assert_eq!(parse_i2c_address("56"), Some(0x38));
/// assert_eq!(parse_i2c_address("0x7F"), None);
/// ```
pub const fn parse_i2c_address(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    let is_hex = bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X');
    let (mut i, radix) = if is_hex { (2, 16) } else { (0, 10) };
    if i == bytes.len() {
        return None;
    }

    let mut value: u32 = 0;
    while i < bytes.len() {
        let digit = match bytes[i] {
            b'0'..=b'9' => bytes[i] - b'0',
            b'a'..=b'f' if is_hex => bytes[i] - b'a' + 10,
            b'A'..=b'F' if is_hex => bytes[i] - b'A' + 10,
            _ => return None,
        };
        value = value * radix + digit as u32;
        if value > u8::MAX as u32 {
            return None;
        }
        i += 1;
    }

    if value < I2C_ADDRESS_MIN as u32 || value > I2C_ADDRESS_MAX as u32 {
        return None;
    }
    Some(value as u8)
}

/// Adresse aus Build-Environment oder Standardwert
///
/// Ein ungültiger Wert bricht den Build ab (Panic in const-Auswertung).
const fn address_or(value: Option<&str>, default: u8) -> u8 {
    match value {
        None => default,
        Some(s) => match parse_i2c_address(s) {
            Some(address) => address,
            None => panic!("Ungültige I2C-Adresse im Build-Environment (erlaubt: 0x08 bis 0x77)"),
        },
    }
}

/// Unterstützte Display-Typen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayKind {
    /// Zeichen-LCD 16x2 mit I2C-Backpack
    Lcd,
    /// OLED 128x64 (SSD1306) mit I2C
    Oled,
}

/// Einstellungen für das Zeichen-LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdSettings {
    pub i2c_address: u8,
    pub columns: u8,
    pub rows: u8,
    pub title: &'static str,
    pub label: &'static str,
    pub ready_msg: &'static str,
    pub error_msg: &'static str,
}

/// Einstellungen für das OLED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OledSettings {
    pub i2c_address: u8,
    pub width: u16,
    pub height: u16,
    /// `None`: Reset über die gemeinsame Reset-Leitung des Boards
    pub reset_pin: Option<u8>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub ready_msg: &'static str,
    pub error_msg: &'static str,
    pub connected_msg: &'static str,
    pub disconnected_msg: &'static str,
}

/// Aktives Display mit seinen Einstellungen
///
/// Es existiert immer genau eine Variante pro Build, siehe [`DISPLAY`].
/// Die Konstanten des inaktiven Typs existieren nicht:
///
#[cfg_attr(not(feature = "display-lcd"), doc = "```compile_fail")]
#[cfg_attr(feature = "display-lcd", doc = "```")]
/// let _ = (lagerbank_config::LCD_I2C_ADDRESS, lagerbank_config::LCD_TITLE);
/// ```
///
#[cfg_attr(not(feature = "display-oled"), doc = "```compile_fail")]
#[cfg_attr(feature = "display-oled", doc = "```")]
/// let _ = (lagerbank_config::SCREEN_ADDRESS, lagerbank_config::OLED_TITLE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayProfile {
    Lcd(LcdSettings),
    Oled(OledSettings),
}

impl DisplayProfile {
    pub const fn kind(&self) -> DisplayKind {
        match self {
            DisplayProfile::Lcd(_) => DisplayKind::Lcd,
            DisplayProfile::Oled(_) => DisplayKind::Oled,
        }
    }

    pub const fn i2c_address(&self) -> u8 {
        match self {
            DisplayProfile::Lcd(lcd) => lcd.i2c_address,
            DisplayProfile::Oled(oled) => oled.i2c_address,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            DisplayProfile::Lcd(lcd) => lcd.title,
            DisplayProfile::Oled(oled) => oled.title,
        }
    }

    /// Beschriftung vor der TN-Nummer
    pub const fn label(&self) -> &'static str {
        match self {
            DisplayProfile::Lcd(lcd) => lcd.label,
            DisplayProfile::Oled(oled) => oled.label,
        }
    }

    pub const fn ready_message(&self) -> &'static str {
        match self {
            DisplayProfile::Lcd(lcd) => lcd.ready_msg,
            DisplayProfile::Oled(oled) => oled.ready_msg,
        }
    }

    pub const fn error_message(&self) -> &'static str {
        match self {
            DisplayProfile::Lcd(lcd) => lcd.error_msg,
            DisplayProfile::Oled(oled) => oled.error_msg,
        }
    }
}

// ============================================================================
// LCD Display Einstellungen
// ============================================================================

#[cfg(feature = "display-lcd")]
pub mod lcd {
    use super::LcdSettings;

    /// I2C Adresse (häufigste Adressen: 0x27, 0x3F, 0x20, 0x38)
    /// Überschreibbar mit LAGERBANK_LCD_I2C_ADDRESS in .env
    pub const LCD_I2C_ADDRESS: u8 =
        super::address_or(option_env!("LAGERBANK_LCD_I2C_ADDRESS"), 0x27);

    pub const LCD_COLUMNS: u8 = 16;
    pub const LCD_ROWS: u8 = 2;

    pub const LCD_TITLE: &str = "Lagerbank System";
    pub const LCD_LABEL: &str = "TN-Nummer:";
    pub const LCD_READY_MSG: &str = "Bereit...";
    pub const LCD_ERROR_MSG: &str = "FEHLER:";

    pub const LCD_SETTINGS: LcdSettings = LcdSettings {
        i2c_address: LCD_I2C_ADDRESS,
        columns: LCD_COLUMNS,
        rows: LCD_ROWS,
        title: LCD_TITLE,
        label: LCD_LABEL,
        ready_msg: LCD_READY_MSG,
        error_msg: LCD_ERROR_MSG,
    };

    // Jeder Text muss in eine Zeile passen
    const _: () = {
        let texts = [LCD_TITLE, LCD_LABEL, LCD_READY_MSG, LCD_ERROR_MSG];
        let mut i = 0;
        while i < texts.len() {
            assert!(
                texts[i].len() <= LCD_COLUMNS as usize,
                "LCD-Text ist länger als eine Zeile"
            );
            i += 1;
        }
    };
}

// ============================================================================
// OLED Display Einstellungen
// ============================================================================

#[cfg(feature = "display-oled")]
pub mod oled {
    use super::OledSettings;

    pub const SCREEN_WIDTH: u16 = 128;
    pub const SCREEN_HEIGHT: u16 = 64;

    /// Reset-Pin (-1 = gemeinsame Reset-Leitung mit dem Board)
    pub const OLED_RESET: i8 = -1;

    /// I2C Adresse (häufigste Adressen: 0x3C, 0x3D)
    /// Überschreibbar mit LAGERBANK_OLED_I2C_ADDRESS in .env
    pub const SCREEN_ADDRESS: u8 =
        super::address_or(option_env!("LAGERBANK_OLED_I2C_ADDRESS"), 0x3C);

    pub const OLED_TITLE: &str = "Lagerbank";
    pub const OLED_SUBTITLE: &str = "System";
    pub const OLED_LABEL: &str = "Teilnehmer-Nummer:";
    pub const OLED_READY_MSG: &str = "Bereit...";
    pub const OLED_ERROR_MSG: &str = "FEHLER";
    pub const OLED_CONNECTED_MSG: &str = "VERBUNDEN";
    pub const OLED_DISCONNECTED_MSG: &str = "GETRENNT";

    pub const OLED_SETTINGS: OledSettings = OledSettings {
        i2c_address: SCREEN_ADDRESS,
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        reset_pin: if OLED_RESET < 0 {
            None
        } else {
            Some(OLED_RESET as u8)
        },
        title: OLED_TITLE,
        subtitle: OLED_SUBTITLE,
        label: OLED_LABEL,
        ready_msg: OLED_READY_MSG,
        error_msg: OLED_ERROR_MSG,
        connected_msg: OLED_CONNECTED_MSG,
        disconnected_msg: OLED_DISCONNECTED_MSG,
    };
}

/// Aktives Display dieses Builds
#[cfg(all(feature = "display-lcd", not(feature = "display-oled")))]
pub const DISPLAY: DisplayProfile = DisplayProfile::Lcd(lcd::LCD_SETTINGS);

/// Aktives Display dieses Builds
#[cfg(all(feature = "display-oled", not(feature = "display-lcd")))]
pub const DISPLAY: DisplayProfile = DisplayProfile::Oled(oled::OLED_SETTINGS);

// Ungültige Adresse aus dem Build-Environment → Build-Fehler
const _: u8 = DISPLAY.i2c_address();

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayKind {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DisplayKind::Lcd => defmt::write!(fmt, "LCD"),
            DisplayKind::Oled => defmt::write!(fmt, "OLED"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayProfile {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DisplayProfile {{ kind: {}, address: {=u8:#x} }}",
            self.kind(),
            self.i2c_address()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_address() {
        assert_eq!(parse_i2c_address("0x27"), Some(0x27));
        assert_eq!(parse_i2c_address("0X3c"), Some(0x3C));
        assert_eq!(parse_i2c_address("0x3F"), Some(0x3F));
    }

    #[test]
    fn test_parse_decimal_address() {
        assert_eq!(parse_i2c_address("39"), Some(0x27));
        assert_eq!(parse_i2c_address("60"), Some(0x3C));
    }

    #[test]
    fn test_parse_rejects_reserved_addresses() {
        assert_eq!(parse_i2c_address("0x07"), None);
        assert_eq!(parse_i2c_address("0x78"), None);
        assert_eq!(parse_i2c_address("0"), None);
        assert_eq!(parse_i2c_address("0x08"), Some(0x08));
        assert_eq!(parse_i2c_address("0x77"), Some(0x77));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_i2c_address(""), None);
        assert_eq!(parse_i2c_address("0x"), None);
        assert_eq!(parse_i2c_address("0xZZ"), None);
        assert_eq!(parse_i2c_address("3c"), None);
        assert_eq!(parse_i2c_address("0x1234"), None);
        assert_eq!(parse_i2c_address(" 0x27"), None);
    }

    #[test]
    fn test_address_or_default() {
        assert_eq!(address_or(None, 0x27), 0x27);
        assert_eq!(address_or(Some("0x3F"), 0x27), 0x3F);
    }

    #[cfg(feature = "display-lcd")]
    #[test]
    fn test_lcd_profile_active() {
        assert_eq!(DISPLAY.kind(), DisplayKind::Lcd);
        assert_eq!(DISPLAY.title(), "Lagerbank System");
        assert_eq!(DISPLAY.label(), "TN-Nummer:");
        assert_eq!(DISPLAY.ready_message(), "Bereit...");
        assert_eq!(DISPLAY.error_message(), "FEHLER:");
        assert_eq!(lcd::LCD_COLUMNS, 16);
        assert_eq!(lcd::LCD_ROWS, 2);
    }

    #[cfg(feature = "display-oled")]
    #[test]
    fn test_oled_profile_active() {
        assert_eq!(DISPLAY.kind(), DisplayKind::Oled);
        assert_eq!(DISPLAY.title(), "Lagerbank");
        assert_eq!(oled::SCREEN_WIDTH, 128);
        assert_eq!(oled::SCREEN_HEIGHT, 64);
        assert_eq!(oled::OLED_SETTINGS.reset_pin, None);
        assert_eq!(oled::OLED_CONNECTED_MSG, "VERBUNDEN");
    }
}
