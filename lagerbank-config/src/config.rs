//! Gesamte Konfiguration in einer Struktur
//!
//! Die Einzelkonstanten bleiben die primäre Schnittstelle, `CONFIG` fasst
//! sie für Code zusammen, der die Konfiguration als Ganzes weiterreicht
//! (z.B. Ausgabe beim Start im Debug-Modus).

use crate::board::{BOARD, Board, I2cPins};
use crate::display::{DISPLAY, DisplayProfile};
use crate::features::Features;
use crate::settings::{SerialSettings, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub board: Board,
    pub i2c: I2cPins,
    pub display: DisplayProfile,
    pub features: Features,
    pub serial: SerialSettings,
    pub timing: Timing,
}

/// Aufgelöste Konfiguration dieses Builds
pub const CONFIG: Config = Config {
    board: BOARD,
    i2c: BOARD.i2c_pins(),
    display: DISPLAY,
    features: Features::ENABLED,
    serial: SerialSettings::DEFAULT,
    timing: Timing::DEFAULT,
};

#[cfg(feature = "defmt")]
impl defmt::Format for Config {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Config {{ board: {}, sda: {}, scl: {}, display: {}, features: {} ({=usize} aktiv) }}",
            self.board,
            self.i2c.sda,
            self.i2c.scl,
            self.display,
            self.features,
            self.features.count()
        )
    }
}
