// Debug-Ausgaben
//
// Mit Feature `debug-mode` gehen die Makros an defmt (nutzende Crates
// brauchen `defmt` als direkte Dependency). Ohne Feature bleibt nur ein
// `if false`-Block übrig: kein Aufruf, Argumente werden nie ausgewertet.

/// Ob Debug-Ausgaben in diesem Build aktiv sind
pub const DEBUG_MODE: bool = cfg!(feature = "debug-mode");

/// Debug-Ausgabe auf Level `debug` (defmt-Frames sind immer zeilenweise)
#[cfg(feature = "debug-mode")]
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        ::defmt::debug!($($arg)*)
    };
}

/// Debug-Ausgabe als eigene Zeile
#[cfg(feature = "debug-mode")]
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        ::defmt::println!($($arg)*)
    };
}

/// Debug-Ausgabe (deaktiviert)
#[cfg(not(feature = "debug-mode"))]
#[macro_export]
macro_rules! debug_print {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        if false {
            let _ = ($fmt, $(&$arg),*);
        }
    };
}

/// Debug-Ausgabe als eigene Zeile (deaktiviert)
#[cfg(not(feature = "debug-mode"))]
#[macro_export]
macro_rules! debug_println {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        if false {
            let _ = ($fmt, $(&$arg),*);
        }
    };
}
