//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für Anzeige-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    WriteFailed,
}

/// Trait für einen digitalen Eingang (Sensor, Keypad-Taste, Bestätigen-Taste)
///
/// # Implementierungen
/// - **Production:** `esp_hal::gpio::Input` (Pull-Down, aktiv-high)
/// - **Testing:** MockInput (in-memory Mock)
pub trait SignalInput {
    /// `true` wenn das Signal aktiv ist
    fn is_active(&mut self) -> bool;
}

/// Trait für eine Anzeige-LED
pub trait IndicatorOutput {
    /// Setzt die LED an (`true`) oder aus (`false`)
    ///
    /// # Fehlerbehandlung
    /// Gibt `IndicatorError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, on: bool) -> Result<(), IndicatorError>;
}

/// Trait für Zeitquelle und Entprell-Pause
///
/// Die Pause hält die gesamte Kontrollschleife an. In Tests wird eine
/// virtuelle Uhr verwendet, die bei `pause_ms` sofort vorspringt.
pub trait TimeSource {
    /// Monotone Zeit in Millisekunden
    fn now_ms(&self) -> u64;

    /// Blockierende Pause
    fn pause_ms(&mut self, ms: u32);
}

#[cfg(feature = "defmt")]
impl defmt::Format for IndicatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            IndicatorError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
