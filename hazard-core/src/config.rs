//! Verhaltens-Konfiguration des Controllers
//!
//! Alle Zeit- und Schwellwerte an einer Stelle, damit Tests
//! deterministisch ohne Echtzeit-Warten laufen können.

use crate::types::{CODE_LENGTH, Digit};

// ============================================================================
// Standardwerte
// ============================================================================

/// Periode des schnellen Alarm-Blinkens (5 Hz)
pub const DEFAULT_EMERGENCY_FLASH_PERIOD_MS: u32 = 200;

/// Periode des langsamen Sperr-Blinkens (1 Hz)
pub const DEFAULT_LOCKOUT_BLINK_PERIOD_MS: u32 = 1000;

/// Dauer der Sperre nach zu vielen Fehlversuchen
pub const DEFAULT_LOCKOUT_DURATION_S: u32 = 60;

/// Fehlversuche bis zur Sperre
pub const DEFAULT_LOCKOUT_THRESHOLD: u8 = 5;

/// Entprell-Pause nach jeder akzeptierten Taste und jeder Bestätigung
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Referenzcode: 1-2-3-4
pub const DEFAULT_REFERENCE_CODE: [u8; CODE_LENGTH] = [1, 2, 3, 4];

/// Fehler bei ungültiger Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroFlashPeriod,
    ZeroBlinkPeriod,
    ZeroLockoutDuration,
    ZeroLockoutThreshold,
    /// Referenzcode enthält eine Ziffer ausserhalb 1..=4
    DigitOutOfRange { index: usize, value: u8 },
}

/// Konfiguration des Gefahrenmelders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardConfig {
    pub emergency_flash_period_ms: u32,
    pub lockout_blink_period_ms: u32,
    pub lockout_duration_s: u32,
    pub lockout_threshold: u8,
    pub debounce_ms: u32,
    pub reference_code: [u8; CODE_LENGTH],
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            emergency_flash_period_ms: DEFAULT_EMERGENCY_FLASH_PERIOD_MS,
            lockout_blink_period_ms: DEFAULT_LOCKOUT_BLINK_PERIOD_MS,
            lockout_duration_s: DEFAULT_LOCKOUT_DURATION_S,
            lockout_threshold: DEFAULT_LOCKOUT_THRESHOLD,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            reference_code: DEFAULT_REFERENCE_CODE,
        }
    }
}

impl HazardConfig {
    /// Prüft alle Werte
    ///
    /// # Fehlerbehandlung
    /// Gibt den ersten gefundenen `ConfigError` zurück
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.emergency_flash_period_ms == 0 {
            return Err(ConfigError::ZeroFlashPeriod);
        }
        if self.lockout_blink_period_ms == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }
        if self.lockout_duration_s == 0 {
            return Err(ConfigError::ZeroLockoutDuration);
        }
        if self.lockout_threshold == 0 {
            return Err(ConfigError::ZeroLockoutThreshold);
        }
        for (index, &value) in self.reference_code.iter().enumerate() {
            if Digit::new(value).is_none() {
                return Err(ConfigError::DigitOutOfRange { index, value });
            }
        }
        Ok(())
    }

    /// Sperrdauer in Millisekunden
    pub fn lockout_duration_ms(&self) -> u64 {
        u64::from(self.lockout_duration_s) * 1000
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::ZeroFlashPeriod => defmt::write!(fmt, "ZeroFlashPeriod"),
            ConfigError::ZeroBlinkPeriod => defmt::write!(fmt, "ZeroBlinkPeriod"),
            ConfigError::ZeroLockoutDuration => defmt::write!(fmt, "ZeroLockoutDuration"),
            ConfigError::ZeroLockoutThreshold => defmt::write!(fmt, "ZeroLockoutThreshold"),
            ConfigError::DigitOutOfRange { index, value } => {
                defmt::write!(fmt, "DigitOutOfRange {{ index: {}, value: {} }}", index, value)
            }
        }
    }
}
