//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::config::HazardConfig;
use crate::types::{IndicatorLevels, Mode, SensorReading};

/// Sensor-Fusion: bestimmt den neuen Modus aus den Sensorwerten
///
/// Wirkt nur in `Idle` und `Alarm`. Beide Sensoren → `Emergency`
/// (auch direkt aus `Idle`), genau einer → `Alarm`. `None` heisst:
/// Modus bleibt.
///
/// # Beispiele
///
/// ```
/// # use hazard_core::{fuse_sensors, Mode, SensorReading};
/// let both = SensorReading::new(true, true);
/// assert_eq!(fuse_sensors(Mode::Idle, both), Some(Mode::Emergency));
/// assert_eq!(fuse_sensors(Mode::Locked, both), None);
/// ```
pub fn fuse_sensors(mode: Mode, reading: SensorReading) -> Option<Mode> {
    match mode {
        Mode::Idle | Mode::Alarm => {
            if reading.both() {
                Some(Mode::Emergency)
            } else if reading.any() && mode == Mode::Idle {
                Some(Mode::Alarm)
            } else {
                // Alarm bleibt gehalten, auch wenn beide Sensoren wieder frei sind
                None
            }
        }
        Mode::Emergency | Mode::Locked => None,
    }
}

/// Rechteck-Signal mit 50% Tastverhältnis: an in der ersten Hälfte jeder Periode
///
/// # Beispiele
///
/// ```
/// # use hazard_core::square_wave;
/// assert!(square_wave(50, 200));
/// assert!(!square_wave(150, 200));
/// ```
pub fn square_wave(elapsed_ms: u64, period_ms: u32) -> bool {
    let period = u64::from(period_ms.max(1));
    elapsed_ms % period < period / 2
}

/// Ausgangspegel als reine Funktion von Modus und Timer-Ständen
pub fn indicator_levels_for(
    mode: Mode,
    emergency_ms: u64,
    blink_ms: u64,
    config: &HazardConfig,
) -> IndicatorLevels {
    match mode {
        Mode::Idle => IndicatorLevels::OFF,
        Mode::Alarm => IndicatorLevels {
            primary: true,
            secondary: false,
        },
        Mode::Emergency => IndicatorLevels {
            primary: square_wave(emergency_ms, config.emergency_flash_period_ms),
            secondary: false,
        },
        Mode::Locked => IndicatorLevels {
            primary: false,
            secondary: square_wave(blink_ms, config.lockout_blink_period_ms),
        },
    }
}
