// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Verhaltens-Parameter (Blinkperioden, Sperrdauer, Code, Entprellung)
// liegen in hazard_core::HazardConfig.

use hazard_core::HazardConfig;

// ============================================================================
// Eingänge (aktiv-high, interner Pull-Down)
// ============================================================================

/// GPIO-Pin für den Gas-Sensor
pub const GAS_SENSOR_GPIO_PIN: u8 = 2;

/// GPIO-Pin für den Temperatur-Sensor
pub const TEMP_SENSOR_GPIO_PIN: u8 = 3;

/// GPIO-Pins für die Keypad-Tasten 1-4
pub const KEYPAD_GPIO_PINS: [u8; 4] = [18, 19, 20, 21];

/// GPIO-Pin für die Bestätigen-Taste
pub const SUBMIT_GPIO_PIN: u8 = 22;

// ============================================================================
// Ausgänge
// ============================================================================

/// GPIO-Pin für die Alarm-LED
pub const ALARM_LED_GPIO_PIN: u8 = 0;

/// GPIO-Pin für die Sperr-LED
pub const LOCKOUT_LED_GPIO_PIN: u8 = 1;

// ============================================================================
// Kontrollschleife
// ============================================================================

/// Wartezeit zwischen zwei Iterationen in Millisekunden
/// Kurz genug für das 5 Hz Blinken, lässt die CPU zwischendurch schlafen
pub const CONTROL_LOOP_INTERVAL_MS: u64 = 5;

/// Konfiguration der Zustandsmaschine
pub fn hazard_config() -> HazardConfig {
    HazardConfig::default()
}
