//! Core Types für den Gefahrenmelder
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der Stellen im Sicherheitscode
pub const CODE_LENGTH: usize = 4;

/// Betriebsmodus des Controllers
///
/// Es ist immer genau ein Modus aktiv. Startwert ist `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Keine Gefahr erkannt
    #[default]
    Idle,
    /// Genau ein Sensor hat ausgelöst (Dauerlicht)
    Alarm,
    /// Gas UND Temperatur aktiv (schnelles Blinken, Code-Eingabe offen)
    Emergency,
    /// Zu viele Fehlversuche, Eingabe gesperrt
    Locked,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Alarm => "Alarm",
            Mode::Emergency => "Emergency",
            Mode::Locked => "Locked",
        }
    }
}

/// Momentaufnahme der beiden Umweltsensoren
///
/// Wird in jeder Schleifen-Iteration neu gelesen und nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorReading {
    pub gas_present: bool,
    pub temp_present: bool,
}

impl SensorReading {
    pub fn new(gas_present: bool, temp_present: bool) -> Self {
        Self {
            gas_present,
            temp_present,
        }
    }

    /// Beide Sensoren aktiv
    pub fn both(&self) -> bool {
        self.gas_present && self.temp_present
    }

    /// Mindestens ein Sensor aktiv
    pub fn any(&self) -> bool {
        self.gas_present || self.temp_present
    }
}

/// Eine Ziffer des Keypads (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digit(u8);

impl Digit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Erstellt eine Ziffer, `None` ausserhalb von 1..=4
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Keypad-Leitung (0-basiert) → Ziffer: Leitung 0 ist "1", Leitung 3 ist "4"
    pub const fn from_keypad_line(line: usize) -> Option<Self> {
        if line < CODE_LENGTH {
            Some(Self(line as u8 + 1))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Eingabepuffer für den Sicherheitscode
///
/// Der Cursor (`position`) zeigt auf den nächsten freien Slot.
/// Slots ab dem Cursor sind veraltet und werden beim Vergleich ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeBuffer {
    slots: [u8; CODE_LENGTH],
    position: usize,
}

impl CodeBuffer {
    pub const fn new() -> Self {
        Self {
            slots: [0; CODE_LENGTH],
            position: 0,
        }
    }

    /// Hängt eine Ziffer an. Gibt `false` zurück wenn der Puffer voll ist (no-op).
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.position] = digit.value();
        self.position += 1;
        true
    }

    pub fn clear(&mut self) {
        self.slots = [0; CODE_LENGTH];
        self.position = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_full(&self) -> bool {
        self.position >= CODE_LENGTH
    }

    /// Die bisher eingegebenen Ziffern
    pub fn digits(&self) -> &[u8] {
        &self.slots[..self.position]
    }

    /// Vergleicht mit dem Referenzcode.
    ///
    /// Nur ein vollständig eingegebener Code kann stimmen.
    pub fn matches(&self, reference: &[u8; CODE_LENGTH]) -> bool {
        self.is_full() && self.slots == *reference
    }
}

/// Berechnete Ausgangspegel der beiden Anzeigen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorLevels {
    /// Alarm-LED
    pub primary: bool,
    /// Sperr-LED
    pub secondary: bool,
}

impl IndicatorLevels {
    pub const OFF: Self = Self {
        primary: false,
        secondary: false,
    };
}

/// Ergebnis einer Code-Bestätigung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Code korrekt, System zurückgesetzt
    Accepted,
    /// Code falsch, Anzahl Fehlversuche bisher
    Rejected { failed_attempts: u8 },
    /// Code falsch und Schwelle erreicht → Sperre
    LockedOut,
}

/// Lesbare Momentaufnahme des Controller-Zustands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerStatus {
    pub mode: Mode,
    pub failed_attempts: u8,
    pub code_position: u8,
}

/// Was eine Iteration der Kontrollschleife bewirkt hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Modus vor der Iteration
    pub previous: Mode,
    /// Modus nach der Iteration
    pub mode: Mode,
    /// In dieser Iteration akzeptierte Ziffern
    pub accepted_digits: u8,
    pub submission: Option<SubmissionOutcome>,
    /// Summe der Entprell-Pausen in Millisekunden
    pub paused_ms: u32,
}

impl TickReport {
    pub fn transitioned(&self) -> bool {
        self.previous != self.mode
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SubmissionOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SubmissionOutcome::Accepted => defmt::write!(fmt, "Accepted"),
            SubmissionOutcome::Rejected { failed_attempts } => {
                defmt::write!(fmt, "Rejected {{ failed_attempts: {} }}", failed_attempts)
            }
            SubmissionOutcome::LockedOut => defmt::write!(fmt, "LockedOut"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ControllerStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ControllerStatus {{ mode: {}, failed: {}, cursor: {} }}",
            self.mode,
            self.failed_attempts,
            self.code_position
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TickReport {{ {} -> {}, digits: {}, submission: {}, paused_ms: {} }}",
            self.previous,
            self.mode,
            self.accepted_digits,
            self.submission,
            self.paused_ms
        )
    }
}
