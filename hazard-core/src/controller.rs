//! Hazard Controller - Zustandsmaschine des Gefahrenmelders
//!
//! Eine Iteration (`step`) macht immer dasselbe:
//! 1. Gas- und Temperatursensor lesen, Sensor-Fusion (nur Idle/Alarm)
//! 2. Modus-Handler: Code-Eingabe + Bestätigung (Emergency) oder Ablauf der Sperre (Locked)
//! 3. Anzeigen aus Modus + Timern berechnen und bei Änderung schreiben
//!
//! Der Controller besitzt alle Zustände selbst, es gibt keine globalen Variablen.

use crate::config::{ConfigError, HazardConfig};
use crate::logic::{fuse_sensors, indicator_levels_for};
use crate::timer::ElapsedTimer;
use crate::traits::{IndicatorError, IndicatorOutput, SignalInput, TimeSource};
use crate::types::{
    CODE_LENGTH, CodeBuffer, ControllerStatus, Digit, IndicatorLevels, Mode, SensorReading,
    SubmissionOutcome, TickReport,
};

/// Alle Eingänge des Gefahrenmelders
pub struct HazardInputs<I> {
    pub gas: I,
    pub temp: I,
    /// Keypad-Leitungen für die Ziffern 1-4
    pub keypad: [I; CODE_LENGTH],
    pub submit: I,
}

/// Die beiden Anzeige-LEDs
pub struct HazardIndicators<O> {
    /// Alarm-LED (Dauerlicht / 5 Hz)
    pub alarm: O,
    /// Sperr-LED (1 Hz)
    pub lockout: O,
}

pub struct HazardController<I, O, T> {
    config: HazardConfig,
    inputs: HazardInputs<I>,
    indicators: HazardIndicators<O>,
    time: T,
    mode: Mode,
    code: CodeBuffer,
    failed_attempts: u8,
    emergency_timer: ElapsedTimer,
    lockout_timer: ElapsedTimer,
    blink_timer: ElapsedTimer,
    /// Zuletzt erfolgreich geschriebene Pegel, `None` erzwingt den nächsten Schreibvorgang
    written: Option<IndicatorLevels>,
}

impl<I, O, T> HazardController<I, O, T>
where
    I: SignalInput,
    O: IndicatorOutput,
    T: TimeSource,
{
    /// Erstellt einen Controller im Modus `Idle`
    ///
    /// # Fehlerbehandlung
    /// Gibt `ConfigError` zurück wenn die Konfiguration ungültig ist
    pub fn new(
        config: HazardConfig,
        inputs: HazardInputs<I>,
        indicators: HazardIndicators<O>,
        time: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            inputs,
            indicators,
            time,
            mode: Mode::Idle,
            code: CodeBuffer::new(),
            failed_attempts: 0,
            emergency_timer: ElapsedTimer::new(),
            lockout_timer: ElapsedTimer::new(),
            blink_timer: ElapsedTimer::new(),
            written: None,
        })
    }

    /// Liest Gas- und Temperatursensor
    pub fn sample(&mut self) -> SensorReading {
        SensorReading::new(self.inputs.gas.is_active(), self.inputs.temp.is_active())
    }

    /// Eine Iteration der Kontrollschleife
    ///
    /// Der Zustand wird auch dann weitergeschaltet, wenn das Schreiben einer
    /// LED fehlschlägt. Der Schreibvorgang wird in der nächsten Iteration wiederholt.
    pub fn step(&mut self) -> Result<TickReport, IndicatorError> {
        let mut report = TickReport {
            previous: self.mode,
            mode: self.mode,
            accepted_digits: 0,
            submission: None,
            paused_ms: 0,
        };

        let reading = self.sample();
        if let Some(next) = fuse_sensors(self.mode, reading) {
            if next == Mode::Emergency {
                self.emergency_timer.start(self.time.now_ms());
            }
            self.mode = next;
        }

        match self.mode {
            Mode::Idle | Mode::Alarm => {}
            Mode::Emergency => self.handle_emergency(&mut report),
            Mode::Locked => self.handle_locked(),
        }

        report.mode = self.mode;
        self.drive_indicators()?;
        Ok(report)
    }

    /// Setzt alles auf den Startzustand zurück und schaltet beide LEDs aus
    pub fn reset(&mut self) -> Result<(), IndicatorError> {
        self.reset_state();
        self.written = None;
        self.drive_indicators()
    }

    /// Aktuelle Ausgangspegel (reine Funktion von Modus und Timern)
    pub fn indicator_levels(&self) -> IndicatorLevels {
        let now = self.time.now_ms();
        indicator_levels_for(
            self.mode,
            self.emergency_timer.read_ms(now),
            self.blink_timer.read_ms(now),
            &self.config,
        )
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn failed_attempts(&self) -> u8 {
        self.failed_attempts
    }

    pub fn code_position(&self) -> usize {
        self.code.position()
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            mode: self.mode,
            failed_attempts: self.failed_attempts,
            code_position: self.code.position() as u8,
        }
    }

    pub fn config(&self) -> &HazardConfig {
        &self.config
    }

    /// Verbleibende Sperrzeit in vollen Sekunden, 0 ausserhalb von `Locked`
    pub fn lockout_remaining_secs(&self) -> u64 {
        if self.mode != Mode::Locked {
            return 0;
        }
        let elapsed = self.lockout_timer.read_ms(self.time.now_ms());
        self.config.lockout_duration_ms().saturating_sub(elapsed) / 1000
    }

    // ------------------------------------------------------------------------
    // Modus-Handler
    // ------------------------------------------------------------------------

    fn handle_emergency(&mut self, report: &mut TickReport) {
        self.read_keypad(report);

        if self.inputs.submit.is_active() {
            report.submission = Some(self.submit_code());
            self.code.clear();
            self.debounce(report);
        }
    }

    /// Höchstens eine neue Ziffer pro Leitung und Durchlauf, mit Pause nach jeder Ziffer
    fn read_keypad(&mut self, report: &mut TickReport) {
        for line in 0..CODE_LENGTH {
            if self.inputs.keypad[line].is_active() && !self.code.is_full() {
                if let Some(digit) = Digit::from_keypad_line(line) {
                    self.code.push(digit);
                    report.accepted_digits += 1;
                }
                self.debounce(report);
            }
        }
    }

    fn submit_code(&mut self) -> SubmissionOutcome {
        if self.code.matches(&self.config.reference_code) {
            self.reset_state();
            return SubmissionOutcome::Accepted;
        }

        self.failed_attempts = self.failed_attempts.saturating_add(1);
        if self.failed_attempts < self.config.lockout_threshold {
            return SubmissionOutcome::Rejected {
                failed_attempts: self.failed_attempts,
            };
        }

        let now = self.time.now_ms();
        self.mode = Mode::Locked;
        self.lockout_timer.clear();
        self.lockout_timer.start(now);
        self.blink_timer.clear();
        self.blink_timer.start(now);
        self.failed_attempts = 0;
        SubmissionOutcome::LockedOut
    }

    fn handle_locked(&mut self) {
        let elapsed = self.lockout_timer.read_ms(self.time.now_ms());
        if elapsed >= self.config.lockout_duration_ms() {
            self.reset_state();
        }
    }

    // ------------------------------------------------------------------------
    // Intern
    // ------------------------------------------------------------------------

    fn debounce(&mut self, report: &mut TickReport) {
        self.time.pause_ms(self.config.debounce_ms);
        report.paused_ms = report.paused_ms.saturating_add(self.config.debounce_ms);
    }

    fn reset_state(&mut self) {
        self.mode = Mode::Idle;
        self.code.clear();
        self.failed_attempts = 0;
        self.emergency_timer.clear();
        self.lockout_timer.clear();
        self.blink_timer.clear();
    }

    fn drive_indicators(&mut self) -> Result<(), IndicatorError> {
        let levels = self.indicator_levels();
        if self.written == Some(levels) {
            return Ok(());
        }
        self.indicators.alarm.set(levels.primary)?;
        self.indicators.lockout.set(levels.secondary)?;
        self.written = Some(levels);
        Ok(())
    }
}
