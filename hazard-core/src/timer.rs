//! Stoppuhr mit Start/Stop/Reset
//!
//! Die Uhr kennt selbst keine Zeitquelle: jede Operation bekommt den
//! aktuellen Zeitpunkt (`now_ms`) vom Aufrufer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedTimer {
    /// Bis zum letzten `stop()` aufgelaufene Zeit
    accumulated_ms: u64,
    /// Startzeitpunkt, `None` wenn gestoppt
    started_at: Option<u64>,
}

impl ElapsedTimer {
    pub const fn new() -> Self {
        Self {
            accumulated_ms: 0,
            started_at: None,
        }
    }

    /// Startet die Uhr. Läuft sie bereits, passiert nichts.
    pub fn start(&mut self, now_ms: u64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
    }

    /// Hält die Uhr an, die bisherige Zeit bleibt erhalten
    pub fn stop(&mut self, now_ms: u64) {
        if let Some(start) = self.started_at.take() {
            self.accumulated_ms += now_ms.saturating_sub(start);
        }
    }

    /// Setzt die Zeit auf 0. Eine laufende Uhr läuft ab `now_ms` weiter.
    pub fn reset(&mut self, now_ms: u64) {
        self.accumulated_ms = 0;
        if self.started_at.is_some() {
            self.started_at = Some(now_ms);
        }
    }

    /// Anhalten und auf 0 setzen
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn read_ms(&self, now_ms: u64) -> u64 {
        match self.started_at {
            Some(start) => self.accumulated_ms + now_ms.saturating_sub(start),
            None => self.accumulated_ms,
        }
    }

    /// Volle Sekunden
    pub fn read_secs(&self, now_ms: u64) -> u64 {
        self.read_ms(now_ms) / 1000
    }
}
