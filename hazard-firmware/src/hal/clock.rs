// Zeitquelle für die Kontrollschleife
use embassy_time::{Duration, Instant, block_for};
use hazard_core::TimeSource;

/// Monotone Uhr über embassy-time
///
/// `pause_ms` blockiert die gesamte Kontrollschleife (Busy-Wait),
/// genau wie die Entprell-Pause es verlangt.
#[derive(Default)]
pub struct EmbassyTimeSource;

impl TimeSource for EmbassyTimeSource {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn pause_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
