// GPIO Adapter für Sensoren, Keypad und LEDs
//
// Newtypes um esp-hal Input/Output, damit die hazard-core Traits
// implementiert werden können.

use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};
use hazard_core::{IndicatorError, IndicatorOutput, SignalInput};

/// Digitaler Eingang, aktiv-high mit internem Pull-Down
pub struct GpioSignal<'a> {
    input: Input<'a>,
}

impl<'a> GpioSignal<'a> {
    /// Konfiguriert den Pin als Eingang mit Pull-Down
    /// (offene Leitung liest als "inaktiv")
    pub fn pull_down(pin: impl InputPin + 'a) -> Self {
        let config = InputConfig::default().with_pull(Pull::Down);
        Self {
            input: Input::new(pin, config),
        }
    }
}

impl SignalInput for GpioSignal<'_> {
    fn is_active(&mut self) -> bool {
        self.input.is_high()
    }
}

/// LED an einem GPIO-Ausgang, startet ausgeschaltet
pub struct GpioIndicator<'a> {
    output: Output<'a>,
}

impl<'a> GpioIndicator<'a> {
    pub fn new(pin: impl OutputPin + 'a) -> Self {
        Self {
            output: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl IndicatorOutput for GpioIndicator<'_> {
    // GPIO-Schreiben kann nicht fehlschlagen
    fn set(&mut self, on: bool) -> Result<(), IndicatorError> {
        self.output.set_level(Level::from(on));
        Ok(())
    }
}
