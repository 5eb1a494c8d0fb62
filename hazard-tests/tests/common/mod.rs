//! Mocks und Test-Rig für die Integration Tests
//!
//! Alle Mocks teilen ihren Zustand über `Rc<Cell<_>>`, damit der Test die
//! Eingänge setzen kann während der Controller sie besitzt.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hazard_core::{
    HazardConfig, HazardController, HazardIndicators, HazardInputs, IndicatorError,
    IndicatorOutput, SignalInput, TickReport, TimeSource,
};

// ============================================================================
// Mock Input
// ============================================================================

#[derive(Clone, Default)]
pub struct MockInput {
    level: Rc<Cell<bool>>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, active: bool) {
        self.level.set(active);
    }
}

impl SignalInput for MockInput {
    fn is_active(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

#[derive(Default)]
pub struct IndicatorState {
    pub level: Option<bool>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

#[derive(Clone, Default)]
pub struct MockIndicator {
    state: Rc<RefCell<IndicatorState>>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.state.borrow().level == Some(true)
    }

    pub fn level(&self) -> Option<bool> {
        self.state.borrow().level
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().write_count
    }

    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }
}

impl IndicatorOutput for MockIndicator {
    fn set(&mut self, on: bool) -> Result<(), IndicatorError> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(IndicatorError::WriteFailed);
        }
        state.level = Some(on);
        state.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Virtual Clock
// ============================================================================

/// Virtuelle Uhr: `pause_ms` springt sofort vor
#[derive(Clone, Default)]
pub struct VirtualClock {
    now: Rc<Cell<u64>>,
    pauses: Rc<Cell<usize>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.get()
    }
}

impl TimeSource for VirtualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn pause_ms(&mut self, ms: u32) {
        self.pauses.set(self.pauses.get() + 1);
        self.advance(u64::from(ms));
    }
}

// ============================================================================
// Test Rig
// ============================================================================

pub type TestController = HazardController<MockInput, MockIndicator, VirtualClock>;

/// Handles auf alle Mocks eines Controllers
#[derive(Clone, Default)]
pub struct Rig {
    pub gas: MockInput,
    pub temp: MockInput,
    pub keypad: [MockInput; 4],
    pub submit: MockInput,
    pub alarm: MockIndicator,
    pub lockout: MockIndicator,
    pub clock: VirtualClock,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self, config: HazardConfig) -> TestController {
        let inputs = HazardInputs {
            gas: self.gas.clone(),
            temp: self.temp.clone(),
            keypad: self.keypad.clone(),
            submit: self.submit.clone(),
        };
        let indicators = HazardIndicators {
            alarm: self.alarm.clone(),
            lockout: self.lockout.clone(),
        };
        HazardController::new(config, inputs, indicators, self.clock.clone())
            .expect("valid config")
    }

    pub fn sensors(&self, gas: bool, temp: bool) {
        self.gas.set(gas);
        self.temp.set(temp);
    }

    /// Drückt eine Taste (1-4) für genau eine Iteration
    pub fn press(&self, controller: &mut TestController, digit: u8) -> TickReport {
        let key = &self.keypad[usize::from(digit - 1)];
        key.set(true);
        let report = controller.step().expect("indicator write");
        key.set(false);
        report
    }

    pub fn enter(&self, controller: &mut TestController, digits: &[u8]) {
        for &digit in digits {
            self.press(controller, digit);
        }
    }

    /// Drückt "Bestätigen" für genau eine Iteration
    pub fn submit(&self, controller: &mut TestController) -> TickReport {
        self.submit.set(true);
        let report = controller.step().expect("indicator write");
        self.submit.set(false);
        report
    }

    /// Gibt einen falschen Code ein und bestätigt
    pub fn fail_once(&self, controller: &mut TestController) -> TickReport {
        self.enter(controller, &[4, 3, 2, 1]);
        self.submit(controller)
    }
}

/// Controller im Modus Emergency, beide Sensoren bleiben aktiv
pub fn emergency_controller(rig: &Rig) -> TestController {
    let mut controller = rig.controller(HazardConfig::default());
    rig.sensors(true, true);
    controller.step().expect("indicator write");
    controller
}
