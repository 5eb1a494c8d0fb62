//! Hazard Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Konfiguration, Pure Functions und die
//! Zustandsmaschine des Gefahrenmelders.

#![no_std]

pub mod config;
pub mod controller;
pub mod logic;
pub mod timer;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{ConfigError, HazardConfig};
pub use controller::{HazardController, HazardIndicators, HazardInputs};
pub use logic::{fuse_sensors, indicator_levels_for, square_wave};
pub use timer::ElapsedTimer;
pub use traits::{IndicatorError, IndicatorOutput, SignalInput, TimeSource};
pub use types::{
    CODE_LENGTH, CodeBuffer, ControllerStatus, Digit, IndicatorLevels, Mode, SensorReading,
    SubmissionOutcome, TickReport,
};
