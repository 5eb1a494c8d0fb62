// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von hazard-core
pub use hazard_core::{
    HazardConfig, HazardController, HazardIndicators, HazardInputs, Mode, SubmissionOutcome,
    TickReport,
};

use crate::hal::{GpioIndicator, GpioSignal};

// ============================================================================
// Type-Aliase für die Hardware-Typen
// ============================================================================

/// Alle Eingänge, fertig konfiguriert
pub type BoardInputs = HazardInputs<GpioSignal<'static>>;

/// Beide LEDs, fertig konfiguriert
pub type BoardIndicators = HazardIndicators<GpioIndicator<'static>>;
