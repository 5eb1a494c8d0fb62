// Hazard Control Task - Kontrollschleife des Gefahrenmelders
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use hazard_core::{IndicatorOutput, SignalInput, TimeSource};

use crate::config::{CONTROL_LOOP_INTERVAL_MS, hazard_config};
use crate::hal::EmbassyTimeSource;
use crate::{BoardIndicators, BoardInputs, HazardController, Mode, SubmissionOutcome, TickReport};

/// Hazard Control Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Ruft in jeder Iteration `HazardController::step()` auf und loggt,
/// was passiert ist. Zwischen zwei Iterationen wartet der Task kurz,
/// die Entprell-Pausen laufen blockierend innerhalb von `step()`.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte GPIOs (GpioSignal/GpioIndicator)
/// im Production-Code oder Mocks.
pub async fn hazard_control_logic<I, O, T>(mut controller: HazardController<I, O, T>) -> !
where
    I: SignalInput,
    O: IndicatorOutput,
    T: TimeSource,
{
    info!("Hazard: control loop running, status {}", controller.status());

    loop {
        match controller.step() {
            Ok(report) => log_report(&controller, &report),
            Err(e) => error!("Failed to write indicator: {}", e),
        }

        // Async Delay: CPU darf zwischen zwei Iterationen schlafen
        Timer::after(Duration::from_millis(CONTROL_LOOP_INTERVAL_MS)).await;
    }
}

fn log_report<I, O, T>(controller: &HazardController<I, O, T>, report: &TickReport)
where
    I: SignalInput,
    O: IndicatorOutput,
    T: TimeSource,
{
    if report.accepted_digits > 0 {
        info!(
            "Keypad: {} digit(s) accepted, cursor at {}",
            report.accepted_digits,
            controller.code_position()
        );
    }

    match report.submission {
        Some(SubmissionOutcome::Accepted) => info!("Code accepted - system reset"),
        Some(SubmissionOutcome::Rejected { failed_attempts }) => warn!(
            "Wrong code ({}/{} attempts)",
            failed_attempts,
            controller.config().lockout_threshold
        ),
        Some(SubmissionOutcome::LockedOut) => warn!(
            "Too many wrong codes - locked for {} s",
            controller.config().lockout_duration_s
        ),
        None => {}
    }

    if !report.transitioned() {
        return;
    }

    info!("Mode: {} -> {}", report.previous, report.mode);
    match (report.previous, report.mode) {
        (_, Mode::Alarm) => warn!("Single sensor active - alarm latched"),
        (_, Mode::Emergency) => warn!("Gas AND temperature - emergency, enter code"),
        (Mode::Locked, Mode::Idle) => info!("Lockout expired"),
        _ => {}
    }
}

/// Hazard Control Task - Embassy Task für die Kontrollschleife
///
/// Erstellt den Controller aus den bereits konfigurierten Pins und ruft
/// dann die testbare `hazard_control_logic()` Funktion auf.
///
/// # Parameter
/// - `inputs`: Sensoren, Keypad und Bestätigen-Taste
/// - `indicators`: Alarm-LED und Sperr-LED
#[embassy_executor::task]
pub async fn hazard_control_task(inputs: BoardInputs, indicators: BoardIndicators) {
    let controller =
        match HazardController::new(hazard_config(), inputs, indicators, EmbassyTimeSource) {
            Ok(controller) => controller,
            Err(e) => {
                error!("Invalid hazard configuration: {}", e);
                return;
            }
        };

    hazard_control_logic(controller).await
}
