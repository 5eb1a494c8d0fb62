// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use hazard_monitor::config::{
    ALARM_LED_GPIO_PIN, GAS_SENSOR_GPIO_PIN, KEYPAD_GPIO_PINS, LOCKOUT_LED_GPIO_PIN,
    SUBMIT_GPIO_PIN, TEMP_SENSOR_GPIO_PIN,
};
use hazard_monitor::hal::{GpioIndicator, GpioSignal};
use hazard_monitor::tasks::hazard_control_task;
use hazard_monitor::{HazardIndicators, HazardInputs};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt die Kontrollschleife.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Eingänge: aktiv-high mit Pull-Down
    // Reihenfolge muss zu config.rs passen
    let inputs = HazardInputs {
        gas: GpioSignal::pull_down(peripherals.GPIO2),
        temp: GpioSignal::pull_down(peripherals.GPIO3),
        keypad: [
            GpioSignal::pull_down(peripherals.GPIO18),
            GpioSignal::pull_down(peripherals.GPIO19),
            GpioSignal::pull_down(peripherals.GPIO20),
            GpioSignal::pull_down(peripherals.GPIO21),
        ],
        submit: GpioSignal::pull_down(peripherals.GPIO22),
    };

    // Ausgänge: beide LEDs starten aus
    let indicators = HazardIndicators {
        alarm: GpioIndicator::new(peripherals.GPIO0),
        lockout: GpioIndicator::new(peripherals.GPIO1),
    };

    info!(
        "Hazard monitor: gas GPIO{}, temp GPIO{}, keypad GPIO{}, submit GPIO{}, LEDs GPIO{}/GPIO{}",
        GAS_SENSOR_GPIO_PIN,
        TEMP_SENSOR_GPIO_PIN,
        KEYPAD_GPIO_PINS,
        SUBMIT_GPIO_PIN,
        ALARM_LED_GPIO_PIN,
        LOCKOUT_LED_GPIO_PIN
    );

    // Spawn Hazard Control Task (einzige Kontrollschleife)
    spawner
        .spawn(hazard_control_task(inputs, indicators))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
