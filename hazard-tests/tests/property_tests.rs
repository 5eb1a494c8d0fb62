//! Property Tests für die Invarianten des Controllers
//!
//! Beliebige Folgen von Sensor-, Keypad- und Zeit-Eingaben dürfen die
//! Invarianten nie verletzen.

mod common;

use common::Rig;
use hazard_core::{HazardConfig, Mode};
use proptest::prelude::*;

/// Eingänge für eine Iteration: (gas, temp, keypad, submit, Zeitvorschub)
type Stimulus = (bool, bool, [bool; 4], bool, u32);

fn stimulus() -> impl Strategy<Value = Stimulus> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<[bool; 4]>(),
        any::<bool>(),
        0u32..5_000,
    )
}

fn apply(rig: &Rig, (gas, temp, keys, submit, advance_ms): Stimulus) {
    rig.sensors(gas, temp);
    for (key, pressed) in rig.keypad.iter().zip(keys) {
        key.set(pressed);
    }
    rig.submit.set(submit);
    rig.clock.advance(u64::from(advance_ms));
}

proptest! {
    #[test]
    fn prop_counters_stay_in_range(steps in prop::collection::vec(stimulus(), 1..300)) {
        let rig = Rig::new();
        let mut controller = rig.controller(HazardConfig::default());

        for input in steps {
            apply(&rig, input);
            controller.step().unwrap();

            prop_assert!(controller.code_position() <= 4);
            prop_assert!(controller.failed_attempts() < 5);
        }
    }

    #[test]
    fn prop_outputs_follow_mode_and_timers(steps in prop::collection::vec(stimulus(), 1..300)) {
        let rig = Rig::new();
        let mut controller = rig.controller(HazardConfig::default());

        for input in steps {
            apply(&rig, input);
            controller.step().unwrap();

            let levels = controller.indicator_levels();
            prop_assert_eq!(rig.alarm.level(), Some(levels.primary));
            prop_assert_eq!(rig.lockout.level(), Some(levels.secondary));

            match controller.mode() {
                Mode::Idle => prop_assert!(!levels.primary && !levels.secondary),
                Mode::Alarm => prop_assert!(levels.primary && !levels.secondary),
                Mode::Emergency => prop_assert!(!levels.secondary),
                Mode::Locked => prop_assert!(!levels.primary),
            }
        }
    }

    #[test]
    fn prop_both_sensors_never_pass_through_alarm(steps in prop::collection::vec(stimulus(), 1..300)) {
        let rig = Rig::new();
        let mut controller = rig.controller(HazardConfig::default());

        for input in steps {
            let both = input.0 && input.1;
            apply(&rig, input);
            let report = controller.step().unwrap();

            if both && matches!(report.previous, Mode::Idle | Mode::Alarm) {
                prop_assert_ne!(report.mode, Mode::Alarm);
            }
        }
    }

    #[test]
    fn prop_keypad_only_counts_in_emergency(steps in prop::collection::vec(stimulus(), 1..300)) {
        let rig = Rig::new();
        let mut controller = rig.controller(HazardConfig::default());

        for input in steps {
            apply(&rig, input);
            let report = controller.step().unwrap();

            if matches!(report.previous, Mode::Locked) {
                prop_assert_eq!(report.accepted_digits, 0);
                prop_assert_eq!(report.submission, None);
            }
        }
    }
}
