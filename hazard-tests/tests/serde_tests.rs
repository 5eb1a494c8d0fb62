//! Tests für das optionale `serde` Feature

mod common;

use common::emergency_controller;
use common::Rig;
use hazard_core::{ControllerStatus, HazardConfig, Mode};

#[test]
fn test_status_serializes_to_json() {
    let rig = Rig::new();
    let mut controller = emergency_controller(&rig);
    rig.enter(&mut controller, &[1, 2]);

    let mut buffer = [0u8; 128];
    let len = serde_json_core::to_slice(&controller.status(), &mut buffer).unwrap();
    let json = core::str::from_utf8(&buffer[..len]).unwrap();
    assert_eq!(
        json,
        r#"{"mode":"emergency","failed_attempts":0,"code_position":2}"#
    );
}

#[test]
fn test_config_deserializes_from_json() {
    let json = r#"{
        "emergency_flash_period_ms": 200,
        "lockout_blink_period_ms": 1000,
        "lockout_duration_s": 30,
        "lockout_threshold": 3,
        "debounce_ms": 50,
        "reference_code": [4, 3, 2, 1]
    }"#;
    let (config, _) = serde_json_core::from_str::<HazardConfig>(json).unwrap();

    assert_eq!(config.lockout_duration_s, 30);
    assert_eq!(config.lockout_threshold, 3);
    assert_eq!(config.reference_code, [4, 3, 2, 1]);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_mode_deserializes_lowercase() {
    let (status, _) = serde_json_core::from_str::<ControllerStatus>(
        r#"{"mode":"locked","failed_attempts":0,"code_position":0}"#,
    )
    .unwrap();
    assert_eq!(status.mode, Mode::Locked);
}
