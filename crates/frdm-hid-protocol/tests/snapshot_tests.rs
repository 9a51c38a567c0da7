//! Snapshot tests for the FRDM HID wire format.
//!
//! These lock in exact report bytes to catch accidental framing regressions.
//! Only the leading bytes are snapshotted; the rest is asserted to be zero.

use frdm_hid_protocol as frdm;
use insta::assert_snapshot;

fn assert_zero_after(report: &[u8], used: usize) {
    assert!(
        report[used..].iter().all(|&b| b == 0),
        "padding after byte {used} must be zero"
    );
}

#[test]
fn test_snapshot_string_b() -> Result<(), frdm::FrdmHidError> {
    let report = frdm::encode_string("B")?;
    assert_eq!(report.len(), 64);
    assert_snapshot!(frdm::format_hex(&report[..4]), @"01 42 00 00");
    assert_zero_after(&report, 2);
    Ok(())
}

#[test]
fn test_snapshot_string_hello() -> Result<(), frdm::FrdmHidError> {
    let report = frdm::encode_string("Hello!")?;
    assert_snapshot!(frdm::format_hex(&report[..8]), @"06 48 65 6c 6c 6f 21 00");
    assert_zero_after(&report, 7);
    Ok(())
}

#[test]
fn test_snapshot_string_latin1() -> Result<(), frdm::FrdmHidError> {
    let report = frdm::encode_string("Grüße")?;
    assert_snapshot!(frdm::format_hex(&report[..7]), @"05 47 72 fc df 65 00");
    Ok(())
}

#[test]
fn test_snapshot_command_on() {
    let report = frdm::encode_command(1);
    assert_snapshot!(frdm::format_hex(&report[..4]), @"ff 01 00 00");
    assert_zero_after(&report, 2);
}

#[test]
fn test_snapshot_command_off() {
    let report = frdm::encode_command(0);
    assert_snapshot!(frdm::format_hex(&report[..4]), @"ff 00 00 00");
    assert_zero_after(&report, 1);
}

#[test]
fn test_snapshot_write_buffer_for_led_on() {
    let out = frdm::with_report_id(&frdm::encode_command(frdm::LedState::On.flag()));
    assert_eq!(out.len(), 65);
    assert_snapshot!(frdm::format_hex(&out[..4]), @"00 ff 01 00");
    assert_zero_after(&out, 3);
}

#[test]
fn test_snapshot_decode_scenarios() {
    let decoded = [
        frdm::decode_string(&[0]),
        frdm::decode_string(&[1, 66, 0, 0]),
        frdm::decode_string(&[1, 79]),
        frdm::decode_string(&[9, b'c', b'l', b'i', b'p']),
    ];
    assert_snapshot!(format!("{decoded:?}"), @r#"["", "B", "O", "clip"]"#);
}

#[test]
fn test_snapshot_led_state_json() -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(&[frdm::LedState::On, frdm::LedState::Off])?;
    assert_snapshot!(json, @r#"["on","off"]"#);
    Ok(())
}
