//! Fuzzes decoding of inbound 64-byte reports.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_string_frame
#![no_main]
use frdm_hid_protocol::{decode_command, decode_string, led_state_for};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes, including a lying length byte.
    let text = decode_string(data);
    let declared = data.first().map_or(0, |&len| usize::from(len));
    assert!(text.chars().count() <= declared);
    let _ = led_state_for(&text);
    let _ = decode_command(data);
});
