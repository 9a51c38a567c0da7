//! Fuzzes string frame encoding with arbitrary text.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_text_encode
#![no_main]
use frdm_hid_protocol::{MAX_STRING_LEN, decode_string, encode_string, with_report_id};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if let Ok(report) = encode_string(&text) {
        assert!(usize::from(report[0]) <= MAX_STRING_LEN);
        let decoded = decode_string(&report);
        assert!(text.starts_with(decoded.as_str()));
        let _ = with_report_id(&report);
    }
});
