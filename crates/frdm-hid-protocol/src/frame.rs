//! String and command frame encoding.
//!
//! Both frame kinds occupy one 64-byte report and carry no shared tag: the
//! device only ever sends string frames and the host's dispatch loop only
//! ever answers with command frames.
//!
//! # String frame
//! ```text
//! Byte 0:        payload length n (0..=63)
//! Bytes 1..=n:   one byte per character (code points 0..=255)
//! Bytes n+1..63: 0x00
//! ```
//!
//! # Command frame
//! ```text
//! Byte 0:     COMMAND_SENTINEL (0xFF)
//! Byte 1:     flag (LED state, 0 or 1 by convention)
//! Bytes 2..63: 0x00
//! ```

use crate::ids::{
    COMMAND_SENTINEL, MAX_STRING_LEN, OUTPUT_REPORT_LEN, REPORT_ID_NONE, REPORT_LEN,
};
use crate::{FrdmHidError, FrdmHidResult};

/// One complete HID report as it travels over the wire.
pub type ReportBuffer = [u8; REPORT_LEN];

/// Encode `text` as a string frame.
///
/// Only the first [`MAX_STRING_LEN`] characters are kept; the rest are
/// dropped without being inspected.
///
/// # Errors
///
/// Returns [`FrdmHidError::Encoding`] for the first kept character whose
/// code point does not fit in one byte.
pub fn encode_string(text: &str) -> FrdmHidResult<ReportBuffer> {
    let mut report = [0u8; REPORT_LEN];
    let mut len: u8 = 0;

    let kept = text.chars().take(MAX_STRING_LEN).enumerate();
    for ((position, character), slot) in kept.zip(report.iter_mut().skip(1)) {
        let Ok(byte) = u8::try_from(u32::from(character)) else {
            return Err(FrdmHidError::Encoding {
                character,
                position,
            });
        };
        *slot = byte;
        len += 1;
    }

    report[0] = len;
    Ok(report)
}

/// Decode a string frame.
///
/// The declared length is clipped to the bytes actually present, and an
/// empty buffer decodes to an empty string. Bytes map to characters by code
/// point, so `0x00..=0xFF` round-trip through [`encode_string`].
pub fn decode_string(buffer: &[u8]) -> String {
    let Some((&declared, payload)) = buffer.split_first() else {
        return String::new();
    };
    payload
        .iter()
        .take(usize::from(declared))
        .map(|&b| char::from(b))
        .collect()
}

/// Encode a command frame carrying `flag` verbatim.
pub fn encode_command(flag: u8) -> ReportBuffer {
    let mut report = [0u8; REPORT_LEN];
    report[0] = COMMAND_SENTINEL;
    report[1] = flag;
    report
}

/// Read the flag back out of a command frame.
///
/// Returns `None` if `buffer` does not start with [`COMMAND_SENTINEL`] or is
/// too short to carry a flag.
pub fn decode_command(buffer: &[u8]) -> Option<u8> {
    match buffer {
        [COMMAND_SENTINEL, flag, ..] => Some(*flag),
        _ => None,
    }
}

/// Prefix a report with the report-ID placeholder expected by the host
/// write call.
pub fn with_report_id(report: &ReportBuffer) -> [u8; OUTPUT_REPORT_LEN] {
    let mut out = [REPORT_ID_NONE; OUTPUT_REPORT_LEN];
    for (dst, src) in out.iter_mut().skip(1).zip(report.iter()) {
        *dst = *src;
    }
    out
}

/// Space separated lowercase hex, as used in trace output.
pub fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
