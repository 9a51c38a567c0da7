//! HID protocol implementation for the FRDM-MCXA153 `usb_hid` firmware
//!
//! The firmware exchanges fixed 64-byte reports with the host. Text travels
//! in length-prefixed string frames; the host controls the board's blue LED
//! with sentinel-prefixed command frames.
//!
//! ## Features
//! - String frame encode/decode (up to 63 single-byte characters)
//! - LED command frames
//! - Report-ID prefixing for host write calls
//! - The receive/dispatch loop that answers `"B"` and `"O"` with LED commands

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod frame;
pub mod ids;
pub mod session;

pub use frame::*;
pub use ids::*;
pub use session::*;

use frdm_hid_common::HidCommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrdmHidError {
    #[error("Character {character:?} at position {position} does not fit in a single byte")]
    Encoding { character: char, position: usize },

    #[error("HID write failed: {0}")]
    TransportWrite(#[source] HidCommonError),

    #[error("HID read failed: {0}")]
    TransportRead(#[source] HidCommonError),
}

pub type FrdmHidResult<T> = Result<T, FrdmHidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FrdmHidError::Encoding {
            character: '€',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Character '€' at position 3 does not fit in a single byte"
        );

        let err = FrdmHidError::TransportRead(HidCommonError::Disconnected);
        assert_eq!(err.to_string(), "HID read failed: Device disconnected");
    }
}
