//! Common HID transport utilities for the FRDM host tools
//!
//! This crate owns everything between the report codec and the operating
//! system's HID stack: the [`HidTransport`] trait, a `hidapi` backed
//! implementation, a scoped guard that always closes the device, and a mock
//! transport for tests.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod guard;
pub mod hid_traits;
pub mod hidapi_transport;

pub use device_info::*;
pub use guard::*;
pub use hid_traits::*;
pub use hidapi_transport::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to read from device: {0}")]
    ReadError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Device disconnected")]
    Disconnected,
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = HidCommonError::DeviceNotFound("1fc9:00a2".to_string());
        assert_eq!(format!("{}", err), "Device not found: 1fc9:00a2");

        let err = HidCommonError::Disconnected;
        assert_eq!(format!("{}", err), "Device disconnected");

        let err = HidCommonError::WriteError("pipe stalled".to_string());
        assert_eq!(format!("{}", err), "Failed to write to device: pipe stalled");
    }
}
