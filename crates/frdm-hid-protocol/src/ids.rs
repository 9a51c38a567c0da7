//! USB identifiers and report layout constants for the FRDM-MCXA153
//! `usb_hid` firmware.

/// NXP Semiconductors.
pub const VENDOR_ID: u16 = 0x1FC9;

/// FRDM-MCXA153 running the `usb_hid` example firmware.
pub const PRODUCT_ID: u16 = 0x00A2;

/// Size of every input and output report. The report descriptor declares a
/// single unnumbered report of this size in both directions.
pub const REPORT_LEN: usize = 64;

/// Bytes handed to the host write call: a report-ID slot plus the report.
///
/// The descriptor has no report ID, so the leading zero never reaches the
/// wire.
pub const OUTPUT_REPORT_LEN: usize = REPORT_LEN + 1;

/// Report-ID placeholder written ahead of every output report.
pub const REPORT_ID_NONE: u8 = 0x00;

/// Longest string payload a single frame can carry.
pub const MAX_STRING_LEN: usize = REPORT_LEN - 1;

/// First byte of a command frame. A string frame can never start with it
/// because its length byte is at most [`MAX_STRING_LEN`].
pub const COMMAND_SENTINEL: u8 = 0xFF;

/// Inbound strings that trigger an LED command.
pub const TRIGGER_LED_ON: &str = "B";
pub const TRIGGER_LED_OFF: &str = "O";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(REPORT_LEN, 64);
        assert_eq!(OUTPUT_REPORT_LEN, 65);
        assert_eq!(MAX_STRING_LEN, 63);
        assert!(usize::from(COMMAND_SENTINEL) > MAX_STRING_LEN);
    }

    #[test]
    fn test_device_ids() {
        assert_eq!(VENDOR_ID, 0x1FC9);
        assert_eq!(PRODUCT_ID, 0x00A2);
    }
}
