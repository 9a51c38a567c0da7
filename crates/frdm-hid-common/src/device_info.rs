//! Device information types for HID devices

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            ..Self::default()
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    /// `vvvv:pppp` in lowercase hex, the form used in log lines and errors.
    pub fn id_string(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
    }

    pub fn display_name(&self) -> String {
        self.product_name
            .clone()
            .or_else(|| self.manufacturer.clone())
            .unwrap_or_else(|| self.id_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_creation() {
        let info = HidDeviceInfo::new(0x1FC9, 0x00A2);
        assert_eq!(info.vendor_id, 0x1FC9);
        assert_eq!(info.product_id, 0x00A2);
        assert!(info.matches(0x1FC9, 0x00A2));
        assert!(!info.matches(0x1FC9, 0x9999));
    }

    #[test]
    fn test_device_info_display_name() {
        let info = HidDeviceInfo::new(0x1FC9, 0x00A2).with_product_name("FRDM-MCXA153");
        assert_eq!(info.display_name(), "FRDM-MCXA153");

        let info = HidDeviceInfo::new(0x1FC9, 0x00A2).with_manufacturer("NXP");
        assert_eq!(info.display_name(), "NXP");

        let info = HidDeviceInfo::new(0x1FC9, 0x00A2);
        assert_eq!(info.display_name(), "1fc9:00a2");
    }
}
