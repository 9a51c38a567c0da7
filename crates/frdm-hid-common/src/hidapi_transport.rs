//! `hidapi` backed transport.

use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use tracing::{debug, info, trace};

use crate::{HidCommonError, HidCommonResult, HidDeviceInfo, HidTransport};

/// A device opened by vendor/product ID through the platform HID API.
pub struct HidApiTransport {
    // Kept alive for as long as the device handle is in use.
    _api: HidApi,
    device: Option<HidDevice>,
    info: HidDeviceInfo,
}

impl HidApiTransport {
    /// Open the first device matching `vendor_id`/`product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::DeviceNotFound`] if no matching device is
    /// attached, or [`HidCommonError::OpenError`] if the HID API cannot be
    /// initialised or the device cannot be opened.
    pub fn open(vendor_id: u16, product_id: u16) -> HidCommonResult<Self> {
        let api = HidApi::new()
            .map_err(|e| HidCommonError::OpenError(format!("failed to initialise HID API: {e}")))?;
        let present = api
            .device_list()
            .any(|d| d.vendor_id() == vendor_id && d.product_id() == product_id);
        if !present {
            return Err(HidCommonError::DeviceNotFound(format!(
                "{vendor_id:04x}:{product_id:04x}"
            )));
        }
        let device = api.open(vendor_id, product_id).map_err(|e| {
            HidCommonError::OpenError(format!("{vendor_id:04x}:{product_id:04x}: {e}"))
        })?;
        device
            .set_blocking_mode(true)
            .map_err(|e| HidCommonError::OpenError(format!("failed to set blocking mode: {e}")))?;

        let mut info = HidDeviceInfo::new(vendor_id, product_id);
        if let Ok(Some(manufacturer)) = device.get_manufacturer_string() {
            info = info.with_manufacturer(manufacturer);
        }
        if let Ok(Some(product)) = device.get_product_string() {
            info = info.with_product_name(product);
        }
        if let Ok(Some(serial)) = device.get_serial_number_string() {
            info = info.with_serial(serial);
        }

        info!(device = %info.id_string(), name = %info.display_name(), "opened HID device");

        Ok(Self {
            _api: api,
            device: Some(device),
            info,
        })
    }

    fn device(&self) -> HidCommonResult<&HidDevice> {
        self.device.as_ref().ok_or(HidCommonError::Disconnected)
    }
}

fn timeout_millis(timeout: Duration) -> i32 {
    i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX)
}

impl HidTransport for HidApiTransport {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let written = self
            .device()?
            .write(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))?;
        trace!(len = data.len(), written, "HID write");
        Ok(written)
    }

    fn read_report(
        &mut self,
        buf: &mut [u8],
        timeout: Option<Duration>,
    ) -> HidCommonResult<usize> {
        let device = self.device()?;
        let read = match timeout {
            Some(timeout) => device.read_timeout(buf, timeout_millis(timeout)),
            None => device.read(buf),
        }
        .map_err(|e| HidCommonError::ReadError(e.to_string()))?;
        trace!(read, "HID read");
        Ok(read)
    }

    fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    fn is_connected(&self) -> bool {
        self.device.is_some()
    }

    fn close(&mut self) -> HidCommonResult<()> {
        if self.device.take().is_some() {
            debug!(device = %self.info.id_string(), "released HID device handle");
        }
        Ok(())
    }
}
