//! HID transport traits

use std::time::Duration;

use crate::HidCommonResult;

/// A single opened HID device.
///
/// Reads and writes move whole reports. `write_report` takes the buffer
/// exactly as the host API expects it, including the leading report-ID slot.
pub trait HidTransport {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    /// Read one input report into `buf`.
    ///
    /// `None` blocks until a report arrives. With a timeout, `Ok(0)` means
    /// nothing arrived in time.
    fn read_report(&mut self, buf: &mut [u8], timeout: Option<Duration>)
    -> HidCommonResult<usize>;

    fn device_info(&self) -> &crate::HidDeviceInfo;

    fn is_connected(&self) -> bool;

    /// Release the device handle. Closing twice is a no-op.
    fn close(&mut self) -> HidCommonResult<()>;
}

impl<T: HidTransport + ?Sized> HidTransport for Box<T> {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        (**self).write_report(data)
    }

    fn read_report(
        &mut self,
        buf: &mut [u8],
        timeout: Option<Duration>,
    ) -> HidCommonResult<usize> {
        (**self).read_report(buf, timeout)
    }

    fn device_info(&self) -> &crate::HidDeviceInfo {
        (**self).device_info()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn close(&mut self) -> HidCommonResult<()> {
        (**self).close()
    }
}

pub mod mock {
    use super::*;
    use crate::HidCommonError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Inbound entry for [`MockHidTransport`].
    #[derive(Debug, Clone)]
    pub enum MockRead {
        Report(Vec<u8>),
        /// A read that timed out (returns `Ok(0)`).
        Timeout,
        /// A read that fails with [`HidCommonError::ReadError`].
        Fail(String),
    }

    /// In-memory transport. Clones share the same queues, so a test can keep
    /// one handle while another is moved into the code under test.
    #[derive(Clone)]
    pub struct MockHidTransport {
        info: crate::HidDeviceInfo,
        read_queue: Arc<Mutex<VecDeque<MockRead>>>,
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
        fail_writes: Arc<Mutex<bool>>,
        close_count: Arc<Mutex<usize>>,
    }

    impl MockHidTransport {
        pub fn new(vendor_id: u16, product_id: u16) -> Self {
            Self {
                info: crate::HidDeviceInfo::new(vendor_id, product_id),
                read_queue: Arc::new(Mutex::new(VecDeque::new())),
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
                fail_writes: Arc::new(Mutex::new(false)),
                close_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn queue_read(&self, data: Vec<u8>) {
            self.push(MockRead::Report(data));
        }

        pub fn queue_timeout(&self) {
            self.push(MockRead::Timeout);
        }

        pub fn queue_read_error(&self, message: impl Into<String>) {
            self.push(MockRead::Fail(message.into()));
        }

        fn push(&self, entry: MockRead) {
            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(entry);
        }

        pub fn pending_reads(&self) -> usize {
            self.read_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .len()
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn set_fail_writes(&self, fail: bool) {
            *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) = fail;
        }

        /// Number of times `close` was called while the device was open.
        pub fn close_count(&self) -> usize {
            *self.close_count.lock().unwrap_or_else(|e| e.into_inner())
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }
    }

    impl HidTransport for MockHidTransport {
        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }
            if *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) {
                return Err(HidCommonError::WriteError("injected failure".to_string()));
            }

            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(data.to_vec());
            Ok(data.len())
        }

        fn read_report(
            &mut self,
            buf: &mut [u8],
            _timeout: Option<Duration>,
        ) -> HidCommonResult<usize> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }

            let next = self
                .read_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front();
            match next {
                Some(MockRead::Report(data)) => {
                    let n = data.len().min(buf.len());
                    for (dst, src) in buf.iter_mut().zip(data.iter().take(n)) {
                        *dst = *src;
                    }
                    Ok(n)
                }
                Some(MockRead::Timeout) => Ok(0),
                Some(MockRead::Fail(message)) => Err(HidCommonError::ReadError(message)),
                None => Err(HidCommonError::ReadError("No data available".to_string())),
            }
        }

        fn device_info(&self) -> &crate::HidDeviceInfo {
            &self.info
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }

        fn close(&mut self) -> HidCommonResult<()> {
            if self.is_connected() {
                *self.close_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
            }
            self.disconnect();
            Ok(())
        }
    }
}
