//! Scoped ownership of an opened transport.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::{HidCommonResult, HidTransport};

/// Owns a transport and closes it when the guard goes out of scope.
///
/// Use [`TransportGuard::close`] to observe close errors; the implicit close
/// on drop can only log them.
pub struct TransportGuard<T: HidTransport> {
    transport: T,
    closed: bool,
}

impl<T: HidTransport> TransportGuard<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            closed: false,
        }
    }

    pub fn close(mut self) -> HidCommonResult<()> {
        self.closed = true;
        let id = self.transport.device_info().id_string();
        debug!(device = %id, "closing HID transport");
        self.transport.close()
    }
}

impl<T: HidTransport> Deref for TransportGuard<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.transport
    }
}

impl<T: HidTransport> DerefMut for TransportGuard<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: HidTransport> Drop for TransportGuard<T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        let id = self.transport.device_info().id_string();
        if let Err(e) = self.transport.close() {
            warn!(device = %id, error = %e, "failed to close HID transport");
        } else {
            debug!(device = %id, "HID transport closed on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HidCommonError;
    use crate::mock::MockHidTransport;

    #[test]
    fn drop_closes_transport() {
        let observer = MockHidTransport::new(0x1FC9, 0x00A2);
        {
            let mut guard = TransportGuard::new(observer.clone());
            guard.write_report(&[0x00, 0xFF, 0x00]).expect("write");
        }
        assert!(!observer.is_connected());
        assert_eq!(observer.close_count(), 1);
    }

    #[test]
    fn explicit_close_runs_once() -> Result<(), HidCommonError> {
        let observer = MockHidTransport::new(0x1FC9, 0x00A2);
        let guard = TransportGuard::new(observer.clone());
        guard.close()?;
        assert_eq!(observer.close_count(), 1);
        Ok(())
    }

    #[test]
    fn early_error_return_still_closes() {
        fn failing_session(
            guard: &mut TransportGuard<MockHidTransport>,
        ) -> Result<(), HidCommonError> {
            let mut buf = [0u8; 64];
            guard.read_report(&mut buf, None)?;
            Ok(())
        }

        let observer = MockHidTransport::new(0x1FC9, 0x00A2);
        observer.queue_read_error("device unplugged");
        let result = {
            let mut guard = TransportGuard::new(observer.clone());
            failing_session(&mut guard)
        };

        assert!(matches!(result, Err(HidCommonError::ReadError(_))));
        assert_eq!(observer.close_count(), 1);
    }
}
