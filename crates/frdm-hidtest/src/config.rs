//! Runtime configuration assembled from command-line arguments and the
//! environment.

use std::time::Duration;

use frdm_hid_protocol::{PRODUCT_ID, VENDOR_ID};
use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Read timeout used to check for Ctrl-C. Zero blocks on every read.
    pub poll_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            vendor_id: VENDOR_ID,
            product_id: PRODUCT_ID,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

impl HostConfig {
    pub fn poll_interval(&self) -> Option<Duration> {
        (self.poll_ms > 0).then(|| Duration::from_millis(self.poll_ms))
    }

    pub fn device_label(&self) -> String {
        format!("{:04X}:{:04X}", self.vendor_id, self.product_id)
    }
}

/// Parse a USB ID given as hex, with or without a `0x` prefix.
pub fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

// ── BDD-style scenario tests ────────────────────────────────────────────────
