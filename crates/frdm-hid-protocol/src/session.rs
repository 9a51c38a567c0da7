//! Sending frames, receiving frames and the LED dispatch loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use frdm_hid_common::HidTransport;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::frame::{
    ReportBuffer, decode_string, encode_command, encode_string, format_hex, with_report_id,
};
use crate::ids::{REPORT_LEN, TRIGGER_LED_OFF, TRIGGER_LED_ON};
use crate::{FrdmHidError, FrdmHidResult};

/// Operator-facing record of what went over the wire.
///
/// This is purely observational and separate from diagnostic logging.
pub trait Feedback {
    fn received(&mut self, text: &str);

    fn sent_string(&mut self, text: &str);

    fn sent_command(&mut self, flag: u8);
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn received(&mut self, text: &str) {
        (**self).received(text);
    }

    fn sent_string(&mut self, text: &str) {
        (**self).sent_string(text);
    }

    fn sent_command(&mut self, flag: u8) {
        (**self).sent_command(flag);
    }
}

/// Discards all feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn received(&mut self, _text: &str) {}

    fn sent_string(&mut self, _text: &str) {}

    fn sent_command(&mut self, _flag: u8) {}
}

/// State of the board's blue LED as carried in a command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedState {
    Off,
    On,
}

impl LedState {
    pub fn flag(self) -> u8 {
        match self {
            LedState::Off => 0,
            LedState::On => 1,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// Map an inbound string to the LED command it triggers, if any.
pub fn led_state_for(text: &str) -> Option<LedState> {
    match text {
        TRIGGER_LED_ON => Some(LedState::On),
        TRIGGER_LED_OFF => Some(LedState::Off),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStats {
    pub frames_received: u64,
    pub commands_sent: u64,
    /// Reads that returned without a report.
    pub idle_polls: u64,
}

fn write_frame<T>(transport: &mut T, report: &ReportBuffer) -> FrdmHidResult<usize>
where
    T: HidTransport + ?Sized,
{
    let out = with_report_id(report);
    let written = transport
        .write_report(&out)
        .map_err(FrdmHidError::TransportWrite)?;
    debug!(written, report = %format_hex(report), "frame sent");
    Ok(written)
}

/// Encode and send a string frame, returning the byte count reported by the
/// transport.
///
/// # Errors
///
/// [`FrdmHidError::Encoding`] if the text cannot be framed, or
/// [`FrdmHidError::TransportWrite`] if the write fails.
pub fn send_string<T, F>(transport: &mut T, text: &str, feedback: &mut F) -> FrdmHidResult<usize>
where
    T: HidTransport + ?Sized,
    F: Feedback + ?Sized,
{
    let report = encode_string(text)?;
    let written = write_frame(transport, &report)?;
    feedback.sent_string(&decode_string(&report));
    Ok(written)
}

/// Encode and send a command frame with `flag` placed verbatim.
///
/// # Errors
///
/// [`FrdmHidError::TransportWrite`] if the write fails.
pub fn send_command<T, F>(transport: &mut T, flag: u8, feedback: &mut F) -> FrdmHidResult<usize>
where
    T: HidTransport + ?Sized,
    F: Feedback + ?Sized,
{
    let written = write_frame(transport, &encode_command(flag))?;
    feedback.sent_command(flag);
    Ok(written)
}

/// Read one report and decode it as a string frame.
///
/// Returns `Ok(None)` when the read produced no data, which only happens
/// when `timeout` elapses.
///
/// # Errors
///
/// [`FrdmHidError::TransportRead`] if the read fails.
pub fn receive_string<T>(
    transport: &mut T,
    timeout: Option<Duration>,
) -> FrdmHidResult<Option<String>>
where
    T: HidTransport + ?Sized,
{
    let mut buf = [0u8; REPORT_LEN];
    let n = transport
        .read_report(&mut buf, timeout)
        .map_err(FrdmHidError::TransportRead)?;
    if n == 0 {
        return Ok(None);
    }
    let report = buf.get(..n).unwrap_or(buf.as_slice());
    debug!(len = n, report = %format_hex(report), "frame received");
    Ok(Some(decode_string(report)))
}

/// Receive string frames until `stop` is raised, answering `"B"` with an
/// LED-on command and `"O"` with an LED-off command.
///
/// With `poll_interval` set, reads time out so that `stop` is checked at
/// least that often. Without it, `stop` is only checked between reports.
///
/// # Errors
///
/// Any transport failure ends the loop and is returned unchanged.
pub fn dispatch_loop<T, F>(
    transport: &mut T,
    feedback: &mut F,
    stop: &AtomicBool,
    poll_interval: Option<Duration>,
) -> FrdmHidResult<DispatchStats>
where
    T: HidTransport + ?Sized,
    F: Feedback + ?Sized,
{
    let mut stats = DispatchStats::default();
    info!(
        device = %transport.device_info().id_string(),
        poll_interval = ?poll_interval,
        "dispatch loop started"
    );

    while !stop.load(Ordering::Relaxed) {
        let Some(text) = receive_string(transport, poll_interval)? else {
            stats.idle_polls += 1;
            continue;
        };
        stats.frames_received += 1;
        feedback.received(&text);

        if let Some(state) = led_state_for(&text) {
            send_command(transport, state.flag(), feedback)?;
            stats.commands_sent += 1;
        }
    }

    info!(
        frames_received = stats.frames_received,
        commands_sent = stats.commands_sent,
        "dispatch loop stopped"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_state_for_triggers() {
        assert_eq!(led_state_for("B"), Some(LedState::On));
        assert_eq!(led_state_for("O"), Some(LedState::Off));
        assert_eq!(led_state_for("X"), None);
        assert_eq!(led_state_for("b"), None);
        assert_eq!(led_state_for("BO"), None);
        assert_eq!(led_state_for(""), None);
    }

    #[test]
    fn test_led_state_flags() {
        assert_eq!(LedState::On.flag(), 1);
        assert_eq!(LedState::Off.flag(), 0);
        assert_eq!(LedState::from(true), LedState::On);
        assert_eq!(LedState::from(false), LedState::Off);
    }

    #[test]
    fn test_dispatch_stats_default() {
        let stats = DispatchStats::default();
        assert_eq!(stats.frames_received, 0);
        assert_eq!(stats.commands_sent, 0);
        assert_eq!(stats.idle_polls, 0);
    }
}
