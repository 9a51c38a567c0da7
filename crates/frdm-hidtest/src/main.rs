//! hidtest - manual test tool for the FRDM-MCXA153 `usb_hid` firmware
//!
//! Prints every string the board sends and answers `"B"` / `"O"` with a
//! command that switches the blue LED on / off.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod config;
mod output;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use frdm_hid_common::{HidApiTransport, HidTransport, TransportGuard};
use frdm_hid_protocol::{DispatchStats, Feedback, LedState, dispatch_loop, send_command, send_string};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_POLL_MS, HostConfig, parse_hex_u16};
use crate::output::ConsoleFeedback;

#[derive(Parser)]
#[command(
    name = "hidtest",
    about = "Exchange string and LED command frames with an FRDM-MCXA153 over USB HID"
)]
#[command(version)]
struct Cli {
    /// Vendor ID (hex, e.g. 0x1FC9)
    #[arg(long, global = true, env = "FRDM_HID_VID", value_parser = parse_hex_u16, default_value = "0x1FC9")]
    vid: u16,

    /// Product ID (hex, e.g. 0x00A2)
    #[arg(long, global = true, env = "FRDM_HID_PID", value_parser = parse_hex_u16, default_value = "0x00A2")]
    pid: u16,

    /// Read timeout in milliseconds between Ctrl-C checks (0 = block)
    #[arg(long, global = true, env = "FRDM_HID_POLL_MS", default_value_t = DEFAULT_POLL_MS)]
    poll_ms: u64,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print strings from the device and answer "B"/"O" with LED commands (default)
    Listen,
    /// Send one string frame (at most 63 single-byte characters are sent)
    Send {
        /// Text to send
        text: String,
    },
    /// Send one LED command frame
    Led {
        #[arg(value_enum)]
        state: LedArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LedArg {
    On,
    Off,
}

impl From<LedArg> for LedState {
    fn from(arg: LedArg) -> Self {
        match arg {
            LedArg::On => LedState::On,
            LedArg::Off => LedState::Off,
        }
    }
}

impl Cli {
    fn host_config(&self) -> HostConfig {
        HostConfig {
            vendor_id: self.vid,
            product_id: self.pid,
            poll_ms: self.poll_ms,
        }
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries operator output, so diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("frdm_hidtest={log_level},frdm_hid_protocol={log_level},frdm_hid_common={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn open_device(config: &HostConfig) -> Result<TransportGuard<HidApiTransport>> {
    let transport = HidApiTransport::open(config.vendor_id, config.product_id)
        .with_context(|| format!("failed to open device {}", config.device_label()))?;
    Ok(TransportGuard::new(transport))
}

/// Run the dispatch loop until `stop` is raised, then switch the LED off and
/// close the device. The guard closes the device on the error paths too.
fn listen<T, F>(
    mut guard: TransportGuard<T>,
    feedback: &mut F,
    stop: &AtomicBool,
    poll_interval: Option<Duration>,
) -> Result<DispatchStats>
where
    T: HidTransport,
    F: Feedback,
{
    let stats = dispatch_loop(&mut *guard, feedback, stop, poll_interval)
        .context("HID dispatch loop failed")?;

    if let Err(e) = send_command(&mut *guard, LedState::Off.flag(), feedback) {
        warn!(error = %e, "failed to switch LED off on shutdown");
    }
    guard.close().context("failed to close HID device")?;
    Ok(stats)
}

fn run_listen(config: &HostConfig) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop_clone = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop_clone.store(true, Ordering::Relaxed);
        })
        .context("failed to install Ctrl-C handler")?;
    }

    let guard = open_device(config)?;
    eprintln!(
        "Listening on {} (Ctrl-C to stop)",
        config.device_label()
    );

    let stats = listen(
        guard,
        &mut ConsoleFeedback::stdout(),
        &stop,
        config.poll_interval(),
    )?;
    info!(
        stats = %serde_json::to_string(&stats).unwrap_or_default(),
        "session finished"
    );
    Ok(())
}

fn run_send(config: &HostConfig, text: &str) -> Result<()> {
    let mut guard = open_device(config)?;
    send_string(&mut *guard, text, &mut ConsoleFeedback::stdout())
        .with_context(|| format!("failed to send '{text}'"))?;
    guard.close().context("failed to close HID device")?;
    Ok(())
}

fn run_led(config: &HostConfig, state: LedState) -> Result<()> {
    let mut guard = open_device(config)?;
    send_command(&mut *guard, state.flag(), &mut ConsoleFeedback::stdout())
        .context("failed to send LED command")?;
    guard.close().context("failed to close HID device")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.host_config();
    info!(config = %serde_json::to_string(&config)?, "hidtest starting");

    match cli.command.unwrap_or(Commands::Listen) {
        Commands::Listen => run_listen(&config),
        Commands::Send { text } => run_send(&config, &text),
        Commands::Led { state } => run_led(&config, state.into()),
    }
}
