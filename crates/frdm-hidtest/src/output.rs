//! Operator-facing console output

use std::io::{self, Stdout, Write};

use frdm_hid_protocol::Feedback;
use tracing::warn;

/// Prints received strings and sent frames, one line each.
pub struct ConsoleFeedback<W: Write> {
    out: W,
}

impl ConsoleFeedback<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleFeedback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write console output");
        }
    }
}

impl<W: Write> Feedback for ConsoleFeedback<W> {
    fn received(&mut self, text: &str) {
        self.line(text);
    }

    fn sent_string(&mut self, text: &str) {
        self.line(&format!("    sent: {text}"));
    }

    fn sent_command(&mut self, flag: u8) {
        self.line(&format!("    sent: Message packet with {flag}"));
    }
}
