//! Progress notification for tool invocations.
//!
//! A search reports what it is doing through a [`ProgressNotifier`]. Delivery
//! is best-effort: [`report`] swallows notifier failures and writes the
//! message to stderr instead, so a broken notifier can never change the
//! outcome of the operation it describes.
//!
//! # Usage
//!
//! ```ignore
//! use biopaper_mcp::utils::{report, ConsoleNotifier};
//!
//! let notifier = ConsoleNotifier;
//! report(&notifier, "Sending request to Europe PMC");
//! ```

use owo_colors::OwoColorize;
use std::io::{self, Write};
use tokio::sync::mpsc;

/// Errors raised while delivering a progress message
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The receiving side has gone away
    #[error("progress channel closed")]
    Closed,

    /// Any other delivery failure
    #[error("progress delivery failed: {0}")]
    Delivery(String),
}

/// Receives progress messages from a running operation
pub trait ProgressNotifier: Send + Sync {
    /// Deliver one message
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Deliver a message, falling back to stderr if the notifier fails.
pub fn report(notifier: &dyn ProgressNotifier, message: &str) {
    report_to(notifier, message, &mut io::stderr().lock());
}

/// Deliver a message, writing it to `fallback` if the notifier fails.
///
/// A failing fallback write is dropped.
pub fn report_to(notifier: &dyn ProgressNotifier, message: &str, fallback: &mut dyn Write) {
    if let Err(err) = notifier.notify(message) {
        tracing::warn!(error = %err, "Progress notification failed");
        let _ = writeln!(fallback, "INFO: {}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl ProgressNotifier for NoopNotifier {
    fn notify(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Forwards messages to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl ProgressNotifier for TracingNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!(target: "biopaper_mcp::progress", "{}", message);
        Ok(())
    }
}

/// Prints messages to stdout, for interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ProgressNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        println!("{} {}", "INFO:".cyan(), message);
        Ok(())
    }
}

/// Pushes messages onto an unbounded channel without waiting
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressNotifier for ChannelNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        self.sender
            .send(message.to_string())
            .map_err(|_| NotifyError::Closed)
    }
}
