//! Notification sinks

use tokio::sync::mpsc;
use crate::domain::repositories::notifier::{Notification, Notifier};
use crate::shared::types::Severity;

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let ms = notification.duration.as_millis();
        match notification.severity {
            Severity::Danger => log::error!("[{} ms] {}", ms, notification.message),
            Severity::Warning => log::warn!("[{} ms] {}", ms, notification.message),
            Severity::Info | Severity::Success => log::info!("[{} ms] {}", ms, notification.message),
        }
    }
}

/// Forwards notifications to a UI consumer over a channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            log::debug!("Notification dropped, no consumer attached");
        }
    }
}
