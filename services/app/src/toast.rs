//! Transient, auto-dismissing notifications
//!
//! A toast is a single slot: showing a message replaces whatever is visible
//! and schedules a clear after the dismiss delay. Earlier timers are not
//! cancelled, so an old timer may blank a newer message early. Clearing is
//! unconditional, which keeps that race harmless.

use common::settings::DEFAULT_TOAST_DISMISS_MS;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Toast {
    slot: Arc<watch::Sender<Option<String>>>,
    dismiss_after: Duration,
}

impl Toast {
    pub fn new(dismiss_after: Duration) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
            dismiss_after,
        }
    }

    /// Show `message`, replacing any visible one
    ///
    /// Outside a Tokio runtime the message stays until [`Toast::dismiss`].
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        info!(toast = %message, "Showing toast");
        self.slot.send_replace(Some(message));

        match Handle::try_current() {
            Ok(handle) => {
                let slot = Arc::clone(&self.slot);
                let delay = self.dismiss_after;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    slot.send_replace(None);
                });
            }
            Err(_) => debug!("No runtime available; toast will not auto-dismiss"),
        }
    }

    /// Hide the toast now
    pub fn dismiss(&self) {
        self.slot.send_replace(None);
    }

    /// Visible message, if any
    pub fn current(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Watch the slot for changes
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.slot.subscribe()
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_DISMISS_MS))
    }
}
