use std::time::Duration;

use leptos::prelude::*;
use tracing::warn;

/// A one-shot browser timer owned by a component. Starting it again
/// replaces the pending callback, and unmounting the owner clears it.
#[derive(Clone, Copy)]
pub struct PendingTimer {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl PendingTimer {
    pub fn new() -> Self {
        let handle = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(Some(h)) = handle.try_get_value() {
                h.clear();
            }
        });
        Self { handle }
    }

    pub fn start(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(callback, delay) {
            Ok(h) => self.handle.set_value(Some(h)),
            Err(_) => warn!("Failed to schedule timer"),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(h)) = self.handle.try_get_value() {
            h.clear();
            self.handle.set_value(None);
        }
    }
}

pub fn millis(ms: u32) -> Duration {
    Duration::from_millis(ms.into())
}
