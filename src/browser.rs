//! Browser UI Capabilities
//!
//! Signal-backed busy indicator and notification toast, plus the native
//! `window.confirm` / `window.prompt` dialogs.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::dialogs::Dialogs;
use crate::feedback::{Feedback, Notification};

#[derive(Clone, Copy)]
pub struct BrowserUi {
    /// Number of remote calls in flight
    busy: RwSignal<u32>,
    notification: RwSignal<Option<Notification>>,
    /// Bumped on every notification so an older hide timer leaves a newer toast alone
    generation: StoredValue<u64>,
    timeout_ms: u32,
}

impl BrowserUi {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            busy: RwSignal::new(0),
            notification: RwSignal::new(None),
            generation: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get() > 0
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification.get()
    }

    pub fn dismiss(&self) {
        self.notification.set(None);
    }
}

impl Feedback for BrowserUi {
    fn request_started(&self) {
        self.busy.update(|n| *n += 1);
    }

    fn request_finished(&self) {
        self.busy.update(|n| *n = n.saturating_sub(1));
    }

    fn notify(&self, notification: Notification) {
        let generation = self.generation.get_value().wrapping_add(1);
        self.generation.set_value(generation);
        self.notification.set(Some(notification));

        let ui = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(ui.timeout_ms).await;
            if ui.generation.get_value() == generation {
                ui.notification.set(None);
            }
        });
    }
}

impl Dialogs for BrowserUi {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }
}
