//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{Actions, Outcome};
use crate::api::{Gateway, HttpTransport};
use crate::browser::BrowserUi;
use crate::config::AppConfig;
use crate::error::ActionError;
use crate::store::AppStore;

/// Production wiring of [`Actions`]
pub type AppActions = Actions<Gateway<HttpTransport, BrowserUi>, BrowserUi, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub ui: BrowserUi,
    actions: StoredValue<AppActions>,
    /// Category modal visibility
    pub show_categories: RwSignal<bool>,
    /// Statistics modal visibility
    pub show_stats: RwSignal<bool>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let store = AppStore::new(Default::default());
        let ui = BrowserUi::new(config.notification_timeout_ms);
        let gateway = Gateway::new(HttpTransport::new(config.api_base_url.clone()), ui);

        Self {
            store,
            ui,
            actions: StoredValue::new(Actions::new(gateway, ui, store, config)),
            show_categories: RwSignal::new(false),
            show_stats: RwSignal::new(false),
        }
    }

    pub fn actions(&self) -> AppActions {
        self.actions.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.actions.with_value(|a| a.config().clone())
    }

    /// Run an action in the background. Failures were already shown to the
    /// user, so they are only logged here.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppActions) -> Fut + 'static,
        Fut: Future<Output = Result<Outcome, ActionError>> + 'static,
    {
        let actions = self.actions();
        spawn_local(async move {
            if let Err(err) = action(actions).await {
                tracing::debug!(error = %err, "action did not complete");
            }
        });
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
