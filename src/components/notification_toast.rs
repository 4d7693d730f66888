//! Notification Toast & Loading Spinner
//!
//! Both read the signal-backed [`BrowserUi`](crate::browser::BrowserUi).

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ui = use_app().ui;

    move || {
        ui.notification().map(|n| {
            view! {
                <div class=n.kind.css_class() on:click=move |_| ui.dismiss()>
                    {n.message}
                </div>
            }
        })
    }
}

/// Shown while any remote call is in flight
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let ui = use_app().ui;

    view! {
        <Show when=move || ui.is_busy()>
            <div class="loading-spinner">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
