//! Task Summary Component
//!
//! Total / active / completed counts and the bulk delete buttons.

use leptos::prelude::*;

use crate::context::use_app;
use crate::filter::TaskCounts;
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn TaskSummary() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let counts = Memo::new(move |_| TaskCounts::of(&store.tasks().read()));

    view! {
        <div class="todo-summary">
            <div class="counts">
                <span>"Total: " {move || counts.get().total}</span>
                <span>"Active: " {move || counts.get().active}</span>
                <span>"Completed: " {move || counts.get().completed}</span>
            </div>
            <div class="bulk-actions">
                <button
                    class="clear-completed-btn"
                    on:click=move |_| ctx.spawn(|actions| async move { actions.clear_completed().await })
                >
                    "Clear completed"
                </button>
                <button
                    class="clear-all-btn"
                    on:click=move |_| ctx.spawn(|actions| async move { actions.clear_all().await })
                >
                    "Clear all"
                </button>
            </div>
        </div>
    }
}
