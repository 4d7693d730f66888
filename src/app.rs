//! Todo Board App
//!
//! Root component: wires the context and loads the initial data.

use leptos::prelude::*;

use crate::components::{
    CategoryModal, FilterBar, LoadingSpinner, NotificationToast, StatsModal, TaskForm, TaskList,
    TaskSummary,
};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_document());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.store);

    ctx.spawn(|actions| async move { actions.load_initial().await });

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Todo Board"</h1>
                <div class="header-actions">
                    <button class="category-btn" on:click=move |_| ctx.show_categories.set(true)>
                        "Categories"
                    </button>
                    <button class="stats-btn" on:click=move |_| ctx.show_stats.set(true)>
                        "Statistics"
                    </button>
                </div>
            </header>

            <main class="main-content">
                <TaskForm />
                <FilterBar />
                <TaskList />
                <TaskSummary />
            </main>

            <CategoryModal />
            <StatsModal />
            <LoadingSpinner />
            <NotificationToast />
        </div>
    }
}
