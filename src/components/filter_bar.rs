//! Filter Bar Component
//!
//! Status buttons and category select narrowing the visible list.

use leptos::prelude::*;

use crate::context::use_app;
use crate::filter::{CategoryFilter, StatusFilter};
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <div class="status-filters">
                {StatusFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_active = move || store.status_filter().get() == filter;
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| ctx.actions().set_status_filter(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            // Options follow the category list; a filter naming a category
            // that has since disappeared stays applied until changed.
            <select
                class="category-filter"
                prop:value=move || store.category_filter().read().select_value().to_string()
                on:change=move |ev| {
                    let filter = CategoryFilter::from_select_value(&event_target_value(&ev));
                    ctx.actions().set_category_filter(filter);
                }
            >
                <option value={CategoryFilter::ALL_VALUE}>"All categories"</option>
                <For
                    each=move || store.categories().get()
                    key=|c| c.name.clone()
                    children=move |c| {
                        view! {
                            <option value=c.name.clone() style=format!("color: {};", c.color)>
                                {c.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
