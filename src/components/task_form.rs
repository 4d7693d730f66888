//! Task Form Component
//!
//! Title, description and category inputs for creating a task.

use leptos::prelude::*;

use crate::actions::{Outcome, TaskDraft};
use crate::context::use_app;
use crate::render::selected_category;
use crate::store::{use_app_store, TodoStateStoreFields};

/// Form for adding a new task. Enter in either text field submits.
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let fallback_category = ctx.config().default_category;

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let picked = RwSignal::new(String::new());

    // What the select shows is also what gets submitted
    let category = Memo::new(move |_| {
        selected_category(&picked.get(), &store.categories().read(), &fallback_category)
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
        };
        ctx.spawn(move |actions| async move {
            let outcome = actions.add_task(draft).await?;
            if outcome == Outcome::Applied {
                title.set(String::new());
                description.set(String::new());
            }
            Ok(outcome)
        });
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="todo-description-input"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <select
                class="todo-category-select"
                prop:value=move || category.get()
                on:change=move |ev| picked.set(event_target_value(&ev))
            >
                {move || {
                    let categories = store.categories().get();
                    if categories.is_empty() {
                        let name = category.get();
                        return view! { <option value=name.clone()>{name.clone()}</option> }.into_any();
                    }
                    categories
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option value=c.name.clone() style=format!("color: {};", c.color)>
                                    {c.name.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </select>
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
