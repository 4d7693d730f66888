//! Task List Component
//!
//! Renders the filtered task rows, or the empty-state placeholder.

use chrono::Local;
use leptos::prelude::*;

use crate::context::use_app;
use crate::render::{task_list_view, TaskListView, TaskRow};
use crate::store::use_app_store;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let fallback_category = ctx.config().default_category;

    let list = Memo::new(move |_| task_list_view(&store.read(), &fallback_category, Local::now()));

    move || match list.get() {
        TaskListView::Empty => view! {
            <div class="empty-state">
                <p>"No tasks to show."</p>
            </div>
        }
        .into_any(),
        TaskListView::Rows(rows) => view! {
            <ul class="todo-list">
                {rows.into_iter().map(|row| view! { <TaskItem row=row /> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

/// One task with its toggle, edit and delete controls
#[component]
fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app();
    let id = row.id;
    let completed = row.completed;
    // Mirrors the box so a failed toggle can put it back
    let checked = RwSignal::new(completed);
    let category_style = row
        .category_color
        .map(|color| format!("background-color: {};", color))
        .unwrap_or_default();

    view! {
        <li class={if row.completed { "todo-item completed" } else { "todo-item" }}>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    checked.set(event_target_checked(&ev));
                    ctx.spawn(move |actions| async move {
                        let result = actions.toggle_task(id).await;
                        if result.is_err() {
                            checked.set(completed);
                        }
                        result
                    });
                }
            />
            <div class="todo-content">
                <div class="todo-title">{row.title}</div>
                {row.description.map(|d| view! { <div class="todo-description">{d}</div> })}
                <div class="todo-meta">
                    <span class="todo-category" style=category_style>{row.category}</span>
                    {row.age.map(|age| view! { <span class="todo-date">{age}</span> })}
                </div>
            </div>
            <div class="todo-actions">
                <button
                    class="edit-btn"
                    on:click=move |_| ctx.spawn(move |actions| async move { actions.edit_task(id).await })
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| ctx.spawn(move |actions| async move { actions.delete_task(id).await })
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
