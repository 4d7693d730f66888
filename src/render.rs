//! Task List View Model
//!
//! Pure projection of the state into what the list shows. Components only map
//! this onto DOM, so the rules live here and are testable without a browser.

use chrono::{DateTime, Local};

use crate::filter::visible_tasks;
use crate::models::{Category, Task, TaskId};
use crate::store::TodoState;
use crate::time_format::format_relative_at;

/// One rendered list row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub category_color: Option<String>,
    pub completed: bool,
    /// Relative age label, when the server sent a creation time
    pub age: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    /// Nothing passes the filters; show the placeholder
    Empty,
    Rows(Vec<TaskRow>),
}

impl TaskRow {
    fn from_task(task: &Task, state: &TodoState, fallback_category: &str, now: DateTime<Local>) -> Self {
        let category = task.category_or(fallback_category).to_string();
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            category_color: state.category_color(&category).map(str::to_string),
            category,
            completed: task.completed,
            age: task.created_at.as_deref().map(|ts| format_relative_at(ts, now)),
        }
    }
}

pub fn task_list_view(state: &TodoState, fallback_category: &str, now: DateTime<Local>) -> TaskListView {
    let visible = visible_tasks(&state.tasks, state.status_filter, &state.category_filter);
    if visible.is_empty() {
        return TaskListView::Empty;
    }
    TaskListView::Rows(
        visible
            .into_iter()
            .map(|task| TaskRow::from_task(task, state, fallback_category, now))
            .collect(),
    )
}

/// Category the new-task select shows: the user's pick while it still
/// exists, else the first category, else `fallback` (the only option then)
pub fn selected_category(picked: &str, categories: &[Category], fallback: &str) -> String {
    if categories.iter().any(|c| c.name == picked) {
        return picked.to_string();
    }
    categories
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}
