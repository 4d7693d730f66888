//! Task Filtering
//!
//! Client-side projection of the fetched task list by completion state and
//! category. Never touches the server-side collections.

use crate::models::Task;

/// Completion-state predicate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Category predicate; `Named` compares the task's category exactly
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `<select>` value standing for "all categories" (names are never empty)
    pub const ALL_VALUE: &'static str = "";

    pub fn from_select_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => task.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// Tasks passing both filters, status first, in source order
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    status: StatusFilter,
    category: &CategoryFilter,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| status.matches(task))
        .filter(|task| category.matches(task))
        .collect()
}

/// Summary counts over the whole (unfiltered) collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}
