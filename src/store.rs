//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The local task and
//! category collections are copies of the server's; they are only ever patched
//! with records the server returned.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{CategoryFilter, StatusFilter};
use crate::models::{Category, Task, TaskId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks as last returned by the server, in server order
    pub tasks: Vec<Task>,
    /// Categories as last returned by the server
    pub categories: Vec<Category>,
    pub status_filter: StatusFilter,
    pub category_filter: CategoryFilter,
}

impl TodoState {
    /// Replace the task with the same id; `false` when it is no longer present
    pub fn replace_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`; `false` when there was none
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn completed_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().filter(|t| t.completed).map(|t| t.id).collect()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn category_color(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.color.as_str())
    }
}

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read and write access to [`TodoState`] without holding a borrow across awaits
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut TodoState));
}

impl StateHandle for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut TodoState)) {
        self.update(f);
    }
}

#[cfg(test)]
impl StateHandle for std::rc::Rc<std::cell::RefCell<TodoState>> {
    fn with_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.borrow_mut());
    }
}
