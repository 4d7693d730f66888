//! User Actions
//!
//! Every mutating action follows the same shape: validate locally, ask for
//! confirmation where destructive, call the API, then patch the local copy
//! with what the server returned. Nothing is patched when the call fails.

use crate::api::TodoApi;
use crate::config::AppConfig;
use crate::dialogs::Dialogs;
use crate::error::ActionError;
use crate::feedback::{Feedback, Notification};
use crate::filter::{CategoryFilter, StatusFilter};
use crate::models::{NewCategory, NewTask, TaskId, TaskUpdate};
use crate::store::StateHandle;

/// How an action ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted it and local state was patched
    Applied,
    /// The user declined a confirmation or prompt
    Cancelled,
    /// Nothing to do; no remote call was made
    Skipped,
}

/// Input of the new-task form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Input of the new-category form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

#[derive(Clone)]
pub struct Actions<A, U, S> {
    api: A,
    ui: U,
    state: S,
    config: AppConfig,
}

impl<A, U, S> Actions<A, U, S>
where
    A: TodoApi,
    U: Dialogs + Feedback,
    S: StateHandle,
{
    pub fn new(api: A, ui: U, state: S, config: AppConfig) -> Self {
        Self { api, ui, state, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Show `message` and turn it into a validation error
    fn reject(&self, message: &str) -> ActionError {
        tracing::warn!(reason = message, "action rejected");
        self.ui.notify(Notification::error(message));
        ActionError::Validation(message.to_string())
    }

    // ========================
    // Loading
    // ========================

    pub async fn load_tasks(&self) -> Result<Outcome, ActionError> {
        let tasks = self.api.list_tasks().await?;
        tracing::info!(count = tasks.len(), "tasks loaded");
        self.state.update_state(|s| s.tasks = tasks);
        Ok(Outcome::Applied)
    }

    pub async fn load_categories(&self) -> Result<Outcome, ActionError> {
        let categories = self.api.list_categories().await?;
        tracing::info!(count = categories.len(), "categories loaded");
        self.state.update_state(|s| s.categories = categories);
        Ok(Outcome::Applied)
    }

    /// Load categories and tasks independently; a failure of one does not
    /// keep the other from loading. Returns the first error, if any.
    pub async fn load_initial(&self) -> Result<Outcome, ActionError> {
        let categories = self.load_categories().await;
        let tasks = self.load_tasks().await;
        categories.and(tasks)
    }

    // ========================
    // Tasks
    // ========================

    pub async fn add_task(&self, draft: TaskDraft) -> Result<Outcome, ActionError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(self.reject("Please enter a task title!"));
        }
        let category = match draft.category.trim() {
            "" => self.config.default_category.clone(),
            name => name.to_string(),
        };

        let body = NewTask {
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            category,
            completed: false,
        };
        let created = self.api.create_task(&body).await?;

        tracing::info!(id = created.id, "task added");
        self.state.update_state(|s| s.tasks.push(created));
        self.ui.notify(Notification::success("Task added!"));
        Ok(Outcome::Applied)
    }

    pub async fn toggle_task(&self, id: TaskId) -> Result<Outcome, ActionError> {
        let updated = self.api.toggle_task(id).await?;

        let mut replaced = false;
        self.state.update_state(|s| replaced = s.replace_task(updated));
        if !replaced {
            tracing::warn!(id, "toggled task is no longer listed");
            return Ok(Outcome::Skipped);
        }
        Ok(Outcome::Applied)
    }

    pub async fn edit_task(&self, id: TaskId) -> Result<Outcome, ActionError> {
        let Some(current) = self.state.with_state(|s| s.find_task(id).cloned()) else {
            return Ok(Outcome::Skipped);
        };

        let Some(title) = self.ui.prompt("New title:", &current.title) else {
            return Ok(Outcome::Cancelled);
        };
        let title = title.trim();
        if title.is_empty() {
            return Err(self.reject("Task title cannot be empty!"));
        }
        let description = self
            .ui
            .prompt("New description:", current.description.as_deref().unwrap_or(""))
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let update = TaskUpdate {
            title: title.to_string(),
            description,
            completed: current.completed,
        };
        let updated = self.api.replace_task(id, &update).await?;

        tracing::info!(id, "task edited");
        self.state.update_state(|s| {
            s.replace_task(updated);
        });
        self.ui.notify(Notification::success("Task updated!"));
        Ok(Outcome::Applied)
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<Outcome, ActionError> {
        if !self.ui.confirm("Delete this task?") {
            return Ok(Outcome::Cancelled);
        }
        self.api.delete_task(id).await?;

        tracing::info!(id, "task deleted");
        self.state.update_state(|s| {
            s.remove_task(id);
        });
        self.ui.notify(Notification::success("Task deleted!"));
        Ok(Outcome::Applied)
    }

    /// Delete completed tasks one by one, stopping at the first failure.
    /// Tasks the server already deleted stay deleted locally.
    pub async fn clear_completed(&self) -> Result<Outcome, ActionError> {
        let ids = self.state.with_state(|s| s.completed_ids());
        if ids.is_empty() {
            self.ui.notify(Notification::info("There are no completed tasks."));
            return Ok(Outcome::Skipped);
        }
        if !self.ui.confirm(&format!("Delete {} completed tasks?", ids.len())) {
            return Ok(Outcome::Cancelled);
        }

        for (deleted, &id) in ids.iter().enumerate() {
            if let Err(err) = self.api.delete_task(id).await {
                tracing::warn!(id, deleted, remaining = ids.len() - deleted, "clear completed stopped");
                return Err(err.into());
            }
            self.state.update_state(|s| {
                s.remove_task(id);
            });
        }

        tracing::info!(count = ids.len(), "completed tasks cleared");
        self.ui
            .notify(Notification::success(format!("{} completed tasks deleted!", ids.len())));
        Ok(Outcome::Applied)
    }

    pub async fn clear_all(&self) -> Result<Outcome, ActionError> {
        let count = self.state.with_state(|s| s.tasks.len());
        if count == 0 {
            self.ui.notify(Notification::info("There are no tasks to delete."));
            return Ok(Outcome::Skipped);
        }
        if !self.ui.confirm(&format!("Delete all {} tasks?", count)) {
            return Ok(Outcome::Cancelled);
        }
        self.api.delete_all_tasks().await?;

        tracing::info!(count, "all tasks cleared");
        self.state.update_state(|s| s.tasks.clear());
        self.ui.notify(Notification::success("All tasks deleted!"));
        Ok(Outcome::Applied)
    }

    // ========================
    // Categories
    // ========================

    pub async fn add_category(&self, draft: CategoryDraft) -> Result<Outcome, ActionError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(self.reject("Please enter a category name!"));
        }
        if self.state.with_state(|s| s.has_category(name)) {
            return Err(self.reject("That category already exists!"));
        }
        let color = match draft.color.trim() {
            "" => self.config.default_category_color.clone(),
            color => color.to_string(),
        };

        let body = NewCategory { name: name.to_string(), color };
        let created = self.api.create_category(&body).await?;

        tracing::info!(name = %created.name, "category added");
        self.state.update_state(|s| s.categories.push(created));
        self.ui.notify(Notification::success("Category added!"));
        Ok(Outcome::Applied)
    }

    // ========================
    // View State
    // ========================

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.state.update_state(|s| s.status_filter = filter);
    }

    pub fn set_category_filter(&self, filter: CategoryFilter) {
        self.state.update_state(|s| s.category_filter = filter);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::api::fake::{task, FakeApi};
    use crate::error::ApiError;
    use crate::feedback::testing::RecordingUi;
    use crate::feedback::NotificationKind;
    use crate::models::{Category, Task};
    use crate::store::TodoState;

    type TestActions<'a> = Actions<FakeApi, &'a RecordingUi, Rc<RefCell<TodoState>>>;

    fn sample_tasks() -> Vec<Task> {
        vec![task(1, "A", false, "Work"), task(2, "B", true, "Home"), task(3, "C", true, "Work")]
    }

    fn setup<'a>(api: &FakeApi, ui: &'a RecordingUi) -> (TestActions<'a>, Rc<RefCell<TodoState>>) {
        let state = Rc::new(RefCell::new(TodoState {
            tasks: api.server_tasks(),
            categories: vec![Category { name: "Work".into(), color: "#111111".into() }],
            ..Default::default()
        }));
        let actions = Actions::new(api.clone(), ui, state.clone(), AppConfig::default());
        (actions, state)
    }

    fn local_ids(state: &Rc<RefCell<TodoState>>) -> Vec<u32> {
        state.borrow().tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_blank_title_never_calls_api() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        let before = state.borrow().tasks.clone();

        for title in ["", "   ", "\t\n"] {
            let draft = TaskDraft { title: title.into(), ..Default::default() };
            let result = block_on(actions.add_task(draft));
            assert!(matches!(result, Err(ActionError::Validation(_))));
        }

        assert!(api.calls().is_empty());
        assert_eq!(state.borrow().tasks, before);
        assert_eq!(ui.last_notification().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_add_task_appends_server_record() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        let draft = TaskDraft {
            title: "  Buy milk ".into(),
            description: " 2 liters ".into(),
            category: String::new(),
        };
        assert_eq!(block_on(actions.add_task(draft)), Ok(Outcome::Applied));

        let added = state.borrow().tasks.last().cloned().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Buy milk");
        assert_eq!(added.description.as_deref(), Some("2 liters"));
        assert_eq!(added.category.as_deref(), Some("General"));
        assert!(!added.completed);
        assert_eq!(api.calls(), vec!["create_task Buy milk"]);
        assert_eq!(ui.last_notification().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn test_toggle_replaces_only_matching_task() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        let before = state.borrow().tasks.clone();

        assert_eq!(block_on(actions.toggle_task(2)), Ok(Outcome::Applied));

        let after = state.borrow().tasks.clone();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1], api.server_tasks()[1]);
        assert!(!after[1].completed);
    }

    #[test]
    fn test_failed_toggle_leaves_state() {
        let api = FakeApi::with_tasks(sample_tasks());
        api.fail_on("toggle_task 1");
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        let before = state.borrow().tasks.clone();

        let result = block_on(actions.toggle_task(1));

        assert!(matches!(result, Err(ActionError::Api(ApiError::Status { status: 500, .. }))));
        assert_eq!(state.borrow().tasks, before);
    }

    #[test]
    fn test_toggle_of_task_removed_meanwhile_is_skipped() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        state.borrow_mut().remove_task(1);

        assert_eq!(block_on(actions.toggle_task(1)), Ok(Outcome::Skipped));
        assert_eq!(local_ids(&state), vec![2, 3]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.delete_task(2)), Ok(Outcome::Applied));
        assert_eq!(local_ids(&state), vec![1, 3]);
        assert_eq!(ui.confirms.borrow().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        let result = block_on(actions.delete_task(99));

        assert!(matches!(result, Err(ActionError::Api(ApiError::Status { status: 404, .. }))));
        assert_eq!(local_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_declined_delete_makes_no_call() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.delete_task(1)), Ok(Outcome::Cancelled));
        assert!(api.calls().is_empty());
        assert_eq!(local_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_edit_task_sends_current_completion() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        ui.answer_prompts(&[Some(" C2 "), Some(" notes ")]);
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.edit_task(3)), Ok(Outcome::Applied));

        let edited = state.borrow().find_task(3).cloned().unwrap();
        assert_eq!(edited.title, "C2");
        assert_eq!(edited.description.as_deref(), Some("notes"));
        assert!(edited.completed);
        assert_eq!(api.calls(), vec!["replace_task 3"]);
    }

    #[test]
    fn test_edit_cancel_and_blank_title() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        ui.answer_prompts(&[None, Some("   ")]);
        let (actions, state) = setup(&api, &ui);
        let before = state.borrow().tasks.clone();

        assert_eq!(block_on(actions.edit_task(1)), Ok(Outcome::Cancelled));
        assert!(matches!(block_on(actions.edit_task(1)), Err(ActionError::Validation(_))));
        assert_eq!(block_on(actions.edit_task(42)), Ok(Outcome::Skipped));

        assert!(api.calls().is_empty());
        assert_eq!(state.borrow().tasks, before);
    }

    #[test]
    fn test_edit_with_cancelled_description_clears_it() {
        let mut described = task(1, "A", false, "Work");
        described.description = Some("old".into());
        let api = FakeApi::with_tasks(vec![described]);
        let ui = RecordingUi::default();
        ui.answer_prompts(&[Some("A"), None]);
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.edit_task(1)), Ok(Outcome::Applied));
        assert_eq!(state.borrow().tasks[0].description, None);
    }

    #[test]
    fn test_clear_completed_with_none_completed() {
        let api = FakeApi::with_tasks(vec![task(1, "A", false, "Work")]);
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.clear_completed()), Ok(Outcome::Skipped));

        assert!(api.calls().is_empty());
        assert!(ui.confirms.borrow().is_empty());
        assert_eq!(local_ids(&state), vec![1]);
        assert_eq!(ui.last_notification().unwrap().kind, NotificationKind::Info);
    }

    #[test]
    fn test_clear_completed_deletes_each() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.clear_completed()), Ok(Outcome::Applied));

        assert_eq!(api.calls(), vec!["delete_task 2", "delete_task 3"]);
        assert_eq!(local_ids(&state), vec![1]);
        assert_eq!(ui.confirms.borrow()[0], "Delete 2 completed tasks?");
    }

    #[test]
    fn test_clear_completed_partial_failure_keeps_confirmed_deletes() {
        let api = FakeApi::with_tasks(vec![
            task(1, "A", true, "Work"),
            task(2, "B", true, "Work"),
            task(3, "C", true, "Work"),
            task(4, "D", false, "Work"),
        ]);
        api.fail_on("delete_task 2");
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        let result = block_on(actions.clear_completed());

        assert!(matches!(result, Err(ActionError::Api(_))));
        assert_eq!(api.calls(), vec!["delete_task 1", "delete_task 2"]);
        assert_eq!(local_ids(&state), vec![2, 3, 4]);
    }

    #[test]
    fn test_clear_all() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::confirming();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.clear_all()), Ok(Outcome::Applied));
        assert!(state.borrow().tasks.is_empty());
        assert_eq!(api.calls(), vec!["delete_all_tasks"]);

        assert_eq!(block_on(actions.clear_all()), Ok(Outcome::Skipped));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_duplicate_category_rejected_before_call() {
        let api = FakeApi::default();
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        let draft = CategoryDraft { name: " Work ".into(), color: "#000000".into() };
        assert!(matches!(block_on(actions.add_category(draft)), Err(ActionError::Validation(_))));

        let draft = CategoryDraft { name: "  ".into(), color: String::new() };
        assert!(matches!(block_on(actions.add_category(draft)), Err(ActionError::Validation(_))));

        assert!(api.calls().is_empty());
        assert_eq!(state.borrow().categories.len(), 1);
    }

    #[test]
    fn test_add_category_appends() {
        let api = FakeApi::default();
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        let draft = CategoryDraft { name: "Home".into(), color: String::new() };
        assert_eq!(block_on(actions.add_category(draft)), Ok(Outcome::Applied));

        let categories = state.borrow().categories.clone();
        assert_eq!(categories[1], Category { name: "Home".into(), color: "#3B82F6".into() });
    }

    #[test]
    fn test_loaders_replace_collections() {
        let api = FakeApi::with_tasks(sample_tasks())
            .with_categories(vec![Category { name: "Home".into(), color: "#222222".into() }]);
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        state.borrow_mut().tasks.clear();

        block_on(async {
            actions.load_tasks().await.unwrap();
            actions.load_categories().await.unwrap();
        });

        assert_eq!(local_ids(&state), vec![1, 2, 3]);
        assert_eq!(state.borrow().categories[0].name, "Home");
        assert_eq!(api.calls(), vec!["list_tasks", "list_categories"]);
    }

    #[test]
    fn test_initial_load_survives_category_failure() {
        let api = FakeApi::with_tasks(sample_tasks());
        api.fail_on("list_categories");
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        state.borrow_mut().tasks.clear();

        let result = block_on(actions.load_initial());

        assert!(matches!(result, Err(ActionError::Api(ApiError::Status { status: 500, .. }))));
        assert_eq!(api.calls(), vec!["list_categories", "list_tasks"]);
        assert_eq!(local_ids(&state), vec![1, 2, 3]);
        assert_eq!(state.borrow().categories.len(), 1);
    }

    #[test]
    fn test_initial_load_survives_task_failure() {
        let api = FakeApi::with_tasks(sample_tasks())
            .with_categories(vec![Category { name: "Home".into(), color: "#222222".into() }]);
        api.fail_on("list_tasks");
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        assert!(block_on(actions.load_initial()).is_err());
        assert_eq!(state.borrow().categories[0].name, "Home");
    }

    #[test]
    fn test_declined_bulk_deletes_make_no_call() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);

        assert_eq!(block_on(actions.clear_completed()), Ok(Outcome::Cancelled));
        assert_eq!(block_on(actions.clear_all()), Ok(Outcome::Cancelled));

        assert!(api.calls().is_empty());
        assert_eq!(local_ids(&state), vec![1, 2, 3]);
        assert_eq!(
            *ui.confirms.borrow(),
            vec!["Delete 2 completed tasks?".to_string(), "Delete all 3 tasks?".to_string()]
        );
    }

    #[test]
    fn test_filter_setters_only_touch_view_state() {
        let api = FakeApi::with_tasks(sample_tasks());
        let ui = RecordingUi::default();
        let (actions, state) = setup(&api, &ui);
        let before = state.borrow().tasks.clone();

        actions.set_status_filter(StatusFilter::Completed);
        actions.set_category_filter(CategoryFilter::Named("Home".into()));

        assert_eq!(state.borrow().status_filter, StatusFilter::Completed);
        assert_eq!(state.borrow().category_filter, CategoryFilter::Named("Home".into()));
        assert_eq!(state.borrow().tasks, before);
        assert!(api.calls().is_empty());
    }
}
