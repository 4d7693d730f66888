//! UI Components
//!
//! Leptos components for the task board.

mod category_modal;
mod filter_bar;
mod notification_toast;
mod stats_modal;
mod task_form;
mod task_list;
mod task_summary;

pub use category_modal::CategoryModal;
pub use filter_bar::FilterBar;
pub use notification_toast::{LoadingSpinner, NotificationToast};
pub use stats_modal::StatsModal;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_summary::TaskSummary;
