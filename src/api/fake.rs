//! In-memory [`TodoApi`] for tests
//!
//! Behaves like a tiny server: assigns ids, flips completion, deletes by id.
//! Every call is logged as a short label such as `"toggle_task 2"`; labels
//! registered with [`FakeApi::fail_on`] answer with a 500 instead.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;

use super::TodoApi;
use crate::error::ApiError;
use crate::models::{
    Category, CategoryStat, CompletionTimeStats, DailyStat, NewCategory, NewTask, OverviewStats,
    ProductivityStats, Task, TaskId, TaskUpdate, WeeklyStat,
};

#[derive(Default)]
struct Server {
    calls: RefCell<Vec<String>>,
    failing: RefCell<HashSet<String>>,
    tasks: RefCell<Vec<Task>>,
    categories: RefCell<Vec<Category>>,
    next_id: Cell<TaskId>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    server: Rc<Server>,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        let next = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        api.server.next_id.set(next);
        *api.server.tasks.borrow_mut() = tasks;
        api
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.server.categories.borrow_mut() = categories;
        self
    }

    pub fn fail_on(&self, label: &str) {
        self.server.failing.borrow_mut().insert(label.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.server.calls.borrow().clone()
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.server.tasks.borrow().clone()
    }

    fn record(&self, label: String) -> Result<(), ApiError> {
        let failing = self.server.failing.borrow().contains(&label);
        self.server.calls.borrow_mut().push(label);
        if failing {
            return Err(ApiError::Status { status: 500, message: "Internal Server Error".into() });
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::Status { status: 404, message: "not found".into() }
    }
}

pub fn task(id: TaskId, title: &str, completed: bool, category: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        category: Some(category.to_string()),
        completed,
        created_at: None,
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record("list_tasks".into())?;
        Ok(self.server_tasks())
    }

    async fn create_task(&self, new_task: &NewTask) -> Result<Task, ApiError> {
        self.record(format!("create_task {}", new_task.title))?;
        let id = self.server.next_id.get().max(1);
        self.server.next_id.set(id + 1);
        let created = Task {
            id,
            title: new_task.title.clone(),
            description: Some(new_task.description.clone()).filter(|d| !d.is_empty()),
            category: Some(new_task.category.clone()),
            completed: new_task.completed,
            created_at: Some("2026-01-01T00:00:00".into()),
        };
        self.server.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn toggle_task(&self, id: TaskId) -> Result<Task, ApiError> {
        self.record(format!("toggle_task {}", id))?;
        let mut tasks = self.server.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    async fn replace_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.record(format!("replace_task {}", id))?;
        let mut tasks = self.server.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        task.title = update.title.clone();
        task.description = Some(update.description.clone()).filter(|d| !d.is_empty());
        task.completed = update.completed;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.record(format!("delete_task {}", id))?;
        let mut tasks = self.server.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn delete_all_tasks(&self) -> Result<(), ApiError> {
        self.record("delete_all_tasks".into())?;
        self.server.tasks.borrow_mut().clear();
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("list_categories".into())?;
        Ok(self.server.categories.borrow().clone())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.record(format!("create_category {}", category.name))?;
        let created = Category { name: category.name.clone(), color: category.color.clone() };
        self.server.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.record("overview_stats".into())?;
        let tasks = self.server.tasks.borrow();
        let completed = tasks.iter().filter(|t| t.completed).count() as u32;
        let total = tasks.len() as u32;
        let mut category_stats = BTreeMap::new();
        for t in tasks.iter() {
            let entry = category_stats
                .entry(t.category_or("General").to_string())
                .or_insert(CategoryStat { total: 0, completed: 0, completion_rate: 0.0 });
            entry.total += 1;
            if t.completed {
                entry.completed += 1;
            }
        }
        Ok(OverviewStats {
            total_todos: total,
            completed_todos: completed,
            active_todos: total - completed,
            overall_completion_rate: 0.0,
            category_stats,
        })
    }

    async fn daily_stats(&self, days: u32) -> Result<Vec<DailyStat>, ApiError> {
        self.record(format!("daily_stats {}", days))?;
        Ok((1..=days)
            .map(|d| DailyStat {
                date: format!("2026-01-{:02}", d),
                created: d,
                completed: d / 2,
                completion_rate: 50.0,
            })
            .collect())
    }

    async fn weekly_stats(&self, weeks: u32) -> Result<Vec<WeeklyStat>, ApiError> {
        self.record(format!("weekly_stats {}", weeks))?;
        Ok((1..=weeks)
            .map(|w| WeeklyStat {
                week: format!("2026-W{:02}", w),
                created: w,
                completed: w,
                completion_rate: 100.0,
            })
            .collect())
    }

    async fn productivity_stats(&self) -> Result<ProductivityStats, ApiError> {
        self.record("productivity_stats".into())?;
        Ok(ProductivityStats {
            productivity_rate: 0.0,
            total_created: 0,
            total_completed: 0,
            daily_productivity: Vec::new(),
        })
    }

    async fn completion_time_stats(&self) -> Result<CompletionTimeStats, ApiError> {
        self.record("completion_time_stats".into())?;
        Ok(CompletionTimeStats::NoData { message: "no completed todos".into() })
    }
}
