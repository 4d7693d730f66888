//! REST API Bindings
//!
//! Frontend bindings to the `/api` endpoints, organized by domain.
//! [`Gateway`] wraps every call with the busy indicator and turns failures
//! into an error notification before handing them back to the caller.

mod category;
mod http;
mod stats;
mod todo;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::error::ApiError;
use crate::feedback::{BusyGuard, Feedback, Notification};
use crate::models::{
    Category, CompletionTimeStats, DailyStat, NewCategory, NewTask, OverviewStats,
    ProductivityStats, Task, TaskId, TaskUpdate, WeeklyStat,
};

pub use http::HttpTransport;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// One outbound call, relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends a request and yields its JSON body (`Value::Null` when empty)
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}

// ========================
// API Surface
// ========================

/// Every operation the client consumes from the server
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;
    async fn toggle_task(&self, id: TaskId) -> Result<Task, ApiError>;
    async fn replace_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
    async fn delete_all_tasks(&self) -> Result<(), ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError>;

    async fn overview_stats(&self) -> Result<OverviewStats, ApiError>;
    async fn daily_stats(&self, days: u32) -> Result<Vec<DailyStat>, ApiError>;
    async fn weekly_stats(&self, weeks: u32) -> Result<Vec<WeeklyStat>, ApiError>;
    async fn productivity_stats(&self) -> Result<ProductivityStats, ApiError>;
    async fn completion_time_stats(&self) -> Result<CompletionTimeStats, ApiError>;
}

// ========================
// Gateway
// ========================

#[derive(Clone)]
pub struct Gateway<T, F> {
    transport: T,
    feedback: F,
}

impl<T: Transport, F: Feedback> Gateway<T, F> {
    pub fn new(transport: T, feedback: F) -> Self {
        Self { transport, feedback }
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let _busy = BusyGuard::acquire(&self.feedback);

        tracing::debug!(method = ?request.method, path = %request.path, "api request");
        let result = match self.transport.send(&request).await {
            Ok(body) => serde_json::from_value(body).map_err(ApiError::decode),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            tracing::error!(method = ?request.method, path = %request.path, error = %err, "api call failed");
            self.feedback
                .notify(Notification::error(format!("Something went wrong: {}", err)));
        }
        result
    }

    async fn call_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.call::<IgnoredAny>(request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl<T: Transport, F: Feedback> TodoApi for Gateway<T, F> {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.call(todo::list()).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.call(todo::create(task)?).await
    }

    async fn toggle_task(&self, id: TaskId) -> Result<Task, ApiError> {
        self.call(todo::toggle(id)).await
    }

    async fn replace_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.call(todo::replace(id, update)?).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.call_empty(todo::delete(id)).await
    }

    async fn delete_all_tasks(&self) -> Result<(), ApiError> {
        self.call_empty(todo::delete_all()).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.call(category::list()).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.call(category::create(category)?).await
    }

    async fn overview_stats(&self) -> Result<OverviewStats, ApiError> {
        self.call(stats::overview()).await
    }

    async fn daily_stats(&self, days: u32) -> Result<Vec<DailyStat>, ApiError> {
        self.call(stats::daily(days)).await
    }

    async fn weekly_stats(&self, weeks: u32) -> Result<Vec<WeeklyStat>, ApiError> {
        self.call(stats::weekly(weeks)).await
    }

    async fn productivity_stats(&self) -> Result<ProductivityStats, ApiError> {
        self.call(stats::productivity()).await
    }

    async fn completion_time_stats(&self) -> Result<CompletionTimeStats, ApiError> {
        self.call(stats::completion_time()).await
    }
}
