//! Todo Endpoints

use super::{ApiRequest, Method};
use crate::error::ApiError;
use crate::models::{NewTask, TaskId, TaskUpdate};

pub(super) fn list() -> ApiRequest {
    ApiRequest::new(Method::Get, "/todos")
}

pub(super) fn create(task: &NewTask) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(task).map_err(ApiError::decode)?;
    Ok(ApiRequest::new(Method::Post, "/todos").with_body(body))
}

pub(super) fn toggle(id: TaskId) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/todos/{}/toggle", id))
}

pub(super) fn replace(id: TaskId, update: &TaskUpdate) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(update).map_err(ApiError::decode)?;
    Ok(ApiRequest::new(Method::Put, format!("/todos/{}", id)).with_body(body))
}

pub(super) fn delete(id: TaskId) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/todos/{}", id))
}

pub(super) fn delete_all() -> ApiRequest {
    ApiRequest::new(Method::Delete, "/todos")
}
