//! Category Endpoints

use super::{ApiRequest, Method};
use crate::error::ApiError;
use crate::models::NewCategory;

pub(super) fn list() -> ApiRequest {
    ApiRequest::new(Method::Get, "/categories")
}

pub(super) fn create(category: &NewCategory) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(category).map_err(ApiError::decode)?;
    Ok(ApiRequest::new(Method::Post, "/categories").with_body(body))
}
