//! Statistics Endpoints
//!
//! Read-only aggregates computed by the server.

use super::{ApiRequest, Method};

pub(super) fn overview() -> ApiRequest {
    ApiRequest::new(Method::Get, "/stats/overview")
}

pub(super) fn daily(days: u32) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/stats/daily?days={}", days))
}

pub(super) fn weekly(weeks: u32) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/stats/weekly?weeks={}", weeks))
}

pub(super) fn productivity() -> ApiRequest {
    ApiRequest::new(Method::Get, "/stats/productivity")
}

pub(super) fn completion_time() -> ApiRequest {
    ApiRequest::new(Method::Get, "/stats/completion-time")
}
