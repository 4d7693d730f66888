//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned task identifier
pub type TaskId = u32;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Task {
    /// Category name to display, falling back when the task has none
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.category.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => fallback,
        }
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// ========================
// Request Bodies
// ========================

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub completed: bool,
}

/// Body of `PUT /todos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Body of `POST /categories`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

// ========================
// Statistics
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryStat {
    pub total: u32,
    pub completed: u32,
    pub completion_rate: f64,
}

/// `GET /stats/overview`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverviewStats {
    pub total_todos: u32,
    pub completed_todos: u32,
    pub active_todos: u32,
    pub overall_completion_rate: f64,
    #[serde(default)]
    pub category_stats: BTreeMap<String, CategoryStat>,
}

/// One row of `GET /stats/daily`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub created: u32,
    pub completed: u32,
    pub completion_rate: f64,
}

/// One row of `GET /stats/weekly`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyStat {
    pub week: String,
    pub created: u32,
    pub completed: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyProductivity {
    pub date: String,
    pub created: u32,
    pub completed: u32,
    pub net_productivity: i64,
}

/// `GET /stats/productivity`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductivityStats {
    pub productivity_rate: f64,
    pub total_created: u32,
    pub total_completed: u32,
    #[serde(default)]
    pub daily_productivity: Vec<DailyProductivity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionDetail {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub completion_hours: f64,
}

/// `GET /stats/completion-time`
///
/// The server answers `{message}` instead of numbers when nothing has been
/// completed yet; that shape is tried first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CompletionTimeStats {
    NoData {
        message: String,
    },
    Data {
        avg_completion_hours: f64,
        total_completed: u32,
        #[serde(default)]
        completion_details: Vec<CompletionDetail>,
    },
}
