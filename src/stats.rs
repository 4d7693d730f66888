//! Statistics Tabs
//!
//! One tab is active at a time. Activating a tab clears whatever the previous
//! one showed and issues exactly one fetch; a response that arrives after the
//! user has moved on is dropped.

use leptos_chartjs::{ChartKind, ChartSpec, Dataset};

use crate::api::TodoApi;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    CompletionTimeStats, DailyStat, OverviewStats, ProductivityStats, WeeklyStat,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatsTab {
    #[default]
    Overview,
    Daily,
    Weekly,
    Productivity,
    Completion,
}

impl StatsTab {
    pub const ALL: [StatsTab; 5] = [
        StatsTab::Overview,
        StatsTab::Daily,
        StatsTab::Weekly,
        StatsTab::Productivity,
        StatsTab::Completion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatsTab::Overview => "Overview",
            StatsTab::Daily => "Daily",
            StatsTab::Weekly => "Weekly",
            StatsTab::Productivity => "Productivity",
            StatsTab::Completion => "Completion Time",
        }
    }
}

/// Fetched content of one tab
#[derive(Clone, Debug, PartialEq)]
pub enum StatsView {
    Overview(OverviewStats),
    Daily(Vec<DailyStat>),
    Weekly(Vec<WeeklyStat>),
    Productivity(ProductivityStats),
    Completion(CompletionTimeStats),
}

impl StatsView {
    pub fn tab(&self) -> StatsTab {
        match self {
            StatsView::Overview(_) => StatsTab::Overview,
            StatsView::Daily(_) => StatsTab::Daily,
            StatsView::Weekly(_) => StatsTab::Weekly,
            StatsView::Productivity(_) => StatsTab::Productivity,
            StatsView::Completion(_) => StatsTab::Completion,
        }
    }
}

/// Identifies one tab activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tab selection plus the content of the active tab
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsPanel {
    active: StatsTab,
    view: Option<StatsView>,
    /// The fetch for the current activation failed
    failed: bool,
    generation: u64,
}

impl StatsPanel {
    pub fn active(&self) -> StatsTab {
        self.active
    }

    pub fn view(&self) -> Option<&StatsView> {
        self.view.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Activate `tab`, dropping the previous content
    pub fn select(&mut self, tab: StatsTab) -> Ticket {
        self.active = tab;
        self.view = None;
        self.failed = false;
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Apply a fetched view; `false` when `ticket` belongs to an older activation
    pub fn resolve(&mut self, ticket: Ticket, view: StatsView) -> bool {
        if ticket.0 != self.generation || view.tab() != self.active {
            tracing::debug!(tab = ?view.tab(), "dropping stale stats response");
            return false;
        }
        self.view = Some(view);
        true
    }

    /// Mark the fetch for `ticket` as failed; `false` when it is stale
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.failed = true;
        true
    }
}

/// Fetch the content of `tab`; exactly one request per call
pub async fn load_tab<A: TodoApi + ?Sized>(
    api: &A,
    tab: StatsTab,
    config: &AppConfig,
) -> Result<StatsView, ApiError> {
    let view = match tab {
        StatsTab::Overview => StatsView::Overview(api.overview_stats().await?),
        StatsTab::Daily => StatsView::Daily(api.daily_stats(config.daily_stats_days).await?),
        StatsTab::Weekly => StatsView::Weekly(api.weekly_stats(config.weekly_stats_weeks).await?),
        StatsTab::Productivity => StatsView::Productivity(api.productivity_stats().await?),
        StatsTab::Completion => StatsView::Completion(api.completion_time_stats().await?),
    };
    Ok(view)
}

/// Percentage as the server sent it, e.g. `"66.7%"`
pub fn percent(rate: f64) -> String {
    format!("{}%", rate)
}

// ========================
// Charts
// ========================

const BLUE: &str = "#3B82F6";
const GREEN: &str = "#10B981";
const RED: &str = "#EF4444";

pub fn daily_chart(stats: &[DailyStat]) -> ChartSpec {
    let labels = stats.iter().map(|s| s.date.clone()).collect();
    ChartSpec::new(ChartKind::Line, "Daily Tasks", labels)
        .with_dataset(Dataset::line(
            "Completed",
            stats.iter().map(|s| f64::from(s.completed)).collect(),
            BLUE,
        ))
        .with_dataset(Dataset::line(
            "Created",
            stats.iter().map(|s| f64::from(s.created)).collect(),
            GREEN,
        ))
}

pub fn weekly_chart(stats: &[WeeklyStat]) -> ChartSpec {
    let labels = stats.iter().map(|s| s.week.clone()).collect();
    ChartSpec::new(ChartKind::Bar, "Weekly Tasks", labels)
        .with_dataset(Dataset::bar(
            "Completed",
            stats.iter().map(|s| f64::from(s.completed)).collect(),
            BLUE,
        ))
        .with_dataset(Dataset::bar(
            "Created",
            stats.iter().map(|s| f64::from(s.created)).collect(),
            GREEN,
        ))
}

pub fn productivity_chart(stats: &ProductivityStats) -> ChartSpec {
    let days = &stats.daily_productivity;
    let labels = days.iter().map(|d| d.date.clone()).collect();
    ChartSpec::new(ChartKind::Line, "Daily Productivity", labels)
        .with_dataset(Dataset::line(
            "Created",
            days.iter().map(|d| f64::from(d.created)).collect(),
            RED,
        ))
        .with_dataset(Dataset::line(
            "Completed",
            days.iter().map(|d| f64::from(d.completed)).collect(),
            GREEN,
        ))
        .with_dataset(Dataset::line(
            "Net",
            days.iter().map(|d| d.net_productivity as f64).collect(),
            BLUE,
        ))
}
