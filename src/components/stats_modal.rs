//! Statistics Modal Component
//!
//! Tabbed statistics. Each tab activation fetches its data again and
//! remounts its chart canvas.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_chartjs::ChartCanvas;

use crate::context::use_app;
use crate::models::{CompletionTimeStats, DailyStat, OverviewStats, ProductivityStats, WeeklyStat};
use crate::stats::{
    daily_chart, load_tab, percent, productivity_chart, weekly_chart, StatsPanel, StatsTab,
    StatsView,
};

#[component]
pub fn StatsModal() -> impl IntoView {
    let ctx = use_app();
    let show = ctx.show_stats;
    let panel = RwSignal::new(StatsPanel::default());

    let activate = move |tab: StatsTab| {
        let Some(ticket) = panel.try_update(|p| p.select(tab)) else {
            return;
        };
        let actions = ctx.actions();
        spawn_local(async move {
            match load_tab(actions.api(), tab, actions.config()).await {
                Ok(view) => panel.update(|p| {
                    p.resolve(ticket, view);
                }),
                Err(err) => {
                    tracing::warn!(?tab, error = %err, "stats fetch failed");
                    panel.update(|p| {
                        p.fail(ticket);
                    });
                }
            }
        });
    };

    // Opening the modal always lands on the overview
    Effect::new(move |_| {
        if show.get() {
            activate(StatsTab::Overview);
        }
    });

    view! {
        <Show when=move || show.get()>
            <div class="modal" on:click=move |_| show.set(false)>
                <div class="modal-content stats-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Statistics"</h2>
                        <button class="close-btn" on:click=move |_| show.set(false)>"×"</button>
                    </div>

                    <div class="stats-tabs">
                        {StatsTab::ALL
                            .into_iter()
                            .map(|tab| {
                                let is_active = move || panel.with(|p| p.active() == tab);
                                view! {
                                    <button
                                        class=move || if is_active() { "stats-tab active" } else { "stats-tab" }
                                        on:click=move |_| activate(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="stats-tab-content">
                        {move || match panel.with(|p| (p.view().cloned(), p.is_failed())) {
                            (None, true) => {
                                view! { <p class="stats-error">"Could not load statistics."</p> }.into_any()
                            }
                            (None, false) => view! { <p class="stats-loading">"Loading..."</p> }.into_any(),
                            (Some(StatsView::Overview(stats)), _) => overview(stats).into_any(),
                            (Some(StatsView::Daily(stats)), _) => daily(stats).into_any(),
                            (Some(StatsView::Weekly(stats)), _) => weekly(stats).into_any(),
                            (Some(StatsView::Productivity(stats)), _) => productivity(stats).into_any(),
                            (Some(StatsView::Completion(stats)), _) => completion(stats).into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

// ========================
// Tab Bodies
// ========================

fn overview(stats: OverviewStats) -> impl IntoView {
    view! {
        <div class="stats-cards">
            <div class="stat-card"><span>"Total"</span><strong>{stats.total_todos}</strong></div>
            <div class="stat-card"><span>"Completed"</span><strong>{stats.completed_todos}</strong></div>
            <div class="stat-card"><span>"Active"</span><strong>{stats.active_todos}</strong></div>
            <div class="stat-card">
                <span>"Completion rate"</span>
                <strong>{percent(stats.overall_completion_rate)}</strong>
            </div>
        </div>
        <div class="category-stats-list">
            {stats
                .category_stats
                .into_iter()
                .map(|(name, stat)| {
                    view! {
                        <div class="category-stat-item">
                            <div class="category-name">{name}</div>
                            <div class="category-numbers">
                                <span>"Total: " {stat.total}</span>
                                <span>"Completed: " {stat.completed}</span>
                                <span>"Rate: " {percent(stat.completion_rate)}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn daily(stats: Vec<DailyStat>) -> impl IntoView {
    view! {
        <ChartCanvas spec=daily_chart(&stats) />
        <div class="daily-stats-list">
            {stats
                .into_iter()
                .map(|s| period_row("daily-stats-item", s.date, s.created, s.completed, s.completion_rate))
                .collect_view()}
        </div>
    }
}

fn weekly(stats: Vec<WeeklyStat>) -> impl IntoView {
    view! {
        <ChartCanvas spec=weekly_chart(&stats) />
        <div class="weekly-stats-list">
            {stats
                .into_iter()
                .map(|s| period_row("weekly-stats-item", s.week, s.created, s.completed, s.completion_rate))
                .collect_view()}
        </div>
    }
}

fn period_row(class: &'static str, period: String, created: u32, completed: u32, rate: f64) -> impl IntoView {
    view! {
        <div class=class>
            <div class="period">{period}</div>
            <div class="numbers">
                <span>"Created: " {created}</span>
                <span>"Completed: " {completed}</span>
                <span>"Rate: " {percent(rate)}</span>
            </div>
        </div>
    }
}

fn productivity(stats: ProductivityStats) -> impl IntoView {
    let spec = productivity_chart(&stats);
    view! {
        <div class="stats-cards">
            <div class="stat-card">
                <span>"Productivity"</span>
                <strong>{percent(stats.productivity_rate)}</strong>
            </div>
            <div class="stat-card"><span>"Created"</span><strong>{stats.total_created}</strong></div>
            <div class="stat-card"><span>"Completed"</span><strong>{stats.total_completed}</strong></div>
        </div>
        <ChartCanvas spec=spec />
    }
}

fn completion(stats: CompletionTimeStats) -> impl IntoView {
    match stats {
        CompletionTimeStats::NoData { .. } => view! {
            <div class="stats-cards">
                <div class="stat-card"><span>"Average"</span><strong>"No data"</strong></div>
                <div class="stat-card"><span>"Completed"</span><strong>"0"</strong></div>
            </div>
            <p class="stats-empty">"No completed tasks yet."</p>
        }
        .into_any(),
        CompletionTimeStats::Data { avg_completion_hours, total_completed, completion_details } => view! {
            <div class="stats-cards">
                <div class="stat-card">
                    <span>"Average"</span>
                    <strong>{format!("{} hours", avg_completion_hours)}</strong>
                </div>
                <div class="stat-card"><span>"Completed"</span><strong>{total_completed}</strong></div>
            </div>
            <div class="completion-details">
                {completion_details
                    .into_iter()
                    .map(|detail| {
                        view! {
                            <div class="completion-item">
                                <div class="todo-info">
                                    <div class="todo-title">{detail.title}</div>
                                    <div class="todo-category">{detail.category.unwrap_or_default()}</div>
                                </div>
                                <div class="completion-time">{format!("{} hours", detail.completion_hours)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
