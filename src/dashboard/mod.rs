//! Dashboard module
//!
//! Derives the goal list shown on the dashboard: search, category and status
//! filters, sort order, and summary statistics over the whole collection.

mod filter;
mod handlers;
mod stats;

pub use filter::{
    CategoryFilter, GoalQuery, GoalView, SortKey, StatusFilter, filter_and_sort_goals,
};
pub use handlers::{GoalCard, GoalViewRequest, GoalViewResponse, get_categories, post_goal_view};
pub use stats::{ActiveSummary, DashboardStats, HistorySummary, categories_in_use, summarize_goals};
