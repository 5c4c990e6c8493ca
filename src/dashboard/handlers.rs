//! Dashboard HTTP handlers.
//!
//! The client sends its whole goal collection along with the current search,
//! filter and sort selection, and gets back the goals to display together with
//! the summary statistics for the collection.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    dashboard::{
        filter::{
            CategoryFilter, GoalQuery, GoalView, SortKey, StatusFilter, filter_and_sort_goals,
        },
        stats::{DashboardStats, categories_in_use, summarize_goals},
    },
    goal::{CategoryOption, Goal, GoalCategory, GoalPayload, category_options, validate_goals},
};

/// The goal collection and the user's current selection.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalViewRequest {
    /// The user's whole goal collection, in creation order.
    pub goals: Vec<GoalPayload>,
    /// Text to look for in goal names and descriptions.
    #[serde(default)]
    pub search: String,
    /// "all", empty or a category value such as "travel".
    #[serde(default)]
    pub category: Option<String>,
    /// Order of the goal list.
    #[serde(default)]
    pub sort: SortKey,
    /// Active or history view.
    #[serde(default)]
    pub view: GoalView,
    /// Progress filter for the active view.
    #[serde(default)]
    pub status: StatusFilter,
}

impl GoalViewRequest {
    fn query(&self) -> Result<GoalQuery, Error> {
        let category = match &self.category {
            Some(category) => category.parse()?,
            None => CategoryFilter::All,
        };

        Ok(GoalQuery {
            search: self.search.clone(),
            category,
            sort: self.sort,
            view: self.view,
            status: self.status,
        })
    }
}

/// A goal as shown on the dashboard, with its derived progress figures.
#[derive(Debug, Clone, Serialize)]
pub struct GoalCard {
    /// The goal's own fields, inlined.
    #[serde(flatten)]
    pub goal: Goal,
    /// Percentage of the target saved, capped at 100.
    pub progress: f64,
    /// Amount left to save, negative once the target has been exceeded.
    pub remaining: f64,
}

impl From<&Goal> for GoalCard {
    fn from(goal: &Goal) -> Self {
        Self {
            goal: goal.clone(),
            progress: goal.progress_percent(),
            remaining: goal.remaining(),
        }
    }
}

/// Everything the dashboard needs to render the goal list.
#[derive(Debug, Clone, Serialize)]
pub struct GoalViewResponse {
    /// The goals to display, in display order.
    pub goals: Vec<GoalCard>,
    /// Statistics over the whole collection, ignoring the selection.
    pub stats: DashboardStats,
    /// Categories to offer in the category filter.
    pub categories: Vec<GoalCategory>,
}

/// Route handler for filtering, sorting and summarizing a goal collection.
///
/// # Errors
/// Returns a 400 response if any goal is malformed or the category filter is
/// not a known category.
pub async fn post_goal_view(
    Json(request): Json<GoalViewRequest>,
) -> Result<Json<GoalViewResponse>, Error> {
    let query = request.query()?;
    let goals = validate_goals(request.goals)?;

    let displayed = filter_and_sort_goals(&goals, &query);
    tracing::debug!(
        "Showing {} of {} goals for {:?}",
        displayed.len(),
        goals.len(),
        query
    );

    Ok(Json(GoalViewResponse {
        goals: displayed.into_iter().map(GoalCard::from).collect(),
        stats: summarize_goals(&goals),
        categories: categories_in_use(&goals),
    }))
}

/// Route handler listing every goal category with its label and default colour.
pub async fn get_categories() -> Json<Vec<CategoryOption>> {
    Json(category_options())
}
