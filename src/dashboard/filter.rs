//! Search, filter and sort options for the goal list.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    goal::{Goal, GoalCategory},
};

/// Progress at or above this percentage counts as nearly complete.
const NEAR_COMPLETION_PERCENT: f64 = 80.0;

/// Which half of the goal collection to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalView {
    /// Goals the user is still working on.
    #[default]
    Active,
    /// Goals the user has marked as completed.
    History,
}

impl GoalView {
    fn includes(&self, goal: &Goal) -> bool {
        match self {
            GoalView::Active => !goal.completed,
            GoalView::History => goal.completed,
        }
    }
}

/// Narrows the active view down by how far along each goal is.
///
/// Ignored in the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Every goal in the view.
    #[default]
    All,
    /// Started but not yet at the target.
    Active,
    /// At or past the target but not marked completed.
    Completed,
    /// At least 80% of the way to the target.
    NearCompletion,
}

impl StatusFilter {
    fn includes(&self, goal: &Goal) -> bool {
        let progress = goal.progress_ratio() * 100.0;

        match self {
            StatusFilter::All => true,
            StatusFilter::Active => progress > 0.0 && progress < 100.0,
            StatusFilter::Completed => progress >= 100.0,
            StatusFilter::NearCompletion => {
                (NEAR_COMPLETION_PERCENT..100.0).contains(&progress)
            }
        }
    }
}

/// Only show goals from one category, or from all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Goals in any category, or none.
    #[default]
    All,
    /// Goals in this category only.
    Only(GoalCategory),
}

impl CategoryFilter {
    fn includes(&self, goal: &Goal) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => goal.category == Some(*category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    /// Parses "all" or a category value such as "travel".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(CategoryFilter::All),
            value => value.parse().map(CategoryFilter::Only),
        }
    }
}

/// The order to list goals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alphabetical by name.
    Name,
    /// Furthest along first.
    Progress,
    /// Largest target first.
    Target,
    /// Most left to save first.
    Remaining,
    /// The order the goals were given in, which is creation order.
    #[default]
    Created,
}

impl SortKey {
    fn compare(&self, a: &Goal, b: &Goal) -> Ordering {
        match self {
            SortKey::Name => locale_compare(a.name.as_ref(), b.name.as_ref()),
            SortKey::Progress => b.progress_ratio().total_cmp(&a.progress_ratio()),
            SortKey::Target => b.target_value.total_cmp(&a.target_value),
            SortKey::Remaining => b.remaining().total_cmp(&a.remaining()),
            SortKey::Created => Ordering::Equal,
        }
    }
}

/// Everything the user has selected to narrow down and order the goal list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalQuery {
    /// Matched case-insensitively against goal names and descriptions.
    pub search: String,
    /// Category to restrict the list to.
    pub category: CategoryFilter,
    /// Order of the result.
    pub sort: SortKey,
    /// Active or history goals.
    pub view: GoalView,
    /// Progress filter, only applied to the active view.
    pub status: StatusFilter,
}

/// Select and order the goals to display for `query`.
///
/// Goals are first split by completion into the active and history views, then
/// filtered by search text, category and (in the active view only) progress
/// status, and finally sorted. Sorting is stable, so goals that compare equal
/// keep their input order.
pub fn filter_and_sort_goals<'a>(goals: &'a [Goal], query: &GoalQuery) -> Vec<&'a Goal> {
    let search = query.search.to_lowercase();

    let mut filtered: Vec<&Goal> = goals
        .iter()
        .filter(|goal| query.view.includes(goal))
        .filter(|goal| matches_search(goal, &search))
        .filter(|goal| query.category.includes(goal))
        .filter(|goal| query.view == GoalView::History || query.status.includes(goal))
        .collect();

    filtered.sort_by(|a, b| query.sort.compare(a, b));

    filtered
}

/// `search` must already be lower case.
fn matches_search(goal: &Goal, search: &str) -> bool {
    search.is_empty()
        || goal.name.as_ref().to_lowercase().contains(search)
        || goal.description.to_lowercase().contains(search)
}

/// Compare names the way a person would: ignoring case first, then putting the
/// lower case spelling before the upper case one.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
