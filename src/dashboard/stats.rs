//! Summary statistics shown at the top of the dashboard.

use serde::Serialize;

use crate::goal::{Goal, GoalCategory};

/// Totals over the goals the user is still working on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSummary {
    /// Number of goals not marked as completed.
    pub total: usize,
    /// Goals that have reached their target but have not been marked completed.
    pub target_reached: usize,
    /// Goals with some savings that are still short of the target.
    pub in_progress: usize,
    /// Sum of the targets.
    pub total_target: f64,
    /// Sum of the amounts saved.
    pub total_saved: f64,
}

/// Totals over the goals the user has marked as completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Number of goals marked as completed.
    pub total: usize,
    /// Sum of the targets.
    pub total_target: f64,
    /// Sum of the amounts saved.
    pub total_saved: f64,
}

/// Active and history totals for the whole goal collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Goals not marked as completed.
    pub active: ActiveSummary,
    /// Goals marked as completed.
    pub history: HistorySummary,
}

/// Compute the dashboard statistics.
///
/// The statistics always cover the whole collection, independent of any
/// search or filter applied to the goal list.
pub fn summarize_goals(goals: &[Goal]) -> DashboardStats {
    let mut stats = DashboardStats::default();

    for goal in goals {
        if goal.completed {
            let history = &mut stats.history;
            history.total += 1;
            history.total_target += goal.target_value;
            history.total_saved += goal.current_value;
            continue;
        }

        let active = &mut stats.active;
        active.total += 1;
        active.total_target += goal.target_value;
        active.total_saved += goal.current_value;

        if goal.has_reached_target() {
            active.target_reached += 1;
        } else if goal.current_value > 0.0 {
            active.in_progress += 1;
        }
    }

    stats
}

/// The categories used by at least one goal, in the order they first appear.
///
/// Goals without a category are skipped.
pub fn categories_in_use(goals: &[Goal]) -> Vec<GoalCategory> {
    let mut categories = Vec::new();

    for category in goals.iter().filter_map(|goal| goal.category) {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use crate::{
        goal::{Goal, GoalCategory},
        test_utils::{goal, goal_in_category, goal_with_values},
    };

    use super::{ActiveSummary, HistorySummary, categories_in_use, summarize_goals};

    fn completed(goal: Goal) -> Goal {
        Goal {
            completed: true,
            ..goal
        }
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let stats = summarize_goals(&[]);

        assert_eq!(stats.active, ActiveSummary::default());
        assert_eq!(stats.history, HistorySummary::default());
    }

    #[test]
    fn splits_totals_by_completion() {
        let goals = vec![
            goal_with_values("Untouched", 100.0, 0.0),
            goal_with_values("Halfway", 200.0, 100.0),
            goal_with_values("Reached", 50.0, 50.0),
            goal_with_values("Overshot", 10.0, 25.0),
            completed(goal_with_values("Old phone", 400.0, 400.0)),
            completed(goal_with_values("Concert", 150.0, 120.0)),
        ];

        let stats = summarize_goals(&goals);

        assert_eq!(
            stats.active,
            ActiveSummary {
                total: 4,
                target_reached: 2,
                in_progress: 1,
                total_target: 360.0,
                total_saved: 175.0,
            }
        );
        assert_eq!(
            stats.history,
            HistorySummary {
                total: 2,
                total_target: 550.0,
                total_saved: 520.0,
            }
        );
    }

    #[test]
    fn lists_each_category_once_in_first_seen_order() {
        let goals = vec![
            goal_in_category("Flights", GoalCategory::Travel),
            goal("No category"),
            goal_in_category("Desk", GoalCategory::Home),
            goal_in_category("Hotel", GoalCategory::Travel),
            completed(goal_in_category("Course", GoalCategory::Education)),
        ];

        assert_eq!(
            categories_in_use(&goals),
            vec![
                GoalCategory::Travel,
                GoalCategory::Home,
                GoalCategory::Education
            ]
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let stats = summarize_goals(&[goal_with_values("Halfway", 200.0, 100.0)]);

        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["active"]["inProgress"], 1);
        assert_eq!(json["active"]["totalSaved"], 100.0);
        assert_eq!(json["history"]["total"], 0);
    }
}
