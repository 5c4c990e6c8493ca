//! HTTP handler for a goal's balance timeline.

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    goal::{Goal, GoalPayload},
    timeline::{
        builder::{TimelinePoint, build_balance_timeline, has_enough_points},
        chart::balance_chart,
    },
    timezone::get_timezone,
};

/// The state needed to build a goal's timeline.
#[derive(Debug, Clone)]
pub struct TimelineState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TimelineState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A goal's balance timeline and, when there is enough data, its chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    /// The running balance, starting with a zero point.
    pub points: Vec<TimelinePoint>,
    /// Whether there are enough points to draw a line.
    pub sufficient_data: bool,
    /// ECharts options for the balance chart, `None` when there is not enough data.
    pub chart: Option<String>,
}

/// Route handler for building the balance timeline of a single goal.
///
/// Dates are labelled in the server's local timezone.
///
/// # Errors
/// Returns a 400 response if the goal is malformed, or a 500 response if the
/// server's timezone is invalid.
pub async fn post_goal_timeline(
    State(state): State<TimelineState>,
    Json(payload): Json<GoalPayload>,
) -> Result<Json<TimelineResponse>, Error> {
    let goal = Goal::try_from(payload)?;
    let local_timezone = get_timezone(&state.local_timezone)?;
    let now = OffsetDateTime::now_utc();

    let points = build_balance_timeline(&goal.contributions, now, local_timezone);
    let sufficient_data = has_enough_points(&points);
    let chart = sufficient_data.then(|| balance_chart(goal.name.as_ref(), &points).to_string());

    tracing::debug!(
        "Built a timeline of {} points for the goal {}",
        points.len(),
        goal.name
    );

    Ok(Json(TimelineResponse {
        points,
        sufficient_data,
        chart,
    }))
}
