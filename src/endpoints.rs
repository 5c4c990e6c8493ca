//! The API endpoints URIs.

/// Liveness check used to wake the service up.
pub const PING: &str = "/api/ping";
/// The goal categories with their display labels and default colours.
pub const CATEGORIES: &str = "/api/categories";
/// Filter, sort and summarize a goal collection for the dashboard.
pub const GOALS_VIEW: &str = "/api/goals/view";
/// Build the balance timeline and chart for a single goal.
pub const GOAL_TIMELINE: &str = "/api/goals/timeline";
