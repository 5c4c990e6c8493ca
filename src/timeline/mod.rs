//! Running-balance timelines of a goal's contributions, and the chart drawn from them.

mod builder;
mod chart;
mod handlers;

pub use builder::{
    MIN_POINTS_TO_RENDER, PointKind, START_LABEL, TimelinePoint, build_balance_timeline,
    has_enough_points,
};
pub use chart::balance_chart;
pub use handlers::{TimelineResponse, TimelineState, post_goal_timeline};
