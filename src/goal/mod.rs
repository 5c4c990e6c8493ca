//! Savings goals and the contributions made towards them.
//!
//! Goals arrive as loosely typed JSON ([GoalPayload]) and are converted into
//! validated [Goal]s before any view is derived from them.

mod category;
mod domain;
mod payload;

pub use category::{CategoryOption, GoalCategory, category_options};
pub use domain::{
    Contribution, ContributionKind, Goal, GoalId, GoalName, validate_current_value,
    validate_target_value,
};
pub use payload::{ContributionPayload, GoalPayload, parse_timestamp, validate_goals};
