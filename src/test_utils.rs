#![allow(missing_docs)]

use time::OffsetDateTime;
use time_tz::Tz;

use crate::{
    goal::{Contribution, ContributionKind, Goal, GoalCategory, GoalName},
    timezone::get_timezone,
};

pub(crate) fn goal(name: &str) -> Goal {
    Goal {
        id: None,
        name: GoalName::new(name).expect("test goal names should not be empty"),
        description: String::new(),
        category: None,
        colour: GoalCategory::Other.default_colour().to_owned(),
        target_value: 100.0,
        current_value: 0.0,
        completed: false,
        contributions: Vec::new(),
    }
}

pub(crate) fn goal_with_values(name: &str, target_value: f64, current_value: f64) -> Goal {
    Goal {
        target_value,
        current_value,
        ..goal(name)
    }
}

pub(crate) fn goal_in_category(name: &str, category: GoalCategory) -> Goal {
    Goal {
        category: Some(category),
        colour: category.default_colour().to_owned(),
        ..goal(name)
    }
}

pub(crate) fn completed_goal(name: &str) -> Goal {
    Goal {
        completed: true,
        ..goal(name)
    }
}

pub(crate) fn deposit(amount: f64, timestamp: Option<OffsetDateTime>) -> Contribution {
    Contribution::new(amount, ContributionKind::Deposit, timestamp)
        .expect("test deposit amounts should be positive")
}

pub(crate) fn withdrawal(amount: f64, timestamp: Option<OffsetDateTime>) -> Contribution {
    Contribution::new(amount, ContributionKind::Withdrawal, timestamp)
        .expect("test withdrawal amounts should be positive")
}

pub(crate) fn goal_names(goals: &[Goal]) -> Vec<&str> {
    goals.iter().map(|goal| goal.name.as_ref()).collect()
}

pub(crate) fn timezone(name: &str) -> &'static Tz {
    get_timezone(name).expect("test timezones should be canonical names")
}
