//! The fixed set of goal categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// What a goal is saving for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Phones, laptops, gadgets.
    Electronics,
    /// Trips and holidays.
    Travel,
    /// Clothing and accessories.
    Fashion,
    /// Home and garden.
    Home,
    /// Health and fitness.
    Health,
    /// Courses, books and tuition.
    Education,
    /// Cars, bikes and other vehicles.
    Vehicle,
    /// Money set aside to invest.
    Investment,
    /// Anything else.
    Other,
}

impl GoalCategory {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [GoalCategory; 9] = [
        GoalCategory::Electronics,
        GoalCategory::Travel,
        GoalCategory::Fashion,
        GoalCategory::Home,
        GoalCategory::Health,
        GoalCategory::Education,
        GoalCategory::Vehicle,
        GoalCategory::Investment,
        GoalCategory::Other,
    ];

    /// The value used on the wire, e.g. "travel".
    pub fn value(&self) -> &'static str {
        match self {
            GoalCategory::Electronics => "electronics",
            GoalCategory::Travel => "travel",
            GoalCategory::Fashion => "fashion",
            GoalCategory::Home => "home",
            GoalCategory::Health => "health",
            GoalCategory::Education => "education",
            GoalCategory::Vehicle => "vehicle",
            GoalCategory::Investment => "investment",
            GoalCategory::Other => "other",
        }
    }

    /// The human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Electronics => "Electronics",
            GoalCategory::Travel => "Travel",
            GoalCategory::Fashion => "Fashion",
            GoalCategory::Home => "Home & Garden",
            GoalCategory::Health => "Health & Fitness",
            GoalCategory::Education => "Education",
            GoalCategory::Vehicle => "Vehicle",
            GoalCategory::Investment => "Investment",
            GoalCategory::Other => "Other",
        }
    }

    /// The colour a new goal in this category gets unless the user picks one.
    pub fn default_colour(&self) -> &'static str {
        match self {
            GoalCategory::Electronics => "#3b82f6",
            GoalCategory::Travel => "#10b981",
            GoalCategory::Fashion => "#f59e0b",
            GoalCategory::Home => "#8b5cf6",
            GoalCategory::Health => "#ef4444",
            GoalCategory::Education => "#06b6d4",
            GoalCategory::Vehicle => "#84cc16",
            GoalCategory::Investment => "#f97316",
            GoalCategory::Other => "#6b7280",
        }
    }

    /// Parse an optional category string where an empty string means "unset".
    ///
    /// # Errors
    ///
    /// Returns [Error::UnknownCategory] if `value` is neither empty nor one of the
    /// known category values.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, Error> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalCategory::ALL
            .into_iter()
            .find(|category| category.value() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}

impl Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A category as listed to clients building a goal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// The category value used on the wire.
    pub value: GoalCategory,
    /// Human readable name.
    pub label: &'static str,
    /// Default colour as a hex string.
    pub colour: &'static str,
}

impl From<GoalCategory> for CategoryOption {
    fn from(category: GoalCategory) -> Self {
        Self {
            value: category,
            label: category.label(),
            colour: category.default_colour(),
        }
    }
}

/// All categories with their labels and default colours.
pub fn category_options() -> Vec<CategoryOption> {
    GoalCategory::ALL.into_iter().map(CategoryOption::from).collect()
}
