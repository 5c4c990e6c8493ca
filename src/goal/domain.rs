//! Core goal domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, goal::GoalCategory};

/// Identifier assigned to a goal by the server that stores it.
pub type GoalId = String;

/// A validated, non-empty goal name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Hash)]
pub struct GoalName(String);

impl GoalName {
    /// Create a goal name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyGoalName] if `name` is empty or
    /// only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyGoalName)
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for GoalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for GoalName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalName::new(s)
    }
}

impl Display for GoalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a contribution adds money to a goal or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    /// Money put towards the goal.
    Deposit,
    /// Money taken back out of the goal.
    Withdrawal,
}

impl FromStr for ContributionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(ContributionKind::Deposit),
            "withdrawal" => Ok(ContributionKind::Withdrawal),
            other => Err(Error::UnknownContributionType(other.to_owned())),
        }
    }
}

/// A single deposit or withdrawal recorded against a goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    /// The amount of money moved, always positive.
    pub amount: f64,
    /// Whether the money went in or out.
    #[serde(rename = "type")]
    pub kind: ContributionKind,
    /// When the contribution was made, if the server recorded it.
    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

impl Contribution {
    /// Create a contribution.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidContributionAmount] if `amount` is not a finite
    /// number greater than zero.
    pub fn new(
        amount: f64,
        kind: ContributionKind,
        timestamp: Option<OffsetDateTime>,
    ) -> Result<Self, Error> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidContributionAmount(amount));
        }

        Ok(Self {
            amount,
            kind,
            timestamp,
        })
    }

    /// The change this contribution makes to the goal's balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            ContributionKind::Deposit => self.amount,
            ContributionKind::Withdrawal => -self.amount,
        }
    }
}

/// A savings target and the money put towards it so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Identifier assigned by the goals API, absent for unsaved goals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<GoalId>,
    /// Display name.
    pub name: GoalName,
    /// Free text shown under the name.
    pub description: String,
    /// None when the user did not pick a category.
    pub category: Option<GoalCategory>,
    /// Hex colour of the goal card.
    pub colour: String,
    /// The amount the user wants to save, always positive.
    pub target_value: f64,
    /// The amount saved so far. May exceed `target_value`.
    pub current_value: f64,
    /// Whether the user has marked the goal as done.
    pub completed: bool,
    /// Deposits and withdrawals in the order they were recorded.
    pub contributions: Vec<Contribution>,
}

impl Goal {
    /// The fraction of the target saved so far, e.g. `0.5` for half way.
    ///
    /// A goal with a zero target has no meaningful ratio and is reported as
    /// having made zero progress.
    pub fn progress_ratio(&self) -> f64 {
        if self.target_value == 0.0 {
            return 0.0;
        }

        self.current_value / self.target_value
    }

    /// Progress as a percentage capped at 100.
    pub fn progress_percent(&self) -> f64 {
        (self.progress_ratio() * 100.0).min(100.0)
    }

    /// How much is left to save. Negative once the target has been exceeded.
    pub fn remaining(&self) -> f64 {
        self.target_value - self.current_value
    }

    /// Whether the amount saved has reached the target.
    pub fn has_reached_target(&self) -> bool {
        self.current_value >= self.target_value
    }
}

/// Check that a target amount is a finite number greater than zero.
///
/// # Errors
///
/// Returns [Error::InvalidTargetValue] otherwise.
pub fn validate_target_value(value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidTargetValue(value))
    }
}

/// Check that a saved amount is a finite, non-negative number.
///
/// # Errors
///
/// Returns [Error::InvalidCurrentValue] otherwise.
pub fn validate_current_value(value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidCurrentValue(value))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{Error, test_utils::goal_with_values};

    use super::{
        Contribution, ContributionKind, GoalName, validate_current_value, validate_target_value,
    };

    #[test]
    fn goal_name_is_trimmed() {
        let name = GoalName::new("  New bike ").unwrap();

        assert_eq!(name.as_ref(), "New bike");
    }

    #[test]
    fn goal_name_cannot_be_blank() {
        assert_eq!(GoalName::new(""), Err(Error::EmptyGoalName));
        assert_eq!(GoalName::new(" \t"), Err(Error::EmptyGoalName));
    }

    #[test]
    fn contribution_kind_parses_wire_values() {
        assert_eq!("deposit".parse::<ContributionKind>(), Ok(ContributionKind::Deposit));
        assert_eq!("withdrawal".parse::<ContributionKind>(), Ok(ContributionKind::Withdrawal));
        assert_eq!(
            "refund".parse::<ContributionKind>(),
            Err(Error::UnknownContributionType("refund".to_owned()))
        );
    }

    #[test]
    fn contribution_amount_must_be_positive() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = Contribution::new(amount, ContributionKind::Deposit, None);
            assert!(
                matches!(result, Err(Error::InvalidContributionAmount(_))),
                "amount {amount} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn withdrawal_has_negative_signed_amount() {
        let deposit = Contribution::new(
            25.0,
            ContributionKind::Deposit,
            Some(datetime!(2024-03-01 09:00 UTC)),
        )
        .unwrap();
        let withdrawal = Contribution::new(10.0, ContributionKind::Withdrawal, None).unwrap();

        assert_eq!(deposit.signed_amount(), 25.0);
        assert_eq!(withdrawal.signed_amount(), -10.0);
    }

    #[test]
    fn target_value_must_be_positive_and_finite() {
        assert_eq!(validate_target_value(100.0), Ok(100.0));
        assert_eq!(validate_target_value(0.0), Err(Error::InvalidTargetValue(0.0)));
        assert_eq!(
            validate_target_value(-1.0),
            Err(Error::InvalidTargetValue(-1.0))
        );
        assert!(validate_target_value(f64::NAN).is_err());
    }

    #[test]
    fn current_value_may_be_zero_but_not_negative() {
        assert_eq!(validate_current_value(0.0), Ok(0.0));
        assert_eq!(
            validate_current_value(-0.5),
            Err(Error::InvalidCurrentValue(-0.5))
        );
    }

    #[test]
    fn progress_is_capped_at_one_hundred_percent() {
        let goal = goal_with_values("Laptop", 1000.0, 1500.0);

        assert_eq!(goal.progress_ratio(), 1.5);
        assert_eq!(goal.progress_percent(), 100.0);
        assert_eq!(goal.remaining(), -500.0);
        assert!(goal.has_reached_target());
    }

    #[test]
    fn zero_target_counts_as_zero_progress() {
        let goal = goal_with_values("Broken", 0.0, 50.0);

        assert_eq!(goal.progress_ratio(), 0.0);
        assert_eq!(goal.progress_percent(), 0.0);
    }
}
