//! Loosely typed goal records as they arrive over the wire, and their
//! conversion into validated [Goal]s.

use serde::Deserialize;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::{
    Error,
    goal::{
        Contribution, Goal, GoalCategory, GoalId, GoalName,
        domain::{validate_current_value, validate_target_value},
    },
};

const NAIVE_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const NAIVE_DATE_TIME_SUBSECOND_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A contribution as sent by the goals API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionPayload {
    /// Must be positive.
    pub amount: f64,
    /// "deposit" or "withdrawal".
    #[serde(rename = "type")]
    pub kind: String,
    /// RFC 3339, a naive date-time in UTC or a bare date.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A goal as sent by the goals API.
///
/// Only the name and target are required, everything else falls back to the
/// same defaults the goals API uses for new goals.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPayload {
    /// Identifier assigned by the goals API.
    #[serde(default)]
    pub id: Option<GoalId>,
    /// Must not be blank.
    pub name: String,
    /// Free text shown under the name.
    #[serde(default)]
    pub description: String,
    /// A category value, empty or absent for none.
    #[serde(default)]
    pub category: Option<String>,
    /// Hex colour, falls back to the category colour when blank.
    #[serde(default)]
    pub colour: Option<String>,
    /// Must be positive.
    pub target_value: f64,
    /// Amount saved so far, must not be negative.
    #[serde(default)]
    pub current_value: f64,
    /// Whether the user has moved the goal to history.
    #[serde(default)]
    pub completed: bool,
    /// The goal's ledger, absent for goals without one.
    #[serde(default)]
    pub contributions: Option<Vec<ContributionPayload>>,
}

impl TryFrom<ContributionPayload> for Contribution {
    type Error = Error;

    fn try_from(payload: ContributionPayload) -> Result<Self, Self::Error> {
        let kind = payload.kind.trim().parse()?;
        let timestamp = payload
            .timestamp
            .as_deref()
            .map(str::trim)
            .filter(|timestamp| !timestamp.is_empty())
            .map(parse_timestamp)
            .transpose()?;

        Contribution::new(payload.amount, kind, timestamp)
    }
}

impl TryFrom<GoalPayload> for Goal {
    type Error = Error;

    fn try_from(payload: GoalPayload) -> Result<Self, Self::Error> {
        let name = GoalName::new(&payload.name)?;
        let category = GoalCategory::parse_optional(payload.category.as_deref())?;
        let target_value = validate_target_value(payload.target_value)?;
        let current_value = validate_current_value(payload.current_value)?;

        let colour = match payload.colour {
            Some(colour) if !colour.trim().is_empty() => colour.trim().to_owned(),
            _ => category
                .unwrap_or(GoalCategory::Other)
                .default_colour()
                .to_owned(),
        };

        let contributions = payload
            .contributions
            .unwrap_or_default()
            .into_iter()
            .map(Contribution::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Goal {
            id: payload.id,
            name,
            description: payload.description,
            category,
            colour,
            target_value,
            current_value,
            completed: payload.completed,
            contributions,
        })
    }
}

/// Validate a whole goal collection, stopping at the first malformed goal.
///
/// # Errors
///
/// Returns the validation error of the first goal that could not be converted.
pub fn validate_goals(payloads: Vec<GoalPayload>) -> Result<Vec<Goal>, Error> {
    payloads
        .into_iter()
        .map(|payload| {
            let name = payload.name.clone();
            Goal::try_from(payload)
                .inspect_err(|error| tracing::debug!("rejected goal \"{name}\": {error}"))
        })
        .collect()
}

/// Parse a contribution timestamp.
///
/// Accepts RFC 3339 date-times, date-times without an offset (taken as UTC),
/// and bare dates (midnight UTC).
///
/// # Errors
///
/// Returns [Error::InvalidTimestamp] if `text` matches none of these forms.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(timestamp) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(timestamp);
    }

    if let Ok(timestamp) = PrimitiveDateTime::parse(text, NAIVE_DATE_TIME_SUBSECOND_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(text, NAIVE_DATE_TIME_FORMAT))
    {
        return Ok(timestamp.assume_utc());
    }

    Date::parse(text, DATE_FORMAT)
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| Error::InvalidTimestamp(text.to_owned()))
}
