//! Turns a goal's ledger into a running-balance series.

use serde::Serialize;
use time::{Date, Month, OffsetDateTime};
use time_tz::{OffsetDateTimeExt, Tz};

use crate::goal::{Contribution, ContributionKind};

/// Label of the synthetic point every timeline starts with.
pub const START_LABEL: &str = "Start";

/// A chart needs at least this many points to draw a line.
pub const MIN_POINTS_TO_RENDER: usize = 2;

/// What produced a point on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// The zero point prepended to every non-empty timeline.
    Start,
    /// A deposit raised the balance.
    Deposit,
    /// A withdrawal lowered the balance.
    Withdrawal,
}

impl From<ContributionKind> for PointKind {
    fn from(kind: ContributionKind) -> Self {
        match kind {
            ContributionKind::Deposit => PointKind::Deposit,
            ContributionKind::Withdrawal => PointKind::Withdrawal,
        }
    }
}

/// The balance of a goal right after one contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    /// Unique within a timeline, so charts don't merge events on the same day.
    pub key: String,
    /// Short date such as "Jan 05", or [START_LABEL].
    pub label: String,
    /// Running balance after this event.
    pub balance: f64,
    /// The contribution amount, always positive (zero for the start point).
    pub amount: f64,
    /// What produced the point.
    #[serde(rename = "type")]
    pub kind: PointKind,
}

impl TimelinePoint {
    fn start() -> Self {
        Self {
            key: format!("{START_LABEL}_start"),
            label: START_LABEL.to_owned(),
            balance: 0.0,
            amount: 0.0,
            kind: PointKind::Start,
        }
    }
}

/// Build the running-balance timeline for a goal's contributions.
///
/// Contributions are ordered by timestamp, oldest first. A contribution without
/// a timestamp is ordered as if it happened at the Unix epoch, which puts it
/// before every dated contribution. Contributions with equal timestamps keep
/// their input order.
///
/// Labels are local dates in `timezone`, using the offset in effect when each
/// contribution was made. A contribution without a timestamp is labelled with
/// the local date of `now`.
///
/// Returns an empty timeline when there are no contributions, otherwise a
/// [START_LABEL] point with a zero balance followed by one point per
/// contribution. The balance is not clamped and goes negative if withdrawals
/// exceed deposits.
pub fn build_balance_timeline(
    contributions: &[Contribution],
    now: OffsetDateTime,
    timezone: &Tz,
) -> Vec<TimelinePoint> {
    if contributions.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Contribution> = contributions.iter().collect();
    sorted.sort_by_key(|contribution| {
        contribution
            .timestamp
            .map(|timestamp| timestamp.unix_timestamp_nanos())
            .unwrap_or(0)
    });

    let mut points = Vec::with_capacity(sorted.len() + 1);
    points.push(TimelinePoint::start());

    let mut balance = 0.0;

    for (index, contribution) in sorted.into_iter().enumerate() {
        balance += contribution.signed_amount();

        let date = contribution
            .timestamp
            .unwrap_or(now)
            .to_timezone(timezone)
            .date();
        let label = format_day_label(date);

        points.push(TimelinePoint {
            key: format!("{label}_{index}"),
            label,
            balance,
            amount: contribution.amount,
            kind: contribution.kind.into(),
        });
    }

    points
}

/// Whether a timeline has enough points to be drawn.
pub fn has_enough_points(points: &[TimelinePoint]) -> bool {
    points.len() >= MIN_POINTS_TO_RENDER
}

/// Formats a date as a month abbreviation and zero padded day, e.g. "Mar 07".
fn format_day_label(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{month} {:02}", date.day())
}
