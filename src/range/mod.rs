//! Quick date-range resolution for report filters.
//!
//! Every report page offers the same set of shortcut buttons (today, this
//! week, last 30 days, ...). This module maps those keywords to concrete
//! inclusive start/end calendar dates, using the reference clock's local
//! calendar with no timezone conversion.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An inclusive calendar-date range with a display caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
    /// Button caption shown in the dashboard.
    pub label: String,
}

/// First day of the week used when resolving the `week` keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Monday-first weeks (the convention the dashboard ships with).
    #[default]
    Monday,
    /// Sunday-first weeks.
    Sunday,
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekStart::Monday => write!(f, "monday"),
            WeekStart::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(format!("Unknown week start: {}", s)),
        }
    }
}

/// Symbolic quick-range keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickRange {
    /// The reference date itself.
    #[default]
    Today,
    /// The day before the reference date.
    Yesterday,
    /// Week-to-date, from the most recent week start.
    Week,
    /// Month-to-date, from the first of the month.
    Month,
    /// The 7-day inclusive window ending at the reference date.
    Last7,
    /// The 30-day inclusive window ending at the reference date.
    Last30,
}

impl QuickRange {
    /// Parse a keyword, falling back to `Today` for anything unrecognized.
    ///
    /// Total by contract: filter buttons must never surface a parse error.
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "today" => QuickRange::Today,
            "yesterday" => QuickRange::Yesterday,
            "week" => QuickRange::Week,
            "month" => QuickRange::Month,
            "last7" => QuickRange::Last7,
            "last30" => QuickRange::Last30,
            other => {
                debug!(keyword = other, "Unrecognized quick-range keyword, using today");
                QuickRange::Today
            }
        }
    }

    /// Resolve the keyword against a reference date.
    pub fn resolve(self, reference: NaiveDate, week_start: WeekStart) -> DateRange {
        let (start, end) = match self {
            QuickRange::Today => (reference, reference),
            QuickRange::Yesterday => {
                let yesterday = reference - Duration::days(1);
                (yesterday, yesterday)
            }
            QuickRange::Week => {
                let offset = match week_start {
                    WeekStart::Monday => reference.weekday().num_days_from_monday(),
                    WeekStart::Sunday => reference.weekday().num_days_from_sunday(),
                };
                (reference - Duration::days(i64::from(offset)), reference)
            }
            QuickRange::Month => {
                // Day 1 is valid in every month.
                let first = reference.with_day(1).unwrap_or(reference);
                (first, reference)
            }
            QuickRange::Last7 => (reference - Duration::days(6), reference),
            QuickRange::Last30 => (reference - Duration::days(29), reference),
        };

        DateRange {
            start,
            end,
            label: self.label().to_string(),
        }
    }

    /// Resolve against the local clock's current date.
    pub fn resolve_now(self, week_start: WeekStart) -> DateRange {
        self.resolve(Local::now().date_naive(), week_start)
    }

    /// The button caption for this range.
    pub fn label(self) -> &'static str {
        match self {
            QuickRange::Today => "今天",
            QuickRange::Yesterday => "昨天",
            QuickRange::Week => "本周",
            QuickRange::Month => "本月",
            QuickRange::Last7 => "近7天",
            QuickRange::Last30 => "近30天",
        }
    }
}

impl std::fmt::Display for QuickRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuickRange::Today => write!(f, "today"),
            QuickRange::Yesterday => write!(f, "yesterday"),
            QuickRange::Week => write!(f, "week"),
            QuickRange::Month => write!(f, "month"),
            QuickRange::Last7 => write!(f, "last7"),
            QuickRange::Last30 => write!(f, "last30"),
        }
    }
}

/// Resolve a raw keyword string against a reference date.
///
/// Unrecognized keywords behave as `today`; the function never fails.
pub fn resolve_keyword(keyword: &str, reference: NaiveDate, week_start: WeekStart) -> DateRange {
    QuickRange::parse(keyword).resolve(reference, week_start)
}
