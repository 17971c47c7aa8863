//! Calendar-week bucketing.
//!
//! A [`Week`] is the half-open 7-day interval starting on a Monday, per the
//! ISO week start. Every date maps to exactly one week.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// The display format of a week label: the week's start date as DD/MM/YYYY.
pub const WEEK_LABEL_FORMAT: &str = "%d/%m/%Y";

/// A Monday-start calendar week, identified by its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(NaiveDate);

impl Week {
    /// Returns the week containing `date`: the one starting on
    /// `date - days_from_monday(date)`.
    pub fn containing(date: NaiveDate) -> Week {
        let days = i64::from(date.weekday().num_days_from_monday());
        Week(date - Duration::days(days))
    }

    /// The Monday this week starts on.
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    /// The formatted week label shown to users, e.g. `01/01/2024`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WEEK_LABEL_FORMAT))
    }
}

impl FromStr for Week {
    type Err = chrono::ParseError;

    /// Parses a DD/MM/YYYY label. Any date inside a week is normalised to
    /// that week's Monday, so a label need not itself be a Monday.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), WEEK_LABEL_FORMAT)?;
        Ok(Week::containing(date))
    }
}

serde_plain::derive_serialize_from_display!(Week);
serde_plain::derive_deserialize_from_fromstr!(Week, "a week label in DD/MM/YYYY format");
