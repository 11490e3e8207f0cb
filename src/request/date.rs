//! Date coercion for path segments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date argument: either a calendar value or a pre-formatted string.
///
/// Calendar values render as `YYYY-MM-DD`. Date-times keep the calendar day
/// in their own timezone. Strings pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Date(NaiveDate),
    Text(String),
}

impl DateLike {
    pub fn render(&self) -> String {
        match self {
            DateLike::Date(d) => d.format(DATE_FORMAT).to_string(),
            DateLike::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for DateLike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Date(d)
    }
}

impl From<&NaiveDate> for DateLike {
    fn from(d: &NaiveDate) -> Self {
        DateLike::Date(*d)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(dt: NaiveDateTime) -> Self {
        DateLike::Date(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateLike {
    fn from(dt: DateTime<Tz>) -> Self {
        DateLike::Date(dt.date_naive())
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    #[test]
    fn test_same_day_renders_identically() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let ndt = d.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        let utc = Utc.from_utc_datetime(&d.and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()));

        let rendered: Vec<String> = vec![
            DateLike::from(d).render(),
            DateLike::from(ndt).render(),
            DateLike::from(utc).render(),
            DateLike::from("2021-01-01").render(),
        ];
        assert!(rendered.iter().all(|r| r == "2021-01-01"));
    }

    #[test]
    fn test_datetime_uses_its_own_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2021, 3, 2, 1, 30, 0).unwrap();
        assert_eq!(DateLike::from(dt).render(), "2021-03-02");
    }

    #[test]
    fn test_strings_pass_through_unvalidated() {
        assert_eq!(DateLike::from("not-a-date").render(), "not-a-date");
        assert_eq!(DateLike::from(String::from("2021-1-5")).render(), "2021-1-5");
    }

    #[test]
    fn test_pads_month_and_day() {
        let d = NaiveDate::from_ymd_opt(987, 2, 3).unwrap();
        assert_eq!(DateLike::from(d).render(), "0987-02-03");
    }
}
