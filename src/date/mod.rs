//! Calendar date details and formatting.
//!
//! [`DateDetails`] splits a date into its year, month and day of month;
//! [`DateDetails::format`] renders a template with `{year}`, `{month}` and
//! `{date}` placeholders, zero padding month and day with [`pad`].
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use polycurry::date::DateDetails;
//!
//! let details = DateDetails::from(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
//! assert_eq!(details.format("{date}.{month}.{year}"), "07.03.2024");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Year, 1-based month and day of month of a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateDetails {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, `1..=12`.
    pub month: u32,
    /// Day of the month, `1..=31`.
    pub date: u32,
}

impl DateDetails {
    /// Extracts the details of anything with calendar fields.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            date: date.day(),
        }
    }

    /// Replaces `{year}`, `{month}` and `{date}` in `template`.
    ///
    /// Month and day are zero padded to two digits; the year is written as
    /// is. Unknown placeholders are left untouched.
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{year}", &self.year.to_string())
            .replace("{month}", &pad(self.month))
            .replace("{date}", &pad(self.date))
    }
}

impl From<NaiveDate> for DateDetails {
    fn from(date: NaiveDate) -> Self {
        Self::of(&date)
    }
}

impl From<NaiveDateTime> for DateDetails {
    fn from(moment: NaiveDateTime) -> Self {
        Self::of(&moment)
    }
}

/// Zero pads `value` to at least two digits.
///
/// ```rust
/// use polycurry::date::pad;
///
/// assert_eq!(pad(4), "04");
/// assert_eq!(pad(12), "12");
/// assert_eq!(pad(123), "123");
/// ```
pub fn pad(value: u32) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_details_from_naive_date() {
        let details = DateDetails::from(date(1999, 12, 31));
        assert_eq!(
            details,
            DateDetails {
                year: 1999,
                month: 12,
                date: 31,
            }
        );
    }

    #[test]
    fn test_details_from_date_time() {
        let moment: NaiveDateTime = date(2020, 2, 29).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(DateDetails::from(moment).date, 29);
        assert_eq!(DateDetails::of(&moment).month, 2);
    }

    #[test]
    fn test_format_repeated_and_unknown_placeholders() {
        let details = DateDetails::from(date(2024, 1, 5));
        assert_eq!(
            details.format("{year}-{month}-{date} {hours} {date}"),
            "2024-01-05 {hours} 05"
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(DateDetails::from(date(2024, 1, 5)) < DateDetails::from(date(2024, 2, 1)));
    }
}
