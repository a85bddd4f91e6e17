//! Calendar dates as stored in the content file.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication date of a news or application item.
///
/// Stored in the content file as `{ "year": 2024, "month": 3, "day": 15 }`.
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublishedDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PublishedDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Today's date in UTC, used as `lastmod` for undated pages.
    pub fn today() -> Self {
        Utc::now().date_naive().into()
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// `YYYY-MM-DD`, the sitemap `lastmod` format.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Midnight UTC in RFC 3339, used for `article:published_time` and JSON-LD.
    pub fn to_rfc3339(self) -> String {
        format!("{}T00:00:00Z", self.to_iso())
    }
}

impl fmt::Display for PublishedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl From<NaiveDate> for PublishedDate {
    fn from(date: NaiveDate) -> Self {
        // chrono years outside u16 never occur for a build clock
        Self::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)
    }
}
