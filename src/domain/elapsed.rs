//! Approximate calendar breakdown of the time elapsed since an epoch.
//!
//! Years and months use average lengths (365.25 and 30.44 days), and every
//! field after `years` is taken from `diff` modulo the next larger unit, not
//! from the remainder left by the previous field. The result is deliberately
//! not calendar-accurate; displays depend on these exact numbers.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;
/// 30.44 days
pub const MS_PER_MONTH: i64 = 2_630_016_000;
/// 365.25 days
pub const MS_PER_YEAR: i64 = 31_557_600_000;

pub const EPOCH_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Reference instant, given in local time as `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Epoch(pub DateTime<Local>);

impl Epoch {
    pub fn parse(value: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: String| ConfigurationError::InvalidEpoch {
            value: value.to_string(),
            reason,
        };
        let naive = NaiveDateTime::parse_from_str(value.trim(), EPOCH_FORMAT)
            .map_err(|e| invalid(e.to_string()))?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(Epoch)
            .ok_or_else(|| invalid("does not exist in the local time zone".to_string()))
    }

    pub fn at(&self) -> DateTime<Local> {
        self.0
    }
}

impl TryFrom<String> for Epoch {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Epoch::parse(&value)
    }
}

impl Default for Epoch {
    fn default() -> Self {
        let naive = NaiveDate::from_ymd_opt(2025, 10, 8)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let at = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(|| naive.and_utc().with_timezone(&Local));
        Epoch(at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElapsedBreakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedBreakdown {
    /// All-zero breakdown, published while `now` is before the epoch
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_millis(diff: i64) -> Self {
        if diff < 0 {
            return Self::ZERO;
        }

        // diff is non-negative, so every quotient below is too
        let field = |v: i64| v as u64;
        Self {
            years: field(diff / MS_PER_YEAR),
            months: field((diff % MS_PER_YEAR) / MS_PER_MONTH),
            days: field((diff % MS_PER_MONTH) / MS_PER_DAY),
            hours: field((diff % MS_PER_DAY) / MS_PER_HOUR),
            minutes: field((diff % MS_PER_HOUR) / MS_PER_MINUTE),
            seconds: field((diff % MS_PER_MINUTE) / MS_PER_SECOND),
        }
    }

    pub fn since<Tz: TimeZone>(epoch: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        Self::from_millis(now.timestamp_millis() - epoch.timestamp_millis())
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Labelled fields in display order
    pub fn fields(&self) -> [(&'static str, u64); 6] {
        [
            ("Years", self.years),
            ("Months", self.months),
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}
