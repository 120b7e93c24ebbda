//! Dense day-bucket windows over sparse uptime records.
//!
//! Records arrive unordered and with holes; the window always has one bucket
//! per calendar day, oldest first, ending at the reference date. Days with no
//! record are assumed fully up.

use crate::models::DayRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_WINDOW_DAYS: usize = 90;
pub const FULL_UPTIME: f64 = 100.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("window size must be at least 1 day")]
    InvalidWindow,
    #[error("a {0}-day window ending {1} starts before the earliest supported date")]
    OutOfRange(usize, NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub uptime: f64,
    pub incidents: u32,
}

impl DayBucket {
    fn fully_up(date: NaiveDate) -> Self {
        Self {
            date,
            uptime: FULL_UPTIME,
            incidents: 0,
        }
    }

    pub fn tier(&self) -> Tier {
        color_tier(self.uptime)
    }

    /// Hover text for a heat-map cell. The incident count is left out on clean days.
    pub fn tooltip(&self) -> String {
        let mut text = format!(
            "{}: {}% uptime",
            date_key(self.date),
            format_percentage(self.uptime)
        );
        if self.incidents > 0 {
            let noun = if self.incidents == 1 { "incident" } else { "incidents" };
            text.push_str(&format!(" · {} {noun}", self.incidents));
        }
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Degraded,
    Poor,
    Critical,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Degraded,
        Tier::Poor,
        Tier::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Degraded => "Degraded",
            Tier::Poor => "Poor",
            Tier::Critical => "Critical",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tier::Excellent => "tier-excellent",
            Tier::Good => "tier-good",
            Tier::Degraded => "tier-degraded",
            Tier::Poor => "tier-poor",
            Tier::Critical => "tier-critical",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Excellent => "#22c55e",
            Tier::Good => "#84cc16",
            Tier::Degraded => "#eab308",
            Tier::Poor => "#f97316",
            Tier::Critical => "#ef4444",
        }
    }
}

/// Threshold ladder, highest first. NaN lands in `Critical`.
pub fn color_tier(uptime: f64) -> Tier {
    if uptime >= 99.5 {
        Tier::Excellent
    } else if uptime >= 98.0 {
        Tier::Good
    } else if uptime >= 95.0 {
        Tier::Degraded
    } else if uptime >= 90.0 {
        Tier::Poor
    } else {
        Tier::Critical
    }
}

/// Calendar day a record belongs to: the leading `YYYY-MM-DD` of its date,
/// whatever follows. Returns `None` for anything not in that exact shape.
pub fn record_day(date: &str) -> Option<NaiveDate> {
    let prefix = date.get(..10)?;
    let day = NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()?;
    (date_key(day) == prefix).then_some(day)
}

/// Builds `window_size` buckets ending at `reference`, oldest first.
///
/// When several records fall on the same day the first one in `records`
/// order is used and the rest are ignored.
pub fn build_window(
    records: &[DayRecord],
    window_size: usize,
    reference: NaiveDate,
) -> Result<Vec<DayBucket>, CalendarError> {
    if window_size == 0 {
        return Err(CalendarError::InvalidWindow);
    }
    let start = reference
        .checked_sub_days(Days::new(window_size as u64 - 1))
        .ok_or(CalendarError::OutOfRange(window_size, reference))?;

    let mut by_day: HashMap<NaiveDate, &DayRecord> = HashMap::new();
    for record in records {
        let Some(day) = record_day(&record.date) else {
            continue;
        };
        if day < start || day > reference {
            continue;
        }
        by_day.entry(day).or_insert(record);
    }

    let mut buckets = Vec::with_capacity(window_size);
    for offset in (0..window_size as u64).rev() {
        // start <= reference - offset, so this cannot underflow.
        let date = reference - Days::new(offset);
        let bucket = match by_day.get(&date) {
            Some(record) => DayBucket {
                date,
                uptime: record.uptime,
                incidents: record.incidents,
            },
            None => DayBucket::fully_up(date),
        };
        buckets.push(bucket);
    }

    Ok(buckets)
}

pub fn average_uptime(buckets: &[DayBucket]) -> f64 {
    if buckets.is_empty() {
        return FULL_UPTIME;
    }
    let total: f64 = buckets.iter().map(|bucket| bucket.uptime).sum();
    total / buckets.len() as f64
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}")
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
