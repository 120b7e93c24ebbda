use crate::calendar::{record_day, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub uptime: f64,
    #[serde(default)]
    pub incidents: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub records: Vec<DayRecord>,
}

impl AppData {
    /// Replaces the stored record for the same calendar day, or appends.
    pub fn upsert(&mut self, record: DayRecord) {
        let day = record_day(&record.date);
        let existing = day.and_then(|day| {
            self.records
                .iter()
                .position(|stored| record_day(&stored.date) == Some(day))
        });
        match existing {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub date: String,
    pub uptime: f64,
    #[serde(default)]
    pub incidents: u32,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub days: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct BucketPoint {
    pub date: String,
    pub uptime: f64,
    pub incidents: u32,
    pub tier: Tier,
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub reference_date: String,
    pub days: usize,
    pub average_uptime: f64,
    pub average_uptime_display: String,
    pub buckets: Vec<BucketPoint>,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<DayRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, uptime: f64) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            uptime,
            incidents: 0,
        }
    }

    #[test]
    fn upsert_replaces_same_calendar_day() {
        let mut data = AppData::default();
        data.upsert(record("2024-03-01", 99.0));
        data.upsert(record("2024-03-02", 98.0));
        data.upsert(record("2024-03-01T12:00:00Z", 42.0));

        assert_eq!(data.records.len(), 2);
        assert_eq!(data.records[0].uptime, 42.0);
        assert_eq!(data.records[1].date, "2024-03-02");
    }

    #[test]
    fn record_incidents_default_to_zero() {
        let parsed: DayRecord =
            serde_json::from_str(r#"{"date":"2024-03-01","uptime":99.9}"#).unwrap();
        assert_eq!(parsed.incidents, 0);
    }

    #[test]
    fn stored_dates_keep_their_original_text() {
        let mut data = AppData::default();
        data.upsert(record("2024-03-01T08:00:00Z", 97.0));
        assert_eq!(
            record_day(&data.records[0].date),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }
}
