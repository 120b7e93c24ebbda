use crate::calendar::{average_uptime, build_window, date_key, format_percentage, CalendarError};
use crate::clock::Clock;
use crate::models::{AppData, BucketPoint, CalendarResponse};
use chrono::NaiveDate;

pub fn build_calendar(
    clock: &dyn Clock,
    data: &AppData,
    days: usize,
) -> Result<CalendarResponse, CalendarError> {
    build_calendar_at(clock.today(), data, days)
}

pub fn build_calendar_at(
    today: NaiveDate,
    data: &AppData,
    days: usize,
) -> Result<CalendarResponse, CalendarError> {
    let buckets = build_window(&data.records, days, today)?;
    let average = average_uptime(&buckets);

    let points = buckets
        .iter()
        .map(|bucket| BucketPoint {
            date: date_key(bucket.date),
            uptime: bucket.uptime,
            incidents: bucket.incidents,
            tier: bucket.tier(),
            tooltip: bucket.tooltip(),
        })
        .collect();

    Ok(CalendarResponse {
        reference_date: date_key(today),
        days,
        average_uptime: average,
        average_uptime_display: format_percentage(average),
        buckets: points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Tier;
    use crate::clock::FixedClock;
    use crate::models::DayRecord;

    #[test]
    fn calendar_includes_each_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        data.upsert(DayRecord {
            date: "2026-01-03".to_string(),
            uptime: 94.0,
            incidents: 2,
        });

        let calendar = build_calendar_at(today, &data, 7).unwrap();
        assert_eq!(calendar.buckets.len(), 7);
        assert_eq!(calendar.reference_date, "2026-01-05");
        assert_eq!(calendar.buckets[0].date, "2025-12-30");

        let point = calendar
            .buckets
            .iter()
            .find(|day| day.date == "2026-01-03")
            .expect("missing day");
        assert_eq!(point.incidents, 2);
        assert_eq!(point.tier, Tier::Poor);
        assert_eq!(point.tooltip, "2026-01-03: 94.00% uptime · 2 incidents");
    }

    #[test]
    fn calendar_average_counts_defaulted_days() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut data = AppData::default();
        data.upsert(DayRecord {
            date: "2026-01-05".to_string(),
            uptime: 0.0,
            incidents: 1,
        });

        let calendar = build_calendar(&FixedClock(today), &data, 4).unwrap();
        assert_eq!(calendar.average_uptime, 75.0);
        assert_eq!(calendar.average_uptime_display, "75.00");
    }

    #[test]
    fn calendar_rejects_empty_window() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert!(build_calendar_at(today, &AppData::default(), 0).is_err());
    }
}
