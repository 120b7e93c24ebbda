use crate::calendar::record_day;
use crate::config::{is_valid_window, MAX_WINDOW_DAYS};
use crate::errors::AppError;
use crate::models::{CalendarQuery, CalendarResponse, DayRecord, RecordRequest, RecordsResponse};
use crate::state::AppState;
use crate::stats::build_calendar;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let data = state.data.lock().await;
    let calendar = build_calendar(state.clock.as_ref(), &data, state.window_days)?;
    Ok(Html(render_index(&calendar)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let days = query.days.unwrap_or(state.window_days);
    if !is_valid_window(days) {
        return Err(AppError::bad_request(format!(
            "days must be between 1 and {MAX_WINDOW_DAYS}"
        )));
    }

    let data = state.data.lock().await;
    Ok(Json(build_calendar(state.clock.as_ref(), &data, days)?))
}

pub async fn list_records(State(state): State<AppState>) -> Json<RecordsResponse> {
    let data = state.data.lock().await;
    Json(RecordsResponse {
        records: data.records.clone(),
    })
}

pub async fn post_record(
    State(state): State<AppState>,
    Json(payload): Json<RecordRequest>,
) -> Result<Json<DayRecord>, AppError> {
    let record = validate_record(payload)?;

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.upsert(record.clone());
    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!(
        "recorded {}: {}% uptime, {} incidents",
        record.date, record.uptime, record.incidents
    );
    Ok(Json(record))
}

fn validate_record(payload: RecordRequest) -> Result<DayRecord, AppError> {
    let date = payload.date.trim();
    if record_day(date).is_none() {
        return Err(AppError::bad_request(
            "date must start with a YYYY-MM-DD calendar date",
        ));
    }
    if !payload.uptime.is_finite() || !(0.0..=100.0).contains(&payload.uptime) {
        return Err(AppError::bad_request("uptime must be between 0 and 100"));
    }

    Ok(DayRecord {
        date: date.to_string(),
        uptime: payload.uptime,
        incidents: payload.incidents,
    })
}
