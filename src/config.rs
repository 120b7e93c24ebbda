use crate::calendar::DEFAULT_WINDOW_DAYS;
use std::{env, path::PathBuf};
use tracing::warn;

/// Largest window the service will build on request.
pub const MAX_WINDOW_DAYS: usize = 3660;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/uptime.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub window_days: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|err| {
                warn!("invalid PORT {value:?} ({err}), using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let window_days = match lookup("CALENDAR_DAYS") {
            Some(value) => match value.parse::<usize>() {
                Ok(days) if is_valid_window(days) => days,
                _ => {
                    warn!(
                        "CALENDAR_DAYS must be 1..={MAX_WINDOW_DAYS}, got {value:?}; using {DEFAULT_WINDOW_DAYS}"
                    );
                    DEFAULT_WINDOW_DAYS
                }
            },
            None => DEFAULT_WINDOW_DAYS,
        };

        Self {
            port,
            data_path,
            window_days,
        }
    }
}

pub fn is_valid_window(days: usize) -> bool {
    (1..=MAX_WINDOW_DAYS).contains(&days)
}
