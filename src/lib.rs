pub mod app;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use calendar::{average_uptime, build_window, color_tier, CalendarError, DayBucket, Tier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_data;
