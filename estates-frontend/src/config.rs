//! Build-time configuration.
//!
//! Both values are taken from the environment of the build
//! (e.g. `BACKEND_URL=https://api.example.com trunk build`).

use log::Level;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

const DEFAULT_LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

#[must_use]
pub fn log_level() -> Level {
    option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
