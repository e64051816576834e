use std::env;

use crate::error::AppError;

const DEFAULT_API_URL: &str = "https://mobile.handswork.pro/api/shifts/map-list-unauthorized";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub position_latitude: f64,
    pub position_longitude: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_url: env::var("SHIFT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            http_timeout_secs: parse_or_default("HTTP_TIMEOUT_SECS", 30)?,
            // The live feed answers most positions with an empty batch, so the
            // defaults point at a region known to carry shifts.
            position_latitude: parse_or_default("POSITION_LATITUDE", 45.0)?,
            position_longitude: parse_or_default("POSITION_LONGITUDE", 39.0)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
