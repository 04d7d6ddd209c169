use crate::error::DriverError;

pub mod api;
pub mod config;
pub mod error;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}

pub(crate) fn env_opt(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|value| !value.trim().is_empty())
}
