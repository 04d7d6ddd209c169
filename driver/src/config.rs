use std::time::Duration;

use vodca::References;

use crate::error::DriverError;
use crate::{env, env_opt};

static BOOKING_API_URL: &str = "BOOKING_API_URL";
static BOOKING_SESSION_TOKEN: &str = "BOOKING_SESSION_TOKEN";
static BOOKING_HTTP_TIMEOUT_SECS: &str = "BOOKING_HTTP_TIMEOUT_SECS";
static UPLOADS_BASE_URL: &str = "UPLOADS_BASE_URL";
static WIDGET_VIEWPORT_WIDTH: &str = "WIDGET_VIEWPORT_WIDTH";

pub static DEFAULT_UPLOADS_BASE_URL: &str = "https://deepti1399-airbnb-clone.mdbgo.io/uploads";

#[derive(Debug, Clone, References)]
pub struct ApiConfig {
    base_url: String,
    session_token: Option<String>,
    timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, DriverError> {
        let mut config = Self::new(env(BOOKING_API_URL)?);
        if let Some(token) = env_opt(BOOKING_SESSION_TOKEN) {
            config = config.with_session_token(token);
        }
        if let Some(secs) = env_opt(BOOKING_HTTP_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| DriverError::InvalidEnv {
                key: BOOKING_HTTP_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, References)]
pub struct DisplayConfig {
    uploads_base_url: String,
    viewport_width: u32,
}

impl DisplayConfig {
    pub fn new(uploads_base_url: impl Into<String>, viewport_width: u32) -> Self {
        Self {
            uploads_base_url: uploads_base_url.into(),
            viewport_width,
        }
    }

    pub fn from_env() -> Result<Self, DriverError> {
        let uploads_base_url =
            env_opt(UPLOADS_BASE_URL).unwrap_or_else(|| DEFAULT_UPLOADS_BASE_URL.to_string());
        let viewport_width = match env_opt(WIDGET_VIEWPORT_WIDTH) {
            Some(width) => width.trim().parse().map_err(|_| DriverError::InvalidEnv {
                key: WIDGET_VIEWPORT_WIDTH,
                value: width.clone(),
            })?,
            None => 1024,
        };
        Ok(Self::new(uploads_base_url, viewport_width))
    }
}
