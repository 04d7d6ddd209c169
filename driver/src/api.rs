use error_stack::ResultExt;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use kernel::KernelError;

use crate::config::ApiConfig;
use crate::error::{ConvertError, DriverError};

pub use self::{booking::*, place::*, user::*};

mod booking;
mod place;
mod user;

/// REST backend reached over HTTP. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> error_stack::Result<Self, KernelError> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            session_token: config.session_token().clone(),
        })
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let config = ApiConfig::from_env()
            .convert_error()
            .attach_printable("Failed to read backend configuration")?;
        Self::new(&config)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.header(COOKIE, format!("token={token}")),
            None => request,
        }
    }

    pub(in crate::api) fn get(&self, path: &str) -> RequestBuilder {
        tracing::debug!("GET {path}");
        self.authorized(self.client.get(self.url(path)))
    }

    pub(in crate::api) fn post(&self, path: &str) -> RequestBuilder {
        tracing::debug!("POST {path}");
        self.authorized(self.client.post(self.url(path)))
    }
}

pub(in crate::api) async fn check_status(response: Response) -> Result<Response, DriverError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DriverError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Reads a successful response body as JSON. Bodies are parsed with
/// serde_json so a malformed payload surfaces as [`DriverError::Serde`].
pub(in crate::api) async fn read_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, DriverError> {
    let body = check_status(response).await?.text().await?;
    serde_json::from_str(&body).map_err(|error| {
        tracing::warn!("unexpected backend payload: {body}");
        DriverError::from(error)
    })
}
