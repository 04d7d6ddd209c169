use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Http(reqwest::Error),
    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    Serde(serde_json::Error),
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                DriverError::Http(http) if http.is_timeout() => KernelError::Timeout,
                DriverError::Status { status: 404, .. } => KernelError::NotFound,
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
