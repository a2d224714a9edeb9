use crate::config::ConfigError;
use crate::portal::billing::BillingError;
use crate::portal::directory::{DirectoryLoadError, LookupError};
use crate::portal::tracking::TrackingError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Directory(DirectoryLoadError),
    Billing(BillingError),
    Lookup(LookupError),
    Tracking(TrackingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Directory(err) => write!(f, "directory error: {}", err),
            AppError::Billing(err) => write!(f, "{}", err),
            AppError::Lookup(err) => write!(f, "{}", err),
            AppError::Tracking(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Directory(err) => Some(err),
            AppError::Billing(err) => Some(err),
            AppError::Lookup(err) => Some(err),
            AppError::Tracking(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Billing(_)
            | AppError::Lookup(LookupError::InputMissing)
            | AppError::Tracking(TrackingError::InputMissing) => StatusCode::UNPROCESSABLE_ENTITY,
            // A directory miss is informational; the citizen continues with manual entry.
            AppError::Lookup(LookupError::NotFound { .. }) => StatusCode::OK,
            AppError::Tracking(TrackingError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<DirectoryLoadError> for AppError {
    fn from(value: DirectoryLoadError) -> Self {
        Self::Directory(value)
    }
}

impl From<BillingError> for AppError {
    fn from(value: BillingError) -> Self {
        Self::Billing(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<TrackingError> for AppError {
    fn from(value: TrackingError) -> Self {
        Self::Tracking(value)
    }
}
