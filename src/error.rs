// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures talking to the photo API.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS or body transfer failure.
    Transport(String),

    /// Server answered with a non-2xx status code.
    Status(u16),

    /// Response body was not the JSON shape we expect.
    Decode(String),

    /// An image id in the payload is not a non-negative integer.
    InvalidId(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) | ApiError::InvalidId(_) => "error-api-decode",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ApiError::InvalidId(id) => write!(f, "Invalid image id: {:?}", id),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
