//! Error Types
//!
//! Everything that can go wrong between a form and the content service.

use thiserror::Error;

/// Rejections raised before a request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The image is too large ({size} bytes). Please use an image smaller than {max_mb}MB.")]
    FileTooLarge { size: u64, max_mb: u64 },

    #[error("Unsupported file type \"{0}\". Use JPG, PNG, GIF or WEBP.")]
    UnsupportedFileType(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    #[error("Number of attendees must be at least 1")]
    InvalidAttendees,

    #[error("\"{0}\" is not a valid time (HH:MM)")]
    InvalidTime(String),

    #[error("\"{0}\" is not a valid date (YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Errors returned by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Session expired, please log in again")]
    Unauthorized,

    #[error("Request failed ({status}): {detail}")]
    Status { status: u16, detail: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Browser error: {0}")]
    Browser(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl ApiError {
    /// Whether the request never reached the network
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
