use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::response::BaseResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Malformed(String),
    Invalid(String),
    Blank { field: &'static str },
    NullField { field: &'static str },
    TooLong { field: &'static str, max: usize },
    InvalidColor { value: String },
    OutOfRange { field: &'static str, min: i64 },
    TooLarge { field: &'static str, max: i64 },
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The `{code, msg}` envelope this error is reported as.
    pub fn to_envelope(&self) -> BaseResponse {
        BaseResponse::new(i32::from(self.status().as_u16()), self.to_string())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "Malformed payload: {msg}"),
            Self::Invalid(msg) => write!(f, "Invalid payload: {msg}"),
            Self::Blank { field } => write!(f, "`{field}` must not be blank"),
            Self::NullField { field } => write!(f, "`{field}` cannot be null"),
            Self::TooLong { field, max } => {
                write!(f, "`{field}` must be at most {max} characters")
            }
            Self::InvalidColor { value } => {
                write!(f, "`color` must be a hex color like #ff0000, got {value:?}")
            }
            Self::OutOfRange { field, min } => write!(f, "`{field}` must be at least {min}"),
            Self::TooLarge { field, max } => write!(f, "`{field}` must be at most {max}"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "{self}");
        (status, Json(self.to_envelope())).into_response()
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match e.classify() {
            Category::Data => Self::Invalid(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::Invalid(e.body_text()),
            other => Self::Malformed(other.body_text()),
        }
    }
}
