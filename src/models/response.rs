use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::models::tag::Tag;

pub const DEFAULT_CODE: i32 = 200;
pub const DEFAULT_MSG: &str = "success";

/// `{code, msg}` carried by every response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResponse {
    pub code: i32,
    pub msg: String,
}

impl BaseResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// HTTP status matching `code`, or 200 when `code` is not a valid status.
    pub fn status(&self) -> StatusCode {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK)
    }
}

impl Default for BaseResponse {
    fn default() -> Self {
        Self::new(DEFAULT_CODE, DEFAULT_MSG)
    }
}

impl IntoResponse for BaseResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Envelope with a `data` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            base: BaseResponse::default(),
            data,
        }
    }

    pub fn with_base(base: BaseResponse, data: T) -> Self {
        Self { base, data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        (self.base.status(), Json(self)).into_response()
    }
}

/// Envelope with a human-readable `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            base: BaseResponse::default(),
            message: message.into(),
        }
    }

    pub fn with_base(base: BaseResponse, message: impl Into<String>) -> Self {
        Self {
            base,
            message: message.into(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (self.base.status(), Json(self)).into_response()
    }
}

pub type TagResponse = DataResponse<Tag>;
pub type CreateTagResponse = DataResponse<Tag>;
pub type UpdateTagResponse = DataResponse<Tag>;
pub type TagsResponse = DataResponse<Vec<Tag>>;

pub type DeleteTagResponse = MessageResponse;
pub type AddTagToProjectResponse = MessageResponse;
pub type RemoveTagFromProjectResponse = MessageResponse;

/// Body of a failed call: a `BaseResponse` with a non-200 code.
pub type ErrorResponse = BaseResponse;
