//! API response types.
//!
//! Every `/users` response, including the empty-bodied ones, carries
//! `application/json; charset=utf-8`. Axum's `Json` omits the charset, so the
//! body is encoded here instead.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use roster_core::RosterError;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Content type used by the `/users` resource.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Message returned when a list or search yields nothing.
pub const NO_USERS_FOUND: &str = "No Users found.";

/// Message returned when a single user lookup misses.
pub const USER_NOT_FOUND: &str = "User not found.";

/// Error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    #[schema(example = "User not found.")]
    pub message: String,
}

impl ErrorBody {
    /// Creates an error body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON body with an explicit UTF-8 charset.
#[derive(Debug, Clone)]
pub struct JsonUtf8<T>(pub T);

impl<T: Serialize> IntoResponse for JsonUtf8<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                body,
            )
                .into_response(),
            Err(err) => AppError(RosterError::from(err)).into_response(),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        }

        // Must not go through JsonUtf8, whose error path lands here.
        let body = serde_json::json!({ "message": self.0.to_string() }).to_string();
        (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            body,
        )
            .into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult = Result<Response, AppError>;

/// 200 with a JSON body.
pub fn ok<T: Serialize>(data: T) -> ApiResult {
    Ok(JsonUtf8(data).into_response())
}

/// 200 with an empty body.
pub fn empty_ok() -> ApiResult {
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
    )
        .into_response())
}

/// 404 with a fixed message.
pub fn not_found(message: &str) -> ApiResult {
    Ok((StatusCode::NOT_FOUND, JsonUtf8(ErrorBody::new(message))).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_utf8_sets_charset() {
        let response = JsonUtf8(ErrorBody::new("hi")).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);
        assert_eq!(body_string(response).await, r#"{"message":"hi"}"#);
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = not_found(USER_NOT_FOUND).unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"message":"User not found."}"#);
    }

    #[tokio::test]
    async fn test_empty_ok_has_no_body() {
        let response = empty_ok().unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_app_error_maps_status_and_message() {
        let response = AppError(RosterError::Database("connection reset".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Database error: connection reset"}"#
        );
    }

    #[tokio::test]
    async fn test_app_error_configuration_is_server_error() {
        let response = AppError(RosterError::configuration("bad url")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);
    }
}
