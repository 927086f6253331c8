//! The HTTP error boundary.
//!
//! Every handler failure becomes an [`ApiError`], and [`ApiError::into_response`]
//! is the only place that turns one into a status code and `{ error, message? }`
//! body. Handler panics are routed here too through [`handle_panic`].

use std::any::Any;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, FormRejection, JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use deptest_core::store::StoreError;
use deptest_core::transform::TransformError;
use deptest_core::validation::ValidationError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SERVER_ERROR: &str = "A server error occurred.";
pub const EXTERNAL_ERROR: &str = "External API call failed";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("{0}")]
    Panic(String),
}

/// Uniform error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Validation(_) | ApiError::NotFound(_) => ErrorBody {
                error: self.to_string(),
                message: None,
            },
            ApiError::Upstream(message) => ErrorBody {
                error: EXTERNAL_ERROR.to_string(),
                message: Some(message.clone()),
            },
            _ => ErrorBody {
                error: SERVER_ERROR.to_string(),
                message: Some(self.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self:?}");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

/// JSON body extractor whose rejections go through the boundary
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Creation payload extractor.
///
/// JSON and urlencoded bodies are parsed according to `Content-Type`. A missing
/// or blank body, or any other content type, yields `T::default()` so the
/// request still reaches validation. Malformed JSON is rejected.
pub struct PayloadBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadKind {
    Json,
    Form,
    Other,
}

fn payload_kind(headers: &HeaderMap) -> PayloadKind {
    let mime = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/json" || mime.ends_with("+json") {
        PayloadKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        PayloadKind::Form
    } else {
        PayloadKind::Other
    }
}

impl<S, T> FromRequest<S> for PayloadBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match payload_kind(req.headers()) {
            PayloadKind::Form => {
                let Form(payload) = Form::<T>::from_request(req, state).await?;
                Ok(Self(payload))
            }
            PayloadKind::Json => {
                let bytes = Bytes::from_request(req, state).await?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }
                let Json(payload) = Json::<T>::from_bytes(&bytes)?;
                Ok(Self(payload))
            }
            PayloadKind::Other => Ok(Self(T::default())),
        }
    }
}

/// Query string extractor whose rejections go through the boundary
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Converts a caught handler panic into the 500 envelope
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Panic(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_without_message() {
        let err = ApiError::from(ValidationError {
            message: "name and email are required".to_string(),
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ErrorBody {
                error: "name and email are required".to_string(),
                message: None,
            }
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("User not found.".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().error, "User not found.");
    }

    #[test]
    fn test_transform_failure_echoes_message() {
        let err = ApiError::from(TransformError::Template("Parse error".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, SERVER_ERROR);
        assert_eq!(err.body().message.as_deref(), Some("Parse error"));
    }

    #[test]
    fn test_upstream_failure_has_its_own_error_text() {
        let err = ApiError::Upstream("connection refused".to_string());

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, EXTERNAL_ERROR);
        assert_eq!(err.body().message.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_duplicate_id_is_a_server_error() {
        let err = ApiError::from(StoreError::DuplicateId("x".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_payload_kind_from_content_type() {
        let kind = |value: Option<&str>| {
            let mut headers = HeaderMap::new();
            if let Some(value) = value {
                headers.insert(CONTENT_TYPE, value.parse().unwrap());
            }
            payload_kind(&headers)
        };

        assert_eq!(kind(Some("application/json")), PayloadKind::Json);
        assert_eq!(kind(Some("Application/JSON; charset=utf-8")), PayloadKind::Json);
        assert_eq!(kind(Some("application/merge-patch+json")), PayloadKind::Json);
        assert_eq!(
            kind(Some("application/x-www-form-urlencoded")),
            PayloadKind::Form
        );
        assert_eq!(kind(Some("text/plain")), PayloadKind::Other);
        assert_eq!(kind(None), PayloadKind::Other);
    }

    #[test]
    fn test_handle_panic_with_str_payload() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_with_string_payload() {
        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
