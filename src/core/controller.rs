use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog_service,
        }
    }
}

// ServerError is the JSON error envelope returned by every handler
#[derive(Debug)]
pub(crate) struct ServerError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
    pub(crate) errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        ServerError {
            status,
            message: message.to_string(),
            errors: vec![],
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), message = %self.message, "request failed");
        } else {
            tracing::info!(status = self.status.as_u16(), message = %self.message, "request rejected");
        }
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                status: self.status.as_u16(),
                message: self.message,
                errors: self.errors,
            },
        };
        (self.status, Json(envelope)).into_response()
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { message, reason_code } => {
                tracing::error!(reason_code = ?reason_code, "database failure");
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
            CommandError::DuplicateKey { message } => {
                ServerError::new(StatusCode::CONFLICT, message.as_str())
            }
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Serialization { message } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            CommandError::Validation { message, violations } => {
                ServerError {
                    status: StatusCode::BAD_REQUEST,
                    message,
                    errors: violations,
                }
            }
        }
    }
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        ServerError::from(CommandError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let cases = vec![
            (LibraryError::database("test", None), StatusCode::INTERNAL_SERVER_ERROR),
            (LibraryError::duplicate_key("test"), StatusCode::CONFLICT),
            (LibraryError::not_found("test"), StatusCode::NOT_FOUND),
            (LibraryError::validation("test", vec![]), StatusCode::BAD_REQUEST),
            (LibraryError::serialization("test"), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(status, ServerError::from(CommandError::from(err)).status);
        }
    }

    #[tokio::test]
    async fn test_should_render_error_envelope() {
        let err = ServerError::from(LibraryError::validation(
            "invalid book", vec!["\"title\" is a required property".to_string()]));
        let res = err.into_response();
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let body: Value = serde_json::from_slice(&bytes).expect("should parse body");
        assert_eq!(400, body["error"]["status"]);
        assert_eq!("invalid book", body["error"]["message"]);
        assert_eq!(1, body["error"]["errors"].as_array().expect("errors").len());
    }

    #[tokio::test]
    async fn test_should_omit_empty_errors() {
        let res = ServerError::from(LibraryError::not_found("missing")).into_response();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let body: Value = serde_json::from_slice(&bytes).expect("should parse body");
        assert_eq!(404, body["error"]["status"]);
        assert!(body["error"].get("errors").is_none());
    }
}
