//! Error handling.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;
use tracing::{event, Level};

use crate::store::Collection;

/// Sales analytics server error type
///
/// This type encapsulates the various errors that may occur.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// An analytic that models absence as an error found no input rows
    #[error("no {collection} data found")]
    CollectionEmpty { collection: Collection },

    /// Error deserialising the request body
    #[error("request data is not valid")]
    RequestDataJsonRejection(#[from] JsonRejection),

    /// Error validating request data (single error)
    #[error("request data is not valid")]
    RequestDataValidationSingle(#[from] validator::ValidationError),

    /// Error validating request data (multiple errors)
    #[error("request data is not valid")]
    RequestDataValidation(#[from] validator::ValidationErrors),

    /// Error reading from or writing to the record store
    #[error("error accessing the record store")]
    Store(#[from] sled::Error),

    /// A document failed to encode or decode
    #[error("failed to encode or decode a stored document")]
    Document(#[from] serde_json::Error),
}

impl IntoResponse for AnalyticsError {
    /// Convert from an `AnalyticsError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// A response to send in error cases
///
/// Implements serde (de)serialise.
#[derive(Deserialize, Serialize)]
struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    code: StatusCode,

    /// Always the literal `fail`
    status: String,

    /// Main error message
    message: String,

    /// Optional list of causes
    #[serde(skip_serializing_if = "Option::is_none")]
    caused_by: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `code`: HTTP status of the response
    /// * `error`: The error that occurred. Its source chain is flattened into
    ///   the `caused_by` list.
    fn new<E>(code: StatusCode, error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        let message = error.to_string();
        let mut caused_by = None;
        let mut current = error.source();
        while let Some(source) = current {
            let mut causes: Vec<String> = caused_by.unwrap_or_default();
            causes.push(source.to_string());
            caused_by = Some(causes);
            current = source.source();
        }
        // Remove duplicate entries.
        if let Some(caused_by) = caused_by.as_mut() {
            caused_by.dedup()
        }
        ErrorResponse {
            code,
            status: "fail".to_string(),
            message,
            caused_by,
        }
    }

    /// Return a 400 bad request ErrorResponse
    fn bad_request<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Return a 404 not found ErrorResponse
    fn not_found<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    /// Return a 500 internal server error ErrorResponse
    fn internal_server_error<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl From<AnalyticsError> for ErrorResponse {
    /// Convert from an `AnalyticsError` into an `ErrorResponse`.
    fn from(error: AnalyticsError) -> Self {
        let response = match &error {
            // Bad request
            AnalyticsError::RequestDataJsonRejection(_)
            | AnalyticsError::RequestDataValidationSingle(_)
            | AnalyticsError::RequestDataValidation(_) => Self::bad_request(&error),

            // Not found
            AnalyticsError::CollectionEmpty { collection: _ } => Self::not_found(&error),

            // Internal server error
            AnalyticsError::Store(_) | AnalyticsError::Document(_) => {
                Self::internal_server_error(&error)
            }
        };

        // Log server errors.
        if response.code.is_server_error() {
            event!(Level::ERROR, "{}", error.to_string());
            let mut current = error.source();
            while let Some(source) = current {
                event!(Level::ERROR, "Caused by: {}", source.to_string());
                current = source.source();
            }
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string_pretty(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.code,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hyper::HeaderMap;

    // Jump through the hoops to get the body as a string.
    async fn body_string(response: Response) -> String {
        String::from_utf8(
            hyper::body::to_bytes(response.into_body())
                .await
                .unwrap()
                .to_vec(),
        )
        .unwrap()
    }

    async fn test_analytics_error(
        error: AnalyticsError,
        code: StatusCode,
        message: &str,
        caused_by: Option<Vec<String>>,
    ) {
        let response = error.into_response();
        assert_eq!(code, response.status());
        let mut headers = HeaderMap::new();
        headers.insert(&header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert_eq!(headers, *response.headers());
        let error_response: ErrorResponse =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!("fail", error_response.status);
        assert_eq!(message.to_string(), error_response.message);
        assert_eq!(caused_by, error_response.caused_by);
    }

    #[tokio::test]
    async fn collection_empty_sales() {
        let error = AnalyticsError::CollectionEmpty {
            collection: Collection::Sales,
        };
        let message = "no sales data found";
        test_analytics_error(error, StatusCode::NOT_FOUND, message, None).await;
    }

    #[tokio::test]
    async fn collection_empty_department_salary() {
        let error = AnalyticsError::CollectionEmpty {
            collection: Collection::DepartmentSalary,
        };
        let message = "no department_salary data found";
        test_analytics_error(error, StatusCode::NOT_FOUND, message, None).await;
    }

    #[tokio::test]
    async fn request_data_validation_single() {
        let validation_error = validator::ValidationError::new("foo");
        let error = AnalyticsError::RequestDataValidationSingle(validation_error);
        let message = "request data is not valid";
        let caused_by = Some(vec!["Validation error: foo [{}]".to_string()]);
        test_analytics_error(error, StatusCode::BAD_REQUEST, message, caused_by).await;
    }

    #[tokio::test]
    async fn request_data_validation() {
        let mut validation_errors = validator::ValidationErrors::new();
        let validation_error = validator::ValidationError::new("foo");
        validation_errors.add("bar", validation_error);
        let error = AnalyticsError::RequestDataValidation(validation_errors);
        let message = "request data is not valid";
        let caused_by = Some(vec!["bar: Validation error: foo [{}]".to_string()]);
        test_analytics_error(error, StatusCode::BAD_REQUEST, message, caused_by).await;
    }

    #[tokio::test]
    async fn store_error() {
        let sled_error = sled::Error::Unsupported("simulated store failure".to_string());
        let caused_by = Some(vec![sled_error.to_string()]);
        let error = AnalyticsError::Store(sled_error);
        let message = "error accessing the record store";
        test_analytics_error(error, StatusCode::INTERNAL_SERVER_ERROR, message, caused_by).await;
    }

    #[tokio::test]
    async fn document_error() {
        let json_error = serde_json::from_str::<crate::models::Sale>("{").unwrap_err();
        let caused_by = Some(vec![json_error.to_string()]);
        let error = AnalyticsError::Document(json_error);
        let message = "failed to encode or decode a stored document";
        test_analytics_error(error, StatusCode::INTERNAL_SERVER_ERROR, message, caused_by).await;
    }
}
