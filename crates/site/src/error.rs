//! Unified error handling with Sentry integration.
//!
//! Handlers return `Result<T, AppError>`. Server errors are captured to
//! Sentry before responding. The response carries an [`ErrorPage`] marker
//! that `error_page_middleware` turns into the full HTML error page, with
//! the request ID and a retry link back to the same URL.

use std::any::Any;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::filters;
use crate::layout::PageContext;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the visitor sees. Internal details are never exposed.
    #[must_use]
    pub fn page(&self) -> ErrorPage {
        match self {
            Self::NotFound(_) => ErrorPage::not_found(),
            Self::BadRequest(msg) => ErrorPage {
                status: StatusCode::BAD_REQUEST,
                title: "Bad request",
                message: msg.clone(),
            },
            Self::Internal(_) => ErrorPage::internal(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        self.page().into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error details attached to a response for the error page middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
}

impl ErrorPage {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            title: "Page not found",
            message: "The page you are looking for doesn't exist or has moved.".to_string(),
        }
    }

    #[must_use]
    pub fn rate_limited() -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            title: "Too many requests",
            message: "You've sent several forms in a short time. Please wait a minute and try again."
                .to_string(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Something went wrong",
            message: "We hit an unexpected problem loading this page. Please try again, or call us if it keeps happening."
                .to_string(),
        }
    }

    /// Whether trying the same URL again might work.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.status.is_server_error() || self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

impl IntoResponse for ErrorPage {
    /// Plain-text body; replaced by the HTML page when the middleware runs.
    fn into_response(self) -> Response {
        let mut response = (self.status, self.message.clone()).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// The HTML error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub page: PageContext,
    pub error: ErrorPage,
    /// Same URL as the failed request.
    pub retry_href: String,
    pub request_id: String,
}

/// `CatchPanicLayer` handler: report the panic and render the 500 page.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    let event_id = sentry::capture_message(
        &format!("Handler panicked: {detail}"),
        sentry::Level::Fatal,
    );
    tracing::error!(panic = detail, sentry_event_id = %event_id, "Handler panicked");

    ErrorPage::internal().into_response()
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("form", "Appointment requested", Some(&[("service", "oil-change")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("service-123".to_string());
        assert_eq!(err.to_string(), "Not found: service-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_carries_error_page() {
        let response = AppError::Internal("db exploded".to_string()).into_response();
        let page = response.extensions().get::<ErrorPage>();
        assert_eq!(page, Some(&ErrorPage::internal()));
    }

    #[test]
    fn test_internal_details_hidden() {
        let page = AppError::Internal("secret stack trace".to_string()).page();
        assert!(!page.message.contains("secret"));
        assert_eq!(page.title, "Something went wrong");
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorPage::internal().is_retryable());
        assert!(ErrorPage::rate_limited().is_retryable());
        assert!(!ErrorPage::not_found().is_retryable());
    }

    #[test]
    fn test_panic_response_is_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<ErrorPage>().is_some());
    }
}
