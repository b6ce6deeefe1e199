//! Listing error types with HTTP status and error-page mapping.
//!
//! [`ListingError`] is the central error type. Each variant maps to an HTTP
//! status code and to the dedicated error template rendered for it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{ArtistId, VenueId};
use crate::view::Page;

/// Context handed to the error templates.
#[derive(Debug, Serialize)]
pub struct ErrorContext {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant                         | HTTP Status | Template          |
/// |---------------------------------|-------------|-------------------|
/// | `VenueNotFound` / `ArtistNotFound` / `PageNotFound` | 404 | `errors/404.html` |
/// | `InvalidForm`                   | 400         | `errors/400.html` |
/// | `Persistence` / `Internal`      | 500         | `errors/500.html` |
///
/// Write handlers catch `Persistence` themselves and turn it into a user
/// notification; it only reaches [`IntoResponse`] from read paths.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// No venue with the given id.
    #[error("venue not found: {0}")]
    VenueNotFound(VenueId),

    /// No artist with the given id.
    #[error("artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// No route matched, or the path id was not a number.
    #[error("page not found")]
    PageNotFound,

    /// A submitted form failed field validation.
    #[error("invalid form: {0}")]
    InvalidForm(String),

    /// The store rejected or failed the operation.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ListingError {
    /// Returns `true` for the not-found family.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) | Self::PageNotFound
        )
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidForm(_) => 1001,
            Self::VenueNotFound(_) => 2001,
            Self::ArtistNotFound(_) => 2002,
            Self::PageNotFound => 2000,
            Self::Persistence(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) | Self::PageNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error template rendered for this variant.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) | Self::PageNotFound => {
                "errors/404.html"
            }
            Self::InvalidForm(_) => "errors/400.html",
            Self::Persistence(_) | Self::Internal(_) => "errors/500.html",
        }
    }
}

impl From<sqlx::Error> for ListingError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        // Server-side detail stays in the log.
        let message = if status.is_server_error() {
            "an internal error occurred".to_string()
        } else {
            self.to_string()
        };
        let context = ErrorContext {
            code: self.error_code(),
            message,
        };
        Page::new(self.template())
            .with_status(status)
            .with_context(&context)
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404_page() {
        for err in [
            ListingError::VenueNotFound(VenueId::new(1)),
            ListingError::ArtistNotFound(ArtistId::new(1)),
            ListingError::PageNotFound,
        ] {
            assert!(err.is_not_found());
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
            assert_eq!(err.template(), "errors/404.html");
        }
    }

    #[test]
    fn persistence_maps_to_500_page() {
        let err = ListingError::Persistence("connection reset".into());
        assert!(!err.is_not_found());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.template(), "errors/500.html");
    }

    #[test]
    fn invalid_form_is_bad_request() {
        let err = ListingError::InvalidForm("name is required".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ListingError::PageNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
