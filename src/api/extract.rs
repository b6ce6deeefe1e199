//! Custom Axum extractors that reject with the site's own error pages.

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ListingError;

/// Numeric `{id}` path segment. Anything else is a 404, the same as an id
/// that matches no record.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ListingError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ListingError::PageNotFound)?;
        raw.parse()
            .map(Self)
            .map_err(|_| ListingError::PageNotFound)
    }
}

/// URL-encoded form body; a malformed body renders the 400 page.
#[derive(Debug, Clone)]
pub struct ValidForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ListingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ListingError::InvalidForm(e.body_text()))?;
        Ok(Self(value))
    }
}
