//! Request handlers organized by resource.

pub mod artist;
pub mod show;
pub mod system;
pub mod venue;

use axum::Router;

use crate::app_state::AppState;
use crate::error::ListingError;
use crate::view::{Notice, Page};

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(venue::routes())
        .merge(artist::routes())
        .merge(show::routes())
}

/// Landing page that create submissions render after committing or
/// rolling back.
pub(crate) fn home_page() -> Page {
    Page::new("pages/home.html")
}

/// Turns the outcome of a write into a user notice.
///
/// Not-found errors still propagate (they render the 404 page). Every other
/// failure has already been rolled back by the store; it is logged and
/// reported to the user with the generic `failed` text.
pub(crate) fn settle<T>(
    result: Result<T, ListingError>,
    succeeded: impl FnOnce(&T) -> String,
    failed: impl FnOnce() -> String,
) -> Result<Notice, ListingError> {
    match result {
        Ok(value) => Ok(Notice::success(succeeded(&value))),
        Err(err) if err.is_not_found() => Err(err),
        Err(err) => {
            tracing::error!(error = %err, "write rolled back");
            Ok(Notice::error(failed()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueId;
    use crate::view::NoticeLevel;

    #[test]
    fn settle_reports_success() {
        let notice = settle(Ok(3), |n| format!("{n} listed"), || "failed".into()).ok();
        assert_eq!(
            notice.map(|n| (n.level, n.message)),
            Some((NoticeLevel::Success, "3 listed".to_string()))
        );
    }

    #[test]
    fn settle_swallows_persistence_failures() {
        let result: Result<(), ListingError> = Err(ListingError::Persistence("fk".into()));
        let notice = settle(result, |()| "ok".into(), || "couldn't be listed".into()).ok();
        assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn settle_propagates_not_found() {
        let result: Result<(), ListingError> = Err(ListingError::VenueNotFound(VenueId::new(1)));
        let settled = settle(result, |()| "ok".into(), || "failed".into());
        assert!(matches!(settled, Err(ListingError::VenueNotFound(_))));
    }
}
