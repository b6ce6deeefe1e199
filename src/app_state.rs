//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::ListingStore;
use crate::service::ListingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing service for all reads and writes.
    pub listing_service: Arc<ListingService>,
}

impl AppState {
    /// Wires a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(store)),
        }
    }
}
