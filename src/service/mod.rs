//! Service layer: query orchestration and aggregation.
//!
//! [`ListingService`] combines store reads with the pure functions in
//! [`crate::domain`] and is the only thing handlers talk to.

pub mod listing_service;

pub use listing_service::ListingService;
