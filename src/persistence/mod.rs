//! Persistence layer: the [`ListingStore`] seam and its implementations.
//!
//! Handlers never reach a global connection. The service owns an
//! `Arc<dyn ListingStore>` injected at startup, so tests can hand each case
//! its own isolated [`InMemoryStore`] while production runs on
//! [`PostgresStore`].
//!
//! Every write runs as one unit: the Postgres store wraps it in a
//! transaction that is committed on success and rolled back when dropped on
//! any error path; the in-memory store validates everything under its write
//! lock before touching a table.

pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{
    Artist, ArtistChanges, ArtistDraft, ArtistId, ArtistShow, Show, ShowDraft, ShowListing,
    Venue, VenueChanges, VenueDraft, VenueId, VenueShow,
};
use crate::error::ListingError;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

/// Storage operations behind every request handler.
///
/// Lists are returned ordered by id (records) or by start time then id
/// (shows). Single-record writes are atomic.
///
/// # Errors
///
/// Every method returns [`ListingError::Persistence`] when the backend
/// fails or rejects the write (including foreign-key violations).
/// Methods addressing a record by id return
/// [`ListingError::VenueNotFound`] / [`ListingError::ArtistNotFound`] when
/// it does not exist.
#[async_trait]
pub trait ListingStore: Send + Sync + fmt::Debug {
    /// All venues, by id.
    async fn list_venues(&self) -> Result<Vec<Venue>, ListingError>;

    /// Venues whose name contains `term`, case-insensitively, by id.
    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, ListingError>;

    /// One venue.
    async fn get_venue(&self, id: VenueId) -> Result<Venue, ListingError>;

    /// Inserts a venue and returns it with its new id.
    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, ListingError>;

    /// Applies `changes` to an existing venue and returns the result.
    async fn update_venue(&self, id: VenueId, changes: &VenueChanges)
    -> Result<Venue, ListingError>;

    /// Deletes a venue together with its shows; returns the deleted venue.
    async fn delete_venue(&self, id: VenueId) -> Result<Venue, ListingError>;

    /// All artists, by id.
    async fn list_artists(&self) -> Result<Vec<Artist>, ListingError>;

    /// Artists whose name contains `term`, case-insensitively, by id.
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, ListingError>;

    /// One artist.
    async fn get_artist(&self, id: ArtistId) -> Result<Artist, ListingError>;

    /// Inserts an artist and returns it with its new id.
    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, ListingError>;

    /// Applies `changes` to an existing artist and returns the result.
    async fn update_artist(
        &self,
        id: ArtistId,
        changes: &ArtistChanges,
    ) -> Result<Artist, ListingError>;

    /// Deletes an artist together with its shows; returns the deleted artist.
    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, ListingError>;

    /// Every show with both sides resolved.
    async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError>;

    /// Shows hosted by `id`, artist side resolved.
    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<VenueShow>, ListingError>;

    /// Shows played by `id`, venue side resolved.
    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<ArtistShow>, ListingError>;

    /// Inserts a show. Fails with [`ListingError::Persistence`], writing
    /// nothing, if either referenced record is missing.
    async fn insert_show(&self, draft: ShowDraft) -> Result<Show, ListingError>;
}
