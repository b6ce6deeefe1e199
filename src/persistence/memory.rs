//! In-memory [`ListingStore`] used by tests and by
//! `PERSISTENCE_ENABLED=false`.
//!
//! All tables sit behind a single [`tokio::sync::RwLock`]. A write takes
//! the lock, checks every precondition, and only then mutates, so a
//! rejected write leaves every table exactly as it was.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ListingStore;
use crate::domain::schedule::sort_chronologically;
use crate::domain::search::name_matches;
use crate::domain::{
    Artist, ArtistChanges, ArtistDraft, ArtistId, ArtistShow, Show, ShowDraft, ShowId,
    ShowListing, Venue, VenueChanges, VenueDraft, VenueId, VenueShow,
};
use crate::error::ListingError;

#[derive(Debug, Default)]
struct Tables {
    venues: BTreeMap<VenueId, Venue>,
    artists: BTreeMap<ArtistId, Artist>,
    shows: BTreeMap<ShowId, Show>,
    last_venue_id: i64,
    last_artist_id: i64,
    last_show_id: i64,
}

/// Volatile store keyed by id; ids start at 1 per table like `BIGSERIAL`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: &mut i64) -> Result<i64, ListingError> {
    *last = last
        .checked_add(1)
        .ok_or_else(|| ListingError::Persistence("id sequence exhausted".to_string()))?;
    Ok(*last)
}

#[async_trait]
impl ListingStore for InMemoryStore {
    async fn list_venues(&self) -> Result<Vec<Venue>, ListingError> {
        Ok(self.tables.read().await.venues.values().cloned().collect())
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, ListingError> {
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .values()
            .filter(|v| name_matches(term, &v.name))
            .cloned()
            .collect())
    }

    async fn get_venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        let tables = self.tables.read().await;
        tables
            .venues
            .get(&id)
            .cloned()
            .ok_or(ListingError::VenueNotFound(id))
    }

    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, ListingError> {
        let mut tables = self.tables.write().await;
        let id = VenueId::new(next_id(&mut tables.last_venue_id)?);
        let venue = draft.into_venue(id);
        tables.venues.insert(id, venue.clone());
        Ok(venue)
    }

    async fn update_venue(
        &self,
        id: VenueId,
        changes: &VenueChanges,
    ) -> Result<Venue, ListingError> {
        let mut tables = self.tables.write().await;
        let venue = tables
            .venues
            .get_mut(&id)
            .ok_or(ListingError::VenueNotFound(id))?;
        venue.apply(changes);
        Ok(venue.clone())
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        let mut tables = self.tables.write().await;
        let venue = tables
            .venues
            .remove(&id)
            .ok_or(ListingError::VenueNotFound(id))?;
        tables.shows.retain(|_, show| show.venue_id != id);
        Ok(venue)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, ListingError> {
        Ok(self.tables.read().await.artists.values().cloned().collect())
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, ListingError> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .filter(|a| name_matches(term, &a.name))
            .cloned()
            .collect())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        let tables = self.tables.read().await;
        tables
            .artists
            .get(&id)
            .cloned()
            .ok_or(ListingError::ArtistNotFound(id))
    }

    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, ListingError> {
        let mut tables = self.tables.write().await;
        let id = ArtistId::new(next_id(&mut tables.last_artist_id)?);
        let artist = draft.into_artist(id);
        tables.artists.insert(id, artist.clone());
        Ok(artist)
    }

    async fn update_artist(
        &self,
        id: ArtistId,
        changes: &ArtistChanges,
    ) -> Result<Artist, ListingError> {
        let mut tables = self.tables.write().await;
        let artist = tables
            .artists
            .get_mut(&id)
            .ok_or(ListingError::ArtistNotFound(id))?;
        artist.apply(changes);
        Ok(artist.clone())
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        let mut tables = self.tables.write().await;
        let artist = tables
            .artists
            .remove(&id)
            .ok_or(ListingError::ArtistNotFound(id))?;
        tables.shows.retain(|_, show| show.artist_id != id);
        Ok(artist)
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError> {
        let tables = self.tables.read().await;
        let mut listings: Vec<ShowListing> = tables
            .shows
            .values()
            .filter_map(|show| {
                let venue = tables.venues.get(&show.venue_id)?;
                let artist = tables.artists.get(&show.artist_id)?;
                Some(ShowListing {
                    show_id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        sort_chronologically(&mut listings);
        Ok(listings)
    }

    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<VenueShow>, ListingError> {
        let tables = self.tables.read().await;
        let mut shows: Vec<VenueShow> = tables
            .shows
            .values()
            .filter(|show| show.venue_id == id)
            .filter_map(|show| {
                let artist = tables.artists.get(&show.artist_id)?;
                Some(VenueShow {
                    show_id: show.id,
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        sort_chronologically(&mut shows);
        Ok(shows)
    }

    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<ArtistShow>, ListingError> {
        let tables = self.tables.read().await;
        let mut shows: Vec<ArtistShow> = tables
            .shows
            .values()
            .filter(|show| show.artist_id == id)
            .filter_map(|show| {
                let venue = tables.venues.get(&show.venue_id)?;
                Some(ArtistShow {
                    show_id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    venue_image_link: venue.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        sort_chronologically(&mut shows);
        Ok(shows)
    }

    async fn insert_show(&self, draft: ShowDraft) -> Result<Show, ListingError> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&draft.venue_id) {
            return Err(ListingError::Persistence(format!(
                "shows.venue_id {} references no venue",
                draft.venue_id
            )));
        }
        if !tables.artists.contains_key(&draft.artist_id) {
            return Err(ListingError::Persistence(format!(
                "shows.artist_id {} references no artist",
                draft.artist_id
            )));
        }
        let id = ShowId::new(next_id(&mut tables.last_show_id)?);
        let show = draft.into_show(id);
        tables.shows.insert(id, show.clone());
        Ok(show)
    }
}
