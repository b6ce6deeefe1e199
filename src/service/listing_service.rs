//! Listing service: aggregates store data into page-ready read models.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::listing::group_by_area;
use crate::domain::schedule::upcoming_counts;
use crate::domain::{
    Area, Artist, ArtistChanges, ArtistDetail, ArtistDraft, ArtistId, ArtistSummary,
    SearchResults, Show, ShowDraft, ShowListing, Venue, VenueChanges, VenueDetail, VenueDraft,
    VenueId, VenueSummary,
};
use crate::error::ListingError;
use crate::persistence::ListingStore;

/// Orchestration layer over a [`ListingStore`].
///
/// Every read evaluates past/upcoming against the instant the call starts;
/// nothing time-dependent is cached or stored.
#[derive(Debug, Clone)]
pub struct ListingService {
    store: Arc<dyn ListingStore>,
}

impl ListingService {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    async fn venue_upcoming_counts(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HashMap<VenueId, u64>, ListingError> {
        let shows = self.store.list_shows().await?;
        Ok(upcoming_counts(
            shows.iter().map(|s| (s.venue_id, s.start_time)),
            now,
        ))
    }

    async fn artist_upcoming_counts(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HashMap<ArtistId, u64>, ListingError> {
        let shows = self.store.list_shows().await?;
        Ok(upcoming_counts(
            shows.iter().map(|s| (s.artist_id, s.start_time)),
            now,
        ))
    }

    // ── Venues ──────────────────────────────────────────────────────────

    /// Venues grouped by (city, state) with upcoming-show counts.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] on store failure.
    pub async fn venue_areas(&self) -> Result<Vec<Area>, ListingError> {
        let now = Utc::now();
        let venues = self.store.list_venues().await?;
        let counts = self.venue_upcoming_counts(now).await?;
        Ok(group_by_area(&venues, &counts))
    }

    /// Venues whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] on store failure.
    pub async fn search_venues(
        &self,
        term: &str,
    ) -> Result<SearchResults<VenueSummary>, ListingError> {
        let now = Utc::now();
        let venues = self.store.search_venues(term).await?;
        let counts = self.venue_upcoming_counts(now).await?;
        Ok(SearchResults::new(
            venues
                .iter()
                .map(|v| VenueSummary::from_venue(v, &counts))
                .collect(),
        ))
    }

    /// The venue page: fields plus past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::VenueNotFound`] for an unknown id.
    pub async fn venue_detail(&self, id: VenueId) -> Result<VenueDetail, ListingError> {
        let now = Utc::now();
        let venue = self.store.get_venue(id).await?;
        let shows = self.store.shows_for_venue(id).await?;
        Ok(VenueDetail::new(venue, shows, now))
    }

    /// One venue, as pre-filled into the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::VenueNotFound`] for an unknown id.
    pub async fn venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        self.store.get_venue(id).await
    }

    /// Persists a new venue.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] if the insert is rolled back.
    pub async fn create_venue(&self, draft: VenueDraft) -> Result<Venue, ListingError> {
        let venue = self.store.insert_venue(draft).await?;
        tracing::info!(venue_id = %venue.id, name = %venue.name, "venue created");
        Ok(venue)
    }

    /// Overwrites the fields present in `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::VenueNotFound`] for an unknown id, or
    /// [`ListingError::Persistence`] if the update is rolled back.
    pub async fn update_venue(
        &self,
        id: VenueId,
        changes: &VenueChanges,
    ) -> Result<Venue, ListingError> {
        let venue = self.store.update_venue(id, changes).await?;
        tracing::info!(venue_id = %id, "venue updated");
        Ok(venue)
    }

    /// Deletes a venue and, by cascade, its shows.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::VenueNotFound`] for an unknown id, or
    /// [`ListingError::Persistence`] if the delete is rolled back.
    pub async fn delete_venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        let venue = self.store.delete_venue(id).await?;
        tracing::info!(venue_id = %id, "venue deleted");
        Ok(venue)
    }

    // ── Artists ─────────────────────────────────────────────────────────

    /// Every artist with upcoming-show counts, by id.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] on store failure.
    pub async fn artists(&self) -> Result<Vec<ArtistSummary>, ListingError> {
        let now = Utc::now();
        let artists = self.store.list_artists().await?;
        let counts = self.artist_upcoming_counts(now).await?;
        Ok(artists
            .iter()
            .map(|a| ArtistSummary::from_artist(a, &counts))
            .collect())
    }

    /// Artists whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] on store failure.
    pub async fn search_artists(
        &self,
        term: &str,
    ) -> Result<SearchResults<ArtistSummary>, ListingError> {
        let now = Utc::now();
        let artists = self.store.search_artists(term).await?;
        let counts = self.artist_upcoming_counts(now).await?;
        Ok(SearchResults::new(
            artists
                .iter()
                .map(|a| ArtistSummary::from_artist(a, &counts))
                .collect(),
        ))
    }

    /// The artist page: fields plus past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::ArtistNotFound`] for an unknown id.
    pub async fn artist_detail(&self, id: ArtistId) -> Result<ArtistDetail, ListingError> {
        let now = Utc::now();
        let artist = self.store.get_artist(id).await?;
        let shows = self.store.shows_for_artist(id).await?;
        Ok(ArtistDetail::new(artist, shows, now))
    }

    /// One artist, as pre-filled into the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::ArtistNotFound`] for an unknown id.
    pub async fn artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        self.store.get_artist(id).await
    }

    /// Persists a new artist.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] if the insert is rolled back.
    pub async fn create_artist(&self, draft: ArtistDraft) -> Result<Artist, ListingError> {
        let artist = self.store.insert_artist(draft).await?;
        tracing::info!(artist_id = %artist.id, name = %artist.name, "artist created");
        Ok(artist)
    }

    /// Overwrites the fields present in `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::ArtistNotFound`] for an unknown id, or
    /// [`ListingError::Persistence`] if the update is rolled back.
    pub async fn update_artist(
        &self,
        id: ArtistId,
        changes: &ArtistChanges,
    ) -> Result<Artist, ListingError> {
        let artist = self.store.update_artist(id, changes).await?;
        tracing::info!(artist_id = %id, "artist updated");
        Ok(artist)
    }

    /// Deletes an artist and, by cascade, their shows.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::ArtistNotFound`] for an unknown id, or
    /// [`ListingError::Persistence`] if the delete is rolled back.
    pub async fn delete_artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        let artist = self.store.delete_artist(id).await?;
        tracing::info!(artist_id = %id, "artist deleted");
        Ok(artist)
    }

    // ── Shows ───────────────────────────────────────────────────────────

    /// Every show, both sides resolved, by start time.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] on store failure.
    pub async fn shows(&self) -> Result<Vec<ShowListing>, ListingError> {
        self.store.list_shows().await
    }

    /// Persists a new show.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] if either referenced record is
    /// missing or the insert is rolled back.
    pub async fn create_show(&self, draft: ShowDraft) -> Result<Show, ListingError> {
        let show = self.store.insert_show(draft).await?;
        tracing::info!(
            show_id = %show.id,
            venue_id = %show.venue_id,
            artist_id = %show.artist_id,
            "show created"
        );
        Ok(show)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::persistence::InMemoryStore;

    fn make_service() -> ListingService {
        ListingService::new(Arc::new(InMemoryStore::new()))
    }

    fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
        VenueDraft {
            name: name.into(),
            genres: vec!["Jazz".into(), "Reggae".into(), "Swing".into()],
            address: "1015 Folsom Street".into(),
            city: city.into(),
            state: state.into(),
            phone: "123-123-1234".into(),
            website: "https://www.themusicalhop.com".into(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".into(),
            image_link: "https://example.com/hop.jpg".into(),
            seeking_talent: true,
            seeking_description: Some("We are on the lookout for a local artist".into()),
        }
    }

    fn artist_draft(name: &str) -> ArtistDraft {
        ArtistDraft {
            name: name.into(),
            genres: vec!["Rock n Roll".into()],
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            website: "https://www.gunsnpetalsband.com".into(),
            facebook_link: "https://www.facebook.com/GunsNPetals".into(),
            image_link: "https://example.com/gnp.jpg".into(),
            seeking_venue: true,
            seeking_description: Some("Looking for shows in the Bay Area".into()),
        }
    }

    async fn seed_show(service: &ListingService, venue: VenueId, artist: ArtistId, days: i64) {
        let draft = ShowDraft {
            venue_id: venue,
            artist_id: artist,
            start_time: Utc::now() + Duration::days(days),
        };
        if let Err(e) = service.create_show(draft).await {
            panic!("show creation failed: {e}");
        }
    }

    #[tokio::test]
    async fn created_venue_detail_echoes_fields_with_no_shows() {
        let service = make_service();
        let draft = venue_draft("The Musical Hop", "San Francisco", "CA");
        let Ok(venue) = service.create_venue(draft.clone()).await else {
            panic!("venue creation failed");
        };

        let Ok(detail) = service.venue_detail(venue.id).await else {
            panic!("detail failed");
        };
        assert_eq!(detail.venue.name, draft.name);
        assert_eq!(detail.venue.genres, draft.genres);
        assert_eq!(detail.venue.address, draft.address);
        assert_eq!(detail.venue.city, draft.city);
        assert_eq!(detail.venue.state, draft.state);
        assert_eq!(detail.venue.phone, draft.phone);
        assert_eq!(detail.venue.website, draft.website);
        assert_eq!(detail.venue.facebook_link, draft.facebook_link);
        assert_eq!(detail.venue.image_link, draft.image_link);
        assert_eq!(detail.venue.seeking_talent, draft.seeking_talent);
        assert_eq!(detail.venue.seeking_description, draft.seeking_description);
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);
    }

    #[tokio::test]
    async fn venue_search_matches_examples() {
        let service = make_service();
        let _ = service
            .create_venue(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await;
        let _ = service
            .create_venue(venue_draft(
                "Park Square Live Music & Coffee",
                "San Francisco",
                "CA",
            ))
            .await;

        let Ok(hop) = service.search_venues("Hop").await else {
            panic!("search failed");
        };
        assert_eq!(hop.count, 1);
        assert_eq!(
            hop.data.first().map(|v| v.name.as_str()),
            Some("The Musical Hop")
        );

        let Ok(music) = service.search_venues("Music").await else {
            panic!("search failed");
        };
        assert_eq!(music.count, 2);

        let Ok(all) = service.search_venues("").await else {
            panic!("search failed");
        };
        assert_eq!(all.count, 2);
    }

    #[tokio::test]
    async fn details_split_past_and_upcoming() {
        let service = make_service();
        let (Ok(venue), Ok(artist)) = (
            service
                .create_venue(venue_draft("The Musical Hop", "San Francisco", "CA"))
                .await,
            service.create_artist(artist_draft("Guns N Petals")).await,
        ) else {
            panic!("seed failed");
        };
        seed_show(&service, venue.id, artist.id, -30).await;
        seed_show(&service, venue.id, artist.id, 10).await;
        seed_show(&service, venue.id, artist.id, 20).await;

        let Ok(venue_page) = service.venue_detail(venue.id).await else {
            panic!("detail failed");
        };
        assert_eq!(venue_page.past_shows_count, 1);
        assert_eq!(venue_page.upcoming_shows_count, 2);
        assert_eq!(
            venue_page.past_shows.first().map(|s| s.artist_name.as_str()),
            Some("Guns N Petals")
        );

        let Ok(artist_page) = service.artist_detail(artist.id).await else {
            panic!("detail failed");
        };
        assert_eq!(artist_page.past_shows_count, 1);
        assert_eq!(artist_page.upcoming_shows_count, 2);
        assert_eq!(
            artist_page
                .upcoming_shows
                .first()
                .map(|s| s.venue_image_link.as_str()),
            Some("https://example.com/hop.jpg")
        );
    }

    #[tokio::test]
    async fn areas_count_only_upcoming_shows() {
        let service = make_service();
        let (Ok(hop), Ok(pianos), Ok(artist)) = (
            service
                .create_venue(venue_draft("The Musical Hop", "San Francisco", "CA"))
                .await,
            service
                .create_venue(venue_draft("The Dueling Pianos Bar", "New York", "NY"))
                .await,
            service.create_artist(artist_draft("The Wild Sax Band")).await,
        ) else {
            panic!("seed failed");
        };
        seed_show(&service, hop.id, artist.id, 3).await;
        seed_show(&service, hop.id, artist.id, -3).await;
        seed_show(&service, pianos.id, artist.id, -3).await;

        let Ok(areas) = service.venue_areas().await else {
            panic!("listing failed");
        };
        let summary: Vec<(&str, u64)> = areas
            .iter()
            .flat_map(|a| a.venues.iter())
            .map(|v| (v.name.as_str(), v.num_upcoming_shows))
            .collect();
        assert_eq!(
            summary,
            vec![("The Dueling Pianos Bar", 0), ("The Musical Hop", 1)]
        );

        let Ok(artists) = service.search_artists("sax").await else {
            panic!("search failed");
        };
        assert_eq!(artists.data.first().map(|a| a.num_upcoming_shows), Some(1));
    }

    #[tokio::test]
    async fn edit_keeps_fields_missing_from_payload() {
        let service = make_service();
        let Ok(artist) = service.create_artist(artist_draft("Matt Quevedo")).await else {
            panic!("artist creation failed");
        };
        let changes = ArtistChanges {
            city: Some("New York".into()),
            state: Some("NY".into()),
            ..ArtistChanges::default()
        };
        let Ok(updated) = service.update_artist(artist.id, &changes).await else {
            panic!("update failed");
        };
        assert_eq!(updated.city, "New York");
        assert_eq!(updated.state, "NY");
        assert_eq!(updated.name, artist.name);
        assert_eq!(updated.phone, artist.phone);
        assert_eq!(updated.seeking_description, artist.seeking_description);
    }

    #[tokio::test]
    async fn deleted_venue_detail_is_not_found() {
        let service = make_service();
        let Ok(venue) = service
            .create_venue(venue_draft("The Musical Hop", "San Francisco", "CA"))
            .await
        else {
            panic!("venue creation failed");
        };
        assert!(service.delete_venue(venue.id).await.is_ok());
        assert!(matches!(
            service.venue_detail(venue.id).await,
            Err(ListingError::VenueNotFound(_))
        ));
    }

    #[tokio::test]
    async fn dangling_show_leaves_listing_unchanged() {
        let service = make_service();
        let Ok(artist) = service.create_artist(artist_draft("Guns N Petals")).await else {
            panic!("artist creation failed");
        };
        let result = service
            .create_show(ShowDraft {
                venue_id: VenueId::new(404),
                artist_id: artist.id,
                start_time: Utc::now(),
            })
            .await;
        assert!(matches!(result, Err(ListingError::Persistence(_))));

        let Ok(shows) = service.shows().await else {
            panic!("listing failed");
        };
        assert!(shows.is_empty());
    }
}
