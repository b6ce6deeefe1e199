//! PostgreSQL implementation of the persistence layer.
//!
//! Reads go straight to the pool. Every write opens a transaction, commits
//! it on success, and relies on `Transaction`'s drop to roll back and
//! release the connection on every early return.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::ListingStore;
use super::models::{ArtistRow, ArtistShowRow, ShowListingRow, ShowRow, VenueRow, VenueShowRow};
use crate::config::ListingsConfig;
use crate::domain::{
    Artist, ArtistChanges, ArtistDraft, ArtistId, ArtistShow, Show, ShowDraft, ShowListing,
    Venue, VenueChanges, VenueDraft, VenueId, VenueShow,
};
use crate::error::ListingError;

macro_rules! venue_columns {
    () => {
        "id, name, genres, address, city, state, phone, website, facebook_link, \
         image_link, seeking_talent, seeking_description"
    };
}

macro_rules! artist_columns {
    () => {
        "id, name, genres, city, state, phone, website, facebook_link, image_link, \
         seeking_venue, seeking_description"
    };
}

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] if the database is unreachable.
    pub async fn connect(config: &ListingsConfig) -> Result<Self, ListingError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations in `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), ListingError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ListingError::Persistence(e.to_string()))
    }
}

#[async_trait]
impl ListingStore for PostgresStore {
    async fn list_venues(&self) -> Result<Vec<Venue>, ListingError> {
        let rows = sqlx::query_as::<_, VenueRow>(concat!(
            "SELECT ",
            venue_columns!(),
            " FROM venues ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, ListingError> {
        // strpos keeps `%` and `_` literal, unlike ILIKE.
        let rows = sqlx::query_as::<_, VenueRow>(concat!(
            "SELECT ",
            venue_columns!(),
            " FROM venues WHERE strpos(lower(name), lower($1)) > 0 ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn get_venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        sqlx::query_as::<_, VenueRow>(concat!(
            "SELECT ",
            venue_columns!(),
            " FROM venues WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .map(Venue::from)
        .ok_or(ListingError::VenueNotFound(id))
    }

    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, ListingError> {
        let draft = draft.normalized();
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, VenueRow>(concat!(
            "INSERT INTO venues (name, genres, address, city, state, phone, website, \
             facebook_link, image_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING ",
            venue_columns!()
        ))
        .bind(&draft.name)
        .bind(draft.genres.as_slice())
        .bind(&draft.address)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(&draft.website)
        .bind(&draft.facebook_link)
        .bind(&draft.image_link)
        .bind(draft.seeking_talent)
        .bind(draft.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn update_venue(
        &self,
        id: VenueId,
        changes: &VenueChanges,
    ) -> Result<Venue, ListingError> {
        let mut tx = self.pool.begin().await?;
        let mut venue: Venue = sqlx::query_as::<_, VenueRow>(concat!(
            "SELECT ",
            venue_columns!(),
            " FROM venues WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?
        .map(Venue::from)
        .ok_or(ListingError::VenueNotFound(id))?;

        venue.apply(changes);

        sqlx::query(
            "UPDATE venues SET name = $2, genres = $3, address = $4, city = $5, state = $6, \
             phone = $7, website = $8, facebook_link = $9, image_link = $10, \
             seeking_talent = $11, seeking_description = $12 WHERE id = $1",
        )
        .bind(id.get())
        .bind(&venue.name)
        .bind(venue.genres.as_slice())
        .bind(&venue.address)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.phone)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(&venue.image_link)
        .bind(venue.seeking_talent)
        .bind(venue.seeking_description.as_deref())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(venue)
    }

    async fn delete_venue(&self, id: VenueId) -> Result<Venue, ListingError> {
        let mut tx = self.pool.begin().await?;
        // shows.venue_id is ON DELETE CASCADE.
        let venue = sqlx::query_as::<_, VenueRow>(concat!(
            "DELETE FROM venues WHERE id = $1 RETURNING ",
            venue_columns!()
        ))
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?
        .map(Venue::from)
        .ok_or(ListingError::VenueNotFound(id))?;
        tx.commit().await?;
        Ok(venue)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, ListingError> {
        let rows = sqlx::query_as::<_, ArtistRow>(concat!(
            "SELECT ",
            artist_columns!(),
            " FROM artists ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, ListingError> {
        let rows = sqlx::query_as::<_, ArtistRow>(concat!(
            "SELECT ",
            artist_columns!(),
            " FROM artists WHERE strpos(lower(name), lower($1)) > 0 ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        sqlx::query_as::<_, ArtistRow>(concat!(
            "SELECT ",
            artist_columns!(),
            " FROM artists WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .map(Artist::from)
        .ok_or(ListingError::ArtistNotFound(id))
    }

    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, ListingError> {
        let draft = draft.normalized();
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, ArtistRow>(concat!(
            "INSERT INTO artists (name, genres, city, state, phone, website, facebook_link, \
             image_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING ",
            artist_columns!()
        ))
        .bind(&draft.name)
        .bind(draft.genres.as_slice())
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(&draft.website)
        .bind(&draft.facebook_link)
        .bind(&draft.image_link)
        .bind(draft.seeking_venue)
        .bind(draft.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn update_artist(
        &self,
        id: ArtistId,
        changes: &ArtistChanges,
    ) -> Result<Artist, ListingError> {
        let mut tx = self.pool.begin().await?;
        let mut artist: Artist = sqlx::query_as::<_, ArtistRow>(concat!(
            "SELECT ",
            artist_columns!(),
            " FROM artists WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?
        .map(Artist::from)
        .ok_or(ListingError::ArtistNotFound(id))?;

        artist.apply(changes);

        sqlx::query(
            "UPDATE artists SET name = $2, genres = $3, city = $4, state = $5, phone = $6, \
             website = $7, facebook_link = $8, image_link = $9, seeking_venue = $10, \
             seeking_description = $11 WHERE id = $1",
        )
        .bind(id.get())
        .bind(&artist.name)
        .bind(artist.genres.as_slice())
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(&artist.image_link)
        .bind(artist.seeking_venue)
        .bind(artist.seeking_description.as_deref())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(artist)
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<Artist, ListingError> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, ArtistRow>(concat!(
            "DELETE FROM artists WHERE id = $1 RETURNING ",
            artist_columns!()
        ))
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?
        .map(Artist::from)
        .ok_or(ListingError::ArtistNotFound(id))?;
        tx.commit().await?;
        Ok(artist)
    }

    async fn list_shows(&self) -> Result<Vec<ShowListing>, ListingError> {
        let rows = sqlx::query_as::<_, ShowListingRow>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, s.artist_id, \
             a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    async fn shows_for_venue(&self, id: VenueId) -> Result<Vec<VenueShow>, ListingError> {
        let rows = sqlx::query_as::<_, VenueShowRow>(
            "SELECT s.id AS show_id, s.artist_id, a.name AS artist_name, \
             a.image_link AS artist_image_link, s.start_time \
             FROM shows s JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(VenueShow::from).collect())
    }

    async fn shows_for_artist(&self, id: ArtistId) -> Result<Vec<ArtistShow>, ListingError> {
        let rows = sqlx::query_as::<_, ArtistShowRow>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
             v.image_link AS venue_image_link, s.start_time \
             FROM shows s JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ArtistShow::from).collect())
    }

    async fn insert_show(&self, draft: ShowDraft) -> Result<Show, ListingError> {
        let mut tx = self.pool.begin().await?;
        // A dangling venue_id/artist_id fails the foreign key here and the
        // dropped transaction rolls back.
        let row = sqlx::query_as::<_, ShowRow>(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES ($1, $2, $3) \
             RETURNING id, venue_id, artist_id, start_time",
        )
        .bind(draft.venue_id.get())
        .bind(draft.artist_id.get())
        .bind(draft.start_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row.into())
    }
}
