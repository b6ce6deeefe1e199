//! Database row shapes and their conversion into domain records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{
    Artist, ArtistId, ArtistShow, Show, ShowId, ShowListing, Venue, VenueId, VenueShow,
};

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct VenueRow {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Self {
            id: VenueId::new(row.id),
            name: row.name,
            genres: row.genres,
            address: row.address,
            city: row.city,
            state: row.state,
            phone: row.phone,
            website: row.website,
            facebook_link: row.facebook_link,
            image_link: row.image_link,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct ArtistRow {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: ArtistId::new(row.id),
            name: row.name,
            genres: row.genres,
            city: row.city,
            state: row.state,
            phone: row.phone,
            website: row.website,
            facebook_link: row.facebook_link,
            image_link: row.image_link,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        }
    }
}

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct ShowRow {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

impl From<ShowRow> for Show {
    fn from(row: ShowRow) -> Self {
        Self {
            id: ShowId::new(row.id),
            venue_id: VenueId::new(row.venue_id),
            artist_id: ArtistId::new(row.artist_id),
            start_time: row.start_time,
        }
    }
}

/// `shows JOIN artists`, as listed on a venue page.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct VenueShowRow {
    pub show_id: i64,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: DateTime<Utc>,
}

impl From<VenueShowRow> for VenueShow {
    fn from(row: VenueShowRow) -> Self {
        Self {
            show_id: ShowId::new(row.show_id),
            artist_id: ArtistId::new(row.artist_id),
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}

/// `shows JOIN venues`, as listed on an artist page.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct ArtistShowRow {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: DateTime<Utc>,
}

impl From<ArtistShowRow> for ArtistShow {
    fn from(row: ArtistShowRow) -> Self {
        Self {
            show_id: ShowId::new(row.show_id),
            venue_id: VenueId::new(row.venue_id),
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: row.start_time,
        }
    }
}

/// `shows JOIN venues JOIN artists`, for the flat show listing.
#[derive(Debug, Clone, FromRow)]
#[allow(missing_docs)]
pub struct ShowListingRow {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListingRow> for ShowListing {
    fn from(row: ShowListingRow) -> Self {
        Self {
            show_id: ShowId::new(row.show_id),
            venue_id: VenueId::new(row.venue_id),
            venue_name: row.venue_name,
            artist_id: ArtistId::new(row.artist_id),
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}
