//! Shows and the joined read models built from them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ArtistId, ShowId, VenueId};

/// A scheduled event linking one venue and one artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    /// Generated identifier.
    pub id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start instant.
    pub start_time: DateTime<Utc>,
}

/// Validated payload for creating a show. The ids are only checked
/// against existing records by the store, inside the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDraft {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start instant.
    pub start_time: DateTime<Utc>,
}

impl ShowDraft {
    /// Builds the stored record once the store has assigned an id.
    #[must_use]
    pub const fn into_show(self, id: ShowId) -> Show {
        Show {
            id,
            venue_id: self.venue_id,
            artist_id: self.artist_id,
            start_time: self.start_time,
        }
    }
}

/// A show as seen from a venue page: the artist side is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    /// Show identifier (used for ordering only).
    #[serde(skip)]
    pub show_id: ShowId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
}

/// A show as seen from an artist page: the venue side is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    /// Show identifier (used for ordering only).
    #[serde(skip)]
    pub show_id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name.
    pub venue_name: String,
    /// Venue image.
    pub venue_image_link: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
}

/// A row of the flat show listing with both sides resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    /// Show identifier.
    pub show_id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Venue name.
    pub venue_name: String,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist image.
    pub artist_image_link: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
}
