//! Detail-page read models: a record plus its shows split around `now`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::schedule::{Partitioned, partition};
use super::{Artist, ArtistShow, Venue, VenueShow};

/// Everything the venue page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    /// The venue's own fields, flattened into the page context.
    #[serde(flatten)]
    pub venue: Venue,
    /// Shows that already started, oldest first.
    pub past_shows: Vec<VenueShow>,
    /// Shows still to come, soonest first.
    pub upcoming_shows: Vec<VenueShow>,
    /// `past_shows.len()`.
    pub past_shows_count: usize,
    /// `upcoming_shows.len()`.
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    /// Buckets `shows` around `now`.
    #[must_use]
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: DateTime<Utc>) -> Self {
        let Partitioned { past, upcoming } = partition(shows, now);
        Self {
            venue,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

/// Everything the artist page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    /// The artist's own fields, flattened into the page context.
    #[serde(flatten)]
    pub artist: Artist,
    /// Shows already played, oldest first.
    pub past_shows: Vec<ArtistShow>,
    /// Booked shows, soonest first.
    pub upcoming_shows: Vec<ArtistShow>,
    /// `past_shows.len()`.
    pub past_shows_count: usize,
    /// `upcoming_shows.len()`.
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    /// Buckets `shows` around `now`.
    #[must_use]
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: DateTime<Utc>) -> Self {
        let Partitioned { past, upcoming } = partition(shows, now);
        Self {
            artist,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{ShowId, VenueId};

    #[test]
    fn artist_detail_counts_match_buckets() {
        let now = Utc::now();
        let artist = Artist {
            id: crate::domain::ArtistId::new(1),
            name: "The Wild Sax Band".into(),
            genres: vec!["Jazz".into()],
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "432-325-5432".into(),
            website: String::new(),
            facebook_link: String::new(),
            image_link: String::new(),
            seeking_venue: false,
            seeking_description: None,
        };
        let show = |id: i64, offset: Duration| ArtistShow {
            show_id: ShowId::new(id),
            venue_id: VenueId::new(3),
            venue_name: "Park Square Live Music & Coffee".into(),
            venue_image_link: String::new(),
            start_time: now + offset,
        };
        let detail = ArtistDetail::new(
            artist,
            vec![
                show(1, Duration::days(-30)),
                show(2, Duration::days(7)),
                show(3, Duration::days(14)),
            ],
            now,
        );
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        assert_eq!(detail.upcoming_shows.first().map(|s| s.show_id), Some(ShowId::new(2)));
    }
}
