//! Summary rows for list and search pages, and grouping by location.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::{Artist, ArtistId, Venue, VenueId};

/// A venue line on the listing and search pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    /// Venue id.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Shows at this venue starting after the query instant.
    pub num_upcoming_shows: u64,
}

/// An artist line on the search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    /// Artist id.
    pub id: ArtistId,
    /// Artist name.
    pub name: String,
    /// Shows by this artist starting after the query instant.
    pub num_upcoming_shows: u64,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Venues in this area, ordered by id.
    pub venues: Vec<VenueSummary>,
}

/// Search response shape shared by venues and artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    /// Number of matches.
    pub count: usize,
    /// The matches, ordered by id.
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// Wraps `data`, deriving `count` from it.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

impl VenueSummary {
    /// Builds a summary, looking the upcoming count up in `counts`.
    #[must_use]
    pub fn from_venue(venue: &Venue, counts: &HashMap<VenueId, u64>) -> Self {
        Self {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        }
    }
}

impl ArtistSummary {
    /// Builds a summary, looking the upcoming count up in `counts`.
    #[must_use]
    pub fn from_artist(artist: &Artist, counts: &HashMap<ArtistId, u64>) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
        }
    }
}

/// Groups venues by distinct (city, state).
///
/// Areas come out ordered by city then state; venues inside an area by id.
#[must_use]
pub fn group_by_area(venues: &[Venue], counts: &HashMap<VenueId, u64>) -> Vec<Area> {
    let mut areas: BTreeMap<(&str, &str), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.city.as_str(), venue.state.as_str()))
            .or_default()
            .push(VenueSummary::from_venue(venue, counts));
    }

    areas
        .into_iter()
        .map(|((city, state), mut venues)| {
            venues.sort_by_key(|v| v.id);
            Area {
                city: city.to_string(),
                state: state.to_string(),
                venues,
            }
        })
        .collect()
}
