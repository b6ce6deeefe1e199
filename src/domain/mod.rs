//! Domain layer: records, edit payloads, and the read-side aggregation.
//!
//! Everything here is plain data and pure functions. Time-dependent logic
//! takes `now` as an argument so the service decides which instant a
//! request is evaluated at.

pub mod artist;
pub mod detail;
pub mod fields;
pub mod ids;
pub mod listing;
pub mod schedule;
pub mod search;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistChanges, ArtistDraft};
pub use detail::{ArtistDetail, VenueDetail};
pub use ids::{ArtistId, ShowId, VenueId};
pub use listing::{Area, ArtistSummary, SearchResults, VenueSummary};
pub use schedule::{Partitioned, ShowTiming};
pub use show::{ArtistShow, Show, ShowDraft, ShowListing, VenueShow};
pub use venue::{Venue, VenueChanges, VenueDraft};
