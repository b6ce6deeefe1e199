//! Type-safe record identifiers.
//!
//! Venues, artists, and shows are keyed by database-generated `BIGSERIAL`
//! values. Each table gets its own newtype so a venue id can never be
//! passed where an artist id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database id.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw database id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of a [`super::Venue`]. Assigned on insert, immutable afterwards.
    VenueId
);

record_id!(
    /// Identifier of an [`super::Artist`]. Assigned on insert, immutable afterwards.
    ArtistId
);

record_id!(
    /// Identifier of a [`super::Show`].
    ShowId
);
