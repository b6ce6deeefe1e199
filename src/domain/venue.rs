//! Venue profile and its create/edit payloads.

use serde::Serialize;

use super::VenueId;
use super::fields::{normalize_genres, seeking_description};

/// A place that hosts shows.
///
/// `seeking_description` is only ever `Some` while `seeking_talent` is set;
/// both [`VenueDraft::normalized`] and [`Venue::apply`] keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    /// Generated identifier (immutable).
    pub id: VenueId,
    /// Display name. Not unique.
    pub name: String,
    /// Genre tags, first-appearance order, no duplicates.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City part of the location key.
    pub city: String,
    /// State part of the location key.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Facebook page URL.
    pub facebook_link: String,
    /// Image URL.
    pub image_link: String,
    /// Whether the venue is looking for performers.
    pub seeking_talent: bool,
    /// What kind of talent the venue is looking for.
    pub seeking_description: Option<String>,
}

/// Validated payload for creating a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDraft {
    /// Display name.
    pub name: String,
    /// Genre tags.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Phone.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Facebook page URL.
    pub facebook_link: String,
    /// Image URL.
    pub image_link: String,
    /// Seeking talent flag.
    pub seeking_talent: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl VenueDraft {
    /// Applies the genre and seeking-description rules.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            genres: normalize_genres(self.genres),
            seeking_description: seeking_description(
                self.seeking_talent,
                self.seeking_description,
            ),
            ..self
        }
    }

    /// Builds the stored record once the store has assigned an id.
    #[must_use]
    pub fn into_venue(self, id: VenueId) -> Venue {
        let draft = self.normalized();
        Venue {
            id,
            name: draft.name,
            genres: draft.genres,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            phone: draft.phone,
            website: draft.website,
            facebook_link: draft.facebook_link,
            image_link: draft.image_link,
            seeking_talent: draft.seeking_talent,
            seeking_description: draft.seeking_description,
        }
    }
}

/// Edit payload: every `Some` field overwrites, every `None` is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueChanges {
    /// New name.
    pub name: Option<String>,
    /// New genre set.
    pub genres: Option<Vec<String>>,
    /// New address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state.
    pub state: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New website.
    pub website: Option<String>,
    /// New Facebook link.
    pub facebook_link: Option<String>,
    /// New image link.
    pub image_link: Option<String>,
    /// New seeking flag.
    pub seeking_talent: Option<bool>,
    /// New seeking description.
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Overwrites the fields present in `changes`. The id never changes.
    pub fn apply(&mut self, changes: &VenueChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(genres) = &changes.genres {
            self.genres = normalize_genres(genres.iter().cloned());
        }
        if let Some(address) = &changes.address {
            self.address.clone_from(address);
        }
        if let Some(city) = &changes.city {
            self.city.clone_from(city);
        }
        if let Some(state) = &changes.state {
            self.state.clone_from(state);
        }
        if let Some(phone) = &changes.phone {
            self.phone.clone_from(phone);
        }
        if let Some(website) = &changes.website {
            self.website.clone_from(website);
        }
        if let Some(facebook_link) = &changes.facebook_link {
            self.facebook_link.clone_from(facebook_link);
        }
        if let Some(image_link) = &changes.image_link {
            self.image_link.clone_from(image_link);
        }
        if let Some(seeking) = changes.seeking_talent {
            self.seeking_talent = seeking;
        }
        let description = changes
            .seeking_description
            .clone()
            .or_else(|| self.seeking_description.take());
        self.seeking_description = seeking_description(self.seeking_talent, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VenueDraft {
        VenueDraft {
            name: "The Musical Hop".into(),
            genres: vec!["Jazz".into(), "Swing".into(), "Jazz".into()],
            address: "1015 Folsom Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "123-123-1234".into(),
            website: "https://www.themusicalhop.com".into(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".into(),
            image_link: "https://example.com/hop.jpg".into(),
            seeking_talent: true,
            seeking_description: Some("Local artists wanted".into()),
        }
    }

    #[test]
    fn into_venue_normalizes_genres() {
        let venue = draft().into_venue(VenueId::new(1));
        assert_eq!(venue.genres, vec!["Jazz", "Swing"]);
        assert_eq!(venue.seeking_description.as_deref(), Some("Local artists wanted"));
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut venue = draft().into_venue(VenueId::new(1));
        venue.apply(&VenueChanges {
            phone: Some("555-000-0000".into()),
            ..VenueChanges::default()
        });
        assert_eq!(venue.phone, "555-000-0000");
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.city, "San Francisco");
        assert!(venue.seeking_talent);
        assert_eq!(venue.id, VenueId::new(1));
    }

    #[test]
    fn clearing_seeking_flag_drops_description() {
        let mut venue = draft().into_venue(VenueId::new(1));
        venue.apply(&VenueChanges {
            seeking_talent: Some(false),
            ..VenueChanges::default()
        });
        assert!(!venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);
    }
}
