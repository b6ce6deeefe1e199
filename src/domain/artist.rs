//! Artist profile and its create/edit payloads.

use serde::Serialize;

use super::ArtistId;
use super::fields::{normalize_genres, seeking_description};

/// A performer who plays shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    /// Generated identifier (immutable).
    pub id: ArtistId,
    /// Display name. Not unique.
    pub name: String,
    /// Genre tags.
    pub genres: Vec<String>,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Facebook page URL.
    pub facebook_link: String,
    /// Image URL.
    pub image_link: String,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// What kind of venue the artist is looking for. `None` unless seeking.
    pub seeking_description: Option<String>,
}

/// Validated payload for creating an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDraft {
    /// Display name.
    pub name: String,
    /// Genre tags.
    pub genres: Vec<String>,
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
    /// Seeking venue flag.
    pub seeking_venue: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl ArtistDraft {
    /// Applies the genre and seeking-description rules.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            genres: normalize_genres(self.genres),
            seeking_description: seeking_description(self.seeking_venue, self.seeking_description),
            ..self
        }
    }

    /// Builds the stored record once the store has assigned an id.
    #[must_use]
    pub fn into_artist(self, id: ArtistId) -> Artist {
        let draft = self.normalized();
        Artist {
            id,
            name: draft.name,
            genres: draft.genres,
            city: draft.city,
            state: draft.state,
            phone: draft.phone,
            website: draft.website,
            facebook_link: draft.facebook_link,
            image_link: draft.image_link,
            seeking_venue: draft.seeking_venue,
            seeking_description: draft.seeking_description,
        }
    }
}

/// Edit payload for an artist; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistChanges {
    /// New name.
    pub name: Option<String>,
    /// New genre set.
    pub genres: Option<Vec<String>>,
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
    pub seeking_venue: Option<bool>,
    /// New seeking description.
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Overwrites the fields present in `changes`.
    pub fn apply(&mut self, changes: &ArtistChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(genres) = &changes.genres {
            self.genres = normalize_genres(genres.iter().cloned());
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
        if let Some(seeking) = changes.seeking_venue {
            self.seeking_venue = seeking;
        }
        let description = changes
            .seeking_description
            .clone()
            .or_else(|| self.seeking_description.take());
        self.seeking_description = seeking_description(self.seeking_venue, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_genres_and_keeps_the_rest() {
        let mut artist = ArtistDraft {
            name: "Guns N Petals".into(),
            genres: vec!["Rock n Roll".into()],
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            website: "https://www.gunsnpetalsband.com".into(),
            facebook_link: "https://www.facebook.com/GunsNPetals".into(),
            image_link: "https://example.com/gnp.jpg".into(),
            seeking_venue: false,
            seeking_description: Some("ignored while not seeking".into()),
        }
        .into_artist(ArtistId::new(4));
        assert_eq!(artist.seeking_description, None);

        artist.apply(&ArtistChanges {
            genres: Some(vec!["Punk".into(), "Punk".into()]),
            seeking_venue: Some(true),
            seeking_description: Some("Bay Area bars".into()),
            ..ArtistChanges::default()
        });
        assert_eq!(artist.genres, vec!["Punk"]);
        assert_eq!(artist.seeking_description.as_deref(), Some("Bay Area bars"));
        assert_eq!(artist.name, "Guns N Petals");
    }
}
