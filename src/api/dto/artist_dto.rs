//! Artist form decoding for create and edit submissions.

use super::common_dto::FormFields;
use crate::domain::{ArtistChanges, ArtistDraft};
use crate::error::ListingError;

impl TryFrom<&FormFields> for ArtistDraft {
    type Error = ListingError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.required("name")?,
            genres: form.required_list("genres")?,
            city: form.required("city")?,
            state: form.required("state")?,
            phone: form.required("phone")?,
            website: form.required("website")?,
            facebook_link: form.required("facebook_link")?,
            image_link: form.required("image_link")?,
            seeking_venue: form.checkbox("seeking_venue")?.unwrap_or(false),
            seeking_description: form.text("seeking_description"),
        }
        .normalized())
    }
}

impl TryFrom<&FormFields> for ArtistChanges {
    type Error = ListingError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.present("name")?,
            genres: form.present_list("genres")?,
            city: form.present("city")?,
            state: form.present("state")?,
            phone: form.present("phone")?,
            website: form.present("website")?,
            facebook_link: form.present("facebook_link")?,
            image_link: form.present("image_link")?,
            seeking_venue: form.edit_checkbox("seeking_venue")?,
            seeking_description: form.text("seeking_description"),
        })
    }
}
