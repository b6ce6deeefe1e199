//! Venue form decoding for create and edit submissions.

use super::common_dto::FormFields;
use crate::domain::{VenueChanges, VenueDraft};
use crate::error::ListingError;

impl TryFrom<&FormFields> for VenueDraft {
    type Error = ListingError;

    /// Every field is required except `seeking_description`; an absent
    /// `seeking_talent` checkbox means unchecked.
    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.required("name")?,
            genres: form.required_list("genres")?,
            address: form.required("address")?,
            city: form.required("city")?,
            state: form.required("state")?,
            phone: form.required("phone")?,
            website: form.required("website")?,
            facebook_link: form.required("facebook_link")?,
            image_link: form.required("image_link")?,
            seeking_talent: form.checkbox("seeking_talent")?.unwrap_or(false),
            seeking_description: form.text("seeking_description"),
        }
        .normalized())
    }
}

impl TryFrom<&FormFields> for VenueChanges {
    type Error = ListingError;

    /// Only submitted fields become changes; a submitted field must still
    /// be non-blank.
    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.present("name")?,
            genres: form.present_list("genres")?,
            address: form.present("address")?,
            city: form.present("city")?,
            state: form.present("state")?,
            phone: form.present("phone")?,
            website: form.present("website")?,
            facebook_link: form.present("facebook_link")?,
            image_link: form.present("image_link")?,
            seeking_talent: form.edit_checkbox("seeking_talent")?,
            seeking_description: form.text("seeking_description"),
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::from(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<Vec<_>>(),
        )
    }

    const COMPLETE: [(&str, &str); 12] = [
        ("name", "The Musical Hop"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("address", "1015 Folsom Street"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "123-123-1234"),
        ("website", "https://www.themusicalhop.com"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("image_link", "https://example.com/hop.jpg"),
        ("seeking_talent", "y"),
        ("seeking_description", "Local artists wanted"),
    ];

    #[test]
    fn complete_form_builds_draft() {
        let Ok(draft) = VenueDraft::try_from(&form(&COMPLETE)) else {
            panic!("complete form rejected");
        };
        assert_eq!(draft.genres, vec!["Jazz", "Reggae"]);
        assert!(draft.seeking_talent);
        assert_eq!(draft.seeking_description.as_deref(), Some("Local artists wanted"));
    }

    #[test]
    fn missing_address_is_rejected() {
        let pairs: Vec<(&str, &str)> = COMPLETE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "address")
            .collect();
        let result = VenueDraft::try_from(&form(&pairs));
        let Err(ListingError::InvalidForm(message)) = result else {
            panic!("expected a validation failure");
        };
        assert!(message.contains("address"));
    }

    #[test]
    fn unchecked_box_means_not_seeking() {
        let pairs: Vec<(&str, &str)> = COMPLETE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "seeking_talent")
            .collect();
        let Ok(draft) = VenueDraft::try_from(&form(&pairs)) else {
            panic!("form rejected");
        };
        assert!(!draft.seeking_talent);
        assert_eq!(draft.seeking_description, None);
    }

    #[test]
    fn partial_edit_only_sets_submitted_fields() {
        let Ok(changes) = VenueChanges::try_from(&form(&[("phone", "555-0000")])) else {
            panic!("edit rejected");
        };
        assert_eq!(changes.phone.as_deref(), Some("555-0000"));
        assert_eq!(changes.name, None);
        assert_eq!(changes.genres, None);
        assert_eq!(changes.seeking_talent, None);
    }
}
