//! Form decoding shared by every submission endpoint.
//!
//! HTML forms post `application/x-www-form-urlencoded` bodies in which a
//! multi-select (`genres`) repeats its key. Handlers extract the body as
//! `Form<Vec<(String, String)>>` and wrap it in [`FormFields`], which keeps
//! every pair and exposes typed, validating accessors.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ListingError;

/// Body of `POST /venues/search` and `POST /artists/search`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchForm {
    /// Substring to look for. Missing means empty, which matches all.
    #[serde(default)]
    pub search_term: String,
}

/// Decoded form body with repeated keys preserved.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    /// First value submitted under `name`, trimmed.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
    }

    /// Whether `name` was submitted at all.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// A field that must be present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] if missing or blank.
    pub fn required(&self, name: &str) -> Result<String, ListingError> {
        self.present(name)?
            .ok_or_else(|| ListingError::InvalidForm(format!("{name} is required")))
    }

    /// A field that may be omitted, but not submitted blank.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] if submitted blank.
    pub fn present(&self, name: &str) -> Result<Option<String>, ListingError> {
        match self.text(name) {
            Some(value) if value.is_empty() => Err(ListingError::InvalidForm(format!(
                "{name} must not be blank"
            ))),
            other => Ok(other),
        }
    }

    /// Every value submitted under `name`, or `None` if the key is absent.
    #[must_use]
    pub fn all(&self, name: &str) -> Option<Vec<String>> {
        if !self.contains(name) {
            return None;
        }
        Some(
            self.pairs
                .iter()
                .filter(|(k, _)| k == name)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect(),
        )
    }

    /// A multi-select that needs at least one non-blank value.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] if nothing was selected.
    pub fn required_list(&self, name: &str) -> Result<Vec<String>, ListingError> {
        match self.present_list(name)? {
            Some(values) => Ok(values),
            None => Err(ListingError::InvalidForm(format!("{name} is required"))),
        }
    }

    /// A multi-select that may be omitted, but not submitted empty.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] if submitted with no values.
    pub fn present_list(&self, name: &str) -> Result<Option<Vec<String>>, ListingError> {
        match self.all(name) {
            Some(values) if values.is_empty() => Err(ListingError::InvalidForm(format!(
                "select at least one of {name}"
            ))),
            other => Ok(other),
        }
    }

    /// A checkbox: `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] for an unrecognised value.
    pub fn checkbox(&self, name: &str) -> Result<Option<bool>, ListingError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" | "on" | "true" | "1" => Ok(Some(true)),
            "" | "n" | "no" | "off" | "false" | "0" => Ok(Some(false)),
            _ => Err(ListingError::InvalidForm(format!(
                "{name} must be a checkbox value"
            ))),
        }
    }

    /// A checkbox on an edit submission.
    ///
    /// Browsers leave unchecked boxes out of the body, so once the full form
    /// was posted (it always carries `name`) an absent box reads as
    /// unchecked. A partial payload without `name` leaves the flag alone.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] for an unrecognised value.
    pub fn edit_checkbox(&self, name: &str) -> Result<Option<bool>, ListingError> {
        let checked = self.checkbox(name)?;
        Ok(checked.or_else(|| self.contains("name").then_some(false)))
    }

    /// A required integer id.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidForm`] if missing or not a number.
    pub fn required_id(&self, name: &str) -> Result<i64, ListingError> {
        self.required(name)?
            .parse()
            .map_err(|_| ListingError::InvalidForm(format!("{name} must be a number")))
    }
}
