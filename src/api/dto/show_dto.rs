//! Show form decoding.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::common_dto::FormFields;
use crate::domain::{ArtistId, ShowDraft, VenueId};
use crate::error::ListingError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Parses a submitted start time: RFC 3339, or a zone-less
/// `YYYY-MM-DD HH:MM[:SS]` taken as UTC.
///
/// # Errors
///
/// Returns [`ListingError::InvalidForm`] if no format matches.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ListingError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ListingError::InvalidForm(format!("start_time {raw:?} is not a date-time")))
}

impl TryFrom<&FormFields> for ShowDraft {
    type Error = ListingError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            venue_id: VenueId::new(form.required_id("venue_id")?),
            artist_id: ArtistId::new(form.required_id("artist_id")?),
            start_time: parse_start_time(&form.required("start_time")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn accepts_rfc3339_and_naive_formats() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).single();
        assert_eq!(parse_start_time("2035-04-01T20:00:00Z").ok(), expected);
        assert_eq!(parse_start_time("2035-04-01T22:00:00+02:00").ok(), expected);
        assert_eq!(parse_start_time("2035-04-01 20:00:00").ok(), expected);
        assert_eq!(parse_start_time("2035-04-01 20:00").ok(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_start_time("next tuesday"),
            Err(ListingError::InvalidForm(_))
        ));
    }

    #[test]
    fn show_form_requires_numeric_ids() {
        let form = FormFields::from(vec![
            ("venue_id".to_string(), "one".to_string()),
            ("artist_id".to_string(), "1".to_string()),
            ("start_time".to_string(), "2035-04-01 20:00:00".to_string()),
        ]);
        assert!(ShowDraft::try_from(&form).is_err());
    }
}
