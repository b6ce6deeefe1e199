//! Normalisation rules shared by venue and artist profiles.

/// Removes blank and repeated genre tags, keeping first-appearance order.
#[must_use]
pub fn normalize_genres<I>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.trim();
        if genre.is_empty() || out.iter().any(|g| g == genre) {
            continue;
        }
        out.push(genre.to_string());
    }
    out
}

/// A seeking description only exists while the profile is seeking.
/// Blank descriptions collapse to `None`.
#[must_use]
pub fn seeking_description(seeking: bool, description: Option<String>) -> Option<String> {
    if !seeking {
        return None;
    }
    description.filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_are_deduplicated_in_order() {
        let genres = normalize_genres(
            ["Jazz", "Reggae", "Jazz", " ", "Swing"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(genres, vec!["Jazz", "Reggae", "Swing"]);
    }

    #[test]
    fn description_dropped_when_not_seeking() {
        assert_eq!(seeking_description(false, Some("looking".into())), None);
        assert_eq!(
            seeking_description(true, Some("looking".into())),
            Some("looking".to_string())
        );
        assert_eq!(seeking_description(true, Some("   ".into())), None);
    }
}
