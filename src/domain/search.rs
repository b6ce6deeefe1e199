//! Name matching used by venue and artist search.

/// Case-insensitive literal "contains" test. An empty term matches
/// every name.
#[must_use]
pub fn name_matches(term: &str, name: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENUES: [&str; 3] = [
        "The Musical Hop",
        "Park Square Live Music & Coffee",
        "The Dueling Pianos Bar",
    ];

    fn matching(term: &str) -> Vec<&'static str> {
        VENUES
            .iter()
            .copied()
            .filter(|name| name_matches(term, name))
            .collect()
    }

    #[test]
    fn hop_matches_one_venue() {
        assert_eq!(matching("Hop"), vec!["The Musical Hop"]);
    }

    #[test]
    fn music_matches_two_venues() {
        assert_eq!(
            matching("Music"),
            vec!["The Musical Hop", "Park Square Live Music & Coffee"]
        );
    }

    #[test]
    fn match_ignores_case() {
        assert_eq!(matching("mUsIc").len(), 2);
        assert_eq!(matching("PIANOS"), vec!["The Dueling Pianos Bar"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(matching("").len(), VENUES.len());
    }

    #[test]
    fn wildcard_characters_are_literal() {
        assert!(matching("%").is_empty());
        assert!(matching("_").is_empty());
        assert_eq!(matching("&"), vec!["Park Square Live Music & Coffee"]);
    }
}
