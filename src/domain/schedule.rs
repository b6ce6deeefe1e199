//! Past/upcoming bucketing of shows.
//!
//! Classification is always computed against an explicit `now` and never
//! stored, so two queries at the same instant agree and a show drifts from
//! upcoming to past on its own as time passes.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::show::{ArtistShow, ShowListing, VenueShow};
use super::ShowId;

/// Where a show sits relative to the query instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowTiming {
    /// Started at or before `now`.
    Past,
    /// Starts strictly after `now`.
    Upcoming,
}

impl ShowTiming {
    /// Upcoming iff `start_time > now`; a show starting exactly now is past.
    #[must_use]
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time > now {
            Self::Upcoming
        } else {
            Self::Past
        }
    }
}

/// Anything with a start instant that can be bucketed.
pub trait Scheduled {
    /// Start instant of the show.
    fn start_time(&self) -> DateTime<Utc>;
    /// Tie-breaker for shows starting at the same instant.
    fn show_id(&self) -> ShowId;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    fn show_id(&self) -> ShowId {
        self.show_id
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    fn show_id(&self) -> ShowId {
        self.show_id
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    fn show_id(&self) -> ShowId {
        self.show_id
    }
}

/// Shows split into past and upcoming, each ordered by start time then id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    /// Shows with `start_time <= now`.
    pub past: Vec<T>,
    /// Shows with `start_time > now`.
    pub upcoming: Vec<T>,
}

/// Sorts `shows` chronologically and splits them around `now`.
#[must_use]
pub fn partition<T: Scheduled>(mut shows: Vec<T>, now: DateTime<Utc>) -> Partitioned<T> {
    sort_chronologically(&mut shows);
    let (upcoming, past): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|s| ShowTiming::classify(s.start_time(), now) == ShowTiming::Upcoming);
    Partitioned { past, upcoming }
}

/// Orders by start time, then by show id.
pub fn sort_chronologically<T: Scheduled>(shows: &mut [T]) {
    shows.sort_by_key(|s| (s.start_time(), s.show_id()));
}

/// Counts upcoming shows per owner key (venue or artist id).
///
/// Owners with no upcoming shows are absent from the map.
#[must_use]
pub fn upcoming_counts<K, I>(shows: I, now: DateTime<Utc>) -> HashMap<K, u64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, DateTime<Utc>)>,
{
    let mut counts = HashMap::new();
    for (key, start_time) in shows {
        if ShowTiming::classify(start_time, now) == ShowTiming::Upcoming {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::{ArtistId, VenueId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 20, 0, 0)
            .single()
            .unwrap_or_default()
    }

    fn venue_show(id: i64, start_time: DateTime<Utc>) -> VenueShow {
        VenueShow {
            show_id: ShowId::new(id),
            artist_id: ArtistId::new(1),
            artist_name: "Guns N Petals".into(),
            artist_image_link: String::new(),
            start_time,
        }
    }

    #[test]
    fn show_starting_now_is_past() {
        assert_eq!(ShowTiming::classify(now(), now()), ShowTiming::Past);
        assert_eq!(
            ShowTiming::classify(now() + Duration::seconds(1), now()),
            ShowTiming::Upcoming
        );
        assert_eq!(
            ShowTiming::classify(now() - Duration::days(3), now()),
            ShowTiming::Past
        );
    }

    #[test]
    fn partition_splits_and_orders() {
        let shows = vec![
            venue_show(3, now() + Duration::days(2)),
            venue_show(1, now() - Duration::days(10)),
            venue_show(4, now() + Duration::days(1)),
            venue_show(2, now()),
        ];
        let split = partition(shows, now());

        let past: Vec<i64> = split.past.iter().map(|s| s.show_id.get()).collect();
        let upcoming: Vec<i64> = split.upcoming.iter().map(|s| s.show_id.get()).collect();
        assert_eq!(past, vec![1, 2]);
        assert_eq!(upcoming, vec![4, 3]);
    }

    #[test]
    fn partition_is_stable_across_repeated_queries() {
        let shows = vec![
            venue_show(1, now() - Duration::hours(1)),
            venue_show(2, now() + Duration::hours(1)),
        ];
        let first = partition(shows.clone(), now());
        let second = partition(shows, now());
        assert_eq!(first, second);
    }

    #[test]
    fn same_start_time_breaks_ties_by_id() {
        let at = now() + Duration::days(5);
        let split = partition(vec![venue_show(9, at), venue_show(2, at)], now());
        let ids: Vec<i64> = split.upcoming.iter().map(|s| s.show_id.get()).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn upcoming_counts_skip_past_shows() {
        let a = VenueId::new(1);
        let b = VenueId::new(2);
        let counts = upcoming_counts(
            vec![
                (a, now() + Duration::days(1)),
                (a, now() + Duration::days(2)),
                (a, now() - Duration::days(1)),
                (b, now() - Duration::days(1)),
            ],
            now(),
        );
        assert_eq!(counts.get(&a), Some(&2));
        assert_eq!(counts.get(&b), None);
    }
}
