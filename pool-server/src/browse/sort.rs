//! Sort comparators over pool cards.
//!
//! A closed enumeration of sort strategies rather than a runtime-looked-up
//! table: adding a variant forces every match below to handle it, and there
//! is no "no such sorter" failure path.
//!
//! Every comparator is a deterministic total order. Tie-break chains bottom
//! out in the case-sensitive name comparison, so equal sort keys can never
//! leave two distinct cards unordered.

use std::cmp::Ordering;

use serde::Deserialize;

use super::card::Card;

/// How to order the rendered card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Facility name, ascending.
    #[default]
    Name,
    /// Travel distance, ascending; unenriched cards last.
    Distance,
    /// Travel time, ascending; unenriched cards last.
    #[serde(rename = "time")]
    TravelTime,
    /// Longest single window, descending.
    Length,
    /// Minutes until the next window opens, ascending.
    Soonest,
    /// Earliest window start, ascending.
    Start,
    /// Earliest window end, ascending.
    End,
}

impl SortKey {
    /// All keys, in the order the sort selector offers them.
    pub const ALL: [SortKey; 7] = [
        SortKey::Name,
        SortKey::Distance,
        SortKey::TravelTime,
        SortKey::Length,
        SortKey::Soonest,
        SortKey::Start,
        SortKey::End,
    ];

    /// The query-parameter value for this key.
    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Distance => "distance",
            SortKey::TravelTime => "time",
            SortKey::Length => "length",
            SortKey::Soonest => "soonest",
            SortKey::Start => "start",
            SortKey::End => "end",
        }
    }

    /// Human label for the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Distance => "Distance",
            SortKey::TravelTime => "Travel time",
            SortKey::Length => "Longest swim",
            SortKey::Soonest => "Soonest open",
            SortKey::Start => "Earliest start",
            SortKey::End => "Earliest end",
        }
    }
}

/// Sort cards in place by the given key.
///
/// `now_mins` is the wall-clock minute of the day, used only by
/// [`SortKey::Soonest`]; passing it in keeps the comparators free of hidden
/// clock reads.
pub fn sort_cards(cards: &mut [Card], key: SortKey, now_mins: i32) {
    cards.sort_by(|a, b| compare(a, b, key, now_mins));
}

fn compare(a: &Card, b: &Card, key: SortKey, now_mins: i32) -> Ordering {
    match key {
        SortKey::Name => by_name(a, b),
        SortKey::Distance => {
            by_metric(a.facility.distance, b.facility.distance).then_with(|| by_name(a, b))
        }
        SortKey::TravelTime => {
            by_metric(a.facility.travel_time, b.facility.travel_time).then_with(|| by_name(a, b))
        }
        SortKey::Length => by_longest_window(a, b).then_with(|| by_name(a, b)),
        SortKey::Soonest => a
            .minutes_until_next_window(now_mins)
            .cmp(&b.minutes_until_next_window(now_mins))
            .then_with(|| by_longest_window(a, b))
            .then_with(|| by_name(a, b)),
        SortKey::Start => a
            .earliest_start()
            .cmp(&b.earliest_start())
            .then_with(|| by_name(a, b)),
        SortKey::End => a
            .earliest_end()
            .cmp(&b.earliest_end())
            .then_with(|| by_name(a, b)),
    }
}

/// Case-sensitive lexicographic name order, the universal tie-break.
fn by_name(a: &Card, b: &Card) -> Ordering {
    a.facility.name.cmp(&b.facility.name)
}

/// Descending by the longest single window.
fn by_longest_window(a: &Card, b: &Card) -> Ordering {
    b.longest_window_mins().cmp(&a.longest_window_mins())
}

/// Ascending by an optional metric; a card without the metric sorts after
/// any card with one. NaN compares as equal, which the name fallback then
/// resolves deterministically.
fn by_metric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::browse::card::build_card;
    use crate::browse::testutil::facility;
    use proptest::prelude::*;

    const DATE: &str = "2019-07-19";

    prop_compose! {
        fn arb_card()(
            name in "[A-Za-z]{1,8}",
            windows in prop::collection::vec((0i32..1380, 1i32..120), 1..4),
            distance in prop::option::of(0.0f64..60.0),
            travel_time in prop::option::of(0.0f64..7200.0),
        ) -> Card {
            let windows: Vec<(i32, i32)> = windows
                .into_iter()
                .map(|(start, len)| (start, start + len))
                .collect();
            let mut f = facility(&name, DATE, &windows);
            f.distance = distance;
            f.travel_time = travel_time;
            build_card(&f, DATE).unwrap()
        }
    }

    fn arb_key() -> impl Strategy<Value = SortKey> {
        prop::sample::select(SortKey::ALL.to_vec())
    }

    proptest! {
        /// Comparators are reflexive: a card ties with itself.
        #[test]
        fn reflexive(card in arb_card(), key in arb_key(), now in 0i32..1440) {
            prop_assert_eq!(compare(&card, &card, key, now), Ordering::Equal);
        }

        /// Comparators are antisymmetric: swapping operands reverses the
        /// ordering.
        #[test]
        fn antisymmetric(
            a in arb_card(),
            b in arb_card(),
            key in arb_key(),
            now in 0i32..1440,
        ) {
            prop_assert_eq!(
                compare(&a, &b, key, now),
                compare(&b, &a, key, now).reverse()
            );
        }

        /// Comparators are transitive.
        #[test]
        fn transitive(
            a in arb_card(),
            b in arb_card(),
            c in arb_card(),
            key in arb_key(),
            now in 0i32..1440,
        ) {
            let ab = compare(&a, &b, key, now);
            let bc = compare(&b, &c, key, now);
            if ab == bc {
                prop_assert_eq!(compare(&a, &c, key, now), ab);
            }
        }

        /// Distinct names never compare equal: the fallback guarantees a
        /// strict total order over any real card set.
        #[test]
        fn distinct_names_are_ordered(
            a in arb_card(),
            b in arb_card(),
            key in arb_key(),
            now in 0i32..1440,
        ) {
            if a.facility.name != b.facility.name {
                prop_assert_ne!(compare(&a, &b, key, now), Ordering::Equal);
            }
        }

        /// For the metric sorts, every unenriched card sorts after every
        /// enriched one.
        #[test]
        fn undefined_metric_sorts_last(
            mut cards in prop::collection::vec(arb_card(), 2..8),
            now in 0i32..1440,
        ) {
            sort_cards(&mut cards, SortKey::Distance, now);
            let first_none = cards.iter().position(|c| c.facility.distance.is_none());
            if let Some(idx) = first_none {
                prop_assert!(cards[idx..].iter().all(|c| c.facility.distance.is_none()));
            }
        }
    }
}
