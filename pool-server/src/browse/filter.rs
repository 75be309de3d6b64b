//! Date filtering.

use crate::domain::Facility;

use super::cache::CardCache;
use super::card::Card;

/// Build the card list for a date.
///
/// Iterates facilities in their base (dataset) order and includes each one
/// iff it has windows that date. A date nobody is open on yields an empty
/// list, not an error. Output order is the base order; sorting is a
/// separate, later step.
pub fn cards_for_date(date: &str, facilities: &[Facility], cache: &CardCache) -> Vec<Card> {
    facilities
        .iter()
        .filter_map(|facility| cache.get_or_build(facility, date))
        .collect()
}

/// Every date that occurs anywhere in the dataset, sorted ascending.
///
/// Feeds the date selector so users can only pick dates that can match.
/// `YYYY-MM-DD` keys sort chronologically as plain strings.
pub fn available_dates(facilities: &[Facility]) -> Vec<String> {
    let mut dates: Vec<String> = facilities
        .iter()
        .flat_map(|f| f.availabilities.keys().cloned())
        .collect();
    dates.sort();
    dates.dedup();
    dates
}
