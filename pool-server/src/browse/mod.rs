//! Card construction, caching, date filtering, and sorting.
//!
//! This is the rendering pipeline between the raw facility dataset and the
//! page: filter facilities to a date, project each into a [`Card`], then
//! order the cards with one of the [`SortKey`] comparators.

mod cache;
mod card;
mod filter;
mod sort;

pub use cache::CardCache;
pub use card::{Card, build_card};
pub use filter::{available_dates, cards_for_date};
pub use sort::{SortKey, sort_cards};

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::HashMap;

    use crate::domain::{Facility, TimeWindow};

    /// A facility with windows on a single date.
    pub(crate) fn facility(name: &str, date: &str, windows: &[(i32, i32)]) -> Facility {
        let mut availabilities = HashMap::new();
        availabilities.insert(
            date.to_string(),
            windows
                .iter()
                .map(|&(start, end)| TimeWindow::new(start, end))
                .collect(),
        );
        Facility {
            name: name.to_string(),
            classified_name: name.to_lowercase().replace(' ', "-"),
            address: format!("1 {name} St"),
            kind: "indoor pool".to_string(),
            phone: "416 555-0100".to_string(),
            availabilities,
            distance: None,
            travel_time: None,
        }
    }
}
