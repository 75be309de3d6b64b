//! Facility records from the availability dataset.

use std::collections::HashMap;

use serde::Deserialize;

use super::time::TimeWindow;

/// A swimming-pool facility with per-date opening windows.
///
/// Loaded once at startup from the external dataset. All dataset fields are
/// immutable for the life of the process; only `distance` and `travel_time`
/// change, and only when an enrichment response is merged in.
#[derive(Debug, Clone, Deserialize)]
pub struct Facility {
    /// Display name, e.g. "York Recreation Centre". Assumed unique across
    /// the dataset; the card cache keys on it.
    pub name: String,

    /// URL/CSS-safe variant of the name, e.g. "york-recreation-centre".
    pub classified_name: String,

    /// Street address, used as the enrichment lookup location.
    pub address: String,

    /// Facility kind, e.g. "indoor pool".
    #[serde(rename = "type")]
    pub kind: String,

    /// Contact phone number.
    pub phone: String,

    /// Opening windows keyed by `YYYY-MM-DD` date. Windows are stored in
    /// dataset order and rendered without re-sorting.
    pub availabilities: HashMap<String, Vec<TimeWindow>>,

    /// Travel distance from the user's address in kilometres. Set by
    /// enrichment, never present in the dataset.
    #[serde(skip)]
    pub distance: Option<f64>,

    /// Travel time from the user's address in seconds. Set by enrichment,
    /// never present in the dataset.
    #[serde(skip)]
    pub travel_time: Option<f64>,
}

impl Facility {
    /// The opening windows for a date, if the facility is open that day.
    pub fn windows_on(&self, date: &str) -> Option<&[TimeWindow]> {
        self.availabilities.get(date).map(Vec::as_slice)
    }

    /// Whether the facility has any window on the given date.
    pub fn is_open_on(&self, date: &str) -> bool {
        self.availabilities
            .get(date)
            .is_some_and(|windows| !windows.is_empty())
    }
}
