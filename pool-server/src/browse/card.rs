//! Per-date pool cards.

use crate::domain::{Facility, TimeWindow, format_range};

/// A renderable projection of one `(facility, date)` pair.
///
/// Carries a snapshot of the originating facility so the sort engine can
/// re-derive availability-dependent keys without another dataset lookup.
#[derive(Debug, Clone)]
pub struct Card {
    /// Snapshot of the facility at build time.
    pub facility: Facility,

    /// The date this card was built for (`YYYY-MM-DD`).
    pub date: String,

    /// Facility name, annotated with distance/duration when enrichment has
    /// supplied them.
    pub display_name: String,

    /// Formatted time ranges, one per window, in stored order.
    pub times: Vec<String>,
}

impl Card {
    /// The windows this card was built from.
    ///
    /// Empty only if the facility snapshot somehow lost the date, which
    /// `build_card` rules out.
    pub fn windows(&self) -> &[TimeWindow] {
        self.facility.windows_on(&self.date).unwrap_or(&[])
    }

    /// Duration of the longest single window, in minutes.
    pub fn longest_window_mins(&self) -> i32 {
        self.windows()
            .iter()
            .map(TimeWindow::duration_mins)
            .max()
            .unwrap_or(0)
    }

    /// Start of the earliest window.
    pub fn earliest_start(&self) -> i32 {
        self.windows()
            .iter()
            .map(|w| w.start)
            .min()
            .unwrap_or(i32::MAX)
    }

    /// End of the earliest-closing window.
    pub fn earliest_end(&self) -> i32 {
        self.windows()
            .iter()
            .map(|w| w.end)
            .min()
            .unwrap_or(i32::MAX)
    }

    /// Minutes from `now_mins` until the next window opens.
    ///
    /// A window that has already opened (or passed) counts as starting 1440
    /// minutes away: an in-progress session is "tomorrow's", not "now's".
    pub fn minutes_until_next_window(&self, now_mins: i32) -> i32 {
        self.windows()
            .iter()
            .map(|w| {
                if w.start > now_mins {
                    w.start - now_mins
                } else {
                    crate::domain::MINUTES_PER_DAY
                }
            })
            .min()
            .unwrap_or(crate::domain::MINUTES_PER_DAY)
    }
}

/// Build the card for one facility on one date.
///
/// Returns `None` when the facility has no window that date; callers filter
/// beforehand, but the builder stays total. When the facility carries
/// enrichment metrics the display name gains ` (X.X km)` (one decimal) and
/// ` (N min)` (seconds rounded up to whole minutes).
pub fn build_card(facility: &Facility, date: &str) -> Option<Card> {
    let windows = facility.windows_on(date)?;
    if windows.is_empty() {
        return None;
    }

    let mut display_name = facility.name.clone();
    if let Some(km) = facility.distance {
        display_name.push_str(&format!(" ({km:.1} km)"));
    }
    if let Some(secs) = facility.travel_time {
        let mins = (secs / 60.0).ceil() as i64;
        display_name.push_str(&format!(" ({mins} min)"));
    }

    let times = windows.iter().copied().map(format_range).collect();

    Some(Card {
        facility: facility.clone(),
        date: date.to_string(),
        display_name,
        times,
    })
}
