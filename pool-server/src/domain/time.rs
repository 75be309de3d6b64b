//! Minute-of-day opening windows and their display formatting.
//!
//! The availability dataset stores opening times as integer minutes of the
//! day (`330` = 5:30). Formatting replicates the original pool page exactly,
//! including its asymmetric am/pm suffix rule, so rendered schedules stay
//! byte-for-byte compatible with the pages users already know.

use serde::Deserialize;

/// Number of minutes in a day; valid timestamps are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Noon as a minute of the day.
const NOON_MINS: i32 = 720;

/// A contiguous open-availability interval on a given date.
///
/// `start < end` is expected but deliberately NOT enforced: the dataset is an
/// external artifact and malformed windows must render best-effort rather
/// than fail the page (see [`format_timestamp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct TimeWindow {
    /// Opening minute of the day.
    pub start: i32,
    /// Closing minute of the day.
    pub end: i32,
}

impl TimeWindow {
    /// Create a new window.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Length of the window in minutes.
    pub fn duration_mins(&self) -> i32 {
        self.end - self.start
    }
}

/// Format a minute-of-day timestamp as `H:MM`.
///
/// The hour is NOT wrapped to a 12-hour clock: `870` formats as `"14:30"`.
/// Values outside `[0, 1440)` are logged and formatted anyway; the page keeps
/// rendering with whatever the dataset gave it.
///
/// # Examples
///
/// ```
/// use pool_server::domain::format_timestamp;
///
/// assert_eq!(format_timestamp(330), "5:30");
/// assert_eq!(format_timestamp(300), "5:00");
/// assert_eq!(format_timestamp(870), "14:30");
/// ```
pub fn format_timestamp(minutes: i32) -> String {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        tracing::warn!(minutes, "timestamp outside the 0..1440 minute range");
    }

    let hrs = minutes / 60;
    let mins = minutes - hrs * 60;

    format!("{hrs}:{mins:02}")
}

/// Format a window as `"<start> - <end>"` with am/pm suffixes.
///
/// The end time always carries a suffix: `"pm"` when the window closes at or
/// after noon, `"am"` otherwise. The start time carries `"am"` only when the
/// window opens before noon AND closes at or after it. A same-half-day window
/// therefore shows one suffix, on the end only. This asymmetry is the
/// original page's display rule and is preserved for compatibility.
///
/// # Examples
///
/// ```
/// use pool_server::domain::{TimeWindow, format_range};
///
/// // Same half of the day: suffix on the end only.
/// assert_eq!(format_range(TimeWindow::new(300, 330)), "5:00 - 5:30am");
///
/// // Spans noon: both suffixed.
/// assert_eq!(format_range(TimeWindow::new(690, 750)), "11:30am - 12:30pm");
///
/// // Entirely after noon: suffix on the end only.
/// assert_eq!(format_range(TimeWindow::new(870, 1020)), "14:30 - 17:00pm");
/// ```
pub fn format_range(window: TimeWindow) -> String {
    let start = format_timestamp(window.start);
    let end = format_timestamp(window.end);

    if window.end >= NOON_MINS {
        if window.start < NOON_MINS {
            format!("{start}am - {end}pm")
        } else {
            format!("{start} - {end}pm")
        }
    } else {
        format!("{start} - {end}am")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_basic() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(300), "5:00");
        assert_eq!(format_timestamp(330), "5:30");
        assert_eq!(format_timestamp(615), "10:15");
        assert_eq!(format_timestamp(1439), "23:59");
    }

    #[test]
    fn timestamp_no_twelve_hour_wrap() {
        assert_eq!(format_timestamp(720), "12:00");
        assert_eq!(format_timestamp(870), "14:30");
        assert_eq!(format_timestamp(1290), "21:30");
    }

    #[test]
    fn timestamp_out_of_range_still_formats() {
        // Logged, not clamped and not rejected.
        assert_eq!(format_timestamp(1440), "24:00");
        assert_eq!(format_timestamp(1500), "25:00");
    }

    #[test]
    fn range_same_half_morning() {
        assert_eq!(format_range(TimeWindow::new(300, 330)), "5:00 - 5:30am");
    }

    #[test]
    fn range_same_half_afternoon() {
        assert_eq!(format_range(TimeWindow::new(870, 1020)), "14:30 - 17:00pm");
        assert_eq!(format_range(TimeWindow::new(1170, 1290)), "19:30 - 21:30pm");
    }

    #[test]
    fn range_spans_noon_shows_both_suffixes() {
        assert_eq!(format_range(TimeWindow::new(690, 750)), "11:30am - 12:30pm");
        assert_eq!(format_range(TimeWindow::new(540, 900)), "9:00am - 15:00pm");
    }

    #[test]
    fn range_end_exactly_noon_is_pm() {
        assert_eq!(format_range(TimeWindow::new(690, 720)), "11:30am - 12:00pm");
    }

    #[test]
    fn range_end_one_before_noon_is_am() {
        assert_eq!(format_range(TimeWindow::new(690, 719)), "11:30 - 11:59am");
    }

    #[test]
    fn duration() {
        assert_eq!(TimeWindow::new(810, 945).duration_mins(), 135);
        assert_eq!(TimeWindow::new(0, 1).duration_mins(), 1);
    }
}
