//! Local-time helpers for the date selector and the "soonest" sort.
//!
//! Dates are keyed as local `YYYY-MM-DD` with no timezone negotiation; a
//! page rendered close to midnight can disagree with a client in another
//! timezone, which matches the original behavior.

use chrono::{Local, Timelike};

/// Today's date key in local time, zero-padded `YYYY-MM-DD`.
pub fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Current local wall-clock time as a minute of the day.
pub fn minutes_now() -> i32 {
    let now = Local::now().time();
    (now.hour() * 60 + now.minute()) as i32
}
