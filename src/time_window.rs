use chrono::{NaiveDateTime, Timelike};

/// Minute after which the provider has published the current hour
const PUBLISH_MINUTE: u32 = 30;

/// The `base_date`/`base_time` pair selecting an observation snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// `YYYYMMDD`
    pub base_date: String,
    /// `HH00`
    pub base_time: String,
}

/// Derives the latest published observation slot for a local wall-clock time.
///
/// Before minute 30 the previous hour is used. Between 00:00 and 00:29 this
/// yields `2300` on the *same* date rather than the previous day's 23:00
/// slot. That matches the deployed widget and is a known open bug.
pub fn compute_window(now: NaiveDateTime) -> TimeWindow {
    let hour = if now.minute() < PUBLISH_MINUTE {
        (now.hour() + 23) % 24
    } else {
        now.hour()
    };

    TimeWindow {
        base_date: now.format("%Y%m%d").to_string(),
        base_time: format!("{:02}00", hour),
    }
}
