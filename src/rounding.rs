//! Canonical boundaries for matched timestamps.

use chrono::{DateTime, NaiveTime, TimeDelta, Timelike, Utc};

pub fn round_to_midnight(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Start of the hour after the one containing `t`.
///
/// Always rounds up: a timestamp already on the hour still advances by one
/// hour, so applying this twice to `14:00` yields `16:00`. `None` when the
/// next hour is past the last representable instant.
pub fn round_to_next_hour(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    round_to_midnight(t).checked_add_signed(TimeDelta::hours(i64::from(t.hour()) + 1))
}
