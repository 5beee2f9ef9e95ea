//! Time labels shown next to messages and notes.

use crate::clock::EpochMs;
use chrono::{Local, TimeZone};

const TIME_FORMAT: &str = "%H:%M";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// `HH:MM` in local time.
pub fn time_label(at: EpochMs) -> String {
    time_label_in(&Local, at)
}

/// `dd/mm/yyyy HH:MM` in local time.
pub fn date_time_label(at: EpochMs) -> String {
    date_time_label_in(&Local, at)
}

pub fn time_label_in<Tz: TimeZone>(tz: &Tz, at: EpochMs) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_in(tz, at, TIME_FORMAT)
}

pub fn date_time_label_in<Tz: TimeZone>(tz: &Tz, at: EpochMs) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_in(tz, at, DATE_TIME_FORMAT)
}

fn format_in<Tz: TimeZone>(tz: &Tz, at: EpochMs, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_millis_opt(at)
        .single()
        .map(|moment| moment.format(pattern).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{date_time_label_in, time_label_in};
    use chrono::Utc;

    // 2024-03-05T14:07:09Z
    const AT: i64 = 1_709_647_629_000;

    #[test]
    fn formats_in_given_zone() {
        assert_eq!(time_label_in(&Utc, AT), "14:07");
        assert_eq!(date_time_label_in(&Utc, AT), "05/03/2024 14:07");
    }

    #[test]
    fn out_of_range_gives_empty_label() {
        assert_eq!(time_label_in(&Utc, i64::MAX), "");
    }
}
