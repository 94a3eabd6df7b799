//! Display Formatting

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M";

/// Format a server timestamp in the browser's local time
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    format_timestamp_in(at, &Local)
}

pub fn format_timestamp_in<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_timestamp_in_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        assert_eq!(format_timestamp_in(&at, &Utc), "01 Mar 2024, 23:30");

        let madrid = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_timestamp_in(&at, &madrid), "02 Mar 2024, 00:30");
    }
}
