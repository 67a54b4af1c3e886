use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Formats a timestamp as whole-second UTC ISO-8601, e.g. `2024-01-01T12:00:00Z`.
///
/// Sub-second precision is truncated, never rounded.
pub fn iso8601_seconds(timestamp: DateTime<Utc>) -> String {
    timestamp
        .trunc_subsecs(0)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_formats_utc_with_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(iso8601_seconds(ts), "2024-03-09T07:05:01Z");
    }

    #[test]
    fn test_truncates_subseconds() {
        let ts = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();

        assert_eq!(iso8601_seconds(ts), "2024-12-31T23:59:59Z");
    }
}
