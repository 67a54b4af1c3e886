//! DTO for short URL usage statistics.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortUrlRecord;
use crate::utils::time::iso8601_seconds;

/// Usage statistics for a short URL.
///
/// `lastSeenDate` is omitted until the first redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub start_date: String,
    pub redirect_count: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_seen_date: Option<String>,
}

/// Builds the statistics body for `record`.
pub fn stats_for(record: &ShortUrlRecord) -> StatsResponse {
    let last_seen_date = if record.is_visited() {
        record.last_seen_at.map(iso8601_seconds)
    } else {
        None
    };

    StatsResponse {
        start_date: iso8601_seconds(record.created_at),
        redirect_count: record.view_count,
        last_seen_date,
    }
}

impl From<&ShortUrlRecord> for StatsResponse {
    fn from(record: &ShortUrlRecord) -> Self {
        stats_for(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};
    use serde_json::json;

    fn record() -> ShortUrlRecord {
        let created = Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();

        ShortUrlRecord::new("ab12".to_string(), "https://example.com".to_string(), created)
    }

    #[test]
    fn test_unvisited_record_omits_last_seen() {
        let stats = stats_for(&record());

        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({ "startDate": "2024-01-01T12:00:00Z", "redirectCount": 0 })
        );
    }

    #[test]
    fn test_visited_record_includes_last_seen() {
        let mut record = record();
        let seen = Utc
            .with_ymd_and_hms(2024, 1, 2, 8, 30, 15)
            .unwrap()
            .with_nanosecond(999_000_000)
            .unwrap();
        record.record_view(seen);

        let stats = StatsResponse::from(&record);

        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "startDate": "2024-01-01T12:00:00Z",
                "redirectCount": 1,
                "lastSeenDate": "2024-01-02T08:30:15Z"
            })
        );
    }

    #[test]
    fn test_last_seen_without_views_is_ignored() {
        let mut record = record();
        record.last_seen_at = Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        assert!(stats_for(&record).last_seen_date.is_none());
    }
}
