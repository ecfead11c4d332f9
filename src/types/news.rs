use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tone of a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSentiment {
    Positive,
    Neutral,
    Negative,
}

/// A headline as served by `GET /api/news`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub source: String,
    /// Relative age, e.g. "3hr ago".
    pub time: String,
    pub sentiment: NewsSentiment,
}

/// Render the age of `published_at` relative to `now`.
pub fn relative_time(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(published_at);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}min ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}hr ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now + Duration::minutes(5), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(12), now), "12min ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3hr ago");
        assert_eq!(relative_time(now - Duration::hours(49), now), "2d ago");
    }
}
