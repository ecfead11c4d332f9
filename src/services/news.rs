use crate::types::{relative_time, NewsItem, NewsSentiment};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};
use tracing::warn;

/// A stored headline with its absolute publish time.
#[derive(Debug, Clone)]
struct NewsEntry {
    id: u32,
    title: String,
    source: String,
    published_at: DateTime<Utc>,
    sentiment: NewsSentiment,
}

impl NewsEntry {
    fn to_item(&self, now: DateTime<Utc>) -> NewsItem {
        NewsItem {
            id: self.id,
            title: self.title.clone(),
            source: self.source.clone(),
            time: relative_time(self.published_at, now),
            sentiment: self.sentiment,
        }
    }
}

/// In-memory news feed, newest first.
pub struct NewsService {
    entries: RwLock<Vec<NewsEntry>>,
}

impl NewsService {
    /// Feed seeded with the default headlines, aged relative to now.
    pub fn new() -> Arc<Self> {
        let now = Utc::now();
        let seed = [
            (
                "Major exchange lists new token; market reacting.",
                "CoinDesk",
                1,
                NewsSentiment::Positive,
            ),
            (
                "Federal regulator announces new crypto hearing.",
                "Reuters",
                3,
                NewsSentiment::Neutral,
            ),
            (
                "Large volume liquidation event detected.",
                "WhaleAlert",
                5,
                NewsSentiment::Negative,
            ),
        ];

        let entries = seed
            .into_iter()
            .enumerate()
            .map(|(i, (title, source, hours, sentiment))| NewsEntry {
                id: i as u32 + 1,
                title: title.to_string(),
                source: source.to_string(),
                published_at: now - Duration::hours(hours),
                sentiment,
            })
            .collect();

        Arc::new(Self {
            entries: RwLock::new(entries),
        })
    }

    /// Empty feed.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            entries: RwLock::new(Vec::new()),
        })
    }

    /// Add a headline published now. Returns its id.
    pub fn publish(&self, title: &str, source: &str, sentiment: NewsSentiment) -> u32 {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("News feed lock poisoned, recovering");
                poisoned.into_inner()
            }
        };
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.insert(
            0,
            NewsEntry {
                id,
                title: title.to_string(),
                source: source.to_string(),
                published_at: Utc::now(),
                sentiment,
            },
        );
        id
    }

    /// Headlines with ages rendered relative to `now`.
    pub fn latest_at(&self, now: DateTime<Utc>) -> Vec<NewsItem> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.iter().map(|e| e.to_item(now)).collect()
    }

    pub fn latest(&self) -> Vec<NewsItem> {
        self.latest_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed() {
        let news = NewsService::new().latest();
        assert_eq!(news.len(), 3);
        assert_eq!(news[0].id, 1);
        assert_eq!(news[0].time, "1hr ago");
        assert_eq!(news[1].source, "Reuters");
        assert_eq!(news[2].sentiment, NewsSentiment::Negative);
    }

    #[test]
    fn test_publish_goes_first() {
        let service = NewsService::new();
        let id = service.publish("ETF inflows hit record", "Bloomberg", NewsSentiment::Positive);
        assert_eq!(id, 4);

        let news = service.latest();
        assert_eq!(news.len(), 4);
        assert_eq!(news[0].title, "ETF inflows hit record");
        assert_eq!(news[0].time, "just now");
    }

    #[test]
    fn test_empty_feed() {
        let service = NewsService::empty();
        assert!(service.latest().is_empty());
        assert_eq!(service.publish("t", "s", NewsSentiment::Neutral), 1);
    }
}
