use crate::types::{SentimentScore, SentimentSnapshot};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Holds the aggregate sentiment served by `/api/sentiment`.
pub struct SentimentService {
    score: AtomicU8,
}

impl SentimentService {
    pub fn new(score: u8) -> Arc<Self> {
        Arc::new(Self {
            score: AtomicU8::new(SentimentScore::new(score).value()),
        })
    }

    pub fn score(&self) -> SentimentScore {
        SentimentScore::new(self.score.load(Ordering::Relaxed))
    }

    pub fn set_score(&self, score: u8) {
        self.score
            .store(SentimentScore::new(score).value(), Ordering::Relaxed);
    }

    /// Current snapshot, labelled from the score.
    pub fn snapshot(&self) -> SentimentSnapshot {
        SentimentSnapshot::for_score(self.score())
    }
}
