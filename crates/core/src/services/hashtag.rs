//! Hashtag service.

use std::sync::Arc;

use socialdesk_common::Config;
use socialdesk_hashtags::{HashtagCandidate, HashtagSelection, generate_hashtags};

use crate::latency::{self, Latency};

/// Hashtag service for suggestions and selection.
#[derive(Clone)]
pub struct HashtagService {
    latency: Arc<dyn Latency>,
    max_selected: usize,
}

impl HashtagService {
    /// Create a new hashtag service from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        tracing::info!(
            max_selected = config.hashtags.max_selected,
            latency_ms = config.latency.hashtag_ms,
            "Hashtag service ready"
        );
        Self {
            latency: latency::from_millis(config.latency.hashtag_ms),
            max_selected: config.hashtags.max_selected,
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub fn with_latency(self, latency: Arc<dyn Latency>) -> Self {
        Self { latency, ..self }
    }

    /// Ranked hashtag suggestions for `content` on `platform`.
    pub async fn generate(&self, content: &str, platform: &str) -> Vec<HashtagCandidate> {
        self.latency.wait().await;
        generate_hashtags(content, platform)
    }

    /// The top `count` suggestions, for callers that only show a few.
    pub async fn suggest(&self, content: &str, platform: &str, count: usize) -> Vec<HashtagCandidate> {
        let mut candidates = self.generate(content, platform).await;
        candidates.truncate(count);
        candidates
    }

    /// An empty selection using the configured cap.
    #[must_use]
    pub fn new_selection(&self) -> HashtagSelection {
        HashtagSelection::with_limit(self.max_selected)
    }
}
