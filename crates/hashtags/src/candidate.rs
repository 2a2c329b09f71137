//! Hashtag candidates.

use serde::{Deserialize, Serialize};

/// Popularity bucket derived from estimated post volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    /// One million posts or more.
    High,
    /// 100k to under one million posts.
    Medium,
    /// 10k to under 100k posts.
    Low,
    /// Fewer than 10k posts.
    Niche,
}

impl Popularity {
    /// Bucket an estimated post count.
    #[must_use]
    pub const fn from_volume(volume: u64) -> Self {
        match volume {
            1_000_000.. => Self::High,
            100_000.. => Self::Medium,
            10_000.. => Self::Low,
            _ => Self::Niche,
        }
    }
}

/// How crowded a tag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    /// Crowded; posts sink quickly.
    High,
    /// Moderately crowded.
    Medium,
    /// Few competing posts.
    Low,
}

/// A proposed hashtag with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagCandidate {
    /// Tag text without the leading `#`; always `[a-z0-9]+`.
    pub tag: String,
    /// Bucket of `volume`.
    pub popularity: Popularity,
    /// Estimated number of posts using the tag.
    pub volume: u64,
    /// Fit to the post, 0 to 100.
    pub relevance: u8,
    /// How crowded the tag is.
    pub competition: Competition,
    /// Whether the tag is currently trending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

impl HashtagCandidate {
    /// Create a candidate, normalizing the tag.
    ///
    /// Returns `None` when nothing of the tag survives normalization.
    /// Relevance is clamped to 100.
    #[must_use]
    pub fn new(tag: &str, volume: u64, relevance: u8, competition: Competition) -> Option<Self> {
        Some(Self {
            tag: normalize_tag(tag)?,
            popularity: Popularity::from_volume(volume),
            volume,
            relevance: relevance.min(100),
            competition,
            trending: None,
        })
    }

    /// Mark the candidate as trending or not.
    #[must_use]
    pub fn with_trending(mut self, trending: bool) -> Self {
        self.trending = Some(trending);
        self
    }

    /// Whether the candidate is flagged as trending.
    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.trending.unwrap_or(false)
    }

    /// The tag with its leading `#`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("#{}", self.tag)
    }
}

/// Normalize user or table input to a bare tag.
///
/// Leading `#` characters are stripped, the rest is lowercased and anything
/// outside `[a-z0-9]` is removed.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag: String = raw
        .trim()
        .trim_start_matches('#')
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if tag.is_empty() { None } else { Some(tag) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_popularity_buckets() {
        assert_eq!(Popularity::from_volume(5_000_000), Popularity::High);
        assert_eq!(Popularity::from_volume(1_000_000), Popularity::High);
        assert_eq!(Popularity::from_volume(999_999), Popularity::Medium);
        assert_eq!(Popularity::from_volume(100_000), Popularity::Medium);
        assert_eq!(Popularity::from_volume(10_000), Popularity::Low);
        assert_eq!(Popularity::from_volume(9_999), Popularity::Niche);
        assert_eq!(Popularity::from_volume(0), Popularity::Niche);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("#Rust").as_deref(), Some("rust"));
        assert_eq!(normalize_tag("  ##Social_Media 2024 ").as_deref(), Some("socialmedia2024"));
        assert_eq!(normalize_tag("#café").as_deref(), Some("caf"));
        assert_eq!(normalize_tag("#"), None);
        assert_eq!(normalize_tag("  "), None);
    }

    #[test]
    fn test_new_candidate() {
        let candidate = HashtagCandidate::new("#GrowthHacking", 45_000, 140, Competition::Low)
            .unwrap()
            .with_trending(true);
        assert_eq!(candidate.tag, "growthhacking");
        assert_eq!(candidate.popularity, Popularity::Low);
        assert_eq!(candidate.relevance, 100);
        assert!(candidate.is_trending());
        assert_eq!(candidate.display(), "#growthhacking");

        assert!(HashtagCandidate::new("!!!", 10, 10, Competition::Low).is_none());
    }

    #[test]
    fn test_json_shape() {
        let candidate = HashtagCandidate::new("marketing", 1_800_000, 88, Competition::High).unwrap();
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["tag"], "marketing");
        assert_eq!(value["popularity"], "high");
        assert_eq!(value["competition"], "high");
        assert_eq!(value["relevance"], 88);
        assert!(value.get("trending").is_none());
    }
}
