//! Selected-hashtag tracking.

use serde::{Deserialize, Serialize};

use crate::candidate::normalize_tag;

/// Hard cap on the number of selected hashtags.
pub const MAX_SELECTED_HASHTAGS: usize = 30;

/// Ordered set of hashtags a user picked.
///
/// Selecting past the limit is silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct HashtagSelection {
    selected: Vec<String>,
    limit: usize,
}

/// Unchecked wire form of [`HashtagSelection`].
#[derive(Deserialize)]
struct RawSelection {
    #[serde(default)]
    selected: Vec<String>,
    #[serde(default = "default_limit")]
    limit: usize,
}

const fn default_limit() -> usize {
    MAX_SELECTED_HASHTAGS
}

impl From<RawSelection> for HashtagSelection {
    fn from(raw: RawSelection) -> Self {
        let mut selection = Self::with_limit(raw.limit);
        for tag in &raw.selected {
            selection.select(tag);
        }
        selection
    }
}

impl Default for HashtagSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl HashtagSelection {
    /// Create an empty selection capped at [`MAX_SELECTED_HASHTAGS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
            limit: MAX_SELECTED_HASHTAGS,
        }
    }

    /// Create an empty selection with a lower cap.
    ///
    /// Limits above [`MAX_SELECTED_HASHTAGS`] are clamped to it.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            selected: Vec::new(),
            limit: limit.min(MAX_SELECTED_HASHTAGS),
        }
    }

    /// Flip the selection state of `tag`.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        if let Some(index) = self.position(&tag) {
            self.selected.remove(index);
            false
        } else {
            self.push(tag)
        }
    }

    /// Select `tag` if it is not selected yet.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn select(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };

        if self.position(&tag).is_some() {
            true
        } else {
            self.push(tag)
        }
    }

    /// Deselect `tag`. Returns whether it was selected.
    pub fn deselect(&mut self, tag: &str) -> bool {
        let Some(index) = normalize_tag(tag).and_then(|t| self.position(&t)) else {
            return false;
        };
        self.selected.remove(index);
        true
    }

    /// Whether `tag` is selected.
    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|t| self.position(&t).is_some())
    }

    /// Selected tags in selection order, without `#`.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.selected
    }

    /// Number of selected tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The cap of this selection.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the cap is reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.limit.min(MAX_SELECTED_HASHTAGS)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Space-separated `#tag` list, ready to paste into a caption.
    #[must_use]
    pub fn to_caption_string(&self) -> String {
        self.selected
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.selected.iter().position(|t| t == tag)
    }

    fn push(&mut self, tag: String) -> bool {
        if self.is_full() {
            tracing::debug!(tag = %tag, limit = self.limit, "Selection full, ignoring tag");
            return false;
        }
        self.selected.push(tag);
        true
    }
}
