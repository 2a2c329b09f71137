//! UTM campaign tagging.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::LinkError;

/// Query keys written by [`build_tracked_url`], in emission order.
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

#[allow(clippy::unwrap_used)]
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Campaign tracking parameters.
///
/// Empty values are treated as absent and never reach the output URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    /// Traffic origin, e.g. `twitter` or `newsletter`.
    #[serde(default)]
    pub source: String,
    /// Channel type, e.g. `social` or `email`.
    #[serde(default)]
    pub medium: String,
    /// Campaign name.
    #[serde(default)]
    pub campaign: String,
    /// Paid-search keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Creative variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UtmParams {
    /// Create a parameter set with the three core fields.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            medium: medium.into(),
            campaign: campaign.into(),
            term: None,
            content: None,
        }
    }

    /// Set the paid-search keyword.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Set the creative variant.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Non-blank `(key, value)` pairs in the order of [`UTM_KEYS`].
    ///
    /// Values made only of whitespace count as blank.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let values = [
            Some(self.source.as_str()),
            Some(self.medium.as_str()),
            Some(self.campaign.as_str()),
            self.term.as_deref(),
            self.content.as_deref(),
        ];
        UTM_KEYS
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (key, v))
            })
    }

    /// Whether no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

/// Parse a user-supplied base URL, adding `https://` when no scheme is present.
///
/// Bare domains such as `example.com` are accepted.
pub fn parse_base_url(input: &str) -> Result<Url, LinkError> {
    let trimmed = input.trim();
    let candidate = if SCHEME_RE.is_match(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    };

    Url::parse(&candidate).map_err(|reason| {
        tracing::warn!(input = %input, error = %reason, "Rejected base URL");
        LinkError::InvalidUrl {
            input: input.to_string(),
            reason,
        }
    })
}

/// Append UTM parameters to `base_url`.
///
/// Each non-blank field overwrites an existing value for its key; other query
/// parameters keep their position. Values are form-urlencoded.
pub fn build_tracked_url(base_url: &str, params: &UtmParams) -> Result<String, LinkError> {
    let mut url = parse_base_url(base_url)?;

    let updates: Vec<(&str, &str)> = params.pairs().collect();
    if !updates.is_empty() {
        set_query_params(&mut url, &updates);
    }

    tracing::debug!(url = %url, params = updates.len(), "Built tracked URL");
    Ok(url.into())
}

/// Remove every `utm_*` parameter from `url`.
pub fn strip_tracking_params(url: &str) -> Result<String, LinkError> {
    let mut parsed = parse_base_url(url)?;
    if parsed.query().is_none() {
        return Ok(parsed.into());
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !key.starts_with("utm_"))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }

    Ok(parsed.into())
}

/// Set query parameters with `URLSearchParams.set` semantics: the first
/// occurrence of a key is replaced in place and later duplicates are dropped.
fn set_query_params(url: &mut Url, updates: &[(&str, &str)]) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for &(key, value) in updates {
        match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value.to_string();
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
