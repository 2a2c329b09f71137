//! Short-link generation.
//!
//! Only the link string is produced. Redirect serving and a persistent slug
//! store are outside this crate, so aliases are not checked for collisions.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use socialdesk_common::{Clock, SlugGenerator, SystemClock, config::LinksConfig};

/// Domain used by [`shorten_url`].
pub const DEFAULT_SHORT_DOMAIN: &str = "short.link";

/// A generated short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedLink {
    /// `<domain>/<slug>`.
    pub short_url: String,
    /// The URL the short link stands for, as supplied.
    pub original_url: String,
    /// When the link was generated.
    pub created_at: DateTime<Utc>,
    /// Click counter; always starts at zero.
    pub clicks: u64,
}

impl ShortenedLink {
    /// The slug segment of the short URL.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.short_url
            .rsplit_once('/')
            .map_or(self.short_url.as_str(), |(_, slug)| slug)
    }
}

/// Reduce a custom alias to lowercase ASCII letters, digits and hyphens.
#[must_use]
pub fn sanitize_alias(alias: &str) -> String {
    alias
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Shorten `original_url` on [`DEFAULT_SHORT_DOMAIN`].
#[must_use]
pub fn shorten_url(original_url: &str, custom_alias: Option<&str>) -> ShortenedLink {
    LinkShortener::new(DEFAULT_SHORT_DOMAIN).shorten(original_url, custom_alias)
}

/// Short-link generator bound to a domain and a clock.
#[derive(Debug, Clone)]
pub struct LinkShortener<C = SystemClock> {
    domain: String,
    slugs: SlugGenerator,
    clock: C,
}

impl LinkShortener<SystemClock> {
    /// Create a shortener for `domain` using wall-clock time.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        let domain: String = domain.into();
        Self {
            domain: domain.trim_end_matches('/').to_string(),
            slugs: SlugGenerator::default(),
            clock: SystemClock,
        }
    }

    /// Create a shortener from configuration.
    #[must_use]
    pub fn from_config(config: &LinksConfig) -> Self {
        Self::new(config.short_domain.clone()).with_slug_length(config.slug_length)
    }
}

impl<C: Clock> LinkShortener<C> {
    /// Replace the time source.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> LinkShortener<C2> {
        LinkShortener {
            domain: self.domain,
            slugs: self.slugs,
            clock,
        }
    }

    /// Change the length of random slugs. Zero keeps the default length.
    #[must_use]
    pub fn with_slug_length(mut self, length: usize) -> Self {
        self.slugs = SlugGenerator::new(length);
        self
    }

    /// The short-link domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Shorten a URL, drawing random slugs from the thread-local RNG.
    #[must_use]
    pub fn shorten(&self, original_url: &str, custom_alias: Option<&str>) -> ShortenedLink {
        self.shorten_with_rng(original_url, custom_alias, &mut rand::thread_rng())
    }

    /// Shorten a URL with an explicit RNG.
    ///
    /// A custom alias is sanitized with [`sanitize_alias`]; if nothing survives
    /// sanitization a random slug is used instead.
    pub fn shorten_with_rng<R: Rng + ?Sized>(
        &self,
        original_url: &str,
        custom_alias: Option<&str>,
        rng: &mut R,
    ) -> ShortenedLink {
        let alias = custom_alias.map(sanitize_alias).filter(|a| !a.is_empty());
        let custom = alias.is_some();
        let slug = alias.unwrap_or_else(|| self.slugs.generate_with(rng));

        tracing::debug!(slug = %slug, custom, "Generated short link");

        ShortenedLink {
            short_url: format!("{}/{slug}", self.domain),
            original_url: original_url.to_string(),
            created_at: self.clock.now(),
            clicks: 0,
        }
    }
}
