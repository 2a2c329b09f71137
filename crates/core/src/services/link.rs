//! Link service.

use std::sync::Arc;

use socialdesk_common::{AppError, AppResult, Clock, Config, SystemClock};
use socialdesk_links::{
    LinkShortener, ShortenedLink, UtmParams, build_tracked_url, strip_tracking_params,
};

use crate::latency::{self, Latency};

/// Link service for UTM tagging and short links.
#[derive(Clone)]
pub struct LinkService {
    shortener: Arc<LinkShortener<Arc<dyn Clock>>>,
    latency: Arc<dyn Latency>,
}

impl LinkService {
    /// Create a new link service from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let shortener = LinkShortener::from_config(&config.links).with_clock(clock);
        tracing::info!(
            domain = %shortener.domain(),
            latency_ms = config.latency.shorten_ms,
            "Link service ready"
        );

        Self {
            shortener: Arc::new(shortener),
            latency: latency::from_millis(config.latency.shorten_ms),
        }
    }

    /// Replace the clock used for `createdAt`.
    #[must_use]
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        let shortener = (*self.shortener).clone().with_clock(clock);
        Self {
            shortener: Arc::new(shortener),
            ..self
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub fn with_latency(self, latency: Arc<dyn Latency>) -> Self {
        Self { latency, ..self }
    }

    /// The short-link domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.shortener.domain()
    }

    /// Append UTM parameters to a base URL.
    pub fn build_tracked_url(&self, base_url: &str, params: &UtmParams) -> AppResult<String> {
        Ok(build_tracked_url(base_url, params)?)
    }

    /// Replace every UTM parameter on an already tagged URL.
    ///
    /// Old `utm_*` keys are dropped even when `params` leaves them blank.
    pub fn retag(&self, tagged_url: &str, params: &UtmParams) -> AppResult<String> {
        let untagged = strip_tracking_params(tagged_url)?;
        tracing::debug!(from = %tagged_url, to = %untagged, "Stripped UTM parameters");
        self.build_tracked_url(&untagged, params)
    }

    /// Generate a short link for `original_url`.
    pub async fn shorten(
        &self,
        original_url: &str,
        custom_alias: Option<&str>,
    ) -> AppResult<ShortenedLink> {
        let original_url = original_url.trim();
        if original_url.is_empty() {
            return Err(AppError::Validation("URL is required".to_string()));
        }

        self.latency.wait().await;
        let link = self.shortener.shorten(original_url, custom_alias);
        tracing::info!(short_url = %link.short_url, "Shortened link");
        Ok(link)
    }

    /// Tag `base_url` with UTM parameters, then shorten the result.
    pub async fn shorten_tracked(
        &self,
        base_url: &str,
        params: &UtmParams,
        custom_alias: Option<&str>,
    ) -> AppResult<ShortenedLink> {
        let tracked = self.build_tracked_url(base_url, params)?;
        self.shorten(&tracked, custom_alias).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use socialdesk_common::FixedClock;

    fn service() -> LinkService {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        LinkService::new(&Config::default()).with_clock(Arc::new(FixedClock(at)))
    }

    #[test]
    fn test_build_tracked_url() {
        let url = service()
            .build_tracked_url("example.com", &UtmParams::new("twitter", "social", "launch"))
            .unwrap();
        assert_eq!(
            url,
            "https://example.com/?utm_source=twitter&utm_medium=social&utm_campaign=launch"
        );
    }

    #[test]
    fn test_invalid_url_maps_to_app_error() {
        let err = service()
            .build_tracked_url("not a url at all???", &UtmParams::default())
            .unwrap_err();
        match err {
            AppError::InvalidUrl { input, .. } => assert_eq!(input, "not a url at all???"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_retag_replaces_old_campaign() {
        let url = service()
            .retag(
                "https://example.com/p?id=7&utm_source=x&utm_term=old&utm_campaign=spring",
                &UtmParams::new("twitter", "social", "summer"),
            )
            .unwrap();
        assert_eq!(
            url,
            "https://example.com/p?id=7&utm_source=twitter&utm_medium=social&utm_campaign=summer"
        );
    }

    #[test]
    fn test_retag_with_blank_params_only_strips() {
        let url = service()
            .retag("example.com/?utm_source=x", &UtmParams::default())
            .unwrap();
        assert_eq!(url, "https://example.com/");

        let err = service().retag("", &UtmParams::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_shorten() {
        let service = service();
        let link = service.shorten(" https://x.com/y ", Some("Summer Sale")).await.unwrap();
        assert_eq!(link.short_url, "short.link/summersale");
        assert_eq!(link.original_url, "https://x.com/y");
        assert_eq!(
            link.created_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_shorten_requires_url() {
        let err = service().shorten("   ", None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_shorten_tracked() {
        let link = service()
            .shorten_tracked(
                "example.com/pricing",
                &UtmParams::new("newsletter", "email", "june"),
                Some("june"),
            )
            .await
            .unwrap();
        assert_eq!(link.slug(), "june");
        assert_eq!(
            link.original_url,
            "https://example.com/pricing?utm_source=newsletter&utm_medium=email&utm_campaign=june"
        );
    }
}
