//! Link tooling for socialdesk.
//!
//! - **UTM tagging**: append campaign tracking parameters via [`build_tracked_url`]
//! - **Short links**: produce display slugs via [`shorten_url`] or a configured [`LinkShortener`]
//!
//! # Example
//!
//! ```
//! use socialdesk_links::{UtmParams, build_tracked_url};
//!
//! let params = UtmParams::new("twitter", "social", "launch");
//! let url = build_tracked_url("example.com", &params).unwrap();
//! assert_eq!(
//!     url,
//!     "https://example.com/?utm_source=twitter&utm_medium=social&utm_campaign=launch"
//! );
//! ```

mod error;
mod shortener;
mod utm;

pub use error::LinkError;
pub use shortener::{
    DEFAULT_SHORT_DOMAIN, LinkShortener, ShortenedLink, sanitize_alias, shorten_url,
};
pub use utm::{UTM_KEYS, UtmParams, build_tracked_url, parse_base_url, strip_tracking_params};
