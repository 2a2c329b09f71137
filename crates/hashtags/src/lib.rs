//! Hashtag suggestions for socialdesk.
//!
//! This crate ranks hashtag candidates for a post and tracks which ones a
//! user picked.
//!
//! - **Ranking**: [`generate_hashtags`] returns candidates sorted by relevance
//! - **Knowledge base**: static per-platform tables in [`tables`]
//! - **Selection**: a capped, ordered pick list via [`HashtagSelection`]
//!
//! # Example
//!
//! ```
//! use socialdesk_hashtags::{HashtagSelection, generate_hashtags};
//!
//! let candidates = generate_hashtags("Launching our spring collection", "instagram");
//! let mut selection = HashtagSelection::new();
//! for candidate in candidates.iter().take(5) {
//!     selection.toggle(&candidate.tag);
//! }
//! assert_eq!(selection.len(), 5);
//! ```

mod candidate;
mod platform;
mod ranker;
mod selection;
pub mod tables;

pub use candidate::{Competition, HashtagCandidate, Popularity, normalize_tag};
pub use platform::{Platform, PlatformParseError};
pub use ranker::{generate_hashtags, generate_hashtags_for, rank};
pub use selection::{HashtagSelection, MAX_SELECTED_HASHTAGS};
