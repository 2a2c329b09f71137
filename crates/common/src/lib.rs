//! Common utilities and shared types for socialdesk.
//!
//! This crate provides foundational components used across all socialdesk crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Clock**: Injectable time source via [`Clock`]
//! - **ID Generation**: Short-link slugs via [`SlugGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use socialdesk_common::{AppResult, Config, SlugGenerator};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let slugs = SlugGenerator::new(config.links.slug_length);
//!     println!("Generated slug: {}", slugs.generate());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::{DEFAULT_SLUG_LENGTH, SlugGenerator};
