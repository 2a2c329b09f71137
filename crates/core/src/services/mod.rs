//! Business logic services.

pub mod canned_response;
pub mod hashtag;
pub mod link;

pub use canned_response::{CannedResponseService, placeholders, render_canned_response};
pub use hashtag::HashtagService;
pub use link::LinkService;
