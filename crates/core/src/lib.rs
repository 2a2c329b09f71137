//! Service layer for socialdesk.
//!
//! Services wrap the pure link and hashtag functions with configuration,
//! logging and an optional simulated delay for UI loading states.

pub mod latency;
pub mod services;

pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use services::*;
