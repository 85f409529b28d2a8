//! Link checker adapters.
//!
//! - `http` - Real HTTP reachability checks via reqwest
//! - `fixed` - Preset answers for tests

mod fixed;
mod http;

pub use fixed::StaticLinkChecker;
pub use http::{HttpLinkChecker, HttpLinkCheckerConfig, LinkCheckError};
