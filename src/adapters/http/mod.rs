//! HTTP adapters - server-rendered pages and report endpoints.
//!
//! Each area has its own module with handlers and routes:
//!
//! - `base` - Project list
//! - `changes` - Changelog entries
//! - `lesson` - Worksheets, further reading and the invalid link report
//!
//! `urls` holds the named route table shared by routing and link building.

pub mod base;
pub mod changes;
pub mod errors;
pub mod lesson;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod urls;

pub use errors::HttpError;
pub use middleware::{AuthState, OptionalAuth, RequireAuth};
pub use router::{app_router, site_routes, RouterConfig};
pub use state::{AppState, SiteSettings};
pub use urls::{reverse, LocalePrefix, ReverseError, Urls};
