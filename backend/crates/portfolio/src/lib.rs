//! Portfolio Content Provider
//!
//! Serves the static marketing-site content:
//! - `content` - the section catalog, hardcoded and built once at startup
//! - `presentation` - HTTP handlers and router
//!
//! The catalog is never mutated after process start; there is no
//! persistence and no configuration behind it.

pub mod content;
pub mod presentation;

// Re-exports for convenience
pub use content::{PortfolioCatalog, PortfolioSection};
pub use presentation::router::portfolio_router;
