//! Submission Intake Module
//!
//! Persists the two record kinds submitted from the public site:
//! contact submissions and status checks. Both are insert-only; the only
//! read is an unfiltered list capped at a configurable limit.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases, validation, config
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IntakeConfig;
pub use error::{IntakeError, IntakeResult};
pub use infra::postgres::PgIntakeRepository;
pub use presentation::router::{intake_router, intake_router_generic};

#[cfg(test)]
mod tests;
