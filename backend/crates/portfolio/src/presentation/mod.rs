//! Presentation Layer
//!
//! HTTP handlers and router for the portfolio content.

pub mod handlers;
pub mod router;
