//! Domain Layer - Entities and repository traits
//!
//! This layer contains:
//! - Domain entities (ContactSubmission, StatusCheck)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
