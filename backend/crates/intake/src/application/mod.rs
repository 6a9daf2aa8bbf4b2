//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod contact;
pub mod status;
pub mod validate;

pub use contact::{
    ListContactSubmissionsUseCase, SubmitContactInput, SubmitContactUseCase,
};
pub use status::{ListStatusChecksUseCase, RecordStatusInput, RecordStatusUseCase};
