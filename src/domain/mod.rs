//! # Domain Layer
//!
//! Core models, errors and the prompt template.
//! This layer is independent of external frameworks and infrastructure.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
