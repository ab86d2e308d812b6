//! Domain services containing core business logic.

mod error;
mod prompt;

pub use error::*;
pub use prompt::*;
