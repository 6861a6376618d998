//! Core traits and types shared by the factored MDP crates
//!
//! This crate provides the error type, the experience counter contract
//! consumed by learned models, and the generative [`Model`] interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod experience;
pub mod model;

// Re-export core traits and types
pub use error::{MdpError, Result};
pub use experience::{Experience, ExperienceSource};
pub use model::Model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Experience, ExperienceSource, MdpError, Model, Result};
}
