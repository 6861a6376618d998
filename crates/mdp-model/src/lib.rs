//! Empirical MDP models for model-based reinforcement learning
//!
//! [`RLModel`] turns the visit and reward counters of an
//! [`ExperienceSource`](mdp_core::ExperienceSource) into normalized
//! transition probabilities and mean rewards that planners can query and
//! sample.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod rl_model;

pub use config::RLModelConfig;
pub use rl_model::{RLModel, RewardTable, TransitionTable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{RLModel, RLModelConfig};
    pub use mdp_core::prelude::*;
}
