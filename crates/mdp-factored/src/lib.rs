//! Factored state and action spaces
//!
//! Large joint spaces are described one variable at a time. This crate
//! converts between dense assignments, sparse [`PartialFactors`] and flat
//! mixed-radix indices, combines and compares partial assignments, and
//! enumerates all assignments of a subset of variables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod enumerator;
pub mod factors;

pub use algebra::{join, join_factors, matches, merge, merge_in_place, remove_factor};
pub use enumerator::PartialFactorsEnumerator;
pub use factors::{
    factor_space, factor_space_partial, to_factors, to_factors_from_partial, to_index,
    to_index_partial, to_index_partial_factors, to_index_partial_pf, to_partial_factors, Factors,
    PartialFactors,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        factor_space, matches, merge, to_factors, to_index, Factors, PartialFactors,
        PartialFactorsEnumerator,
    };
}
