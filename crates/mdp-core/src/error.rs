//! Error types for the MDP core library

use thiserror::Error;

/// Core error type for MDP operations
#[derive(Error, Debug)]
pub enum MdpError {
    /// Two sequences that must be parallel have different lengths
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the reference sequence
        expected: usize,
        /// Length actually found
        actual: usize,
    },

    /// Factor ids are not strictly increasing
    #[error("Factor ids must be sorted ascending with no duplicates")]
    UnsortedIds,

    /// Two partial assignments both assign the same factor
    #[error("Factor {id} is assigned by both operands")]
    DuplicateFactor {
        /// The shared factor id
        id: usize,
    },

    /// An index fell outside the space it addresses
    #[error("{what} index {index} out of range (bound {bound})")]
    OutOfRange {
        /// Kind of index, e.g. "state" or "action"
        what: &'static str,
        /// The offending index
        index: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for MDP operations
pub type Result<T> = std::result::Result<T, MdpError>;
