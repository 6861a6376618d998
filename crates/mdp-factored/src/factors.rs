//! Factored spaces and mixed-radix index arithmetic
//!
//! A space is described by [`Factors`], the cardinality of each variable.
//! Assignments are either dense (one value per variable, also a [`Factors`])
//! or sparse ([`PartialFactors`]). Flat indices are mixed-radix numbers with
//! dimension 0 as the least significant digit.
//!
//! The index functions do not bounds check their inputs: values must be
//! below their cardinality and partial ids must be sorted and inside the
//! space. Debug builds assert the cheap parts of these preconditions.

use serde::{Deserialize, Serialize};

use mdp_core::{MdpError, Result};

/// Cardinalities of a factored space, or a dense assignment over one
pub type Factors = Vec<usize>;

/// Sparse assignment of values to a sorted subset of factor ids.
///
/// `ids` and `values` are parallel: `values[i]` is the value of factor
/// `ids[i]`. `ids` is strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialFactors {
    /// Assigned factor ids, strictly increasing
    pub ids: Vec<usize>,
    /// Value of each assigned factor
    pub values: Vec<usize>,
}

impl PartialFactors {
    /// Create a partial assignment, checking the id ordering invariant
    pub fn new(ids: Vec<usize>, values: Vec<usize>) -> Result<Self> {
        if ids.len() != values.len() {
            return Err(MdpError::DimensionMismatch {
                expected: ids.len(),
                actual: values.len(),
            });
        }
        if !ids.windows(2).all(|w| w[0] < w[1]) {
            return Err(MdpError::UnsortedIds);
        }
        Ok(Self { ids, values })
    }

    /// Number of assigned factors
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no factor is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Value assigned to factor `id`, if any
    #[must_use]
    pub fn get(&self, id: usize) -> Option<usize> {
        self.ids.binary_search(&id).ok().map(|i| self.values[i])
    }

    /// Iterate over `(id, value)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ids.iter().copied().zip(self.values.iter().copied())
    }

    /// Whether every value is legal for its factor in `space`
    #[must_use]
    pub fn fits(&self, space: &[usize]) -> bool {
        self.iter().all(|(id, v)| id < space.len() && v < space[id])
    }

    pub(crate) fn debug_check(&self) {
        debug_assert_eq!(self.ids.len(), self.values.len());
        debug_assert!(self.ids.windows(2).all(|w| w[0] < w[1]), "unsorted ids: {:?}", self.ids);
    }
}

/// Number of joint assignments of `space`.
///
/// Saturates to `usize::MAX` when the product does not fit.
#[must_use]
pub fn factor_space(space: &[usize]) -> usize {
    saturating_product(space.iter().copied())
}

/// Number of joint assignments of the factors `ids` of `space`.
///
/// Saturates to `usize::MAX` when the product does not fit.
#[must_use]
pub fn factor_space_partial(ids: &[usize], space: &[usize]) -> usize {
    saturating_product(ids.iter().map(|&id| space[id]))
}

fn saturating_product(cardinalities: impl Iterator<Item = usize>) -> usize {
    let mut retval: usize = 1;
    for f in cardinalities {
        debug_assert!(f > 0, "factor with zero cardinality");
        if usize::MAX / f < retval {
            return usize::MAX;
        }
        retval *= f;
    }
    retval
}

/// Flat index of a dense assignment.
#[must_use]
pub fn to_index(space: &[usize], f: &[usize]) -> usize {
    debug_assert_eq!(space.len(), f.len());
    let mut result = 0;
    let mut multiplier: usize = 1;
    for (&card, &value) in space.iter().zip(f) {
        debug_assert!(value < card);
        result += multiplier * value;
        // The multiplier past the last dimension is never read.
        multiplier = multiplier.wrapping_mul(card);
    }
    result
}

/// Flat index, over the whole of `space`, of a partial assignment.
///
/// Unassigned dimensions count as 0, so the result equals [`to_index`] of
/// the zero-filled dense assignment.
#[must_use]
pub fn to_index_partial_factors(space: &[usize], pf: &PartialFactors) -> usize {
    pf.debug_check();
    let mut assigned = pf.iter().peekable();
    let mut result = 0;
    let mut multiplier = 1;
    for (i, &card) in space.iter().enumerate() {
        let Some(&(id, value)) = assigned.peek() else {
            break;
        };
        if id == i {
            result += multiplier * value;
            assigned.next();
            if assigned.peek().is_none() {
                break;
            }
        }
        multiplier *= card;
    }
    debug_assert!(assigned.peek().is_none(), "partial ids outside the space");
    result
}

/// Compact index of the dimensions `ids` of a dense assignment.
///
/// The result addresses the subspace `ids` spans, walked in the order
/// `ids` is given, not the whole of `space`.
#[must_use]
pub fn to_index_partial(ids: &[usize], space: &[usize], f: &[usize]) -> usize {
    debug_assert_eq!(space.len(), f.len());
    debug_assert!(ids.iter().all(|&id| id < space.len()), "ids outside the space");
    let mut result = 0;
    let mut multiplier: usize = 1;
    for &id in ids {
        result += multiplier * f[id];
        multiplier = multiplier.wrapping_mul(space[id]);
    }
    result
}

/// Compact index of a partial assignment over the subspace of its own ids.
#[must_use]
pub fn to_index_partial_pf(space: &[usize], pf: &PartialFactors) -> usize {
    pf.debug_check();
    let mut result = 0;
    let mut multiplier: usize = 1;
    for (id, value) in pf.iter() {
        result += multiplier * value;
        multiplier = multiplier.wrapping_mul(space[id]);
    }
    result
}

/// Dense assignment encoded by `index`; inverse of [`to_index`].
#[must_use]
pub fn to_factors(space: &[usize], mut index: usize) -> Factors {
    space
        .iter()
        .map(|&card| {
            let value = index % card;
            index /= card;
            value
        })
        .collect()
}

/// Dense assignment of `len` factors, zero wherever `pf` assigns nothing.
#[must_use]
pub fn to_factors_from_partial(len: usize, pf: &PartialFactors) -> Factors {
    pf.debug_check();
    debug_assert!(pf.ids.last().map_or(true, |&id| id < len), "ids reach past {len}");
    let mut f = vec![0; len];
    for (id, value) in pf.iter() {
        f[id] = value;
    }
    f
}

/// Wrap a dense assignment as a partial one over every id.
#[must_use]
pub fn to_partial_factors(f: &[usize]) -> PartialFactors {
    PartialFactors {
        ids: (0..f.len()).collect(),
        values: f.to_vec(),
    }
}
