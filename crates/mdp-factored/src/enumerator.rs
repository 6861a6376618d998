//! Enumeration of every joint assignment over a subset of factors

use std::iter::FusedIterator;
use std::ops::Deref;

use crate::factors::{Factors, PartialFactors};

/// Cursor over all assignments of a set of factor ids, in mixed-radix order.
///
/// The first id varies fastest. One id may be held fixed at 0 ("skipped"),
/// which is how a single variable's neighborhood is scanned: every joint
/// setting of the others while that one stays put.
///
/// The cursor only moves forward. Once the last combination has been
/// passed the value sequence is cleared and [`is_valid`](Self::is_valid)
/// turns false for good; build a new enumerator to start over. An empty id
/// set is exhausted from the start.
///
/// ```
/// use mdp_factored::PartialFactorsEnumerator;
///
/// let mut e = PartialFactorsEnumerator::new(vec![2, 3], vec![0, 1]);
/// let mut seen = 0;
/// while e.is_valid() {
///     seen += 1;
///     e.advance();
/// }
/// assert_eq!(seen, 6);
/// ```
#[derive(Debug, Clone)]
pub struct PartialFactorsEnumerator {
    space: Factors,
    factors: PartialFactors,
    skip: Option<usize>,
}

impl PartialFactorsEnumerator {
    /// Enumerate all assignments of `ids`, with cardinalities from `space`
    #[must_use]
    pub fn new(space: Factors, ids: Vec<usize>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]), "unsorted ids: {ids:?}");
        debug_assert!(ids.iter().all(|&id| id < space.len()), "ids outside the space");
        let values = vec![0; ids.len()];
        Self {
            space,
            factors: PartialFactors { ids, values },
            skip: None,
        }
    }

    /// Like [`new`](Self::new), but factor `skip_id` stays at 0 throughout.
    ///
    /// A `skip_id` that is not among `ids` skips nothing.
    #[must_use]
    pub fn with_skip(space: Factors, ids: Vec<usize>, skip_id: usize) -> Self {
        let mut retval = Self::new(space, ids);
        retval.skip = retval.factors.ids.iter().position(|&id| id == skip_id);
        retval
    }

    /// Step to the next combination, or exhaust the cursor after the last.
    pub fn advance(&mut self) {
        let len = self.factors.values.len();
        let mut pos = usize::from(self.skip == Some(0));
        while pos < len {
            let value = &mut self.factors.values[pos];
            *value += 1;
            if *value < self.space[self.factors.ids[pos]] {
                return;
            }
            *value = 0;
            pos += 1;
            if Some(pos) == self.skip {
                pos += 1;
            }
        }
        self.factors.values.clear();
    }

    /// Whether a combination is currently available
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.factors.values.is_empty()
    }

    /// Position within the enumerated ids of the skipped factor, if any
    #[must_use]
    pub fn skip_position(&self) -> Option<usize> {
        self.skip
    }

    /// The current combination; overwritten by the next [`advance`](Self::advance)
    #[must_use]
    pub fn current(&self) -> &PartialFactors {
        &self.factors
    }

    /// Mutable access to the current combination.
    ///
    /// Lets callers set the skipped factor to the value they are examining.
    /// Other values must stay in range or the enumeration order breaks.
    pub fn current_mut(&mut self) -> &mut PartialFactors {
        &mut self.factors
    }

    /// The space the cardinalities are taken from
    #[must_use]
    pub fn space(&self) -> &[usize] {
        &self.space
    }
}

impl Deref for PartialFactorsEnumerator {
    type Target = PartialFactors;

    fn deref(&self) -> &Self::Target {
        &self.factors
    }
}

impl Iterator for PartialFactorsEnumerator {
    type Item = PartialFactors;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_valid() {
            return None;
        }
        let retval = self.factors.clone();
        self.advance();
        Some(retval)
    }
}

impl FusedIterator for PartialFactorsEnumerator {}
