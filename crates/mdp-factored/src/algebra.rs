//! Operations combining and comparing partial assignments

use std::cmp::Ordering;

use mdp_core::{MdpError, Result};

use crate::factors::{Factors, PartialFactors};

/// Drop factor `id` from `pf`. Returns `pf` unchanged when `id` is absent.
#[must_use]
pub fn remove_factor(pf: &PartialFactors, id: usize) -> PartialFactors {
    pf.debug_check();
    let Ok(pos) = pf.ids.binary_search(&id) else {
        return pf.clone();
    };
    let mut retval = pf.clone();
    retval.ids.remove(pos);
    retval.values.remove(pos);
    retval
}

/// Whether `lhs` and `rhs` agree on every factor they both assign.
///
/// Factors assigned by only one side impose no constraint, so the relation
/// is symmetric and anything matches the empty assignment.
#[must_use]
pub fn matches(lhs: &PartialFactors, rhs: &PartialFactors) -> bool {
    lhs.debug_check();
    rhs.debug_check();
    // Drive the scan with the shorter side.
    let (smaller, bigger) = if lhs.len() < rhs.len() { (lhs, rhs) } else { (rhs, lhs) };

    let (mut i, mut j) = (0, 0);
    while i < bigger.len() && j < smaller.len() {
        match bigger.ids[i].cmp(&smaller.ids[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if bigger.values[i] != smaller.values[j] {
                    return false;
                }
                i += 1;
                j += 1;
            }
        }
    }
    true
}

/// Stack `rhs` after `lhs`, shifting every `rhs` id by `offset`.
///
/// Used to put e.g. an action assignment right after a state assignment in
/// a joint space. No re-sorting happens: all `lhs` ids must be below
/// `offset`.
#[must_use]
pub fn join(offset: usize, lhs: &PartialFactors, rhs: &PartialFactors) -> PartialFactors {
    debug_assert!(lhs.ids.last().map_or(true, |&id| id < offset), "lhs ids reach past offset {offset}");
    debug_assert!(
        rhs.ids.last().map_or(true, |&id| id.checked_add(offset).is_some()),
        "rhs ids overflow when shifted by {offset}"
    );
    lhs.debug_check();
    rhs.debug_check();
    let mut retval = PartialFactors {
        ids: Vec::with_capacity(lhs.len() + rhs.len()),
        values: Vec::with_capacity(lhs.len() + rhs.len()),
    };
    retval.ids.extend_from_slice(&lhs.ids);
    retval.ids.extend(rhs.ids.iter().map(|&id| id + offset));
    retval.values.extend_from_slice(&lhs.values);
    retval.values.extend_from_slice(&rhs.values);
    retval
}

/// Concatenate two dense spaces (or dense assignments).
#[must_use]
pub fn join_factors(lhs: &[usize], rhs: &[usize]) -> Factors {
    let mut retval = Vec::with_capacity(lhs.len() + rhs.len());
    retval.extend_from_slice(lhs);
    retval.extend_from_slice(rhs);
    retval
}

/// Sorted union of two partial assignments.
///
/// # Errors
///
/// [`MdpError::DuplicateFactor`] if both sides assign the same id.
pub fn merge(lhs: &PartialFactors, rhs: &PartialFactors) -> Result<PartialFactors> {
    let mut retval = lhs.clone();
    merge_in_place(&mut retval, rhs)?;
    Ok(retval)
}

/// Merge `rhs` into `lhs`, keeping ids sorted.
///
/// # Errors
///
/// [`MdpError::DuplicateFactor`] if both sides assign the same id. `lhs` is
/// left untouched in that case.
pub fn merge_in_place(lhs: &mut PartialFactors, rhs: &PartialFactors) -> Result<()> {
    lhs.debug_check();
    rhs.debug_check();
    if let Some(id) = first_shared_id(lhs, rhs) {
        return Err(MdpError::DuplicateFactor { id });
    }
    if rhs.is_empty() {
        return Ok(());
    }

    let total = lhs.len() + rhs.len();
    let mut ids = Vec::with_capacity(total);
    let mut values = Vec::with_capacity(total);
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        if lhs.ids[i] < rhs.ids[j] {
            ids.push(lhs.ids[i]);
            values.push(lhs.values[i]);
            i += 1;
        } else {
            ids.push(rhs.ids[j]);
            values.push(rhs.values[j]);
            j += 1;
        }
    }
    ids.extend_from_slice(&lhs.ids[i..]);
    values.extend_from_slice(&lhs.values[i..]);
    ids.extend_from_slice(&rhs.ids[j..]);
    values.extend_from_slice(&rhs.values[j..]);

    lhs.ids = ids;
    lhs.values = values;
    Ok(())
}

fn first_shared_id(lhs: &PartialFactors, rhs: &PartialFactors) -> Option<usize> {
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        match lhs.ids[i].cmp(&rhs.ids[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => return Some(lhs.ids[i]),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pf(ids: &[usize], values: &[usize]) -> PartialFactors {
        PartialFactors::new(ids.to_vec(), values.to_vec()).unwrap()
    }

    fn arb_partial() -> impl Strategy<Value = PartialFactors> {
        prop::collection::btree_map(0usize..8, 0usize..3, 0..6).prop_map(|m| PartialFactors {
            ids: m.keys().copied().collect(),
            values: m.values().copied().collect(),
        })
    }

    #[test]
    fn test_remove_factor() {
        let p = pf(&[0, 2, 5], &[1, 2, 3]);
        assert_eq!(remove_factor(&p, 2), pf(&[0, 5], &[1, 3]));
        assert_eq!(remove_factor(&p, 0), pf(&[2, 5], &[2, 3]));
        assert_eq!(remove_factor(&p, 5), pf(&[0, 2], &[1, 2]));
        assert_eq!(remove_factor(&p, 3), p);
        assert_eq!(remove_factor(&PartialFactors::default(), 1), PartialFactors::default());
    }

    #[test]
    fn test_matches() {
        let a = pf(&[0, 2, 4], &[1, 1, 0]);
        assert!(matches(&a, &pf(&[2], &[1])));
        assert!(matches(&a, &pf(&[1, 3], &[0, 2])));
        assert!(!matches(&a, &pf(&[4], &[1])));
        assert!(matches(&a, &pf(&[0, 1, 5], &[1, 7, 7])));
        assert!(!matches(&a, &pf(&[0, 1, 2, 3, 4], &[1, 0, 0, 0, 0])));
        assert!(matches(&a, &PartialFactors::default()));
        // Only ids past the end of the other side.
        assert!(matches(&pf(&[0], &[1]), &pf(&[5, 6], &[0, 0])));
    }

    #[test]
    fn test_join() {
        let states = pf(&[0, 2], &[1, 3]);
        let actions = pf(&[0, 1], &[4, 5]);
        let joined = join(3, &states, &actions);
        assert_eq!(joined, pf(&[0, 2, 3, 4], &[1, 3, 4, 5]));

        assert_eq!(join_factors(&[2, 3], &[4]), vec![2, 3, 4]);
        assert_eq!(join_factors(&[], &[4]), vec![4]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lhs ids reach past offset")]
    fn test_join_lhs_past_offset() {
        let _ = join(2, &pf(&[0, 2], &[1, 1]), &pf(&[0], &[0]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rhs ids overflow")]
    fn test_join_rhs_shift_overflow() {
        let _ = join(1, &PartialFactors::default(), &pf(&[usize::MAX], &[0]));
    }

    #[test]
    fn test_merge() {
        let a = pf(&[0, 3, 6], &[1, 2, 3]);
        let b = pf(&[1, 4, 7, 8], &[4, 5, 6, 7]);
        let merged = merge(&a, &b).unwrap();
        assert_eq!(merged, pf(&[0, 1, 3, 4, 6, 7, 8], &[1, 4, 2, 5, 3, 6, 7]));
        assert_eq!(merge(&b, &a).unwrap(), merged);
        assert_eq!(merge(&PartialFactors::default(), &b).unwrap(), b);
    }

    #[test]
    fn test_merge_rejects_shared_ids() {
        let mut a = pf(&[0, 3], &[1, 2]);
        let b = pf(&[1, 3], &[0, 2]);
        assert!(matches!(merge(&a, &b), Err(MdpError::DuplicateFactor { id: 3 })));
        assert!(merge_in_place(&mut a, &b).is_err());
        assert_eq!(a, pf(&[0, 3], &[1, 2]));
    }

    proptest! {
        #[test]
        fn removed_factor_still_matches(p in arb_partial()) {
            for &id in &p.ids {
                let removed = remove_factor(&p, id);
                prop_assert!(matches(&p, &removed));
                prop_assert_eq!(removed.len() + 1, p.len());
            }
        }

        #[test]
        fn removing_absent_factor_is_identity(p in arb_partial(), id in 0usize..10) {
            prop_assume!(p.get(id).is_none());
            prop_assert_eq!(remove_factor(&p, id), p);
        }

        #[test]
        fn matches_is_symmetric(a in arb_partial(), b in arb_partial()) {
            prop_assert_eq!(matches(&a, &b), matches(&b, &a));
        }

        #[test]
        fn merge_of_disjoint_is_sorted(a in arb_partial(), b in arb_partial()) {
            match merge(&a, &b) {
                Ok(m) => {
                    prop_assert!(m.ids.windows(2).all(|w| w[0] < w[1]));
                    prop_assert_eq!(m.len(), a.len() + b.len());
                    prop_assert!(matches(&m, &a) && matches(&m, &b));
                }
                Err(_) => prop_assert!(a.ids.iter().any(|id| b.ids.contains(id))),
            }
        }
    }
}
