// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Permutation Primitives
//!
//! Checks and transforms for slices that are meant to enumerate the dense
//! index space `0..n` exactly once. A preference list over `n` agents is
//! exactly such a slice, and a rank table is its inverse.
//!
//! ## Highlights
//!
//! - `is_permutation`: single-pass validation against `0..len`.
//! - `first_duplicate`: pinpoints the first repeated value for precise
//!   error reporting.
//! - `inverse`: positions-by-value table, turning "who is at rank r" into
//!   "which rank does v hold" in O(1) per lookup.
//! - `identity`: the trivial permutation, useful as a shuffle seed.
//!
//! All functions are allocation-free except `inverse` and `identity`, which
//! return freshly allocated tables.

use fixedbitset::FixedBitSet;

/// Returns the identity permutation of the given length.
///
/// # Examples
///
/// ```rust
/// # use troth_core::math::permutation::identity;
///
/// assert_eq!(identity(4), vec![0, 1, 2, 3]);
/// assert!(identity(0).is_empty());
/// ```
#[inline]
#[must_use]
pub fn identity(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Checks whether `values` is a permutation of `0..values.len()`.
///
/// Every value must lie below the slice length and occur exactly once. The
/// empty slice is the permutation of the empty index space.
///
/// # Examples
///
/// ```rust
/// # use troth_core::math::permutation::is_permutation;
///
/// assert!(is_permutation(&[2, 0, 1]));
/// assert!(is_permutation(&[]));
/// assert!(!is_permutation(&[0, 0, 2])); // duplicate
/// assert!(!is_permutation(&[0, 1, 3])); // out of range
/// ```
#[must_use]
pub fn is_permutation(values: &[usize]) -> bool {
    let mut seen = FixedBitSet::with_capacity(values.len());
    for &value in values {
        if value >= values.len() || seen.contains(value) {
            return false;
        }
        seen.insert(value);
    }
    true
}

/// Returns the first value in `values` that already occurred earlier in the
/// slice, or `None` if all values are distinct.
///
/// Values outside `0..values.len()` are still tracked, so a duplicated
/// out-of-range value is reported like any other.
///
/// # Examples
///
/// ```rust
/// # use troth_core::math::permutation::first_duplicate;
///
/// assert_eq!(first_duplicate(&[0, 1, 2]), None);
/// assert_eq!(first_duplicate(&[0, 1, 0, 1]), Some(0));
/// assert_eq!(first_duplicate(&[7, 7]), Some(7));
/// ```
#[must_use]
pub fn first_duplicate(values: &[usize]) -> Option<usize> {
    let mut seen = FixedBitSet::with_capacity(values.len());
    for &value in values {
        if value >= seen.len() {
            seen.grow(value + 1);
        }
        if seen.contains(value) {
            return Some(value);
        }
        seen.insert(value);
    }
    None
}

/// Inverts a permutation: the result holds, for every value, the position at
/// which that value occurs in `values`.
///
/// For a preference list this turns "who sits at rank `r`" into "which rank
/// does agent `v` hold", which is the lookup the acceptance test needs.
///
/// # Panics
///
/// Panics if `values` is not a permutation of `0..values.len()`.
///
/// # Examples
///
/// ```rust
/// # use troth_core::math::permutation::inverse;
///
/// let ranks = inverse(&[2, 0, 1]);
/// assert_eq!(ranks, vec![1, 2, 0]);
/// assert_eq!(ranks[2], 0); // value 2 sits at position 0
/// ```
#[must_use]
pub fn inverse(values: &[usize]) -> Vec<usize> {
    assert!(
        is_permutation(values),
        "called `inverse` on a slice that is not a permutation of 0..{}",
        values.len()
    );

    let mut positions = vec![0usize; values.len()];
    for (position, &value) in values.iter().enumerate() {
        positions[value] = position;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_permutation() {
        assert!(is_permutation(&identity(0)));
        assert!(is_permutation(&identity(1)));
        assert!(is_permutation(&identity(16)));
    }

    #[test]
    fn test_is_permutation_accepts_shuffles() {
        assert!(is_permutation(&[0]));
        assert!(is_permutation(&[1, 0]));
        assert!(is_permutation(&[3, 1, 0, 2]));
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        assert!(!is_permutation(&[0, 0]));
        assert!(!is_permutation(&[1, 2, 1]));
    }

    #[test]
    fn test_is_permutation_rejects_out_of_range() {
        assert!(!is_permutation(&[1]));
        assert!(!is_permutation(&[0, 1, 4]));
        assert!(!is_permutation(&[usize::MAX]));
    }

    #[test]
    fn test_first_duplicate_none_on_distinct() {
        assert_eq!(first_duplicate(&[]), None);
        assert_eq!(first_duplicate(&[2, 0, 1]), None);
    }

    #[test]
    fn test_first_duplicate_reports_first_repeat() {
        // 1 repeats before 0 does.
        assert_eq!(first_duplicate(&[0, 1, 1, 0]), Some(1));
        assert_eq!(first_duplicate(&[5, 2, 5, 2]), Some(5));
    }

    #[test]
    fn test_inverse_of_identity() {
        let id = identity(5);
        assert_eq!(inverse(&id), id);
    }

    #[test]
    fn test_inverse_positions() {
        let perm = vec![3, 0, 2, 1];
        let inv = inverse(&perm);
        assert_eq!(inv, vec![1, 3, 2, 0]);
        for (position, &value) in perm.iter().enumerate() {
            assert_eq!(inv[value], position);
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let perm = vec![4, 2, 0, 3, 1];
        assert_eq!(inverse(&inverse(&perm)), perm);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn test_inverse_panics_on_non_permutation() {
        let _ = inverse(&[0, 0, 1]);
    }
}
