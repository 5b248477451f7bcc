//! Enumeration of vertex subsets and of permutations.
//!
//! Subsets are given either as materialized lists by [enumerate_selections] (recursive inclusion order)
//! or as u64 bitmasks decoded into a reused buffer by [MaskSelections], or as bitmasks of a given
//! cardinality by [SizedMasks]. Bitmask enumeration
//! is limited to [MAX_BITMASK_VERTICES](crate::multigraph::MAX_BITMASK_VERTICES) vertices.
//!
//! Permutations are generated in place in lexicographic order by [Permutations].

use crate::multigraph::MAX_BITMASK_VERTICES;

/// Returns every subset of \[low, high\[ with at least min_size elements.
/// Order is the order of recursive construction: a subset comes just before all its extensions
/// by larger elements. The empty set is returned if min_size is 0.
pub fn enumerate_selections(low: usize, high: usize, min_size: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::<Vec<usize>>::new();
    let mut current = Vec::<usize>::with_capacity(high.saturating_sub(low));
    selections_helper(low, high, min_size, &mut current, &mut result);
    result
} // end of enumerate_selections

fn selections_helper(start: usize, high: usize, min_size: usize, current: &mut Vec<usize>, result: &mut Vec<Vec<usize>>) {
    if current.len() >= min_size {
        result.push(current.clone());
    }
    for i in start..high {
        current.push(i);
        selections_helper(i + 1, high, min_size, current, result);
        current.pop();
    }
}

/// decode mask into buffer, bit j set means vertex low + j is selected
pub(crate) fn decode_mask(mask: u64, low: usize, buffer: &mut Vec<usize>) {
    buffer.clear();
    let mut rest = mask;
    while rest != 0 {
        let j = rest.trailing_zeros() as usize;
        buffer.push(low + j);
        rest &= rest - 1;
    }
}

/// Iterates on subsets of \[low, low+nb\[ as bitmasks, from the full set 2^nb - 1 down to 1.
/// The subset is decoded in a buffer reused between calls.
pub struct MaskSelections {
    low: usize,
    /// next mask to return, 0 when exhausted
    next: u64,
    buffer: Vec<usize>,
}

impl MaskSelections {
    /// nb must be at most MAX_BITMASK_VERTICES
    pub fn new(low: usize, nb: usize) -> Self {
        assert!(nb <= MAX_BITMASK_VERTICES);
        let next = if nb == 0 { 0 } else { (1u64 << nb) - 1 };
        MaskSelections { low, next, buffer: Vec::with_capacity(nb) }
    }

    /// returns next mask without decoding it
    pub fn next_mask(&mut self) -> Option<u64> {
        if self.next == 0 {
            return None;
        }
        let mask = self.next;
        self.next -= 1;
        Some(mask)
    }

    /// decodes a mask in the internal buffer
    pub fn decode(&mut self, mask: u64) -> &[usize] {
        decode_mask(mask, self.low, &mut self.buffer);
        &self.buffer
    }

    /// next subset, decoded
    pub fn next_selection(&mut self) -> Option<&[usize]> {
        let mask = self.next_mask()?;
        Some(self.decode(mask))
    }
} // end of impl MaskSelections

/// Masks of the subsets of k elements among nb, in increasing mask order.
/// Masks are generated one at a time (next subset with the same number of bits), so memory does not depend
/// on the number of subsets. nb must be at most MAX_BITMASK_VERTICES.
///
/// ```
/// use mgraphcmp::tools::enumerate::SizedMasks;
/// let masks: Vec<u64> = SizedMasks::new(4, 2).collect();
/// assert_eq!(masks, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
/// ```
pub struct SizedMasks {
    next: Option<u64>,
    // first mask out of range
    end: u64,
}

impl SizedMasks {
    pub fn new(nb: usize, k: usize) -> Self {
        assert!(nb <= MAX_BITMASK_VERTICES);
        let next = if k > nb { None } else { Some((1u64 << k) - 1) };
        SizedMasks { next, end: 1u64 << nb }
    }
} // end of impl SizedMasks

impl Iterator for SizedMasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mask = self.next?;
        self.next = if mask == 0 {
            None
        } else {
            // lowest set bit moves up, the bits below it are packed at the bottom
            let low_bit = mask & mask.wrapping_neg();
            match mask.checked_add(low_bit) {
                Some(ripple) => {
                    let successor = (((ripple ^ mask) >> 2) / low_bit) | ripple;
                    if successor < self.end {
                        Some(successor)
                    } else {
                        None
                    }
                }
                None => None,
            }
        };
        Some(mask)
    }
} // end of impl Iterator for SizedMasks

/// Permutations of {0..n-1} in lexicographic order starting from the identity.
///
/// Not an Iterator as the permutation is returned as a borrow of an internal buffer:
/// ```
/// use mgraphcmp::tools::enumerate::Permutations;
/// let mut perms = Permutations::new(3);
/// let mut nb = 0;
/// while let Some(p) = perms.next_permutation() {
///     assert_eq!(p.len(), 3);
///     nb += 1;
/// }
/// assert_eq!(nb, 6);
/// ```
pub struct Permutations {
    current: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Permutations { current: (0..n).collect(), started: false, exhausted: false }
    }

    /// the identity first, then lexicographic successors. n = 0 gives one empty permutation.
    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.as_slice());
        }
        if advance(&mut self.current) {
            Some(self.current.as_slice())
        } else {
            self.exhausted = true;
            None
        }
    }
} // end of impl Permutations

// transform perm in its lexicographic successor, return false if perm was the last one.
fn advance(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    // find largest i with perm[i] < perm[i+1]
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
} // end of advance

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn recursive_selections() {
        log_init_test();
        //
        let sel = enumerate_selections(0, 3, 2);
        assert_eq!(sel, vec![vec![0, 1], vec![0, 1, 2], vec![0, 2], vec![1, 2]]);
        let all = enumerate_selections(2, 6, 0);
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Vec::<usize>::new());
        assert!(all.iter().all(|s| s.iter().all(|v| (2..6).contains(v))));
        // too large minimal size
        assert!(enumerate_selections(0, 3, 4).is_empty());
        assert_eq!(enumerate_selections(0, 0, 0).len(), 1);
    } // end of recursive_selections

    #[test]
    fn mask_selections_descending() {
        log_init_test();
        //
        let mut masks = MaskSelections::new(1, 3);
        let mut got = Vec::<Vec<usize>>::new();
        while let Some(s) = masks.next_selection() {
            got.push(s.to_vec());
        }
        assert_eq!(got.len(), 7);
        assert_eq!(got[0], vec![1, 2, 3]);
        assert_eq!(got[1], vec![2, 3]);
        assert_eq!(got[6], vec![1]);
        //
        let mut none = MaskSelections::new(0, 0);
        assert!(none.next_selection().is_none());
    }

    #[test]
    fn masks_of_given_size() {
        log_init_test();
        //
        let counts: Vec<usize> = (0..=4).map(|k| SizedMasks::new(4, k).count()).collect();
        assert_eq!(counts, vec![1, 4, 6, 4, 1]);
        let masks: Vec<u64> = SizedMasks::new(5, 3).collect();
        assert!(masks.windows(2).all(|w| w[0] < w[1]));
        assert!(masks.iter().all(|m| m.count_ones() == 3 && *m < 32));
        assert_eq!(SizedMasks::new(0, 0).collect::<Vec<u64>>(), vec![0]);
        assert_eq!(SizedMasks::new(2, 3).count(), 0);
        // no materialization, top levels of a large graph are cheap
        let last: Vec<u64> = SizedMasks::new(63, 63).collect();
        assert_eq!(last, vec![u64::MAX >> 1]);
        assert_eq!(SizedMasks::new(63, 62).count(), 63);
        assert_eq!(SizedMasks::new(40, 1).last(), Some(1u64 << 39));
    }

    #[test]
    fn permutations_lexicographic() {
        log_init_test();
        //
        let mut perms = Permutations::new(3);
        let mut got = Vec::<Vec<usize>>::new();
        while let Some(p) = perms.next_permutation() {
            got.push(p.to_vec());
        }
        assert_eq!(
            got,
            vec![vec![0, 1, 2], vec![0, 2, 1], vec![1, 0, 2], vec![1, 2, 0], vec![2, 0, 1], vec![2, 1, 0]]
        );
        assert!(perms.next_permutation().is_none());
        //
        let mut count = 0;
        let mut perms = Permutations::new(5);
        while perms.next_permutation().is_some() {
            count += 1;
        }
        assert_eq!(count, 120);
        //
        let mut empty = Permutations::new(0);
        assert_eq!(empty.next_permutation(), Some(&[][..]));
        assert!(empty.next_permutation().is_none());
    } // end of permutations_lexicographic
} // end of mod tests
