//! # Merge Sort
//!
//! Top-down recursive merge sort over a mutable slice, driven by a
//! caller-supplied less-than.
//!
//! ## Merge Step
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items[lo..=hi] ──copy──► scratch[lo..=hi]                              │
//! │                                                                         │
//! │  scratch:  [ lo ... mid ][ mid+1 ... hi ]                               │
//! │               i ──►          j ──►                                      │
//! │                                                                         │
//! │  for k in lo..=hi:                                                      │
//! │    i > mid            → items[k] = scratch[j++]                         │
//! │    j > hi             → items[k] = scratch[i++]                         │
//! │    less(s[j], s[i])   → items[k] = scratch[j++]                         │
//! │    otherwise          → items[k] = scratch[i++]   (ties go left)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ties go to the left half, so equal elements keep their input order.
//!
//! ## Usage
//! ```rust
//! use droidworks_core::sort::MergeSorter;
//!
//! let mut tagged = [(5, 'a'), (3, 'b'), (5, 'c'), (1, 'd')];
//! MergeSorter::by_key(|t: &(i32, char)| t.0).sort(&mut tagged);
//! assert_eq!(tagged, [(1, 'd'), (3, 'b'), (5, 'a'), (5, 'c')]);
//! ```

/// Sorts slices with a fixed less-than comparator.
///
/// The comparator must be a consistent total preorder. A comparator that is
/// not still terminates, since every recursive call works on a strictly
/// smaller range, but leaves the slice in an unspecified permutation.
#[derive(Debug, Clone, Copy)]
pub struct MergeSorter<F> {
    less: F,
}

impl<F> MergeSorter<F> {
    /// Creates a sorter from a less-than comparator.
    pub const fn new(less: F) -> Self {
        MergeSorter { less }
    }

    /// Sorts `items` in place, ascending under the comparator.
    ///
    /// The scratch buffer is allocated here, sized to `items`, reused by every
    /// merge of this call and freed on return.
    pub fn sort<T>(&self, items: &mut [T])
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        if items.len() < 2 {
            return;
        }
        let mut scratch = items.to_vec();
        let hi = items.len() - 1;
        sort_range(items, &mut scratch, 0, hi, &self.less);
    }
}

impl MergeSorter<()> {
    /// Creates a sorter ordering elements ascending by an extracted key.
    pub fn by_key<T, K, G>(key: G) -> MergeSorter<impl Fn(&T, &T) -> bool>
    where
        K: Ord,
        G: Fn(&T) -> K,
    {
        MergeSorter::new(move |a: &T, b: &T| key(a) < key(b))
    }
}

/// Sorts `items` in place with `less`. One-shot form of [`MergeSorter::sort`].
pub fn merge_sort<T, F>(items: &mut [T], less: F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    MergeSorter::new(less).sort(items);
}

fn sort_range<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, hi: usize, less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if hi <= lo {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(items, scratch, lo, mid, less);
    sort_range(items, scratch, mid + 1, hi, less);
    merge(items, scratch, lo, mid, hi, less);
}

fn merge<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, mid: usize, hi: usize, less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    // Copy the whole range so i and j both index scratch.
    scratch[lo..=hi].clone_from_slice(&items[lo..=hi]);

    let mut i = lo;
    let mut j = mid + 1;

    for slot in &mut items[lo..=hi] {
        if i > mid {
            *slot = scratch[j].clone();
            j += 1;
        } else if j > hi {
            *slot = scratch[i].clone();
            i += 1;
        } else if less(&scratch[j], &scratch[i]) {
            *slot = scratch[j].clone();
            j += 1;
        } else {
            *slot = scratch[i].clone();
            i += 1;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        // (key, original index)
        let mut items = [(5, 0), (3, 1), (5, 2), (1, 3)];
        merge_sort(&mut items, |a, b| a.0 < b.0);
        assert_eq!(items, [(1, 3), (3, 1), (5, 0), (5, 2)]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        merge_sort(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut one = [42];
        merge_sort(&mut one, |a, b| a < b);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_two_elements() {
        let mut two = [2, 1];
        merge_sort(&mut two, |a, b| a < b);
        assert_eq!(two, [1, 2]);
    }

    #[test]
    fn test_reverse_input() {
        let mut items: Vec<u32> = (0..100).rev().collect();
        merge_sort(&mut items, |a, b| a < b);
        assert_eq!(items, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_comparator() {
        let mut items = [3, 9, 1, 7];
        merge_sort(&mut items, |a, b| a > b);
        assert_eq!(items, [9, 7, 3, 1]);
    }

    #[test]
    fn test_by_key_sorts_strings_by_length() {
        let mut words = vec!["ccc", "a", "bb", "dd", "e"];
        MergeSorter::by_key(|s: &&str| s.len()).sort(&mut words);
        assert_eq!(words, vec!["a", "e", "bb", "dd", "ccc"]);
    }

    #[test]
    fn test_sorter_is_reusable() {
        let sorter = MergeSorter::new(|a: &i32, b: &i32| a < b);

        let mut first = [3, 1, 2];
        sorter.sort(&mut first);
        let mut second = [10, -1];
        sorter.sort(&mut second);

        assert_eq!(first, [1, 2, 3]);
        assert_eq!(second, [-1, 10]);
    }

    #[test]
    fn test_inconsistent_comparator_terminates_with_permutation() {
        let mut items: Vec<i32> = (0..64).collect();
        merge_sort(&mut items, |_, _| true);

        let mut seen = items.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
    }
}
