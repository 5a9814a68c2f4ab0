//! Comb sort, bubble sort with a shrinking comparison gap

use crate::array_utils::swap;

/// Factor the gap is divided by after every pass
pub const SHRINK_FACTOR: f64 = 1.3;

fn shrink(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR).floor() as usize).max(1)
}

/// Gaps used by the passes over a slice of `len` elements, down to the
/// first gap of 1. Further passes at gap 1 repeat until nothing is swapped.
pub fn gap_sequence(len: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut gap = len;
    loop {
        gap = shrink(gap);
        gaps.push(gap);
        if gap == 1 {
            break gaps;
        }
    }
}

/// Sort `arr` in place, ascending
///
/// # Examples
/// ```
/// use maze_astar::comb_sort::comb_sort;
///
/// let mut arr = [5, 3, 8, 1];
/// comb_sort(&mut arr);
/// assert_eq!(arr, [1, 3, 5, 8]);
/// ```
pub fn comb_sort<T: PartialOrd>(arr: &mut [T]) {
    let mut gap = arr.len();
    let mut sorted = false;

    while !sorted {
        gap = shrink(gap);
        // A pass at gap 1 with no swaps ends the sort
        sorted = gap == 1;

        for i in 0..arr.len().saturating_sub(gap) {
            if arr[i] > arr[i + gap] {
                swap(arr, i, i + gap);
                sorted = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::array_utils::{generate_random_array_with, is_sorted};
    use crate::comb_sort::{comb_sort, gap_sequence};

    #[test]
    fn sort_small_example() {
        let mut arr = vec![5, 3, 8, 1];
        comb_sort(&mut arr);
        assert_eq!(arr, vec![1, 3, 5, 8]);
    }

    #[test]
    fn sorted_and_empty_unchanged() {
        let mut empty: Vec<i64> = vec![];
        comb_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = [7];
        comb_sort(&mut one);
        assert_eq!(one, [7]);

        let mut sorted = vec![1, 2, 2, 5, 9];
        comb_sort(&mut sorted);
        assert_eq!(sorted, vec![1, 2, 2, 5, 9]);
    }

    #[test]
    fn random_arrays_become_sorted_permutations() {
        let mut rng = StdRng::seed_from_u64(13);
        for size in [2, 3, 10, 11, 100, 1000] {
            let arr = generate_random_array_with(&mut rng, size, -50, 50).unwrap();
            let mut sorted = arr.clone();
            comb_sort(&mut sorted);

            assert!(is_sorted(&sorted));
            assert_eq!(sorted, arr.iter().copied().sorted().collect::<Vec<_>>());
        }
    }

    #[test]
    fn reverse_order() {
        let mut arr: Vec<u32> = (0..50).rev().collect();
        comb_sort(&mut arr);
        assert_eq!(arr, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn gaps_shrink_to_one() {
        assert_eq!(gap_sequence(10), vec![7, 5, 3, 2, 1]);
        assert_eq!(gap_sequence(0), vec![1]);
        assert_eq!(gap_sequence(1), vec![1]);
    }

    #[test]
    fn sorts_strings() {
        let mut words = ["pear", "apple", "fig", "banana"];
        comb_sort(&mut words);
        assert_eq!(words, ["apple", "banana", "fig", "pear"]);
    }
}
