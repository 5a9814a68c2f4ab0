//! Helpers for the comb sort demo

use anyhow::bail;
use rand::Rng;

/// `size` integers drawn uniformly from `min..=max`
///
/// Returns error if `min > max`.
pub fn generate_random_array(size: usize, min: i64, max: i64) -> anyhow::Result<Vec<i64>> {
    generate_random_array_with(&mut rand::thread_rng(), size, min, max)
}

/// Same as [generate_random_array], with a caller-provided generator
pub fn generate_random_array_with<R: Rng>(
    rng: &mut R,
    size: usize,
    min: i64,
    max: i64,
) -> anyhow::Result<Vec<i64>> {
    if min > max {
        bail!("Empty range: min {} is greater than max {}", min, max);
    }
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// Exchange elements `i` and `j`
///
/// Panics if either index is out of bounds.
pub fn swap<T>(arr: &mut [T], i: usize, j: usize) {
    arr.swap(i, j);
}

/// True if no element is greater than the one after it
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn random_array_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let arr = generate_random_array_with(&mut rng, 500, -3, 3).unwrap();
        assert_eq!(arr.len(), 500);
        assert!(arr.iter().all(|v| (-3..=3).contains(v)));
        // Both ends of the inclusive range get drawn
        assert!(arr.contains(&-3));
        assert!(arr.contains(&3));
    }

    #[test]
    fn random_array_edge_cases() {
        assert!(generate_random_array(0, 1, 100).unwrap().is_empty());
        assert_eq!(generate_random_array(4, 9, 9).unwrap(), vec![9, 9, 9, 9]);
        assert!(generate_random_array(3, 10, 1).is_err());
    }

    #[test]
    fn swap_elements() {
        let mut arr = [1, 2, 3];
        swap(&mut arr, 0, 2);
        assert_eq!(arr, [3, 2, 1]);
        swap(&mut arr, 1, 1);
        assert_eq!(arr, [3, 2, 1]);
    }

    #[test]
    fn sortedness() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[42]));
        assert!(is_sorted(&[1, 1, 2, 3, 3]));
        assert!(!is_sorted(&[1, 3, 2]));
        assert!(!is_sorted(&[2.5, 1.0]));
    }
}
