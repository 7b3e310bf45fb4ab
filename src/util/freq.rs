//! Reconciliation of values reported by several peers

use std::collections::BTreeMap;

/// Most frequent value in `values`, preferring the largest value on a tie.
///
/// Returns 0 for an empty sequence.
pub fn max_of_most_freq<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Ascending walk with >= lets the larger value win ties
    let mut best: Option<(i64, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count >= best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value).unwrap_or(0)
}

/// True for 1, 2, 4, 8, ...; false for zero and negatives
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && (n as u64).is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_of_most_freq() {
        assert_eq!(max_of_most_freq([0i64; 0]), 0);
        assert_eq!(max_of_most_freq([0i64, 0, 1]), 0);
        assert_eq!(max_of_most_freq([1i64, 1, 2, 2]), 2);
        assert_eq!(max_of_most_freq([1i64, 1, 2, 2, 1]), 1);
        assert_eq!(max_of_most_freq([-1i64, -1, 2, 2, -1]), -1);
    }

    #[test]
    fn test_all_distinct_returns_max() {
        assert_eq!(max_of_most_freq([3i64, -7, 12, 5]), 12);
        assert_eq!(max_of_most_freq(vec![-3i64, -2]), -2);
    }

    #[test]
    fn test_is_power_of_two() {
        for n in [1i64, 2, 4, 8, 16, 32] {
            assert!(is_power_of_two(n));
        }
        for n in [5i64, 24, 0, -4] {
            assert!(!is_power_of_two(n));
        }
    }
}
