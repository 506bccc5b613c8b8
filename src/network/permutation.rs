//! Phase permutations (Heap's algorithm)

/// Largest output allocated up front (8!)
const MAX_PRESIZED: usize = 40_320;

/// Every ordering of `items`, each exactly once
///
/// An empty input yields a single empty ordering.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut current = items.to_vec();
    let n = current.len();
    let presized = ordering_count(n).filter(|&count| count <= MAX_PRESIZED).unwrap_or(0);
    let mut out = Vec::with_capacity(presized);
    out.push(current.clone());

    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            out.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    out
}

/// `n!`, or `None` once it no longer fits in `usize`
fn ordering_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(permutations::<i64>(&[]), vec![Vec::<i64>::new()]);
        assert_eq!(permutations(&[7]), vec![vec![7]]);
    }

    #[test]
    fn test_three_items() {
        let perms = permutations(&[1, 2, 3]);
        assert_eq!(perms.len(), 6);
        let unique: HashSet<_> = perms.into_iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_five_phases_all_distinct() {
        let perms = permutations(&[5, 6, 7, 8, 9]);
        assert_eq!(perms.len(), 120);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), 120);
        for perm in &perms {
            let mut sorted = perm.clone();
            sorted.sort();
            assert_eq!(sorted, vec![5, 6, 7, 8, 9]);
        }
        assert!(unique.contains(&vec![9, 8, 7, 6, 5]));
    }

    #[test]
    fn test_ordering_count_saturates() {
        assert_eq!(ordering_count(0), Some(1));
        assert_eq!(ordering_count(5), Some(120));
        assert_eq!(ordering_count(8), Some(MAX_PRESIZED));
        assert_eq!(ordering_count(12), Some(479_001_600));
        assert_eq!(ordering_count(21), None);
        assert_eq!(ordering_count(64), None);
    }
}
