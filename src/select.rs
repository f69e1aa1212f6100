//! Order statistics without sorting.

/// Return the `k`-th smallest element of `values` (0-based).
///
/// Quickselect with the middle element as pivot and a three-way partition
/// into strictly-less, equal and strictly-greater parts. The input slice is
/// never reordered; partitions are copied. Average linear, worst case
/// quadratic time.
///
/// # Panics
///
/// When `values` is empty or `k >= values.len()`.
pub fn select_kth<T: Copy + Ord>(values: &[T], k: usize) -> T {
    assert!(
        k < values.len(),
        "select_kth: index {k} out of range for {} values",
        values.len()
    );

    let pivot = values[values.len() / 2];
    let mut less = Vec::new();
    let mut equal = 0usize;
    let mut greater = Vec::new();
    for &v in values {
        match v.cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(v),
            std::cmp::Ordering::Equal => equal += 1,
            std::cmp::Ordering::Greater => greater.push(v),
        }
    }

    if k < less.len() {
        select_kth(&less, k)
    } else if k < less.len() + equal {
        pivot
    } else {
        select_kth(&greater, k - less.len() - equal)
    }
}

#[cfg(test)]
mod tests {
    use super::select_kth;
    use proptest::prelude::*;

    #[test]
    fn picks_max_of_three_differences() {
        assert_eq!(select_kth(&[3u8, 9, 1], 2), 9);
        assert_eq!(select_kth(&[3u8, 9, 1], 0), 1);
        assert_eq!(select_kth(&[4u8, 4, 4], 1), 4);
    }

    #[test]
    fn handles_duplicates_around_pivot() {
        let values = [5, 1, 5, 5, 2, 8, 5];
        let expected = [1, 2, 5, 5, 5, 5, 8];
        for (k, &want) in expected.iter().enumerate() {
            assert_eq!(select_kth(&values, k), want, "k={k}");
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn empty_input_is_a_contract_violation() {
        let empty: [u8; 0] = [];
        select_kth(&empty, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_matches_sorted_reference(
            values in prop::collection::vec(-1000i32..1000, 1..500),
        ) {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            for k in 0..values.len() {
                prop_assert_eq!(select_kth(&values, k), sorted[k]);
            }
        }

        #[test]
        fn prop_leaves_input_untouched(
            values in prop::collection::vec(any::<u8>(), 1..500),
            k in any::<prop::sample::Index>(),
        ) {
            let before = values.clone();
            let k = k.index(values.len());
            let _ = select_kth(&values, k);
            prop_assert_eq!(values, before);
        }
    }
}
