use std::cmp::Ordering;

/// Key ordering used by the skip list.
///
/// Must be a strict weak ordering. Two keys are considered equivalent when
/// `compare` returns `Ordering::Equal`, i.e. neither compares less than the
/// other; the list stores at most one key per equivalence class.
pub trait Comparator<K> {
    fn compare(&self, left: &K, right: &K) -> Ordering;

    fn name(&self) -> &'static str;
}

/// Natural ascending order via `Ord`.
#[derive(Clone, Copy, Default)]
pub struct OrdComparator;

impl<K: Ord> Comparator<K> for OrdComparator {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }

    fn name(&self) -> &'static str {
        "rskiplist.OrdComparator"
    }
}

/// Natural order reversed, for descending indexes.
#[derive(Clone, Copy, Default)]
pub struct ReverseComparator;

impl<K: Ord> Comparator<K> for ReverseComparator {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }

    fn name(&self) -> &'static str {
        "rskiplist.ReverseComparator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_comparator() {
        let tests: Vec<(i32, i32, Ordering)> = vec![
            (1, 2, Ordering::Less),
            (2, 1, Ordering::Greater),
            (7, 7, Ordering::Equal),
            (-3, 0, Ordering::Less),
        ];

        let comparator = OrdComparator;
        for (i, &(a, b, expect)) in tests.iter().enumerate() {
            assert_eq!(comparator.compare(&a, &b), expect, "{}", i);
        }
    }

    #[test]
    fn test_reverse_comparator() {
        let tests: Vec<(i32, i32, Ordering)> = vec![
            (1, 2, Ordering::Greater),
            (2, 1, Ordering::Less),
            (7, 7, Ordering::Equal),
        ];

        let comparator = ReverseComparator;
        for (i, &(a, b, expect)) in tests.iter().enumerate() {
            assert_eq!(comparator.compare(&a, &b), expect, "{}", i);
        }
    }

    #[test]
    fn test_comparator_over_strings() {
        let comparator = OrdComparator;
        assert_eq!(
            comparator.compare(&"abc".to_string(), &"abd".to_string()),
            Ordering::Less
        );
        assert_eq!(
            comparator.compare(&"abc".to_string(), &"abc".to_string()),
            Ordering::Equal
        );
    }
}
