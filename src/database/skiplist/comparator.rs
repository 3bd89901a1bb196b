//! Порядок ключей пропускного списка.

use std::{cmp::Ordering, fmt::Display};

/// Полный порядок над ключами.
///
/// Реализация обязана быть согласованной: `compare(a, b)` и `compare(b, a)`
/// дают противоположные результаты, а `Equal` транзитивно. Два ключа,
/// сравнимые как `Equal`, считаются одним и тем же ключом.
pub trait Comparator<K: ?Sized> {
    fn compare(
        &self,
        a: &K,
        b: &K,
    ) -> Ordering;
}

/// Естественный порядок `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

/// Лексикографический порядок строкового представления ключа.
///
/// Ключи `10` и `9` сравниваются как строки, поэтому `"10" < "9"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(
        &self,
        a: &K,
        b: &K,
    ) -> Ordering {
        a.cmp(b)
    }
}

impl<K: Display + ?Sized> Comparator<K> for DisplayOrder {
    fn compare(
        &self,
        a: &K,
        b: &K,
    ) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(
        &self,
        a: &K,
        b: &K,
    ) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7, &7), Ordering::Equal);
    }

    #[test]
    fn test_display_order_is_lexicographic() {
        assert_eq!(DisplayOrder.compare(&10, &9), Ordering::Less);
        assert_eq!(DisplayOrder.compare(&"abc", &"abd"), Ordering::Less);
        assert_eq!(DisplayOrder.compare(&42, &42), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);

        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }
}
