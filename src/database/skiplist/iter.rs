//! Обход пропускного списка по возрастанию ключей.
//!
//! Итераторы идут по ссылкам уровня 0 начиная с `front[0]`. Каждый вызов
//! [`SkipList::iter`] начинает обход заново. Итератор заимствует список,
//! поэтому изменить список во время обхода нельзя.

use std::iter::FusedIterator;

use super::{
    node::{NodeArena, NodeId},
    skiplist_base::SkipList,
};

/// Итератор по парам `(&K, &V)` в прямом порядке.
pub struct Iter<'a, K, V> {
    nodes: &'a NodeArena<K, V>,
    next: Option<NodeId>,
    remaining: usize,
}

/// Итератор по ключам.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Итератор по значениям.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    /// Возвращает итератор по (&K, &V) в порядке возрастания ключа.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            next: self.front[0],
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let nodes: &'a NodeArena<K, V> = self.nodes;
        let node = &nodes[id];

        self.next = node.forward[0];
        self.remaining = self.remaining.saturating_sub(1);

        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<'a, K, V, C, R> IntoIterator for &'a SkipList<K, V, C, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::SkipList;

    fn make_list(keys: &[i32]) -> SkipList<i32, String> {
        let mut sl = SkipList::new();
        for k in keys {
            sl.insert(*k, format!("v{k}"));
        }
        sl
    }

    #[test]
    fn test_iter_order() {
        let sl = make_list(&[3, 1, 2]);

        let collected: Vec<_> = sl.iter().map(|(k, _)| *k).collect();

        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_and_values_agree() {
        let sl = make_list(&[5, 4, 9, 0]);

        let keys: Vec<_> = sl.keys().copied().collect();
        let values: Vec<_> = sl.values().cloned().collect();

        assert_eq!(keys, vec![0, 4, 5, 9]);
        assert_eq!(values, vec!["v0", "v4", "v5", "v9"]);
    }

    #[test]
    fn test_each_call_starts_fresh() {
        let sl = make_list(&[1, 2, 3]);

        let mut first = sl.iter();
        first.next();
        first.next();

        assert_eq!(sl.iter().next(), Some((&1, &"v1".to_string())));
        assert_eq!(first.next().map(|(k, _)| *k), Some(3));
        assert_eq!(first.next(), None);
        assert_eq!(first.next(), None);
    }

    #[test]
    fn test_exact_size() {
        let mut sl = make_list(&[1, 2, 3, 4]);
        sl.remove(&2);

        let mut it = sl.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        assert_eq!(sl.keys().len(), 3);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let sl = make_list(&[2, 1]);
        let mut seen = Vec::new();

        for (k, v) in &sl {
            seen.push((*k, v.clone()));
        }

        assert_eq!(seen, vec![(1, "v1".to_string()), (2, "v2".to_string())]);
    }

    #[test]
    fn test_empty_iteration() {
        let sl: SkipList<i32, i32> = SkipList::new();

        assert_eq!(sl.iter().next(), None);
        assert_eq!(sl.keys().count(), 0);
        assert_eq!(sl.values().count(), 0);
    }
}
