//! Узлы пропускного списка и арена, которая ими владеет.
//!
//! Узлы ссылаются друг на друга через индексы арены ([`NodeId`]), а не через
//! указатели: один и тот же узел достижим с нескольких уровней, и арена
//! остаётся единственным владельцем. Освобождённые слоты переиспользуются.

use std::ops::{Index, IndexMut};

/// Индекс узла в арене.
pub(crate) type NodeId = usize;

/// Позиция курсора при спуске: виртуальный заголовок перед массивом `front`
/// или реальный узел.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    Header,
    Node(NodeId),
}

/// Узел пропускного списка.
///
/// Длина `forward` равна уровню узла и не меняется после создания.
/// `forward[0]` указывает на следующий узел на самом нижнем уровне.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) forward: Vec<Option<NodeId>>,
}

/// Хранилище узлов с повторным использованием освобождённых слотов.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<K, V> Node<K, V> {
    /// Создаёт новый узел заданного уровня без соседей.
    pub(crate) fn new(
        key: K,
        value: V,
        level: usize,
    ) -> Self {
        Self {
            key,
            value,
            forward: vec![None; level],
        }
    }

    /// Количество уровней, в которых участвует узел.
    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }
}

impl<K, V> NodeArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Помещает узел в арену и возвращает его индекс.
    pub(crate) fn insert(
        &mut self,
        node: Node<K, V>,
    ) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Извлекает узел из арены, освобождая слот.
    pub(crate) fn remove(
        &mut self,
        id: NodeId,
    ) -> Node<K, V> {
        let node = self.slots[id].take().expect("dangling node id");
        self.free.push(id);
        node
    }

    /// Количество занятых слотов.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl<K, V> Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    #[inline]
    fn index(
        &self,
        id: NodeId,
    ) -> &Self::Output {
        self.slots[id].as_ref().expect("dangling node id")
    }
}

impl<K, V> IndexMut<NodeId> for NodeArena<K, V> {
    #[inline]
    fn index_mut(
        &mut self,
        id: NodeId,
    ) -> &mut Self::Output {
        self.slots[id].as_mut().expect("dangling node id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_level_matches_forward_len() {
        let node = Node::new(1, "a", 3);

        assert_eq!(node.level(), 3);
        assert!(node.forward.iter().all(Option::is_none));
    }

    #[test]
    fn test_arena_reuses_freed_slots() {
        let mut arena = NodeArena::new();

        let a = arena.insert(Node::new(1, 10, 1));
        let b = arena.insert(Node::new(2, 20, 2));
        assert_eq!(arena.live(), 2);

        let removed = arena.remove(a);
        assert_eq!(removed.value, 10);
        assert_eq!(arena.live(), 1);

        let c = arena.insert(Node::new(3, 30, 1));
        assert_eq!(c, a);
        assert_eq!(arena[b].key, 2);
        assert_eq!(arena[c].key, 3);
    }

    #[test]
    #[should_panic(expected = "dangling node id")]
    fn test_arena_index_after_remove_panics() {
        let mut arena = NodeArena::new();
        let id = arena.insert(Node::new(1, 1, 1));
        arena.remove(id);

        let _ = &arena[id];
    }
}
