//! Пропускной список (SkipList).
//!
//! Упорядоченный ассоциативный контейнер: ожидаемое время поиска, вставки
//! и удаления O(log n) без перебалансировки, как у деревьев.
//!
//! Каждая операция начинается с самого верхнего уровня массива `front` и
//! спускается вниз: на каждом уровне курсор продвигается, пока ключ
//! следующего узла строго меньше искомого. Изменяющие операции по пути
//! запоминают предшественника на каждом уровне и по этому следу вставляют
//! или вырезают узел.

use std::{
    cell::Cell,
    cmp::Ordering,
    fmt::{self, Debug, Display},
    mem,
};

use rand::{rngs::StdRng, RngCore, SeedableRng};
use skipmap_error::SkipResult;
use tracing::{debug, trace};

use super::{
    comparator::{Comparator, DisplayOrder, NaturalOrder},
    level::{
        check_params, LevelGenerator, DEFAULT_GROWTH_PROBABILITY, DEFAULT_INITIAL_HEIGHT,
        DEFAULT_MAX_LEVEL,
    },
    node::{Cursor, Node, NodeArena, NodeId},
};
use crate::config::SkipListConfig;

/// Пропускной список с компаратором `C` и источником случайности `R`.
///
/// Узлы хранятся в арене; `front[i]` указывает на первый узел, уровень
/// которого не меньше `i + 1`. Высота (`front.len()`) растёт лениво при
/// вставке и никогда не уменьшается.
///
/// Структура однопоточная: счётчик проб использует [`Cell`], поэтому
/// `SkipList` не реализует `Sync`.
pub struct SkipList<K, V, C = NaturalOrder, R = StdRng> {
    pub(crate) nodes: NodeArena<K, V>,
    pub(crate) front: Vec<Option<NodeId>>,
    pub(crate) comparator: C,
    pub(crate) levels: LevelGenerator<R>,
    pub(crate) len: usize,
    pub(crate) probes: Cell<u64>,
}

/// Построитель [`SkipList`] с настраиваемыми параметрами.
#[derive(Debug, Clone)]
pub struct SkipListBuilder<C = NaturalOrder, R = StdRng> {
    comparator: C,
    rng: R,
    growth_probability: f64,
    initial_height: usize,
    max_level: usize,
}

/// Результат вставки-или-обновления.
enum Upsert<V> {
    Inserted(NodeId),
    Updated(V),
}

////////////////////////////////////////////////////////////////////////////////
// Конструкторы
////////////////////////////////////////////////////////////////////////////////

impl<K: Ord, V> SkipList<K, V> {
    /// Создаёт пустой список с естественным порядком ключей.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V> SkipList<K, V> {
    /// Построитель с параметрами по умолчанию. Типы ключа и значения
    /// указываются явно: `SkipList::<K, V>::builder()`.
    pub fn builder() -> SkipListBuilder {
        SkipListBuilder::new()
    }
}

impl<K: Display, V> SkipList<K, V, DisplayOrder> {
    /// Создаёт пустой список, упорядоченный лексикографически по строковому
    /// представлению ключей.
    pub fn by_display() -> Self {
        Self::with_comparator(DisplayOrder)
    }
}

impl<K, V, C: Comparator<K>> SkipList<K, V, C> {
    /// Создаёт пустой список с заданным компаратором и параметрами по
    /// умолчанию.
    pub fn with_comparator(comparator: C) -> Self {
        let levels = LevelGenerator::with_defaults(StdRng::from_entropy());
        Self::from_parts(comparator, levels, DEFAULT_INITIAL_HEIGHT)
    }

    /// Создаёт пустой список с параметрами из конфигурации и заданным
    /// компаратором.
    pub fn from_config(
        config: &SkipListConfig,
        comparator: C,
    ) -> SkipResult<Self> {
        SkipListBuilder::from_config(config)
            .comparator(comparator)
            .build()
    }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    fn from_parts(
        comparator: C,
        levels: LevelGenerator<R>,
        initial_height: usize,
    ) -> Self {
        Self {
            nodes: NodeArena::new(),
            front: vec![None; initial_height],
            comparator,
            levels,
            len: 0,
            probes: Cell::new(0),
        }
    }

    /// Количество пар ключ-значение.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Текущая высота списка (длина массива `front`).
    #[inline]
    pub fn height(&self) -> usize {
        self.front.len()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Количество сравнений ключей и переписанных ссылок с момента создания
    /// или последнего [`reset_probes`](Self::reset_probes).
    pub fn probes(&self) -> u64 {
        self.probes.get()
    }

    pub fn reset_probes(&self) {
        self.probes.set(0);
    }

    /// Возвращает элемент с минимальным ключом за O(1).
    pub fn first(&self) -> Option<(&K, &V)> {
        self.front[0].map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    /// Удаляет все элементы. Высота списка сохраняется.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    #[inline]
    fn bump(
        &self,
        n: u64,
    ) {
        self.probes.set(self.probes.get() + n);
    }

    /// Следующий узел после курсора на уровне `level`.
    #[inline]
    pub(crate) fn next_at(
        &self,
        cursor: Cursor,
        level: usize,
    ) -> Option<NodeId> {
        match cursor {
            Cursor::Header => self.front[level],
            Cursor::Node(id) => self.nodes[id].forward[level],
        }
    }

    fn set_next(
        &mut self,
        cursor: Cursor,
        level: usize,
        target: Option<NodeId>,
    ) {
        match cursor {
            Cursor::Header => self.front[level] = target,
            Cursor::Node(id) => self.nodes[id].forward[level] = target,
        }
        self.bump(1);
    }

    /// Увеличивает высоту до `level`, заменяя массив `front` новым.
    fn grow_front(
        &mut self,
        level: usize,
    ) {
        let mut front = Vec::with_capacity(level);
        front.extend_from_slice(&self.front);
        front.resize(level, None);

        debug!(from = self.front.len(), to = level, "growing front array");

        self.front = front;
    }
}

////////////////////////////////////////////////////////////////////////////////
// Поиск, вставка, удаление
////////////////////////////////////////////////////////////////////////////////

impl<K, V, C, R> SkipList<K, V, C, R>
where
    C: Comparator<K>,
{
    /// Спуск от верхнего уровня к нижнему. Возвращает курсор, после которого
    /// на уровне 0 должен находиться `key`. Если передан `trail`, в
    /// `trail[i]` записывается предшественник на уровне `i`.
    fn descend(
        &self,
        key: &K,
        mut trail: Option<&mut [Cursor]>,
    ) -> Cursor {
        let mut cursor = Cursor::Header;

        for level in (0..self.height()).rev() {
            while let Some(next) = self.next_at(cursor, level) {
                self.bump(1);
                if self.comparator.compare(&self.nodes[next].key, key) == Ordering::Less {
                    cursor = Cursor::Node(next);
                } else {
                    break;
                }
            }

            if let Some(trail) = trail.as_deref_mut() {
                trail[level] = cursor;
            }
        }

        cursor
    }

    /// Узел, следующий за `pred` на уровне 0, если его ключ равен `key`.
    fn matching_successor(
        &self,
        pred: Cursor,
        key: &K,
    ) -> Option<NodeId> {
        let candidate = self.next_at(pred, 0)?;
        self.bump(1);

        match self.comparator.compare(&self.nodes[candidate].key, key) {
            Ordering::Equal => Some(candidate),
            _ => None,
        }
    }

    fn find(
        &self,
        key: &K,
    ) -> Option<NodeId> {
        let pred = self.descend(key, None);
        self.matching_successor(pred, key)
    }

    /// Ищет значение по ключу.
    pub fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        self.find(key).map(|id| &self.nodes[id].value)
    }

    /// Ищет значение по ключу и возвращает изменяемую ссылку на него.
    pub fn get_mut(
        &mut self,
        key: &K,
    ) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains_key(
        &self,
        key: &K,
    ) -> bool {
        self.find(key).is_some()
    }

    /// Удаляет ключ и возвращает связанное с ним значение.
    ///
    /// Узел вырезается на каждом своём уровне, включая уровни, где его
    /// предшественником является `front`.
    pub fn remove(
        &mut self,
        key: &K,
    ) -> Option<V> {
        let mut trail = vec![Cursor::Header; self.height()];
        let pred = self.descend(key, Some(trail.as_mut_slice()));
        let target = self.matching_successor(pred, key)?;

        let level = self.nodes[target].level();
        for (i, &pred) in trail[..level].iter().enumerate() {
            if self.next_at(pred, i) == Some(target) {
                let next = self.nodes[target].forward[i];
                self.set_next(pred, i, next);
            }
        }

        let node = self.nodes.remove(target);
        self.len -= 1;

        trace!(node_level = level, size = self.len, "removed key");

        Some(node.value)
    }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
    C: Comparator<K>,
    R: RngCore,
{
    fn upsert(
        &mut self,
        key: K,
        value: V,
    ) -> Upsert<V> {
        let mut trail = vec![Cursor::Header; self.height()];
        let pred = self.descend(&key, Some(trail.as_mut_slice()));

        if let Some(id) = self.matching_successor(pred, &key) {
            let old = mem::replace(&mut self.nodes[id].value, value);
            trace!(size = self.len, "updated existing key");
            return Upsert::Updated(old);
        }

        // Уровень выбирается только для нового ключа.
        let level = self.levels.random_level();
        if level > self.height() {
            self.grow_front(level);
            trail.resize(level, Cursor::Header);
        }

        let id = self.nodes.insert(Node::new(key, value, level));

        for (i, &pred) in trail[..level].iter().enumerate() {
            let next = self.next_at(pred, i);
            self.nodes[id].forward[i] = next;
            self.set_next(pred, i, Some(id));
        }

        self.len += 1;

        trace!(
            node_level = level,
            height = self.height(),
            size = self.len,
            "inserted new key"
        );

        Upsert::Inserted(id)
    }

    /// Вставляет пару или обновляет значение существующего ключа.
    ///
    /// При обновлении возвращает предыдущее значение, при вставке нового
    /// ключа возвращает копию переданного значения.
    pub fn set(
        &mut self,
        key: K,
        value: V,
    ) -> V
    where
        V: Clone,
    {
        match self.upsert(key, value) {
            Upsert::Inserted(id) => self.nodes[id].value.clone(),
            Upsert::Updated(old) => old,
        }
    }

    /// Вставляет пару или обновляет значение существующего ключа.
    ///
    /// Возвращает предыдущее значение или `None`, если ключ новый.
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Option<V> {
        match self.upsert(key, value) {
            Upsert::Inserted(_) => None,
            Upsert::Updated(old) => Some(old),
        }
    }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    pub fn growth_probability(&self) -> f64 {
        self.levels.probability()
    }

    /// Максимальный уровень, который может получить новый узел.
    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }
}

////////////////////////////////////////////////////////////////////////////////
// SkipListBuilder
////////////////////////////////////////////////////////////////////////////////

impl SkipListBuilder {
    pub fn new() -> Self {
        Self {
            comparator: NaturalOrder,
            rng: StdRng::from_entropy(),
            growth_probability: DEFAULT_GROWTH_PROBABILITY,
            initial_height: DEFAULT_INITIAL_HEIGHT,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }

    /// Построитель с параметрами из конфигурации. Если задано зерно,
    /// генератор уровней детерминирован.
    pub fn from_config(config: &SkipListConfig) -> Self {
        let builder = Self::new()
            .growth_probability(config.growth_probability)
            .initial_height(config.initial_height)
            .max_level(config.max_level);

        match config.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }
}

impl<C> SkipListBuilder<C, StdRng> {
    /// Детерминированный генератор уровней с заданным зерном.
    pub fn seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<C, R> SkipListBuilder<C, R> {
    pub fn comparator<C2>(
        self,
        comparator: C2,
    ) -> SkipListBuilder<C2, R> {
        SkipListBuilder {
            comparator,
            rng: self.rng,
            growth_probability: self.growth_probability,
            initial_height: self.initial_height,
            max_level: self.max_level,
        }
    }

    /// Подменяет источник случайности.
    pub fn rng<R2: RngCore>(
        self,
        rng: R2,
    ) -> SkipListBuilder<C, R2> {
        SkipListBuilder {
            comparator: self.comparator,
            rng,
            growth_probability: self.growth_probability,
            initial_height: self.initial_height,
            max_level: self.max_level,
        }
    }

    pub fn growth_probability(
        mut self,
        p: f64,
    ) -> Self {
        self.growth_probability = p;
        self
    }

    pub fn initial_height(
        mut self,
        height: usize,
    ) -> Self {
        self.initial_height = height;
        self
    }

    pub fn max_level(
        mut self,
        max_level: usize,
    ) -> Self {
        self.max_level = max_level;
        self
    }

    /// Проверяет параметры и создаёт пустой список.
    pub fn build<K, V>(self) -> SkipResult<SkipList<K, V, C, R>>
    where
        C: Comparator<K>,
        R: RngCore,
    {
        check_params(
            self.growth_probability,
            self.initial_height,
            self.max_level,
        )?;

        let levels = LevelGenerator::new(self.rng, self.growth_probability, self.max_level)?;

        Ok(SkipList::from_parts(
            self.comparator,
            levels,
            self.initial_height,
        ))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для SkipList
////////////////////////////////////////////////////////////////////////////////

impl Default for SkipListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C, R> Debug for SkipList<K, V, C, R>
where
    K: Debug,
    V: Debug,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, R> Clone for SkipList<K, V, C, R>
where
    K: Clone,
    V: Clone,
    C: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            front: self.front.clone(),
            comparator: self.comparator.clone(),
            levels: self.levels.clone(),
            len: self.len,
            probes: Cell::new(0),
        }
    }
}

impl<K, V, C, R> PartialEq for SkipList<K, V, C, R>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<K, V, C, R> Extend<(K, V)> for SkipList<K, V, C, R>
where
    C: Comparator<K>,
    R: RngCore,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
