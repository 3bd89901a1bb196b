use std::fmt::Debug;

use skipmap_error::{ErrorExt, StatusCode};
use thiserror::Error;

use super::{
    comparator::Comparator,
    node::{Cursor, NodeId},
    skiplist_base::SkipList,
};

/// Макрос для валидации условий с возвратом ошибки.
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Нарушение структурного инварианта. Любой такой результат означает ошибку
/// в реализации, а не в данных вызывающей стороны.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Уровень узла вне диапазона [1, высота].
    #[error("node level {node_level} is outside 1..={height}")]
    InvalidLevel { node_level: usize, height: usize },
    /// Нарушен порядок сортировки на уровне.
    #[error("sort order violation at level {level}: {message}")]
    SortOrderViolation { level: usize, message: String },
    /// Уровень не является подпоследовательностью нижнего уровня.
    #[error("level {level} is not consistent with the levels below it")]
    LevelConsistency { level: usize },
    /// `front[level]` указывает не на первый узел этого уровня.
    #[error("front[{level}] does not point to the first node of that level")]
    FrontMismatch { level: usize },
    /// Счётчик элементов не совпадает с числом узлов на уровне 0.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// В арене есть узлы, недостижимые с уровня 0.
    #[error("{live} nodes allocated but {reachable} reachable")]
    OrphanedNodes { live: usize, reachable: usize },
    /// Обход уровня не завершился.
    #[error("cyclic reference detected at level {level}")]
    CyclicReference { level: usize },
}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvariantViolation
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Статистика структуры SkipList.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipListStatistics {
    /// Количество узлов
    pub node_count: usize,
    /// `level_distribution[i]` — число узлов уровня `i + 1`
    pub level_distribution: Vec<usize>,
    /// Текущая высота
    pub height: usize,
    /// Предельный уровень нового узла
    pub max_level: usize,
    /// Средний уровень узла
    pub average_level: f64,
}

impl SkipListStatistics {
    /// Число ссылок `forward` во всех узлах.
    pub fn total_links(&self) -> usize {
        self.level_distribution
            .iter()
            .enumerate()
            .map(|(level, &count)| (level + 1) * count)
            .sum()
    }

    fn compute_average_level(&mut self) {
        self.average_level = if self.node_count == 0 {
            0.0
        } else {
            self.total_links() as f64 / self.node_count as f64
        };
    }

    /// Форматирует статистику для вывода.
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "SkipList: {} nodes, height {}, level cap {}, average level {:.2}\n",
            self.node_count, self.height, self.max_level, self.average_level
        );

        for (level, &count) in self.level_distribution.iter().enumerate() {
            if count > 0 {
                let percentage = (count as f64 / self.node_count as f64) * 100.0;
                report.push_str(&format!(
                    "  level {:>2}: {count} ({percentage:.1}%)\n",
                    level + 1
                ));
            }
        }

        report
    }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
    /// Собирает распределение узлов по уровням.
    pub fn statistics(&self) -> SkipListStatistics {
        let mut stats = SkipListStatistics {
            node_count: 0,
            level_distribution: vec![0; self.height()],
            height: self.height(),
            max_level: self.levels.max_level(),
            average_level: 0.0,
        };

        let mut current = self.front[0];
        while let Some(id) = current {
            let node = &self.nodes[id];
            stats.node_count += 1;
            if let Some(slot) = stats.level_distribution.get_mut(node.level() - 1) {
                *slot += 1;
            }
            current = node.forward[0];
        }

        stats.compute_average_level();
        stats
    }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
    K: Debug,
    C: Comparator<K>,
{
    /// Проходит все уровни и проверяет структурные инварианты: строгий
    /// порядок, согласованность уровней, корректность `front` и счётчика.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        let height = self.height();
        let live = self.nodes.live();

        let base = self.walk_level(0, live)?;

        for pair in base.windows(2) {
            let (prev, next) = (&self.nodes[pair[0]].key, &self.nodes[pair[1]].key);
            validate!(
                self.comparator.compare(prev, next).is_lt(),
                ValidationError::SortOrderViolation {
                    level: 0,
                    message: format!("{prev:?} >= {next:?}"),
                }
            );
        }

        validate!(
            base.len() == self.len,
            ValidationError::LengthMismatch {
                expected: self.len,
                actual: base.len(),
            }
        );
        validate!(
            live == base.len(),
            ValidationError::OrphanedNodes {
                live,
                reachable: base.len(),
            }
        );

        for level in 1..height {
            let actual = self.walk_level(level, live)?;
            let expected: Vec<NodeId> = base
                .iter()
                .copied()
                .filter(|&id| self.nodes[id].level() > level)
                .collect();

            validate!(
                actual.first() == expected.first(),
                ValidationError::FrontMismatch { level }
            );
            validate!(
                actual == expected,
                ValidationError::LevelConsistency { level }
            );
        }

        Ok(())
    }

    /// Собирает узлы уровня `level`, проверяя уровень каждого узла до чтения
    /// его ссылки.
    fn walk_level(
        &self,
        level: usize,
        limit: usize,
    ) -> Result<Vec<NodeId>, ValidationError> {
        let height = self.height();
        let mut ids = Vec::new();
        let mut cursor = Cursor::Header;

        while let Some(id) = self.next_at(cursor, level) {
            let node_level = self.nodes[id].level();
            validate!(
                (1..=height).contains(&node_level) && node_level > level,
                ValidationError::InvalidLevel { node_level, height }
            );
            validate!(
                ids.len() < limit,
                ValidationError::CyclicReference { level }
            );

            ids.push(id);
            cursor = Cursor::Node(id);
        }

        Ok(ids)
    }
}
