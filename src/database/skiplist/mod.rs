//! SkipList — упорядоченный ассоциативный контейнер на пропускном списке.
//!
//! # Модули
//!
//! - `node`: узлы и арена, которая ими владеет.
//! - `comparator`: порядок ключей.
//! - `level`: генерация случайного уровня.
//! - `skiplist_base`: поиск, вставка, удаление.
//! - `iter`: обход по возрастанию ключей.
//! - `dump`: текстовый дамп уровней.
//! - `safety`: проверка инвариантов и статистика.

pub mod comparator;
pub mod dump;
pub mod iter;
pub mod level;
mod node;
pub mod safety;
pub mod skiplist_base;

// Publicly re-export all types from the submodules to simplify access from
// external code.
pub use comparator::*;
pub use iter::*;
pub use level::*;
pub use safety::*;
pub use skiplist_base::*;
