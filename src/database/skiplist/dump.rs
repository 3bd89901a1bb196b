//! Текстовый дамп структуры уровней для ручной отладки.
//!
//! ```text
//!            X X X
//!            | | |
//!          1-3-3 |
//!            | | |
//!          3-*-*-*
//!            | | |
//!            O O O
//! ```

use std::{
    fmt::Display,
    io::{self, Write},
};

use super::skiplist_base::SkipList;

/// Ширина колонки ключа.
const KEY_WIDTH: usize = 10;

impl<K: Display, V, C, R> SkipList<K, V, C, R> {
    /// Печатает уровни и ссылки каждого узла в `pen`.
    ///
    /// Для каждого узла выводится ключ (выровненный вправо и обрезанный до
    /// [`KEY_WIDTH`] символов), затем по одной метке на каждый его уровень:
    /// `-*` если следующего узла нет, иначе `-<ключ следующего>`. Уровни,
    /// которых у узла нет, отмечаются ` |`.
    pub fn dump<W: Write>(
        &self,
        pen: &mut W,
    ) -> io::Result<()> {
        let leading = " ".repeat(KEY_WIDTH);
        let height = self.height();

        self.write_row(pen, &leading, " X")?;
        self.write_row(pen, &leading, " |")?;

        let mut current = self.front[0];
        while let Some(id) = current {
            let node = &self.nodes[id];

            let shown: String = node.key.to_string().chars().take(KEY_WIDTH).collect();
            write!(pen, "{shown:>KEY_WIDTH$}")?;

            for next in &node.forward {
                match next {
                    Some(next) => write!(pen, "-{}", self.nodes[*next].key)?,
                    None => write!(pen, "-*")?,
                }
            }
            for _ in node.level()..height {
                write!(pen, " |")?;
            }
            writeln!(pen)?;

            self.write_row(pen, &leading, " |")?;
            current = node.forward[0];
        }

        self.write_row(pen, &leading, " O")
    }

    fn write_row<W: Write>(
        &self,
        pen: &mut W,
        leading: &str,
        mark: &str,
    ) -> io::Result<()> {
        write!(pen, "{leading}")?;
        for _ in 0..self.height() {
            write!(pen, "{mark}")?;
        }
        writeln!(pen)
    }
}
