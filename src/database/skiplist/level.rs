//! Генерация случайного уровня для новых узлов.

use rand::{Rng, RngCore};
use skipmap_error::{SkipListError, SkipResult};

/// Вероятность перехода узла на следующий уровень по умолчанию.
pub const DEFAULT_GROWTH_PROBABILITY: f64 = 0.5;

/// Начальная высота массива `front`.
pub const DEFAULT_INITIAL_HEIGHT: usize = 16;

/// Верхняя граница уровня узла. При p = 0.5 вероятность её достичь
/// составляет 2^-31.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// Проверяет параметры списка: вероятность роста строго в (0, 1),
/// начальная высота не меньше 1, предельный уровень не ниже начальной
/// высоты. `NaN` отклоняется.
pub(crate) fn check_params(
    growth_probability: f64,
    initial_height: usize,
    max_level: usize,
) -> SkipResult<()> {
    if !(growth_probability > 0.0 && growth_probability < 1.0) {
        return Err(SkipListError::invalid_argument(
            "growth_probability",
            format!("must be in (0, 1), got {growth_probability}"),
        ));
    }
    if initial_height == 0 {
        return Err(SkipListError::invalid_argument(
            "initial_height",
            "must be at least 1",
        ));
    }
    if max_level < initial_height {
        return Err(SkipListError::invalid_argument(
            "max_level",
            format!("must not be below initial_height ({max_level} < {initial_height})"),
        ));
    }
    Ok(())
}

/// Генератор уровней с геометрическим распределением.
///
/// Источник случайности принадлежит генератору, глобального состояния нет:
/// с одинаковым зерном последовательность уровней воспроизводима.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R> {
    rng: R,
    probability: f64,
    max_level: usize,
}

impl<R: RngCore> LevelGenerator<R> {
    /// Создаёт генератор. `probability` должна лежать строго в (0, 1),
    /// `max_level` должен быть не меньше 1.
    pub fn new(
        rng: R,
        probability: f64,
        max_level: usize,
    ) -> SkipResult<Self> {
        check_params(probability, 1, max_level)?;

        Ok(Self {
            rng,
            probability,
            max_level,
        })
    }

    /// Возвращает уровень >= 1: начиная с 1, уровень растёт, пока очередное
    /// испытание успешно, и не превышает `max_level`.
    pub fn random_level(&mut self) -> usize {
        let mut lvl = 1;

        while lvl < self.max_level && self.rng.gen::<f64>() < self.probability {
            lvl += 1;
        }

        lvl
    }
}

impl<R> LevelGenerator<R> {
    /// Генератор с вероятностью и предельным уровнем по умолчанию.
    pub(crate) fn with_defaults(rng: R) -> Self {
        Self {
            rng,
            probability: DEFAULT_GROWTH_PROBABILITY,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn seeded(p: f64) -> LevelGenerator<StdRng> {
        LevelGenerator::new(StdRng::seed_from_u64(7), p, DEFAULT_MAX_LEVEL).unwrap()
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        for p in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let res = LevelGenerator::new(StdRng::seed_from_u64(1), p, 8);
            assert!(
                matches!(res, Err(SkipListError::InvalidArgument { name: "growth_probability", .. })),
                "p = {p} must be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_max_level() {
        let res = LevelGenerator::new(StdRng::seed_from_u64(1), 0.5, 0);
        assert!(matches!(
            res,
            Err(SkipListError::InvalidArgument { name: "max_level", .. })
        ));
    }

    #[test]
    fn test_check_params() {
        assert!(check_params(0.5, 16, 32).is_ok());
        assert!(check_params(0.5, 1, 1).is_ok());
        assert!(matches!(
            check_params(0.5, 0, 4),
            Err(SkipListError::InvalidArgument { name: "initial_height", .. })
        ));
        assert!(matches!(
            check_params(0.5, 8, 4),
            Err(SkipListError::InvalidArgument { name: "max_level", .. })
        ));
        assert!(matches!(
            check_params(f64::NAN, 1, 4),
            Err(SkipListError::InvalidArgument { name: "growth_probability", .. })
        ));
    }

    #[test]
    fn test_levels_within_bounds() {
        let mut gen = LevelGenerator::new(StdRng::seed_from_u64(3), 0.9, 4).unwrap();

        for _ in 0..1000 {
            let lvl = gen.random_level();
            assert!((1..=4).contains(&lvl));
        }
    }

    #[test]
    fn test_same_seed_same_levels() {
        let mut a = seeded(0.5);
        let mut b = seeded(0.5);

        let la: Vec<_> = (0..100).map(|_| a.random_level()).collect();
        let lb: Vec<_> = (0..100).map(|_| b.random_level()).collect();

        assert_eq!(la, lb);
    }

    #[test]
    fn test_mean_level_is_geometric() {
        // E[level] = 1 / (1 - p)
        let mut gen = seeded(0.5);
        let n = 20_000;
        let total: usize = (0..n).map(|_| gen.random_level()).sum();
        let mean = total as f64 / n as f64;

        assert!((mean - 2.0).abs() < 0.1, "mean level {mean}");
    }
}
