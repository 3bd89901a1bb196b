//! Среднее число проб (сравнений ключей и переписанных ссылок) на операцию
//! для растущих размеров списка. При логарифмической сложности удвоение
//! размера добавляет к среднему примерно константу.

use rand::{rngs::StdRng, Rng, SeedableRng};
use skipmap::{init_logging, LoggingConfig, SkipList, SkipListBuilder};
use tracing::info;

/// Операций в каждой серии замеров.
const SAMPLES: u32 = 1000;

fn average_probes<F>(
    sl: &mut SkipList<i64, i64>,
    mut op: F,
) -> f64
where
    F: FnMut(&mut SkipList<i64, i64>, u32),
{
    let mut sum = 0;
    for j in 0..SAMPLES {
        sl.reset_probes();
        op(sl, j);
        sum += sl.probes();
    }
    sum as f64 / f64::from(SAMPLES)
}

fn prefill(
    sl: &mut SkipList<i64, i64>,
    rng: &mut StdRng,
    size: i64,
) {
    for i in 0..size / 4 {
        sl.set(rng.gen_range(0..size), i);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig {
        default_level: "info".to_string(),
        ..Default::default()
    })?;

    let mut rng = StdRng::seed_from_u64(2024);
    let mut sl = SkipListBuilder::new().seed(7).build()?;

    let mut size: i64 = 1000;
    while size < 20_000 {
        prefill(&mut sl, &mut rng, size);
        let set = average_probes(&mut sl, |sl, j| {
            let key = rng.gen_range(-size..size);
            sl.set(key, i64::from(j));
        });

        prefill(&mut sl, &mut rng, size);
        let get = average_probes(&mut sl, |sl, _| {
            let key = rng.gen_range(-size..size);
            sl.get(&key);
        });

        prefill(&mut sl, &mut rng, size);
        let remove = average_probes(&mut sl, |sl, _| {
            let key = rng.gen_range(-size..size);
            sl.remove(&key);
        });

        info!(
            size,
            len = sl.len(),
            height = sl.height(),
            set,
            get,
            remove,
            "average probes per operation"
        );

        size *= 2;
    }

    Ok(())
}
