#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skipmap::SkipListBuilder;

#[derive(Debug, Arbitrary)]
enum Op {
    Set(u16, u32),
    Insert(u16, u32),
    Get(u16),
    Remove(u16),
    Contains(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    seed: u64,
    /// Вероятность в процентах, сводится к (0, 1).
    percent: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: FuzzInput| {
    let p = f64::from(input.percent % 98 + 1) / 100.0;
    let mut sl = match SkipListBuilder::new()
        .seed(input.seed)
        .growth_probability(p)
        .initial_height(1)
        .max_level(12)
        .build()
    {
        Ok(sl) => sl,
        Err(_) => return,
    };
    let mut model = BTreeMap::new();

    for op in input.ops {
        match op {
            Op::Set(k, v) => {
                let expected = model.insert(k, v).unwrap_or(v);
                assert_eq!(sl.set(k, v), expected);
            }
            Op::Insert(k, v) => assert_eq!(sl.insert(k, v), model.insert(k, v)),
            Op::Get(k) => assert_eq!(sl.get(&k), model.get(&k)),
            Op::Remove(k) => assert_eq!(sl.remove(&k), model.remove(&k)),
            Op::Contains(k) => assert_eq!(sl.contains_key(&k), model.contains_key(&k)),
            Op::Clear => {
                sl.clear();
                model.clear();
            }
        }
    }

    assert_eq!(sl.len(), model.len());
    assert!(sl.iter().map(|(k, v)| (*k, *v)).eq(model.into_iter()));
    if let Err(e) = sl.validate_invariants() {
        panic!("invariant violated: {e}");
    }
});
