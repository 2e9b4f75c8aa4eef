use rand::{rngs::StdRng, RngCore, SeedableRng};
use rand_distr::{Distribution, Uniform};

use heap_select::base::{Priority, Record};

/// Seeded generator when a seed is given, random otherwise
pub fn test_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Records with an empty label and a priority uniformly drawn in [0, 100)
pub fn random_records(count: usize, rng: &mut dyn RngCore) -> Vec<Record> {
    let uniform = Uniform::new(0., 100.);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(Record::new("", uniform.sample(rng)));
    }
    records
}

/// Records with priorities start, start + 1, ..., stop
pub fn ascending_records(start: i64, stop: i64) -> Vec<Record> {
    (start..=stop)
        .map(|i| Record::new("", i as Priority))
        .collect()
}

pub fn priorities(records: &[Record]) -> Vec<Priority> {
    records.iter().map(|r| r.priority).collect()
}

/// Reference top-K: full sort by decreasing priority, then truncate
pub fn sorted_top_k(records: &[Record], top_k: usize) -> Vec<Priority> {
    let mut sorted = priorities(records);
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.truncate(top_k);
    sorted
}
