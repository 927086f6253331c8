use std::collections::HashMap;

use parking_lot::Mutex;

/// Caches a deterministic computation per distinct input for its own lifetime
pub trait Memoizer<K, V>: Send + Sync {
    fn get(&self, key: K) -> V;
}

/// Memoized `x * 2`
#[derive(Debug, Default)]
pub struct Doubler {
    cache: Mutex<HashMap<i64, i64>>,
    computations: Mutex<usize>,
}

impl Doubler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the underlying function actually ran
    pub fn computations(&self) -> usize {
        *self.computations.lock()
    }
}

impl Memoizer<i64, i64> for Doubler {
    fn get(&self, key: i64) -> i64 {
        let mut cache = self.cache.lock();
        *cache.entry(key).or_insert_with(|| {
            *self.computations.lock() += 1;
            key * 2
        })
    }
}
