use rand::seq::SliceRandom;
use rand::Rng;

pub trait Shuffler: Send + Sync {
    fn shuffle(&self, items: Vec<i64>) -> Vec<i64>;
}

/// Fisher-Yates over the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&self, items: Vec<i64>) -> Vec<i64> {
        shuffle_with(items, &mut rand::thread_rng())
    }
}

pub fn shuffle_with<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}
