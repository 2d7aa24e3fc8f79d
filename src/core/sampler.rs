use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SAMPLE_SIZE: usize = 100;

pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Picks `min(amount, len)` distinct indices; every subset of that size is equally likely.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    let amount = amount.min(len);
    if amount == 0 {
        return Vec::new();
    }
    rand::seq::index::sample(rng, len, amount).into_vec()
}

pub fn sample<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T], amount: usize) -> Vec<&'a T> {
    sample_indices(rng, items.len(), amount)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
