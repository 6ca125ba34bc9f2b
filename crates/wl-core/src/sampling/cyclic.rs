use orion_error::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{GenReason, GenResult};

/// Draw `k` items from `pool` in shuffled passes.
///
/// Each pass is a fresh shuffle of the whole pool, consumed one item at a time;
/// so every item appears `⌊k / |pool|⌋` or `⌈k / |pool|⌉` times and no item
/// repeats within a pass. With `randomize` the result is shuffled once more,
/// hiding the pass boundaries.
pub fn choices<T: Clone>(
    pool: &[T],
    k: usize,
    randomize: bool,
    rng: &mut StdRng,
) -> GenResult<Vec<T>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    if pool.is_empty() {
        return StructError::from(GenReason::Config)
            .with_detail(format!("cannot draw {k} items from an empty pool"))
            .err();
    }

    let mut drawn = Vec::with_capacity(k);
    let mut pass: Vec<T> = Vec::new();
    while drawn.len() < k {
        if pass.is_empty() {
            pass = pool.to_vec();
            pass.shuffle(rng);
        }
        if let Some(item) = pass.pop() {
            drawn.push(item);
        }
    }

    if randomize {
        drawn.shuffle(rng);
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn balanced_exposure() {
        let pool = ['a', 'b', 'c'];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = choices(&pool, 7, false, &mut rng).unwrap();
            assert_eq!(drawn.len(), 7);
            for item in pool {
                let n = drawn.iter().filter(|d| **d == item).count();
                assert!(n == 2 || n == 3, "seed {seed}: {item} drawn {n} times");
            }
        }
    }

    #[test]
    fn no_repeat_within_a_pass() {
        let pool = ['a', 'b', 'c'];
        let mut rng = StdRng::seed_from_u64(9);
        let drawn = choices(&pool, 9, false, &mut rng).unwrap();
        for pass in drawn.chunks(pool.len()) {
            let mut sorted = pass.to_vec();
            sorted.sort();
            assert_eq!(sorted, vec!['a', 'b', 'c']);
        }
    }

    #[test]
    fn randomized_keeps_counts() {
        let pool = ["own", "other", "other"];
        let mut rng = StdRng::seed_from_u64(5);
        let drawn = choices(&pool, 6, true, &mut rng).unwrap();
        assert_eq!(drawn.iter().filter(|d| **d == "own").count(), 2);
        assert_eq!(drawn.iter().filter(|d| **d == "other").count(), 4);
    }

    #[test]
    fn empty_cases() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [u8; 0] = [];
        assert!(choices(&empty, 0, true, &mut rng).unwrap().is_empty());
        assert!(choices(&empty, 1, true, &mut rng).is_err());
        assert!(choices(&[1u8], 0, false, &mut rng).unwrap().is_empty());
    }
}
