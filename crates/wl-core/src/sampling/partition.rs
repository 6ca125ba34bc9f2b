use orion_error::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{GenReason, GenResult};

/// Upper bound on rejection-sampling attempts in [`get_parts`].
pub const MAX_PARTITION_ATTEMPTS: usize = 10_000;

/// Split `duration` into `n` random non-negative parts that sum to `duration`.
///
/// Parts are drawn one at a time, part `i` uniformly from
/// `[0, remaining / max(1, parts_left - 1)]`, and an attempt is kept only if
/// it consumes the duration in exactly `n` parts. After
/// [`MAX_PARTITION_ATTEMPTS`] rejected attempts the last part absorbs the
/// remainder instead. The result is shuffled.
pub fn get_parts(duration: u64, n: usize, rng: &mut StdRng) -> GenResult<Vec<u64>> {
    if n == 0 {
        return StructError::from(GenReason::Partition)
            .with_detail(format!("cannot split {duration}s into zero parts"))
            .err();
    }
    if duration == 0 {
        return Ok(vec![0; n]);
    }

    let mut parts = match (0..MAX_PARTITION_ATTEMPTS).find_map(|_| partition_attempt(duration, n, rng))
    {
        Some(parts) => parts,
        None => {
            wl_debug!(
                scen,
                duration,
                parts = n,
                attempts = MAX_PARTITION_ATTEMPTS,
                "partition attempts exhausted, absorbing remainder"
            );
            partition_absorbing(duration, n, rng)
        }
    };
    parts.shuffle(rng);
    Ok(parts)
}

/// One pass of the draw rule. `None` when the duration runs out before `n`
/// parts or is not consumed by the `n`-th part.
fn partition_attempt(duration: u64, n: usize, rng: &mut StdRng) -> Option<Vec<u64>> {
    let mut parts = Vec::with_capacity(n);
    let mut remaining = duration;
    while remaining > 0 {
        if parts.len() == n {
            return None;
        }
        let parts_left = n - parts.len();
        let part = rng.random_range(0..=remaining / parts_left.saturating_sub(1).max(1) as u64);
        remaining -= part;
        parts.push(part);
    }
    (parts.len() == n).then_some(parts)
}

fn partition_absorbing(duration: u64, n: usize, rng: &mut StdRng) -> Vec<u64> {
    let mut parts = Vec::with_capacity(n);
    let mut remaining = duration;
    for parts_left in (2..=n).rev() {
        let part = rng.random_range(0..=remaining / (parts_left as u64 - 1));
        remaining -= part;
        parts.push(part);
    }
    parts.push(remaining);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sum_and_length_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        for duration in [0u64, 1, 2, 5, 17, 40, 54, 299, 1200] {
            for n in 1..=8 {
                let parts = get_parts(duration, n, &mut rng).unwrap();
                assert_eq!(parts.len(), n, "duration={duration} n={n}");
                assert_eq!(parts.iter().sum::<u64>(), duration, "duration={duration} n={n}");
            }
        }
    }

    #[test]
    fn zero_duration_yields_zero_parts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(get_parts(0, 4, &mut rng).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn single_part_is_whole_duration() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(get_parts(3600, 1, &mut rng).unwrap(), vec![3600]);
    }

    #[test]
    fn zero_parts_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(get_parts(10, 0, &mut rng).is_err());
    }

    #[test]
    fn absorbing_pass_keeps_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..=6 {
            let parts = partition_absorbing(100, n, &mut rng);
            assert_eq!(parts.len(), n);
            assert_eq!(parts.iter().sum::<u64>(), 100);
        }
    }

    #[test]
    fn deterministic_for_seed() {
        let a = get_parts(54, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = get_parts(54, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
