//! Slot roll engine
//!
//! One uniform roll per slot against its configured percentage, in
//! order. The chain stops at the first failure, so earlier (stricter)
//! slots gate the later ones and fill probability decreases
//! monotonically.

use rand::Rng;

/// Roll the ordered slot chain. Returns how many consecutive slots
/// succeeded, possibly zero. A slot succeeds when roll + percentage
/// reaches 100, so a percentage of 100 always succeeds and 0 never
/// does.
pub fn roll_slots(percentages: &[f64], rng: &mut impl Rng) -> usize {
    let mut successes = 0;
    for &pct in percentages {
        let roll: f64 = rng.gen_range(0.0..100.0);
        if roll + pct < 100.0 {
            break;
        }
        successes += 1;
    }
    successes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Wrapper that counts how many draws the engine makes.
    struct CountingRng<R: RngCore> {
        inner: R,
        draws: usize,
    }

    impl<R: RngCore> RngCore for CountingRng<R> {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }
        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.inner.try_fill_bytes(dest)
        }
    }

    #[test]
    fn test_certain_and_impossible_slots() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_slots(&[100.0, 100.0, 100.0], &mut rng), 3);
        assert_eq!(roll_slots(&[0.0, 100.0, 100.0], &mut rng), 0);
        assert_eq!(roll_slots(&[100.0, 100.0, 0.0, 100.0, 100.0], &mut rng), 2);
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        // slot 3 can never succeed; slots 4 and 5 must not be rolled
        let mut rng = CountingRng {
            inner: StdRng::seed_from_u64(42),
            draws: 0,
        };
        let successes = roll_slots(&[100.0, 100.0, 0.0, 100.0, 100.0], &mut rng);
        assert_eq!(successes, 2);
        assert_eq!(rng.draws, 3, "rolled past the first failure");
    }

    #[test]
    fn test_empty_chain() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_slots(&[], &mut rng), 0);
    }

    #[test]
    fn test_success_count_is_prefix_length() {
        // with default-style ascending percentages the count is always
        // between 0 and the full chain length
        let pcts = [30.0, 35.0, 40.0, 45.0, 50.0];
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let n = roll_slots(&pcts, &mut rng);
            assert!(n <= pcts.len());
        }
    }
}
