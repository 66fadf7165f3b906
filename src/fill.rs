// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-random initialization of the benchmark input.

use crate::macros::{log_trace, log_warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Largest value produced by the generator, matching glibc's `RAND_MAX`.
pub const RAND_MAX: i32 = i32::MAX;

/// Where the pseudo-random generator gets its seed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Seconds elapsed since the Unix epoch, read when the generator is
    /// created. Successive runs within the same second see the same values.
    WallClock,
    /// A fixed seed, for reproducible inputs.
    Fixed(u64),
}

impl SeedSource {
    /// Resolves this source into a concrete seed.
    pub fn seed(self) -> u64 {
        match self {
            SeedSource::WallClock => match SystemTime::now().duration_since(UNIX_EPOCH) {
                Ok(elapsed) => elapsed.as_secs(),
                Err(_) => {
                    log_warn!("System clock is before the Unix epoch, seeding with 0");
                    0
                }
            },
            SeedSource::Fixed(seed) => seed,
        }
    }

    /// Creates a generator seeded from this source.
    pub fn rng(self) -> ChaCha12Rng {
        let seed = self.seed();
        log_trace!("Seeding generator with {seed}");
        ChaCha12Rng::seed_from_u64(seed)
    }
}

/// Draws one uniform value in `0..=RAND_MAX`.
pub(crate) fn random_item(rng: &mut impl Rng) -> i32 {
    rng.random_range(0..=RAND_MAX)
}

/// Overwrites every slot with a uniform value in `0..=RAND_MAX`.
pub fn fill(rng: &mut impl Rng, values: &mut [i32]) {
    for x in values.iter_mut() {
        *x = random_item(rng);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill_non_negative() {
        let mut rng = SeedSource::Fixed(42).rng();
        let mut values = vec![-1; 10_000];
        fill(&mut rng, &mut values);
        assert!(values.iter().all(|&x| (0..=RAND_MAX).contains(&x)));
    }

    #[test]
    fn fill_not_constant() {
        let mut rng = SeedSource::Fixed(42).rng();
        let mut values = vec![0; 1_000];
        fill(&mut rng, &mut values);
        assert!(values.iter().any(|&x| x != values[0]));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut a = vec![0; 256];
        let mut b = vec![0; 256];
        fill(&mut SeedSource::Fixed(7).rng(), &mut a);
        fill(&mut SeedSource::Fixed(7).rng(), &mut b);
        assert_eq!(a, b);

        let mut c = vec![0; 256];
        fill(&mut SeedSource::Fixed(8).rng(), &mut c);
        assert_ne!(a, c);
    }

    #[test]
    fn fill_empty() {
        let mut rng = SeedSource::Fixed(0).rng();
        let mut values: [i32; 0] = [];
        fill(&mut rng, &mut values);
    }

    #[test]
    fn wall_clock_seed_has_second_resolution() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let seed = SeedSource::WallClock.seed();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!((before..=after).contains(&seed));
    }
}
