use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Deterministic random source shared by move proposal and Metropolis acceptance.
///
/// Every draw a run makes - move family, candidate index, pivot direction and part, acceptance
/// threshold - passes through one `RngFacade`, so two runs built from the same seed and the same
/// inputs produce byte-identical sample traces. The facade implements [`RngCore`] itself, so it
/// can be handed directly to [`latticefold_mc::AcceptanceCriterion::check`]; it exposes no other
/// way to reach the generator it wraps.
#[derive(Debug)]
pub struct RngFacade {
    rng: SmallRng,
}

impl RngFacade {
    /// Creates a facade seeded deterministically from `seed`.
    pub fn seeded(seed: u64) -> RngFacade {
        RngFacade { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Creates a facade seeded from OS entropy, for callers with no explicit seed to reproduce.
    pub fn from_entropy() -> RngFacade {
        RngFacade { rng: SmallRng::from_entropy() }
    }

    /// Draws a uniformly distributed index in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn uniform_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "uniform_index called with an empty range");
        self.rng.gen_range(0..n)
    }

    /// Draws a uniformly distributed item from a non-empty slice.
    pub fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "uniform_choice called with an empty slice");
        &items[self.uniform_index(items.len())]
    }

    /// Draws an item from a non-empty slice with probability proportional to `weights`.
    ///
    /// # Panics
    /// Panics if `items` and `weights` differ in length, either is empty, or the weights do not
    /// sum to a positive value.
    pub fn weighted_choice<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> &'a T {
        assert_eq!(items.len(), weights.len(), "items and weights must have the same length");
        assert!(!items.is_empty(), "weighted_choice called with an empty slice");
        let total: f64 = weights.iter().sum();
        assert!(total > 0.0, "weighted_choice requires at least one positive weight");

        let mut u = self.uniform_unit() * total;
        for (item, &w) in items.iter().zip(weights.iter()) {
            if u < w {
                return item;
            }
            u -= w;
        }
        &items[items.len() - 1]
    }

    /// Draws a uniformly distributed real number in `[0, 1)`.
    pub fn uniform_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

impl RngCore for RngFacade {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
