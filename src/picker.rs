//! Source of the next pad appended each round.

use crate::core::Pad;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the pad a new round adds to the computer sequence.
pub trait PadPicker {
    fn pick(&mut self, pads: &[Pad]) -> Pad;
}

impl<K: PadPicker + ?Sized> PadPicker for Box<K> {
    fn pick(&mut self, pads: &[Pad]) -> Pad {
        (**self).pick(pads)
    }
}

/// Uniform pick with replacement from any `rand` generator.
///
/// # Example
///
/// ```rust
/// use simon::core::Pad;
/// use simon::picker::{PadPicker, RandomPicker};
///
/// let mut a = RandomPicker::seeded(42);
/// let mut b = RandomPicker::seeded(42);
/// for _ in 0..16 {
///     assert_eq!(a.pick(&Pad::ALL), b.pick(&Pad::ALL));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Deterministic picker for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PadPicker for RandomPicker<R> {
    fn pick(&mut self, pads: &[Pad]) -> Pad {
        // The board is never empty.
        if pads.is_empty() {
            return Pad::Red;
        }
        pads[self.rng.random_range(0..pads.len())]
    }
}
