//! Injectable randomness for particle generation.
//!
//! A plain 32-bit linear congruential generator (Numerical Recipes constants,
//! not crypto secure) is plenty for scattering decorative glyphs. Widgets take
//! `&mut Sampler` instead of reaching for a global source so tests can seed it
//! and get reproducible fields.

/// Deterministic LCG sampler. Seed it in tests; use [`Sampler::from_clock`]
/// in the browser.
pub struct Sampler {
    state: u32,
}

impl Sampler {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from `performance.now()`. Falls back to 0 when no window exists
    /// (e.g. host-side tests), which still yields a valid sequence.
    pub fn from_clock() -> Self {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self::new(now as u64 as u32)
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Sampler::new(42);
        let mut b = Sampler::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut s = Sampler::new(7);
        for _ in 0..1000 {
            let v = s.range(20.0, 40.0);
            assert!((20.0..40.0).contains(&v), "value {v} out of range");
        }
    }

    #[test]
    fn zero_seed_still_advances() {
        let mut s = Sampler::new(0);
        let first = s.next_f64();
        let second = s.next_f64();
        assert_ne!(first.to_bits(), second.to_bits());
    }
}
