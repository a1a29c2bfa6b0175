//! Heart burst emitter.
//!
//! Each surprise trigger spawns a batch of hearts that rise off the top of the
//! viewport and are removed together 7 seconds later. Batches are keyed by a
//! monotonically increasing batch id so overlapping bursts expire
//! independently; expiry removes exactly its own batch and nothing else.

use super::sample::Sampler;

pub const BURST_COUNT: usize = 25;
pub const BURST_LIFETIME_MS: i32 = 7_000;
pub const BURST_GLYPH: &str = "❤️";

/// One rising heart. Identity is `(batch, index within batch)`.
pub struct BurstParticle {
    pub batch: u32,
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
}

/// Active burst particles plus the batch id allocator. Pure state machine;
/// the DOM side lives in the page shell.
pub struct BurstEmitter {
    particles: Vec<BurstParticle>,
    next_batch: u32,
}

impl BurstEmitter {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            next_batch: 0,
        }
    }

    /// Append a fresh batch of [`BURST_COUNT`] hearts and return its batch id.
    /// Ids never repeat, so a new batch can never collide with one still
    /// waiting on its expiry timer.
    pub fn spawn(&mut self, rng: &mut Sampler) -> u32 {
        let batch = self.next_batch;
        self.next_batch += 1;
        for _ in 0..BURST_COUNT {
            self.particles.push(BurstParticle {
                batch,
                left_pct: rng.range(0.0, 100.0),
                size_px: rng.range(10.0, 25.0),
                duration_s: rng.range(3.0, 7.0),
            });
        }
        batch
    }

    /// Remove exactly the given batch's particles. Other batches, including
    /// ones spawned later, are untouched. Unknown ids are a no-op.
    pub fn expire(&mut self, batch: u32) {
        self.particles.retain(|p| p.batch != batch);
    }

    pub fn batch(&self, batch: u32) -> impl Iterator<Item = &BurstParticle> {
        self.particles.iter().filter(move |p| p.batch == batch)
    }

    pub fn contains_batch(&self, batch: u32) -> bool {
        self.particles.iter().any(|p| p.batch == batch)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for BurstEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        // Trigger value zero: nothing has spawned yet.
        let em = BurstEmitter::new();
        assert!(em.is_empty());
    }

    #[test]
    fn spawn_adds_exactly_one_batch() {
        let mut em = BurstEmitter::new();
        let mut rng = Sampler::new(5);
        let batch = em.spawn(&mut rng);
        assert_eq!(em.len(), BURST_COUNT);
        assert_eq!(em.batch(batch).count(), BURST_COUNT);
        for p in em.batch(batch) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((10.0..25.0).contains(&p.size_px));
            assert!((3.0..7.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn batch_ids_are_unique_across_spawns() {
        let mut em = BurstEmitter::new();
        let mut rng = Sampler::new(5);
        let a = em.spawn(&mut rng);
        let b = em.spawn(&mut rng);
        let c = em.spawn(&mut rng);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(em.len(), 3 * BURST_COUNT);
    }

    #[test]
    fn overlapping_batches_expire_independently() {
        // Triggers fired [1, 2] close together: the first expiry removes only
        // the first batch; the second expiry drains the rest.
        let mut em = BurstEmitter::new();
        let mut rng = Sampler::new(9);
        let first = em.spawn(&mut rng);
        let second = em.spawn(&mut rng);
        assert_eq!(em.len(), 2 * BURST_COUNT);

        em.expire(first);
        assert_eq!(em.len(), BURST_COUNT);
        assert!(!em.contains_batch(first));
        assert_eq!(em.batch(second).count(), BURST_COUNT);

        em.expire(second);
        assert!(em.is_empty());
    }

    #[test]
    fn expiring_unknown_batch_changes_nothing() {
        let mut em = BurstEmitter::new();
        let mut rng = Sampler::new(2);
        em.spawn(&mut rng);
        em.expire(999);
        assert_eq!(em.len(), BURST_COUNT);
    }

    #[test]
    fn expired_id_is_never_reused() {
        let mut em = BurstEmitter::new();
        let mut rng = Sampler::new(3);
        let a = em.spawn(&mut rng);
        em.expire(a);
        let b = em.spawn(&mut rng);
        assert_ne!(a, b);
    }
}
