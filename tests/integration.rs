// Integration tests (native) for the `birthday-bloom` crate.
// These tests avoid wasm-specific functionality and exercise the pure widget
// state machines so they can run under `cargo test` on the host.

use birthday_bloom::page::ambient::{self, AMBIENT_COUNT};
use birthday_bloom::page::burst::{BURST_COUNT, BurstEmitter};
use birthday_bloom::page::reveal::TypingReveal;
use birthday_bloom::page::sample::Sampler;

#[test]
fn ambient_field_matches_mount_contract() {
    let mut rng = Sampler::new(1234);
    let field = ambient::generate_field(&mut rng);
    assert_eq!(field.len(), AMBIENT_COUNT);
    for p in &field {
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((20.0..40.0).contains(&p.size_px));
        assert!((0.0..5.0).contains(&p.delay_s));
        assert!((10.0..20.0).contains(&p.duration_s));
    }
}

// Trigger sequence [1, 2] fired close together: expiries must be independent.
// After the first batch's lifetime elapses only its 25 hearts go away; after
// the second's, the collection is empty.
#[test]
fn rapid_triggers_keep_batches_isolated() {
    let mut em = BurstEmitter::new();
    let mut rng = Sampler::new(77);

    let first = em.spawn(&mut rng);
    let second = em.spawn(&mut rng);
    assert_eq!(em.len(), 2 * BURST_COUNT);
    assert_ne!(first, second);

    em.expire(first);
    assert_eq!(em.batch(second).count(), BURST_COUNT);
    assert_eq!(em.len(), BURST_COUNT);

    em.expire(second);
    assert!(em.is_empty());
}

#[test]
fn each_trigger_adds_a_fresh_batch_never_deduplicated() {
    let mut em = BurstEmitter::new();
    let mut rng = Sampler::new(8);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..10 {
        let batch = em.spawn(&mut rng);
        assert!(seen.insert(batch), "batch id {batch} reused");
    }
    assert_eq!(em.len(), 10 * BURST_COUNT);
}

#[test]
fn greeting_name_reveals_across_seven_ticks() {
    let mut reveal = TypingReveal::new(birthday_bloom::GREETING_NAME);
    let mut ticks = 0;
    while reveal.tick() {
        ticks += 1;
    }
    assert_eq!(ticks, birthday_bloom::GREETING_NAME.chars().count());
    assert_eq!(reveal.visible(), birthday_bloom::GREETING_NAME);
    // Further ticks are a no-op.
    assert!(!reveal.tick());
    assert_eq!(reveal.visible(), birthday_bloom::GREETING_NAME);
}

#[test]
fn replacing_the_name_mid_reveal_starts_over() {
    let mut reveal = TypingReveal::new(birthday_bloom::GREETING_NAME);
    reveal.tick();
    reveal.tick();
    reveal.tick();
    reveal.restart("Ada");
    assert_eq!(reveal.visible(), "");
    assert!(reveal.tick());
    assert_eq!(reveal.visible(), "A");
}
