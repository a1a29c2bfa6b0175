//! Ambient background glyph field.
//!
//! Twelve teddy glyphs scattered once at mount, each looping forever through a
//! CSS drift-and-rotate cycle with its own delay and duration. Nothing here is
//! ever mutated or removed after mount.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::sample::Sampler;

pub const AMBIENT_COUNT: usize = 12;
pub const AMBIENT_GLYPH: &str = "🧸";

/// One drifting background glyph, fixed for the page lifetime.
pub struct AmbientParticle {
    pub id: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Sample the full field: positions anywhere on screen, sizes 20-40px,
/// delays 0-5s, cycle durations 10-20s.
pub fn generate_field(rng: &mut Sampler) -> Vec<AmbientParticle> {
    (0..AMBIENT_COUNT)
        .map(|id| AmbientParticle {
            id,
            left_pct: rng.range(0.0, 100.0),
            top_pct: rng.range(0.0, 100.0),
            size_px: rng.range(20.0, 40.0),
            delay_s: rng.range(0.0, 5.0),
            duration_s: rng.range(10.0, 20.0),
        })
        .collect()
}

/// Mount the field as a fixed full-screen overlay behind the page content.
pub fn mount(doc: &Document, parent: &Element, field: &[AmbientParticle]) -> Result<(), JsValue> {
    let layer = doc.create_element("div")?;
    layer.set_id("bb-ambient");
    layer
        .set_attribute(
            "style",
            "position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:0; opacity:0.2;",
        )
        .ok();
    for p in field {
        let span = doc.create_element("span")?;
        let style = format!(
            "position:absolute; left:{left:.2}%; top:{top:.2}%; font-size:{size:.1}px; \
             animation:bb-drift {dur:.2}s ease-in-out {delay:.2}s infinite;",
            left = p.left_pct,
            top = p.top_pct,
            size = p.size_px,
            dur = p.duration_s,
            delay = p.delay_s,
        );
        span.set_attribute("style", &style).ok();
        span.set_text_content(Some(AMBIENT_GLYPH));
        layer.append_child(&span)?;
    }
    parent.append_child(&layer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_has_exact_count_with_sequential_ids() {
        let mut rng = Sampler::new(1);
        let field = generate_field(&mut rng);
        assert_eq!(field.len(), AMBIENT_COUNT);
        for (i, p) in field.iter().enumerate() {
            assert_eq!(p.id, i);
        }
    }

    #[test]
    fn field_values_stay_in_contract_ranges() {
        // Several seeds so the assertion is not an artifact of one sequence.
        for seed in [0, 3, 77, 9001] {
            let mut rng = Sampler::new(seed);
            for p in generate_field(&mut rng) {
                assert!((0.0..100.0).contains(&p.left_pct));
                assert!((0.0..100.0).contains(&p.top_pct));
                assert!((20.0..40.0).contains(&p.size_px));
                assert!((0.0..5.0).contains(&p.delay_s));
                assert!((10.0..20.0).contains(&p.duration_s));
            }
        }
    }
}
