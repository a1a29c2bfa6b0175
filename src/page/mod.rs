//! Page shell: builds the greeting page into the DOM and owns all mutable
//! page state behind a thread-local cell, mutated only from event and timer
//! callbacks (the browser gives us one logical thread).
//!
//! The shell owns the surprise trigger counter and is its sole writer; the
//! burst emitter only ever reacts to increments. The three widgets (ambient
//! field, burst emitter, typing reveal) have no knowledge of each other.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, Window, window};

pub mod ambient;
pub mod burst;
pub mod reveal;
pub mod sample;
mod timer;

use burst::{BURST_GLYPH, BURST_LIFETIME_MS, BurstEmitter};
use reveal::TypingReveal;
use sample::Sampler;
use timer::{Interval, Timeout};

// --- Page State ---------------------------------------------------------------

struct PageState {
    sampler: Sampler,
    /// Trigger counter: incremented once per surprise action, never reset.
    surprise_count: u32,
    emitter: BurstEmitter,
    /// Expiry timers per live batch. Guards for batches that already expired
    /// are swept on the next trigger (not inside their own callback).
    burst_timers: Vec<(u32, Timeout)>,
    reveal: TypingReveal,
    reveal_timer: Option<Interval>,
}

thread_local! {
    static PAGE_STATE: RefCell<Option<PageState>> = RefCell::new(None);
}

// --- Mount -------------------------------------------------------------------

pub fn start_page() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Reuse an existing mount; starting twice must not duplicate the page.
    if doc.get_element_by_id("bb-root").is_some() {
        return Ok(());
    }

    inject_style_sheet(&doc, &body)?;

    let mut sampler = Sampler::from_clock();
    let field = ambient::generate_field(&mut sampler);
    ambient::mount(&doc, &body, &field)?;

    let root = doc.create_element("div")?;
    root.set_id("bb-root");
    root.set_attribute("style", "position:relative; z-index:1;").ok();
    build_hero(&doc, &root)?;
    build_letter(&doc, &root)?;
    build_wishes(&doc, &root)?;
    build_surprise(&doc, &root)?;
    build_footer(&doc, &root)?;
    body.append_child(&root)?;

    // Hearts rise through a fixed overlay above the content.
    let layer = doc.create_element("div")?;
    layer.set_id("bb-burst-layer");
    layer
        .set_attribute(
            "style",
            "position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:50;",
        )
        .ok();
    body.append_child(&layer)?;

    PAGE_STATE.with(|cell| {
        cell.replace(Some(PageState {
            sampler,
            surprise_count: 0,
            emitter: BurstEmitter::new(),
            burst_timers: Vec::new(),
            reveal: TypingReveal::new(crate::GREETING_NAME),
            reveal_timer: None,
        }))
    });

    start_reveal_timer(&win)?;

    // Surprise button drives the trigger counter.
    {
        let button = doc
            .get_element_by_id("bb-surprise")
            .ok_or_else(|| JsValue::from_str("no surprise button"))?;
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            trigger_surprise().ok();
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

// --- Burst Emitter Driver ----------------------------------------------------

/// Increment the trigger counter and spawn one heart batch. The counter is
/// only ever moved off zero by this path, so the initial mount (count 0)
/// produces no batch; every increment afterwards produces exactly one.
pub fn trigger_surprise() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    PAGE_STATE.with(|cell| -> Result<(), JsValue> {
        let mut borrow = cell.borrow_mut();
        let state = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("page not started"))?;
        state.surprise_count += 1;

        // Sweep guards whose batch already expired; safe to drop them here,
        // outside their own callbacks.
        {
            let PageState {
                emitter,
                burst_timers,
                ..
            } = &mut *state;
            burst_timers.retain(|(b, _)| emitter.contains_batch(*b));
        }

        let batch = state.emitter.spawn(&mut state.sampler);
        render_batch(&doc, state, batch)?;

        // Each batch carries its own expiry, so overlapping bursts coexist
        // and clear only themselves.
        let timeout = Timeout::new(&win, BURST_LIFETIME_MS, move || expire_batch(batch))?;
        state.burst_timers.push((batch, timeout));
        Ok(())
    })
}

/// Current value of the trigger counter (0 until the first surprise).
pub fn surprise_count() -> u32 {
    PAGE_STATE.with(|cell| cell.borrow().as_ref().map(|s| s.surprise_count).unwrap_or(0))
}

fn render_batch(doc: &Document, state: &PageState, batch: u32) -> Result<(), JsValue> {
    let layer = doc
        .get_element_by_id("bb-burst-layer")
        .ok_or_else(|| JsValue::from_str("no burst layer"))?;
    let group = doc.create_element("div")?;
    group.set_id(&format!("bb-batch-{batch}"));
    for p in state.emitter.batch(batch) {
        let span = doc.create_element("span")?;
        let style = format!(
            "position:absolute; left:{left:.2}%; bottom:-40px; font-size:{size:.1}px; \
             animation:bb-rise {dur:.2}s linear forwards;",
            left = p.left_pct,
            size = p.size_px,
            dur = p.duration_s,
        );
        span.set_attribute("style", &style).ok();
        span.set_text_content(Some(BURST_GLYPH));
        group.append_child(&span)?;
    }
    layer.append_child(&group)?;
    Ok(())
}

fn expire_batch(batch: u32) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id(&format!("bb-batch-{batch}")) {
            el.remove();
        }
    }
    PAGE_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            state.emitter.expire(batch);
            // The fired Timeout guard stays in burst_timers until the next
            // trigger sweeps it; it cannot be dropped from inside its own
            // closure.
        }
    });
}

// --- Typing Reveal Driver ----------------------------------------------------

fn start_reveal_timer(win: &Window) -> Result<(), JsValue> {
    let interval = Interval::new(win, reveal::TICK_MS, reveal_tick)?;
    PAGE_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            state.reveal_timer = Some(interval);
        }
    });
    Ok(())
}

fn reveal_tick() {
    PAGE_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let advanced = state.reveal.tick();
            if let Some(doc) = window().and_then(|w| w.document()) {
                if let Some(el) = doc.get_element_by_id("bb-typed") {
                    el.set_text_content(Some(state.reveal.visible()));
                }
            }
            if !advanced {
                // Fully revealed: stop the interval so no further ticks run.
                // Only the JS handle is cleared; the guard itself is dropped
                // on restart (we are inside its callback right now).
                if let (Some(win), Some(t)) = (window(), state.reveal_timer.as_ref()) {
                    win.clear_interval_with_handle(t.handle());
                }
            }
        }
    });
}

/// Swap the revealed name. Cancels the old interval before anything else so a
/// stale tick can never touch the new string, then restarts from empty.
pub fn restart_reveal(name: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    PAGE_STATE.with(|cell| -> Result<(), JsValue> {
        let mut borrow = cell.borrow_mut();
        let state = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("page not started"))?;
        state.reveal_timer = None;
        state.reveal.restart(name);
        Ok(())
    })?;
    if let Some(doc) = win.document() {
        if let Some(el) = doc.get_element_by_id("bb-typed") {
            el.set_text_content(Some(""));
        }
    }
    start_reveal_timer(&win)
}

// --- Static Sections ---------------------------------------------------------

fn build_hero(doc: &Document, parent: &Element) -> Result<(), JsValue> {
    let section = doc.create_element("section")?;
    section.set_class_name("bb-section bb-hero");

    let eyebrow = doc.create_element("p")?;
    eyebrow.set_class_name("bb-eyebrow");
    eyebrow.set_text_content(Some(crate::HERO_EYEBROW));
    section.append_child(&eyebrow)?;

    let title = doc.create_element("h1")?;
    title.set_class_name("bb-title");
    title.set_text_content(Some("Happy Birthday,"));
    title.append_child(&doc.create_element("br")?.into())?;
    let name = doc.create_element("span")?;
    name.set_class_name("bb-name");
    name.set_id("bb-typed");
    title.append_child(&name)?;
    section.append_child(&title)?;

    let intro = doc.create_element("p")?;
    intro.set_class_name("bb-quiet");
    intro.set_text_content(Some(crate::HERO_INTRO));
    section.append_child(&intro)?;

    let hint = doc.create_element("div")?;
    hint.set_class_name("bb-hint");
    hint.set_text_content(Some("⌄"));
    section.append_child(&hint)?;

    parent.append_child(&section)?;
    Ok(())
}

fn build_letter(doc: &Document, parent: &Element) -> Result<(), JsValue> {
    let section = doc.create_element("section")?;
    section.set_class_name("bb-section bb-letter");

    let heading = doc.create_element("h2")?;
    heading.set_class_name("bb-heading");
    heading.set_text_content(Some(&format!("A Letter to {}", crate::GREETING_NAME)));
    section.append_child(&heading)?;

    let inner = doc.create_element("div")?;
    inner.set_class_name("bb-letter-inner");
    for text in crate::LETTER_PARAGRAPHS {
        let p = doc.create_element("p")?;
        p.set_text_content(Some(text));
        inner.append_child(&p)?;
    }
    let signature = doc.create_element("div")?;
    signature.set_class_name("bb-signature");
    let closing = doc.create_element("p")?;
    closing.set_class_name("bb-eyebrow");
    closing.set_text_content(Some(crate::LETTER_CLOSING));
    signature.append_child(&closing)?;
    let signer = doc.create_element("p")?;
    signer.set_class_name("bb-signer");
    signer.set_text_content(Some(crate::LETTER_SIGNATURE));
    signature.append_child(&signer)?;
    inner.append_child(&signature)?;
    section.append_child(&inner)?;

    parent.append_child(&section)?;
    Ok(())
}

fn build_wishes(doc: &Document, parent: &Element) -> Result<(), JsValue> {
    let section = doc.create_element("section")?;
    section.set_class_name("bb-section bb-center");

    let eyebrow = doc.create_element("p")?;
    eyebrow.set_class_name("bb-eyebrow");
    eyebrow.set_text_content(Some("Intentions"));
    section.append_child(&eyebrow)?;

    let heading = doc.create_element("h2")?;
    heading.set_class_name("bb-heading");
    heading.set_text_content(Some("Wishes for Your Journey"));
    section.append_child(&heading)?;

    let cards = doc.create_element("div")?;
    cards.set_class_name("bb-cards");
    for (icon, title, body) in crate::WISHES {
        let card = doc.create_element("div")?;
        card.set_class_name("bb-card");
        let glyph = doc.create_element("div")?;
        glyph.set_class_name("bb-card-icon");
        glyph.set_text_content(Some(icon));
        card.append_child(&glyph)?;
        let h = doc.create_element("h3")?;
        h.set_text_content(Some(title));
        card.append_child(&h)?;
        let p = doc.create_element("p")?;
        p.set_text_content(Some(body));
        card.append_child(&p)?;
        cards.append_child(&card)?;
    }
    section.append_child(&cards)?;

    parent.append_child(&section)?;
    Ok(())
}

fn build_surprise(doc: &Document, parent: &Element) -> Result<(), JsValue> {
    let section = doc.create_element("section")?;
    section.set_class_name("bb-section bb-center");

    let heading = doc.create_element("h2")?;
    heading.set_class_name("bb-heading");
    heading.set_text_content(Some("A Moment of Pure Magic"));
    section.append_child(&heading)?;

    let button = doc.create_element("button")?;
    button.set_id("bb-surprise");
    button.set_class_name("bb-button");
    button.set_text_content(Some(crate::SURPRISE_BUTTON_LABEL));
    section.append_child(&button)?;

    let hint = doc.create_element("p")?;
    hint.set_class_name("bb-eyebrow");
    hint.set_text_content(Some(crate::SURPRISE_HINT));
    section.append_child(&hint)?;

    parent.append_child(&section)?;
    Ok(())
}

fn build_footer(doc: &Document, parent: &Element) -> Result<(), JsValue> {
    let footer = doc.create_element("footer")?;
    footer.set_class_name("bb-section bb-center bb-footer");

    let quote = doc.create_element("p")?;
    quote.set_class_name("bb-quote");
    quote.set_text_content(Some(crate::FOOTER_QUOTE));
    footer.append_child(&quote)?;

    for line in crate::FOOTER_LINES {
        let p = doc.create_element("p")?;
        p.set_class_name("bb-eyebrow");
        p.set_text_content(Some(line));
        footer.append_child(&p)?;
    }

    parent.append_child(&footer)?;
    Ok(())
}

// --- Styling -----------------------------------------------------------------

fn inject_style_sheet(doc: &Document, body: &Element) -> Result<(), JsValue> {
    let style = doc.create_element("style")?;
    style.set_id("bb-style");
    style.set_text_content(Some(STYLE_SHEET));
    body.append_child(&style)?;
    Ok(())
}

const STYLE_SHEET: &str = "
body { margin:0; background:#fff9fa; color:#4a3a3c; font-family:Georgia,'Times New Roman',serif; overflow-x:hidden; }
@keyframes bb-drift {
  0%, 100% { transform:translate(0,0) rotate(0deg); }
  25% { transform:translate(15px,-20px) rotate(10deg); }
  50% { transform:translate(0,0) rotate(0deg); }
  75% { transform:translate(-15px,20px) rotate(-10deg); }
}
@keyframes bb-rise {
  from { transform:translateY(0); opacity:0.8; }
  to { transform:translateY(-110vh); opacity:0; }
}
@keyframes bb-pulse { 0%, 100% { opacity:0.4; } 50% { opacity:0.9; } }
@keyframes bb-fadeup { from { opacity:0; transform:translateY(30px); } to { opacity:1; transform:translateY(0); } }
.bb-section { animation:bb-fadeup 1.2s ease-out both; padding:6rem 1.5rem; }
.bb-hero { min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; text-align:center; box-sizing:border-box; }
.bb-eyebrow { font-size:11px; letter-spacing:0.5em; text-transform:uppercase; color:#fb7185; font-weight:bold; }
.bb-title { font-size:clamp(3rem,9vw,7rem); font-weight:300; line-height:0.95; margin:2rem 0; }
.bb-name { font-style:italic; color:#f43f5e; }
.bb-quiet { color:#8a7275; max-width:32rem; margin:0 auto; font-size:1.1rem; line-height:1.7; }
.bb-hint { margin-top:3rem; font-size:1.5rem; color:#fb7185; animation:bb-pulse 3s ease-in-out infinite; }
.bb-heading { font-size:clamp(2rem,5vw,3rem); font-weight:300; }
.bb-letter { background:rgba(255,255,255,0.4); }
.bb-letter h2 { text-align:center; }
.bb-letter-inner { max-width:44rem; margin:0 auto; font-style:italic; color:#6d5a5d; font-size:1.2rem; line-height:1.8; }
.bb-signature { margin-top:3rem; padding-top:2rem; border-top:1px solid #ffe4e6; }
.bb-signer { font-size:1.5rem; font-style:normal; margin:0; }
.bb-center { text-align:center; }
.bb-cards { display:grid; grid-template-columns:repeat(auto-fit,minmax(16rem,1fr)); gap:2rem; max-width:70rem; margin:4rem auto 0; }
.bb-card { background:rgba(255,255,255,0.7); border:1px solid #ffe4e6; border-radius:2rem; padding:2.5rem; text-align:left; }
.bb-card-icon { font-size:1.8rem; }
.bb-card h3 { font-size:1.4rem; margin:1rem 0 0.5rem; }
.bb-card p { color:#8a7275; line-height:1.6; margin:0; }
.bb-button { display:inline-block; margin:2rem 0 1rem; padding:1.2rem 3rem; border:none; border-radius:9999px; background:#f43f5e; color:#fff; font-size:1rem; letter-spacing:0.15em; cursor:pointer; box-shadow:0 10px 30px rgba(244,63,94,0.25); }
.bb-button:hover { background:#e11d48; }
.bb-quote { font-style:italic; font-size:1.8rem; color:#6d5a5d; max-width:40rem; margin:0 auto 3rem; line-height:1.6; }
.bb-footer { border-top:1px solid #ffe4e6; }
";
