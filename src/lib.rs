//! Birthday Bloom core crate.
//!
//! Renders a single animated greeting page into the browser DOM: a drifting
//! background glyph field, a heart burst triggered from the surprise button,
//! and a character-by-character name reveal in the hero heading. All behavior
//! runs on the browser's single logical thread via timer and event callbacks;
//! the pure animation state machines live in [`page`] and are host-testable.

use wasm_bindgen::prelude::*;

pub mod page;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Page copy datasets. Kept as crate-level constants so tests and future
// alternate pages can reuse them without touching the DOM layer.
// -----------------------------------------------------------------------------

/// Name typed out in the hero heading.
pub const GREETING_NAME: &str = "Saranya";

pub const HERO_EYEBROW: &str = "A Celebration of You";
pub const HERO_INTRO: &str =
    "In a world of fleeting moments, some people leave a lasting light. Today, we celebrate yours.";

pub const LETTER_PARAGRAPHS: &[&str] = &[
    "I wanted to take a moment to celebrate you today. Not just because it's your birthday, but because of the incredible person you are every single day.",
    "Your presence has a way of making everything a bit brighter. Whether it's the way you smile or the kindness you show to everyone around you, you truly are one of a kind. I feel so lucky to know you.",
    "On this special day, I hope you're surrounded by all the love and happiness you deserve. May this year bring you closer to all your dreams and fill your heart with joy.",
    "Keep being exactly who you are. The world is better with you in it.",
];

pub const LETTER_CLOSING: &str = "With warmth and respect,";
pub const LETTER_SIGNATURE: &str = "Shashwat";

/// Wish cards: (icon glyph, title, body).
pub const WISHES: &[(&str, &str, &str)] = &[
    (
        "✨",
        "Endless Joy",
        "May your laughter echo through every room you enter, bringing light to everyone.",
    ),
    (
        "⭐",
        "True Peace",
        "May you find calm in the chaos and discover beauty in the quietest moments.",
    ),
    (
        "🎁",
        "Great Success",
        "May every path you choose lead you exactly where your heart desires to be.",
    ),
];

pub const SURPRISE_BUTTON_LABEL: &str = "Click for a Surprise";
pub const SURPRISE_HINT: &str = "Experience the magic as many times as you wish";

pub const FOOTER_QUOTE: &str = "\u{201c}I hope this small surprise made you smile today 💫\u{201d}";
pub const FOOTER_LINES: &[&str] = &["Saranya • 2026", "Forever Inspired by Your Light"];

// -----------------------------------------------------------------------------
// Unified entrypoints
// -----------------------------------------------------------------------------

/// Build the page into `document.body` and start all animations.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    page::start_page()
}

/// Fire one surprise trigger, same path as clicking the button.
#[wasm_bindgen]
pub fn trigger_surprise() -> Result<(), JsValue> {
    page::trigger_surprise()
}

/// Replace the typed-out name. A reveal already in progress restarts from
/// empty against the new string.
#[wasm_bindgen]
pub fn set_greeting_name(name: &str) -> Result<(), JsValue> {
    page::restart_reveal(name)
}

/// How many times the surprise has been triggered so far.
#[wasm_bindgen]
pub fn surprise_count() -> u32 {
    page::surprise_count()
}
