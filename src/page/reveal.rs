//! Character-by-character text reveal.
//!
//! Pure cursor over a target string; the page shell drives it from a 120ms
//! interval and clears that interval once the full string is shown. Ticks past
//! the end are no-ops, and swapping the target restarts from empty.

pub const TICK_MS: i32 = 120;

pub struct TypingReveal {
    target: String,
    /// Byte offset of the revealed prefix; always on a char boundary.
    shown: usize,
}

impl TypingReveal {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            shown: 0,
        }
    }

    /// Advance by one character. Returns `false` once fully revealed; further
    /// ticks keep returning `false` without changing anything.
    pub fn tick(&mut self) -> bool {
        match self.target[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Currently revealed prefix.
    pub fn visible(&self) -> &str {
        &self.target[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.target.len()
    }

    /// Replace the target and start over from the empty prefix.
    pub fn restart(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.shown = 0;
    }
}
