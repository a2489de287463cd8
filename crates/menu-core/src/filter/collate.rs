//! Locale-aware ordering for dish names.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root collation:
//! letters compare first without case or accents (ligatures such as `œ`
//! and `ß` expand), then accents break ties, then case (lowercase first).
//! Names equal at every level fall back to their bytes, so the order is
//! total.

use std::cmp::Ordering;

use feruca::Collator;

pub struct NameCollator {
    inner: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison. Sorting should reuse a [`NameCollator`].
pub fn compare(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}
