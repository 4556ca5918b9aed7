//! Character orders.
//!
//! A rolling position animates through an ordered set of glyphs — its
//! *character pool*. The widget's [`CharOrderManager`] keeps the ordered
//! list of pools registered via `add_char_order` and picks the pool for a
//! glyph when an animation starts.

use std::any::Any;

/// Placeholder glyph inserted at the head of every pool.
///
/// Lets an animation roll in "from nothing" (e.g. when the text grows a
/// digit). Never rendered and never part of a caller-supplied order.
pub const EMPTY_CHAR: char = '\0';

/// Well-known character orders.
pub mod charset {
    /// Decimal digits.
    pub const NUMBER: &str = "0123456789";
    /// Hexadecimal digits.
    pub const HEX: &str = "0123456789ABCDEF";
    /// Binary digits.
    pub const BINARY: &str = "01";
    /// Lowercase latin alphabet.
    pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
    /// Uppercase latin alphabet.
    pub const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
}

/// An insertion-ordered, de-duplicated set of characters.
///
/// Iteration order is the order characters were first inserted; that order
/// is part of the contract (it is the glyph roll order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharPool {
    chars: Vec<char>,
}

impl CharPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c` unless it is already present.
    pub fn insert(&mut self, c: char) -> bool {
        if self.chars.contains(&c) {
            return false;
        }
        self.chars.push(c);
        true
    }

    /// Returns `true` if the pool contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Position of `c` in roll order.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c)
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterates characters in roll order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut pool = CharPool::new();
        for c in iter {
            pool.insert(c);
        }
        pool
    }
}

/// Ordered registry of character pools for a rolling-text widget.
///
/// Internal to the widget — the public surface is
/// `RollingTextView::add_char_order`. The list itself is reachable from
/// outside only through the debug-export hook.
#[derive(Debug, Default)]
pub struct CharOrderManager {
    char_order_list: Vec<CharPool>,
}

impl CharOrderManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a character order.
    ///
    /// The [`EMPTY_CHAR`] placeholder is put at the head of the pool so
    /// every registered order can roll in from a blank position.
    pub(crate) fn add_char_order(&mut self, order: impl IntoIterator<Item = char>) {
        let mut pool = CharPool::new();
        pool.insert(EMPTY_CHAR);
        for c in order {
            pool.insert(c);
        }
        self.char_order_list.push(pool);
    }

    /// First registered pool containing `c`, if any.
    pub(crate) fn find_pool_for(&self, c: char) -> Option<&CharPool> {
        self.char_order_list.iter().find(|pool| pool.contains(c))
    }

    pub(crate) fn len(&self) -> usize {
        self.char_order_list.len()
    }

    /// Debug-export hook for inspection tooling.
    ///
    /// Field names are a version-coupled contract with the inspector; they
    /// are not public API and may change between releases.
    #[doc(hidden)]
    pub fn debug_field(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "char_order_list" => Some(&self.char_order_list),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_preserves_insertion_order_and_dedups() {
        let pool: CharPool = "abcba".chars().collect();
        assert_eq!(pool.iter().collect::<String>(), "abc");
        assert_eq!(pool.index_of('c'), Some(2));
        assert!(!pool.contains('z'));
    }

    #[test]
    fn manager_prepends_placeholder() {
        let mut mgr = CharOrderManager::new();
        mgr.add_char_order(charset::BINARY.chars());
        let pool = mgr.find_pool_for('1').unwrap();
        assert_eq!(pool.index_of(EMPTY_CHAR), Some(0));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn find_pool_respects_registration_order() {
        let mut mgr = CharOrderManager::new();
        mgr.add_char_order(charset::NUMBER.chars());
        mgr.add_char_order(charset::HEX.chars());
        // '5' is in both; the first registered pool wins.
        let pool = mgr.find_pool_for('5').unwrap();
        assert_eq!(pool.len(), charset::NUMBER.len() + 1);
        assert!(mgr.find_pool_for('x').is_none());
    }

    #[test]
    fn debug_hook_exposes_the_list_and_nothing_else() {
        let mut mgr = CharOrderManager::new();
        mgr.add_char_order("xyz".chars());
        let any = mgr.debug_field("char_order_list").unwrap();
        let list = any.downcast_ref::<Vec<CharPool>>().unwrap();
        assert_eq!(list.len(), 1);
        assert!(mgr.debug_field("no_such_field").is_none());
    }
}
