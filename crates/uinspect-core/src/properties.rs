//! Ordered property sheets.
//!
//! A [`PropertySheet`] is the output of one extraction call: an ordered
//! mapping from property name to display value. Insertion order **is**
//! display order — the inspector front end renders entries exactly as the
//! parser pushed them, so two extractions of an unchanged view yield
//! byte-identical rendered output.

use std::fmt;

/// A single display value in a property sheet.
///
/// Parsers push strings for anything pre-formatted (colors, quoted text,
/// dimension strings) and raw numbers where the raw value itself is the
/// display (letter spacing, durations).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Pre-formatted display string.
    Str(String),
    /// Raw integer value.
    Int(i64),
    /// Raw floating-point value.
    Float(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Str(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Int(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Int(i64::from(i))
    }
}

impl From<u32> for PropertyValue {
    fn from(i: u32) -> Self {
        PropertyValue::Int(i64::from(i))
    }
}

impl From<f32> for PropertyValue {
    fn from(x: f32) -> Self {
        PropertyValue::Float(f64::from(x))
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        PropertyValue::Float(x)
    }
}

/// Insertion-ordered mapping from property name to display value.
///
/// Built fresh per extraction call and discarded once the host consumes it.
/// Keys are `&'static str` literals owned by the parsers; re-pushing an
/// existing key replaces the value in place without moving the key, so
/// ordering stays deterministic even if a parser overwrites an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySheet {
    entries: Vec<(&'static str, PropertyValue)>,
}

impl PropertySheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, or replaces the value in place if the key exists.
    pub fn push(&mut self, key: &'static str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

impl fmt::Display for PropertySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_display_order() {
        let mut sheet = PropertySheet::new();
        sheet.push("b", "2");
        sheet.push("a", "1");
        sheet.push("c", 3i64);
        let keys: Vec<_> = sheet.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(sheet.to_string(), "b = 2\na = 1\nc = 3\n");
    }

    #[test]
    fn push_replaces_in_place() {
        let mut sheet = PropertySheet::new();
        sheet.push("a", "old");
        sheet.push("b", "2");
        sheet.push("a", "new");
        let keys: Vec<_> = sheet.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(sheet.get("a"), Some(&PropertyValue::Str("new".into())));
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn missing_key_is_absent() {
        let sheet = PropertySheet::new();
        assert!(!sheet.contains("anything"));
        assert!(sheet.is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            let mut sheet = PropertySheet::new();
            sheet.push("text", "\"42\"");
            sheet.push("duration", 750i64);
            sheet.to_string()
        };
        assert_eq!(build(), build());
    }
}
