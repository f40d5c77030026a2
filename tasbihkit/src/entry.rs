//! Entry records and lookup keys
//!
//! A category document is a JSON array of loosely shaped values. An entry
//! keeps its source value whole; `id`, `label` and `translation` are read
//! from it on demand and count as absent unless they hold a string. Nothing
//! about an entry's shape can make a document fail to load.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One record of a category document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Entry {
    raw: Value,
}

impl Entry {
    /// Identifier, unique within its category
    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    /// Short human-readable name
    pub fn label(&self) -> Option<&str> {
        self.text("label")
    }

    /// Long-form English translation
    pub fn translation(&self) -> Option<&str> {
        self.text("translation")
    }

    /// Look up any field of the source object by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Source value, exactly as decoded
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

impl From<Value> for Entry {
    fn from(raw: Value) -> Self {
        Self { raw }
    }
}

/// Text field targeted by a substring search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Label,
    Translation,
}

impl SearchField {
    /// Borrow the targeted field from an entry, if present
    pub fn value<'a>(&self, entry: &'a Entry) -> Option<&'a str> {
        match self {
            SearchField::Label => entry.label(),
            SearchField::Translation => entry.translation(),
        }
    }

    /// Case-insensitive containment test; `term` must already be lower-cased.
    /// Entries lacking the field never match.
    pub fn matches(&self, entry: &Entry, term: &str) -> bool {
        self.value(entry)
            .map(|v| v.to_lowercase().contains(term))
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Label => "label",
            SearchField::Translation => "translation",
        }
    }
}

/// Lookup key for [`CategoryStore::search_by_id`](crate::CategoryStore::search_by_id)
///
/// Accepts textual or numeric ids. Numbers are rendered the way JavaScript
/// stringifies them before comparison, so `2` finds the entry with `"id": "2"`.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryId {
    Text(String),
    Integer(i128),
    Float(f64),
}

impl EntryId {
    /// False for the empty string, zero and NaN; such ids are rejected up front
    pub fn is_present(&self) -> bool {
        match self {
            EntryId::Text(s) => !s.is_empty(),
            EntryId::Integer(n) => *n != 0,
            EntryId::Float(f) => *f != 0.0 && !f.is_nan(),
        }
    }

    /// String form with surrounding whitespace removed
    pub fn normalized(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Text(s) => f.write_str(s),
            EntryId::Integer(n) => write!(f, "{}", n),
            EntryId::Float(x) => write_number(f, *x),
        }
    }
}

/// Number-to-string in the form JavaScript's `String(n)` produces: plain
/// decimal for magnitudes in [1e-6, 1e21), `1e+21` / `1.5e-7` outside it.
fn write_number(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // also covers -0.0
    if x == 0.0 {
        return f.write_str("0");
    }

    let magnitude = x.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", x);
    }

    let scientific = format!("{:e}", x);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&scientific),
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId::Text(s)
    }
}

impl From<&String> for EntryId {
    fn from(s: &String) -> Self {
        EntryId::Text(s.clone())
    }
}

macro_rules! entry_id_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for EntryId {
            fn from(n: $t) -> Self {
                EntryId::Integer(n as i128)
            }
        })*
    };
}

entry_id_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for EntryId {
    fn from(x: f64) -> Self {
        EntryId::Float(x)
    }
}

impl From<f32> for EntryId {
    fn from(x: f32) -> Self {
        EntryId::Float(x as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_keeps_unknown_fields() {
        let raw = json!({
            "id": "7",
            "label": "Tasbih",
            "arabic": "سُبْحَانَ ٱللَّٰهِ",
            "count": 33
        });

        let entry: Entry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.id(), Some("7"));
        assert_eq!(entry.label(), Some("Tasbih"));
        assert!(entry.translation().is_none());
        assert_eq!(entry.field("count"), Some(&json!(33)));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_entry_without_known_fields() {
        let entry: Entry = serde_json::from_value(json!({"note": "x"})).unwrap();
        assert!(entry.id().is_none());
        assert!(entry.label().is_none());
        assert_eq!(entry.field("note"), Some(&json!("x")));
    }

    #[test]
    fn test_entry_serializes_in_source_key_order() {
        let source = r#"{"label":"Tasbih","zikr":"x","id":"7","arabic":"a","count":33}"#;

        let entry: Entry = serde_json::from_str(source).unwrap();

        assert_eq!(serde_json::to_string(&entry).unwrap(), source);
    }

    #[test]
    fn test_non_string_fields_read_as_absent() {
        let raw = json!({"id": 5, "label": {"en": "Morning"}, "translation": ["x"]});
        let entry: Entry = serde_json::from_value(raw.clone()).unwrap();

        assert!(entry.id().is_none());
        assert!(entry.label().is_none());
        assert!(entry.translation().is_none());
        assert_eq!(entry.field("id"), Some(&json!(5)));
        assert!(!SearchField::Label.matches(&entry, "morn"));
        assert_eq!(entry.into_value(), raw);
    }

    #[test]
    fn test_non_object_entry_decodes() {
        let entries: Vec<Entry> = serde_json::from_str(r#"[null, 3, "x", {"id": "1"}]"#).unwrap();

        assert_eq!(entries.len(), 4);
        assert!(entries[0].id().is_none());
        assert!(entries[1].label().is_none());
        assert_eq!(entries[3].id(), Some("1"));
    }

    #[test]
    fn test_null_label_treated_as_absent() {
        let entry: Entry = serde_json::from_value(json!({"id": "1", "label": null})).unwrap();
        assert!(entry.label().is_none());
        assert!(!SearchField::Label.matches(&entry, "a"));
    }

    #[test]
    fn test_search_field_case_insensitive() {
        let entry: Entry = serde_json::from_value(json!({
            "label": "Morning Remembrance",
            "translation": "Glory be to Allah"
        }))
        .unwrap();

        assert!(SearchField::Label.matches(&entry, "morn"));
        assert!(SearchField::Label.matches(&entry, "remembrance"));
        assert!(!SearchField::Label.matches(&entry, "evening"));
        assert!(SearchField::Translation.matches(&entry, "glory"));
        assert!(!SearchField::Translation.matches(&entry, "morn"));
    }

    #[test]
    fn test_entry_id_presence() {
        assert!(!EntryId::from("").is_present());
        assert!(EntryId::from(" ").is_present());
        assert!(EntryId::from("abc").is_present());
        assert!(!EntryId::from(0).is_present());
        assert!(EntryId::from(2u32).is_present());
        assert!(!EntryId::from(0.0).is_present());
        assert!(!EntryId::from(f64::NAN).is_present());
        assert!(EntryId::from(-1i64).is_present());
    }

    #[test]
    fn test_entry_id_rendering() {
        assert_eq!(EntryId::from(2).to_string(), "2");
        assert_eq!(EntryId::from(2.0).to_string(), "2");
        assert_eq!(EntryId::from(2.5).to_string(), "2.5");
        assert_eq!(EntryId::from(-3.0).to_string(), "-3");
        assert_eq!(EntryId::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(EntryId::from(-0.0).to_string(), "0");
        assert_eq!(EntryId::from("  12 ").normalized(), "12");
    }

    #[test]
    fn test_entry_id_rendering_extreme_magnitudes() {
        assert_eq!(EntryId::from(1e21).to_string(), "1e+21");
        assert_eq!(EntryId::from(1.5e22).to_string(), "1.5e+22");
        assert_eq!(EntryId::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(EntryId::from(1e-7).to_string(), "1e-7");
        assert_eq!(EntryId::from(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(EntryId::from(0.000001).to_string(), "0.000001");
    }
}
