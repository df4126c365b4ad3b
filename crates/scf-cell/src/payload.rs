//! The closed set of payload variants a cell can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use scf_types::{HashTriple, Table};

/// The single typed value a cell currently holds.
///
/// Exactly one variant is active at a time; assignment replaces the whole
/// value, so two payload slots can never be populated simultaneously.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Payload {
    /// No payload assigned yet.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Raw binary data, hex-encoded on the wire.
    Binary(#[serde(with = "hex::serde")] Vec<u8>),
    /// Bullet-point list items.
    UnorderedList(Vec<String>),
    /// Numbered list items.
    OrderedList(Vec<String>),
    /// Tabular data.
    Table(Table),
    /// Semi-structured data such as a JSON document.
    Object(serde_json::Value),
    /// An ordered sequence of JSON-serializable values.
    Array(Vec<serde_json::Value>),
}

impl Payload {
    /// The discriminator for the active variant.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Empty => PayloadKind::Empty,
            Self::Text(_) => PayloadKind::Text,
            Self::Binary(_) => PayloadKind::Binary,
            Self::UnorderedList(_) => PayloadKind::UnorderedList,
            Self::OrderedList(_) => PayloadKind::OrderedList,
            Self::Table(_) => PayloadKind::Table,
            Self::Object(_) => PayloadKind::Object,
            Self::Array(_) => PayloadKind::Array,
        }
    }

    /// Returns `true` when the payload carries no content.
    ///
    /// Empty text, bytes, lists, tables and arrays count as empty, as does
    /// a JSON `null` object.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Binary(data) => data.is_empty(),
            Self::UnorderedList(items) | Self::OrderedList(items) => items.is_empty(),
            Self::Table(table) => table.is_empty(),
            Self::Object(value) => value.is_null(),
            Self::Array(values) => values.is_empty(),
        }
    }

    /// Canonical content length of the active variant.
    ///
    /// Byte length for binary, character length for text, sum of element
    /// character lengths for lists, table content length for tables, and
    /// compact JSON text length for object/array values.
    pub fn content_length(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Text(text) => text.chars().count(),
            Self::Binary(data) => data.len(),
            Self::UnorderedList(items) | Self::OrderedList(items) => {
                items.iter().map(|item| item.chars().count()).sum()
            }
            Self::Table(table) => table.content_length(),
            Self::Object(value) => value.to_string().chars().count(),
            Self::Array(values) => json_text(values).chars().count(),
        }
    }

    /// Hash triple of the active variant, `None` when the payload is empty.
    pub fn hash_triple(&self) -> Option<HashTriple> {
        if self.is_empty() {
            return None;
        }

        let triple = match self {
            Self::Empty => return None,
            Self::Text(text) => scf_hash::hash_text(text),
            Self::Binary(data) => scf_hash::hash_bytes(data),
            Self::UnorderedList(items) | Self::OrderedList(items) => {
                scf_hash::hash_string_list(items)?
            }
            Self::Table(table) => scf_hash::hash_table(table),
            Self::Object(value) => scf_hash::hash_value(value),
            Self::Array(values) => scf_hash::hash_text(&json_text(values)),
        };

        Some(triple)
    }
}

fn json_text<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Fieldless discriminator for [`Payload`] variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    /// No payload assigned.
    #[default]
    Empty,
    /// Plain text.
    Text,
    /// Raw binary data.
    Binary,
    /// Bullet-point list.
    UnorderedList,
    /// Numbered list.
    OrderedList,
    /// Tabular data.
    Table,
    /// Semi-structured JSON document.
    Object,
    /// Sequence of JSON values.
    Array,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Text => write!(f, "Text"),
            Self::Binary => write!(f, "Binary"),
            Self::UnorderedList => write!(f, "UnorderedList"),
            Self::OrderedList => write!(f, "OrderedList"),
            Self::Table => write!(f, "Table"),
            Self::Object => write!(f, "Object"),
            Self::Array => write!(f, "Array"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_variants_are_empty() {
        assert!(Payload::Empty.is_empty());
        assert!(Payload::Text(String::new()).is_empty());
        assert!(Payload::Binary(Vec::new()).is_empty());
        assert!(Payload::UnorderedList(Vec::new()).is_empty());
        assert!(Payload::OrderedList(Vec::new()).is_empty());
        assert!(Payload::Table(Table::default()).is_empty());
        assert!(Payload::Object(serde_json::Value::Null).is_empty());
        assert!(Payload::Array(Vec::new()).is_empty());
    }

    #[test]
    fn populated_variants_are_not_empty() {
        assert!(!Payload::Text("x".into()).is_empty());
        assert!(!Payload::Binary(vec![0]).is_empty());
        assert!(!Payload::Object(serde_json::json!({})).is_empty());
        assert!(!Payload::Table(Table::new(vec!["c".into()])).is_empty());
    }

    #[test]
    fn text_length_counts_characters() {
        let payload = Payload::Text("héllo".into());
        assert_eq!(payload.content_length(), 5);
    }

    #[test]
    fn binary_length_counts_bytes() {
        let payload = Payload::Binary(vec![1, 2, 3, 4]);
        assert_eq!(payload.content_length(), 4);
    }

    #[test]
    fn list_length_sums_elements() {
        let payload = Payload::OrderedList(vec!["ab".into(), "cde".into()]);
        assert_eq!(payload.content_length(), 5);
    }

    #[test]
    fn object_length_is_json_text_length() {
        let value = serde_json::json!({"a": 1});
        let expected = value.to_string().chars().count();
        assert_eq!(Payload::Object(value).content_length(), expected);
    }

    #[test]
    fn empty_payload_has_no_triple() {
        assert_eq!(Payload::Empty.hash_triple(), None);
        assert_eq!(Payload::Text(String::new()).hash_triple(), None);
    }

    #[test]
    fn list_triple_matches_text_rule() {
        let payload = Payload::UnorderedList(vec!["a".into(), "b".into()]);
        assert_eq!(payload.hash_triple(), Some(scf_hash::hash_text("a\0b")));
    }

    #[test]
    fn kind_display_is_stable() {
        assert_eq!(format!("{}", PayloadKind::UnorderedList), "UnorderedList");
        assert_eq!(format!("{}", PayloadKind::Binary), "Binary");
    }

    #[test]
    fn serde_tags_with_stable_enumerators() {
        let payload = Payload::Text("hello".into());
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"kind":"Text","data":"hello"}"#);
    }

    #[test]
    fn binary_serializes_as_hex() {
        let payload = Payload::Binary(vec![0xde, 0xad, 0xbe, 0xef]);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"kind":"Binary","data":"deadbeef"}"#);
        let parsed: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
