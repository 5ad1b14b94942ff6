//! Records and the normalized result of a select.

use std::fmt;

use serde::Serialize;

/// A stored record as returned by backends that hand back whole rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Relational row: store-assigned identity plus the `name` column.
    Person { id: i64, name: String },
    /// Document with an explicit caller-supplied key.
    Document { key: String, name: String },
}

impl Record {
    /// The stored name, whatever the record shape.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person { name, .. } | Self::Document { name, .. } => name,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person { id, name } => write!(f, "({id}, {name:?})"),
            Self::Document { key, name } => write!(f, "{{key: {key:?}, name: {name:?}}}"),
        }
    }
}

/// Result of `select`.
///
/// Relational and document backends return every match as a sequence, which
/// may be empty. The other key-keyed backends return one value or an explicit
/// absence marker. The two shapes are kept apart on purpose: an empty
/// sequence and a missing value are different answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Selection {
    Records(Vec<Record>),
    Value(Option<String>),
}

impl Selection {
    /// True for an empty sequence or the absence marker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Records(records) => records.is_empty(),
            Self::Value(value) => value.is_none(),
        }
    }

    /// Stored values in the result, in backend order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Records(records) => records.iter().map(Record::name).collect(),
            Self::Value(value) => value.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Self::Records(records) => Some(records),
            Self::Value(_) => None,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => value.as_deref(),
            Self::Records(_) => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Records(records) => {
                f.write_str("[")?;
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{record}")?;
                }
                f.write_str("]")
            }
            Self::Value(Some(value)) => write!(f, "{value:?}"),
            Self::Value(None) => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, name: &str) -> Record {
        Record::Person {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_sequence_and_absence_are_both_empty_but_not_equal() {
        let none = Selection::Value(None);
        let empty = Selection::Records(Vec::new());
        assert!(none.is_empty());
        assert!(empty.is_empty());
        assert_ne!(none, empty);
    }

    #[test]
    fn values_reads_names_from_records() {
        let selection = Selection::Records(vec![person(1, "Mike"), person(2, "Mike")]);
        assert_eq!(selection.values(), vec!["Mike", "Mike"]);
        assert_eq!(selection.records().map(<[Record]>::len), Some(2));
        assert_eq!(selection.value(), None);
    }

    #[test]
    fn values_reads_single_value() {
        let selection = Selection::Value(Some("Mike".to_string()));
        assert_eq!(selection.values(), vec!["Mike"]);
        assert_eq!(selection.value(), Some("Mike"));
        assert!(selection.records().is_none());
    }

    #[test]
    fn display_matches_driver_output() {
        let rows = Selection::Records(vec![person(1, "Mike")]);
        assert_eq!(rows.to_string(), "[(1, \"Mike\")]");
        assert_eq!(Selection::Records(vec![]).to_string(), "[]");
        assert_eq!(Selection::Value(None).to_string(), "None");

        let doc = Record::Document {
            key: "user1".to_string(),
            name: "Mike".to_string(),
        };
        assert_eq!(doc.to_string(), "{key: \"user1\", name: \"Mike\"}");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Selection::Value(None)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "value", "result": null }));

        let json = serde_json::to_value(Selection::Records(vec![person(7, "Mike")])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "records",
                "result": [{ "type": "person", "id": 7, "name": "Mike" }],
            })
        );
    }
}
