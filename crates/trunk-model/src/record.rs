//! Raw records as read from the trunking system export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute names read from `Group` and `User` elements.
pub mod attr {
    pub const ID: &str = "id";
    pub const TAG: &str = "tag";
    pub const BRIEF: &str = "brief";
    pub const LABEL: &str = "label";
    pub const LAST: &str = "last";
    pub const NOTES: &str = "notes";
    pub const HITS: &str = "hits";
}

/// The two record kinds carried by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A `Group` element.
    TalkGroup,
    /// A `User` element (one radio ID).
    RadioUnit,
}

impl RecordKind {
    /// Map an element name to a record kind. Names are case-sensitive.
    pub fn from_element(name: &str) -> Option<Self> {
        match name {
            "Group" => Some(Self::TalkGroup),
            "User" => Some(Self::RadioUnit),
            _ => None,
        }
    }
}

/// One element's attributes, tagged with its kind.
///
/// An attribute missing from the map is absent. An attribute written as
/// `label=""` is present with an empty value; the two are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub kind: RecordKind,
    attributes: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new(kind: RecordKind, attributes: BTreeMap<String, String>) -> Self {
        Self { kind, attributes }
    }

    /// Build a record from name/value pairs.
    pub fn from_pairs<'a>(
        kind: RecordKind,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let attributes = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { kind, attributes }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First attribute present among `names`, in order.
    pub fn get_first(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn id(&self) -> Option<&str> {
        self.get(attr::ID)
    }
}
