//! Alias list entries for decoder playlists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasIdType {
    Talkgroup,
    Radio,
}

impl AliasIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Talkgroup => "talkgroup",
            Self::Radio => "radio",
        }
    }
}

/// One `<alias>` element of an SDRTrunk playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupAlias {
    pub name: String,
    pub color: String,
    /// Only talkgroup aliases carry a group.
    pub group: Option<String>,
    pub list: String,
    pub id_type: AliasIdType,
    pub value: String,
    pub protocol: String,
}

impl MarkupAlias {
    pub const PROTOCOL: &'static str = "APCO25";
    pub const COLOR: &'static str = "0";
}

/// One line of a DSD+ group alias list.
///
/// Line format: protocol, network id, group, priority, override, hits,
/// timestamp, "group alias".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAlias {
    pub protocol: String,
    pub network_id: String,
    pub group: String,
    pub priority: String,
    pub override_mode: String,
    pub hits: String,
    pub timestamp: String,
    pub alias: String,
}

impl TextAlias {
    pub const PROTOCOL: &'static str = "P25";
    pub const PRIORITY: &'static str = "50";
    pub const OVERRIDE: &'static str = "Normal";
    pub const HITS: &'static str = "0";
}
