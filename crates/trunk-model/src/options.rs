//! Options controlling an export run.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Output families an export can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Talkgroup and radio ID CSV tables.
    Table,
    /// SDRTrunk playlist alias fragment.
    MarkupAlias,
    /// DSD+ group alias list.
    TextAlias,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [Self::Table, Self::MarkupAlias, Self::TextAlias];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::MarkupAlias => "markup-alias",
            Self::TextAlias => "text-alias",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" | "csv" => Ok(Self::Table),
            "markup-alias" | "markup" | "sdrtrunk" => Ok(Self::MarkupAlias),
            "text-alias" | "text" | "dsd" => Ok(Self::TextAlias),
            other => Err(ModelError::UnknownOutputKind(other.to_string())),
        }
    }
}

fn default_outputs() -> BTreeSet<OutputKind> {
    OutputKind::ALL.into_iter().collect()
}

fn default_uppercase() -> bool {
    true
}

fn default_list_name() -> String {
    ExportOptions::DEFAULT_LIST_NAME.to_string()
}

fn default_network_id() -> String {
    ExportOptions::DEFAULT_NETWORK_ID.to_string()
}

/// Options for one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Synthesize a service label for radios without one.
    ///
    /// Off by default so scanners keep showing raw radio IDs.
    #[serde(default)]
    pub generic_rids: bool,

    /// Force radio callsigns to upper case.
    #[serde(default = "default_uppercase")]
    pub uppercase_callsigns: bool,

    /// Which outputs to write.
    #[serde(default = "default_outputs")]
    pub outputs: BTreeSet<OutputKind>,

    /// Playlist alias list name.
    #[serde(default = "default_list_name")]
    pub list_name: String,

    /// DSD+ network id as `WACN.SYSID` in hex.
    #[serde(default = "default_network_id")]
    pub network_id: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            generic_rids: false,
            uppercase_callsigns: default_uppercase(),
            outputs: default_outputs(),
            list_name: default_list_name(),
            network_id: default_network_id(),
        }
    }
}

impl ExportOptions {
    pub const DEFAULT_LIST_NAME: &'static str = "NSWGRN";
    pub const DEFAULT_NETWORK_ID: &'static str = "BEE00.2D1";

    #[must_use]
    pub fn with_generic_rids(mut self, enable: bool) -> Self {
        self.generic_rids = enable;
        self
    }

    #[must_use]
    pub fn with_uppercase_callsigns(mut self, enable: bool) -> Self {
        self.uppercase_callsigns = enable;
        self
    }

    #[must_use]
    pub fn with_outputs(mut self, outputs: impl IntoIterator<Item = OutputKind>) -> Self {
        self.outputs = outputs.into_iter().collect();
        self
    }

    pub fn wants(&self, kind: OutputKind) -> bool {
        self.outputs.contains(&kind)
    }
}
