//! Rows written to the CSV tables.

use serde::{Deserialize, Serialize};

/// A row that can be written to a delimited table.
pub trait TableRow {
    /// Column names, written once before the first row.
    const HEADER: &'static [&'static str];

    /// Field values in header order.
    fn fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkGroupRow {
    pub id: String,
    pub user: String,
    pub name: String,
    pub last_heard: Option<String>,
    pub notes: String,
    pub hits: String,
}

impl TableRow for TalkGroupRow {
    const HEADER: &'static [&'static str] =
        &["TGID", "TG_User", "TG_Name", "Last Heard", "Notes", "Hits"];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.user.as_str(),
            self.name.as_str(),
            self.last_heard.as_deref().unwrap_or_default(),
            self.notes.as_str(),
            self.hits.as_str(),
        ]
    }
}

/// Radio ID row. The first four columns paste straight into UBCD Sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioRow {
    pub callsign: String,
    pub radio_id: String,
    pub tag: String,
    pub last_heard: Option<String>,
    pub notes: String,
    pub hits: String,
}

impl RadioRow {
    /// Sentinel alert tone column; always off for imported IDs.
    pub const ALERT_TONE: &'static str = "Off";
    /// Sentinel alert light column; always off for imported IDs.
    pub const ALERT_LIGHT: &'static str = "Off";
}

impl TableRow for RadioRow {
    const HEADER: &'static [&'static str] = &[
        "Callsign",
        "RadioID",
        "Alert Tone",
        "Alert Light",
        "Brief",
        "Last Heard",
        "Notes",
        "Hits",
    ];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.callsign.as_str(),
            self.radio_id.as_str(),
            Self::ALERT_TONE,
            Self::ALERT_LIGHT,
            self.tag.as_str(),
            self.last_heard.as_deref().unwrap_or_default(),
            self.notes.as_str(),
            self.hits.as_str(),
        ]
    }
}
