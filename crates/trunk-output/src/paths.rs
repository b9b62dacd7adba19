//! Output file naming.
//!
//! Every file name carries the run date so repeated runs on different days
//! never overwrite each other, and a given day's outputs are predictable.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use trunk_model::OutputKind;

/// `YYYYMMDD` for a run date.
pub fn datestamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub talkgroup_table: PathBuf,
    pub radio_table: PathBuf,
    /// SDRTrunk playlist alias fragment.
    pub markup_alias: PathBuf,
    /// DSD+ group alias list.
    pub text_alias: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, date: NaiveDate) -> Self {
        let stamp = datestamp(date);
        Self {
            talkgroup_table: output_dir.join(format!("output_TalkGroups_{stamp}.csv")),
            radio_table: output_dir.join(format!("output_RadioIds_{stamp}.csv")),
            markup_alias: output_dir.join(format!("playlist_Aliases_{stamp}.txt")),
            text_alias: output_dir.join(format!("dsd.alias.groups_{stamp}.txt")),
        }
    }

    /// Files written for an output kind.
    pub fn for_kind(&self, kind: OutputKind) -> Vec<&Path> {
        match kind {
            OutputKind::Table => vec![self.talkgroup_table.as_path(), self.radio_table.as_path()],
            OutputKind::MarkupAlias => vec![self.markup_alias.as_path()],
            OutputKind::TextAlias => vec![self.text_alias.as_path()],
        }
    }
}
