//! The open outputs of one export run.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use trunk_model::{OutputKind, RadioRow, TalkGroupRow};

use crate::alias::AliasWriter;
use crate::paths::OutputPaths;
use crate::table::TableWriter;

/// Writers for each enabled output; disabled outputs are `None`.
///
/// Files close when the sinks are dropped, on success and error paths alike.
pub struct ExportSinks<W: Write> {
    pub talkgroups: Option<TableWriter<TalkGroupRow, W>>,
    pub radios: Option<TableWriter<RadioRow, W>>,
    pub markup_alias: Option<AliasWriter<W>>,
    pub text_alias: Option<AliasWriter<W>>,
}

impl<W: Write> ExportSinks<W> {
    /// Sinks over caller-supplied writers, keeping only the enabled outputs.
    pub fn from_writers(
        outputs: &BTreeSet<OutputKind>,
        mut make_writer: impl FnMut() -> W,
    ) -> Self {
        let table = outputs.contains(&OutputKind::Table);
        Self {
            talkgroups: table.then(|| TableWriter::new(make_writer())),
            radios: table.then(|| TableWriter::new(make_writer())),
            markup_alias: outputs
                .contains(&OutputKind::MarkupAlias)
                .then(|| AliasWriter::new(make_writer())),
            text_alias: outputs
                .contains(&OutputKind::TextAlias)
                .then(|| AliasWriter::new(make_writer())),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(table) = self.talkgroups.as_mut() {
            table.flush()?;
        }
        if let Some(table) = self.radios.as_mut() {
            table.flush()?;
        }
        if let Some(alias) = self.markup_alias.as_mut() {
            alias.flush()?;
        }
        if let Some(alias) = self.text_alias.as_mut() {
            alias.flush()?;
        }
        Ok(())
    }
}

impl ExportSinks<BufWriter<File>> {
    /// Create (truncate) the output files for the enabled outputs.
    pub fn create(paths: &OutputPaths, outputs: &BTreeSet<OutputKind>) -> Result<Self> {
        let table = outputs.contains(&OutputKind::Table);
        Ok(Self {
            talkgroups: table
                .then(|| open(&paths.talkgroup_table).map(TableWriter::new))
                .transpose()?,
            radios: table
                .then(|| open(&paths.radio_table).map(TableWriter::new))
                .transpose()?,
            markup_alias: outputs
                .contains(&OutputKind::MarkupAlias)
                .then(|| open(&paths.markup_alias).map(AliasWriter::new))
                .transpose()?,
            text_alias: outputs
                .contains(&OutputKind::TextAlias)
                .then(|| open(&paths.text_alias).map(AliasWriter::new))
                .transpose()?,
        })
    }
}

fn open(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    debug!(path = %path.display(), "opened output");
    Ok(BufWriter::new(file))
}
