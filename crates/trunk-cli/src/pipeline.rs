//! Export pipeline driver.
//!
//! Walks the parsed records in document order, runs each through its
//! transform and writes the result to every enabled output.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use trunk_model::{ExportOptions, RawRecord, RecordKind};
use trunk_output::{ExportSinks, render_markup_alias, render_text_alias};
use trunk_rules::RuleSet;
use trunk_transform::{RadioOutcome, transform_radio, transform_talkgroup};

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub talkgroups_seen: usize,
    pub talkgroups_accepted: usize,
    /// Rows in the talkgroup table.
    pub talkgroups_written: usize,
    pub talkgroups_skipped: usize,
    pub radios_seen: usize,
    /// Radios that passed every check, whether or not a table was written.
    pub radios_accepted: usize,
    /// Rows in the radio table; the headline count reported at the end of a run.
    pub radios_written: usize,
    pub radios_excluded: usize,
    pub radios_unlabelled: usize,
    /// Accepted radios whose callsign came from a generic-label rule.
    pub radios_generic: usize,
    pub markup_aliases: usize,
    pub text_aliases: usize,
}

impl ExportSummary {
    /// Table rows written across both tables.
    pub fn records_written(&self) -> usize {
        self.talkgroups_written + self.radios_written
    }
}

/// Run every record through the transforms and into `sinks`.
///
/// A record is rendered completely before any of its lines are written, so
/// it is either emitted to all enabled outputs or to none.
pub fn run_export<W: Write>(
    records: &[RawRecord],
    rules: &RuleSet,
    options: &ExportOptions,
    sinks: &mut ExportSinks<W>,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    for record in records {
        match record.kind {
            RecordKind::TalkGroup => {
                summary.talkgroups_seen += 1;
                let Some(export) = transform_talkgroup(record, options) else {
                    summary.talkgroups_skipped += 1;
                    continue;
                };
                let markup = sinks
                    .markup_alias
                    .is_some()
                    .then(|| render_markup_alias(&export.markup))
                    .transpose()?;
                let text = render_text_alias(&export.text);

                if let Some(table) = sinks.talkgroups.as_mut() {
                    table.write_row(&export.row)?;
                    summary.talkgroups_written += 1;
                }
                if let (Some(writer), Some(markup)) = (sinks.markup_alias.as_mut(), markup) {
                    writer.write_entry(&markup)?;
                    summary.markup_aliases += 1;
                }
                if let Some(writer) = sinks.text_alias.as_mut() {
                    writer.write_entry(&text)?;
                    summary.text_aliases += 1;
                }
                summary.talkgroups_accepted += 1;
            }
            RecordKind::RadioUnit => {
                summary.radios_seen += 1;
                let export = match transform_radio(record, rules, options) {
                    RadioOutcome::Export(export) => export,
                    RadioOutcome::Excluded { .. } => {
                        summary.radios_excluded += 1;
                        continue;
                    }
                    RadioOutcome::Unlabelled { .. } => {
                        summary.radios_unlabelled += 1;
                        continue;
                    }
                };
                let markup = sinks
                    .markup_alias
                    .is_some()
                    .then(|| render_markup_alias(&export.markup))
                    .transpose()?;

                if let Some(table) = sinks.radios.as_mut() {
                    table.write_row(&export.row)?;
                    summary.radios_written += 1;
                }
                if let (Some(writer), Some(markup)) = (sinks.markup_alias.as_mut(), markup) {
                    writer.write_entry(&markup)?;
                    summary.markup_aliases += 1;
                }
                if export.generic {
                    summary.radios_generic += 1;
                }
                summary.radios_accepted += 1;
            }
        }
    }

    sinks.flush()?;
    info!(
        talkgroups = summary.talkgroups_accepted,
        talkgroup_rows = summary.talkgroups_written,
        talkgroups_skipped = summary.talkgroups_skipped,
        radios = summary.radios_accepted,
        radio_rows = summary.radios_written,
        radios_excluded = summary.radios_excluded,
        radios_unlabelled = summary.radios_unlabelled,
        "export complete"
    );
    Ok(summary)
}
