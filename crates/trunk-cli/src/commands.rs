use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span, warn};

use trunk_cli::pipeline::run_export;
use trunk_ingest::read_document;
use trunk_model::{ExportOptions, RangeRule};
use trunk_output::{ExportSinks, OutputPaths};
use trunk_rules::ExportConfig;
use trunk_transform::normalization::hex_to_decimal;

use crate::cli::{ExportArgs, RulesArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::{OutputFile, RunResult};

pub fn run_export_command(args: &ExportArgs) -> Result<RunResult> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();

    let config = ExportConfig::resolve(args.config.as_deref()).context("load export config")?;
    let options = apply_overrides(config.options.clone(), args);
    if !is_valid_network_id(&options.network_id) {
        warn!(
            network_id = %options.network_id,
            "network id is not a WACN.SYSID hex pair"
        );
    }

    // Parse before touching the outputs so a bad input leaves no empty files.
    let document = read_document(&args.input)
        .with_context(|| format!("read export: {}", args.input.display()))?;
    if document.is_empty() {
        warn!("export holds no Group or User records");
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let paths = OutputPaths::new(&output_dir, date);
    let mut sinks = ExportSinks::create(&paths, &options.outputs)?;
    let summary = run_export(&document.records, &config.rules, &options, &mut sinks)?;
    drop(sinks);

    let outputs = options
        .outputs
        .iter()
        .flat_map(|&kind| {
            paths.for_kind(kind).into_iter().map(move |path| OutputFile {
                kind,
                path: path.to_path_buf(),
            })
        })
        .collect();
    info!(output_dir = %output_dir.display(), "outputs written");

    Ok(RunResult {
        input: args.input.clone(),
        output_dir,
        config_source: config.source.to_string(),
        config_fingerprint: config.short_fingerprint().to_string(),
        outputs,
        summary,
    })
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = ExportConfig::resolve(args.config.as_deref()).context("load export config")?;
    println!("Config: {}", config.source);
    println!("Fingerprint: {}", config.fingerprint);

    println!("Exclusions:");
    println!("{}", rule_table(config.rules.exclusions(), false));
    println!("Generic labels:");
    println!("{}", rule_table(config.rules.generic_labels(), true));
    Ok(())
}

/// CLI flags win over the config file's `[export]` table.
fn apply_overrides(mut options: ExportOptions, args: &ExportArgs) -> ExportOptions {
    if args.generic_rids {
        options.generic_rids = true;
    }
    if args.no_uppercase {
        options.uppercase_callsigns = false;
    }
    if !args.formats.is_empty() {
        options.outputs = args.formats.iter().map(|&format| format.into()).collect();
    }
    if let Some(list_name) = &args.list_name {
        options.list_name.clone_from(list_name);
    }
    if let Some(network_id) = &args.network_id {
        options.network_id.clone_from(network_id);
    }
    options
}

/// True for a `WACN.SYSID` pair of hex numbers.
fn is_valid_network_id(network_id: &str) -> bool {
    network_id.split_once('.').is_some_and(|(wacn, sysid)| {
        !hex_to_decimal(wacn).is_empty() && !hex_to_decimal(sysid).is_empty()
    })
}

fn rule_table(rules: &[RangeRule], with_digits: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Start"), header_cell("End"), header_cell("Label")];
    if with_digits {
        header.push(header_cell("Digits"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for rule in rules {
        let mut row = vec![
            Cell::new(rule.range_start).set_alignment(CellAlignment::Right),
            Cell::new(rule.range_end).set_alignment(CellAlignment::Right),
            Cell::new(&rule.label),
        ];
        if with_digits {
            row.push(match rule.label_digits {
                Some(digits) => Cell::new(digits).set_alignment(CellAlignment::Right),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use trunk_model::OutputKind;

    fn export_args(flags: &[&str]) -> ExportArgs {
        let argv: Vec<&str> = ["export", "site.xml"]
            .into_iter()
            .chain(flags.iter().copied())
            .collect();
        ExportArgs::try_parse_from(argv).unwrap()
    }

    fn config_options() -> ExportOptions {
        ExportOptions::default()
            .with_generic_rids(false)
            .with_uppercase_callsigns(true)
            .with_outputs([OutputKind::Table])
    }

    #[test]
    fn flags_override_config_options() {
        let args = export_args(&[
            "--generic-rids",
            "--no-uppercase",
            "--format",
            "markup-alias,text-alias",
            "--list-name",
            "TEST",
            "--network-id",
            "ABC12.3F",
        ]);
        let options = apply_overrides(config_options(), &args);

        assert!(options.generic_rids);
        assert!(!options.uppercase_callsigns);
        assert!(!options.wants(OutputKind::Table));
        assert!(options.wants(OutputKind::MarkupAlias));
        assert!(options.wants(OutputKind::TextAlias));
        assert_eq!(options.list_name, "TEST");
        assert_eq!(options.network_id, "ABC12.3F");
    }

    #[test]
    fn config_options_stand_without_flags() {
        let config = config_options()
            .with_generic_rids(true)
            .with_uppercase_callsigns(false);
        let options = apply_overrides(config.clone(), &export_args(&[]));
        assert_eq!(options, config);
    }

    #[test]
    fn run_date_is_parsed_from_flag() {
        let args = export_args(&["--date", "20200917"]);
        assert_eq!(args.date, chrono::NaiveDate::from_ymd_opt(2020, 9, 17));
        assert!(ExportArgs::try_parse_from(["export", "site.xml", "--date", "17/09/2020"]).is_err());
    }

    #[test]
    fn network_id_validation() {
        assert!(is_valid_network_id("BEE00.2D1"));
        assert!(is_valid_network_id("bee00.2d1"));
        assert!(!is_valid_network_id("BEE00"));
        assert!(!is_valid_network_id("BEE00.XYZ"));
        assert!(!is_valid_network_id(".2D1"));
    }
}
