//! CLI argument definitions for trunk-export.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use trunk_model::OutputKind;

#[derive(Parser)]
#[command(
    name = "trunk-export",
    version,
    about = "Convert a UniTrunker XML export into scanner and decoder files",
    long_about = "Convert a UniTrunker XML export into scanner and decoder files.\n\n\
                  Writes talkgroup and radio ID CSV tables (Sentinel-ready), an\n\
                  SDRTrunk playlist alias fragment, and a DSD+ group alias list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an export into the configured outputs.
    Export(ExportArgs),

    /// Show the active exclusion and generic-label tables.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the UniTrunker XML file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file with export options and rule tables.
    ///
    /// Falls back to TRUNK_EXPORT_CONFIG, then the built-in NSWGRN tables.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Give unlabelled radios a generic service label from their ID range.
    #[arg(long = "generic-rids")]
    pub generic_rids: bool,

    /// Keep radio callsigns in their original case.
    #[arg(long = "no-uppercase")]
    pub no_uppercase: bool,

    /// Outputs to write (comma separated). Defaults to the config's list.
    #[arg(long = "format", value_enum, value_delimiter = ',')]
    pub formats: Vec<OutputFormatArg>,

    /// SDRTrunk alias list name.
    #[arg(long = "list-name", value_name = "NAME")]
    pub list_name: Option<String>,

    /// DSD+ network id (WACN.SYSID in hex).
    #[arg(long = "network-id", value_name = "ID")]
    pub network_id: Option<String>,

    /// Run date used in output file names (YYYYMMDD, default: today).
    #[arg(long = "date", value_name = "YYYYMMDD", value_parser = parse_run_date)]
    pub date: Option<NaiveDate>,

    /// Print the run summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Config file to show instead of the resolved default.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    MarkupAlias,
    TextAlias,
}

impl From<OutputFormatArg> for OutputKind {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Table => OutputKind::Table,
            OutputFormatArg::MarkupAlias => OutputKind::MarkupAlias,
            OutputFormatArg::TextAlias => OutputKind::TextAlias,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_run_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|e| format!("expected YYYYMMDD, got {value:?}: {e}"))
}
