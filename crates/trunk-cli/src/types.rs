use std::path::PathBuf;

use serde::Serialize;
use trunk_cli::pipeline::ExportSummary;
use trunk_model::OutputKind;

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub config_source: String,
    pub config_fingerprint: String,
    pub outputs: Vec<OutputFile>,
    pub summary: ExportSummary,
}

#[derive(Debug, Serialize)]
pub struct OutputFile {
    pub kind: OutputKind,
    pub path: PathBuf,
}
