//! Output writers for trunking exports.
//!
//! - **table**: CSV tables with a header written before the first row
//! - **alias**: SDRTrunk playlist and DSD+ group alias rendering
//! - **paths**: dated output file names
//! - **sinks**: the set of open outputs for one run

pub mod alias;
pub mod paths;
pub mod sinks;
pub mod table;

pub use alias::{AliasWriter, render_markup_alias, render_text_alias};
pub use paths::{OutputPaths, datestamp};
pub use sinks::ExportSinks;
pub use table::TableWriter;
