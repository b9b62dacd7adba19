//! Delimited table output.

use std::io::Write;
use std::marker::PhantomData;

use anyhow::{Context, Result, anyhow};
use csv::{Terminator, WriterBuilder};
use trunk_model::TableRow;

/// CSV writer for one row type.
///
/// The header is written immediately before the first data row, so a table
/// that never receives a row stays empty.
pub struct TableWriter<R, W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
    rows: usize,
    _row: PhantomData<fn(&R)>,
}

impl<R: TableRow, W: Write> TableWriter<R, W> {
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        Self {
            writer,
            header_written: false,
            rows: 0,
            _row: PhantomData,
        }
    }

    pub fn write_row(&mut self, row: &R) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_record(R::HEADER)
                .context("write table header")?;
            self.header_written = true;
        }
        self.writer
            .write_record(row.fields())
            .context("write table row")?;
        self.rows += 1;
        Ok(())
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Data rows written, not counting the header.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("flush table")
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow!("flush table: {}", e.error()))
    }
}
