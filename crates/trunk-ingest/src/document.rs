//! UniTrunker XML export reader.
//!
//! The export is a root element holding "branch" elements (systems), each
//! holding "twig" elements. Twigs named `Group` are talkgroups and twigs named
//! `User` are radio IDs; every other element is ignored. The whole document
//! is read into memory before any record is handed out.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};
use trunk_model::{RawRecord, RecordKind};

use crate::error::{IngestError, Result};

/// Nesting depth of record elements: root = 1, branch = 2, twig = 3.
pub const TWIG_DEPTH: usize = 3;

/// All records of one export, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    pub records: Vec<RawRecord>,
}

impl ExportDocument {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

/// Read and parse an export file.
///
/// The file must be UTF-8, which is what UniTrunker writes. An `encoding`
/// named in the XML declaration is not honoured.
pub fn read_document(path: &Path) -> Result<ExportDocument> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Encoding {
        path: path.to_path_buf(),
    })?;
    let records = parse_records(&text)?;
    let document = ExportDocument { records };
    info!(
        path = %path.display(),
        talkgroups = document.count(RecordKind::TalkGroup),
        radios = document.count(RecordKind::RadioUnit),
        "read export document"
    );
    Ok(document)
}

/// Parse export XML into records.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let text = text.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(text);
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut skipped = 0usize;
    let mut records = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(&reader, e))?;
        match event {
            Event::Start(element) => {
                if depth == 0 {
                    check_single_root(&reader, &element, &mut saw_root)?;
                }
                depth += 1;
                if depth == TWIG_DEPTH {
                    push_twig(&reader, &element, &mut records, &mut skipped)?;
                }
            }
            Event::Empty(element) => {
                if depth == 0 {
                    check_single_root(&reader, &element, &mut saw_root)?;
                }
                if depth + 1 == TWIG_DEPTH {
                    push_twig(&reader, &element, &mut records, &mut skipped)?;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(IngestError::Truncated { open: depth });
    }
    if !saw_root {
        return Err(IngestError::NoRoot);
    }
    debug!(records = records.len(), skipped, "parsed export records");
    Ok(records)
}

fn check_single_root(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
    saw_root: &mut bool,
) -> Result<()> {
    if *saw_root {
        return Err(IngestError::MultipleRoots {
            name: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
            position: reader.buffer_position() as u64,
        });
    }
    *saw_root = true;
    Ok(())
}

fn push_twig(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
    records: &mut Vec<RawRecord>,
    skipped: &mut usize,
) -> Result<()> {
    match read_twig(reader, element)? {
        Some(record) => records.push(record),
        None => *skipped += 1,
    }
    Ok(())
}

/// Convert a twig element into a record; `None` for elements that are not
/// talkgroups or radio IDs.
fn read_twig(reader: &Reader<&[u8]>, element: &BytesStart<'_>) -> Result<Option<RawRecord>> {
    let name = element.name();
    let Some(kind) = std::str::from_utf8(name.as_ref())
        .ok()
        .and_then(RecordKind::from_element)
    else {
        return Ok(None);
    };

    let mut attributes = BTreeMap::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| xml_error(reader, e))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| xml_error(reader, e))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| xml_error(reader, e))?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(Some(RawRecord::new(kind, attributes)))
}

fn xml_error(reader: &Reader<&[u8]>, error: impl Display) -> IngestError {
    IngestError::Xml {
        position: reader.buffer_position() as u64,
        message: error.to_string(),
    }
}
