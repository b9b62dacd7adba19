//! Alias list rendering for SDRTrunk and DSD+.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use trunk_model::{MarkupAlias, TextAlias};

/// Indent of `<alias>` elements inside a playlist's alias list.
const ALIAS_INDENT: &str = "  ";
/// Indent of the nested `<id>` element.
const ID_INDENT: &str = "    ";

/// Render one `<alias>` block, ready to paste into an SDRTrunk playlist.
///
/// Attribute values are XML-escaped. The block has no trailing newline.
pub fn render_markup_alias(alias: &MarkupAlias) -> Result<String> {
    let mut start = BytesStart::new("alias");
    start.push_attribute(("name", alias.name.as_str()));
    start.push_attribute(("color", alias.color.as_str()));
    if let Some(group) = &alias.group {
        start.push_attribute(("group", group.as_str()));
    }
    start.push_attribute(("list", alias.list.as_str()));

    let mut id = BytesStart::new("id");
    id.push_attribute(("type", alias.id_type.as_str()));
    id.push_attribute(("value", alias.value.as_str()));
    id.push_attribute(("protocol", alias.protocol.as_str()));

    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Text(BytesText::new(ALIAS_INDENT)))?;
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(&format!("\n{ID_INDENT}"))))?;
    xml.write_event(Event::Empty(id))?;
    xml.write_event(Event::Text(BytesText::new(&format!("\n{ALIAS_INDENT}"))))?;
    xml.write_event(Event::End(BytesEnd::new("alias")))?;
    String::from_utf8(xml.into_inner()).context("alias markup is not UTF-8")
}

/// Render one DSD+ group alias line (no trailing newline).
pub fn render_text_alias(alias: &TextAlias) -> String {
    format!(
        "{},    {},    {},    {},    {},    {},    {},    \"{}\"",
        alias.protocol,
        alias.network_id,
        alias.group,
        alias.priority,
        alias.override_mode,
        alias.hits,
        alias.timestamp,
        alias.alias
    )
}

/// Appends rendered alias entries, one per line.
pub struct AliasWriter<W: Write> {
    inner: W,
    entries: usize,
}

impl<W: Write> AliasWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, entries: 0 }
    }

    pub fn write_entry(&mut self, entry: &str) -> Result<()> {
        writeln!(self.inner, "{entry}").context("write alias entry")?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries_written(&self) -> usize {
        self.entries
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().context("flush alias list")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
