//! Talkgroup (`Group`) records.

use tracing::{debug, warn};
use trunk_model::{
    AliasIdType, ExportOptions, MarkupAlias, RawRecord, TalkGroupRow, TextAlias, attr,
};

use crate::TAG_ATTRS;
use crate::normalization::{
    clean, format_date_compact, format_date_verbose, is_full_timestamp, sanitize_alias_text,
};

/// Everything one talkgroup contributes to the outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkGroupExport {
    pub row: TalkGroupRow,
    pub markup: MarkupAlias,
    pub text: TextAlias,
}

/// Transform a talkgroup record.
///
/// Returns `None` when the record has no user tag (`brief` or `tag`) in the
/// source; such talkgroups carry no identifying data and are left out of
/// every output.
pub fn transform_talkgroup(record: &RawRecord, options: &ExportOptions) -> Option<TalkGroupExport> {
    let Some(user) = record.get_first(TAG_ATTRS) else {
        debug!(tgid = record.id().unwrap_or_default(), "skipping talkgroup without user tag");
        return None;
    };

    let id = clean(record.id());
    let user = user.to_string();
    let name = clean(record.get(attr::LABEL));
    let last = record.get(attr::LAST);
    if let Some(value) = last.filter(|value| !is_full_timestamp(value)) {
        warn!(tgid = %id, last = value, "talkgroup has a malformed last-heard timestamp");
    }
    let alias_name = sanitize_alias_text(&name);

    let markup = MarkupAlias {
        name: alias_name.clone(),
        color: MarkupAlias::COLOR.to_string(),
        group: Some(id.clone()),
        list: options.list_name.clone(),
        id_type: AliasIdType::Talkgroup,
        value: id.clone(),
        protocol: MarkupAlias::PROTOCOL.to_string(),
    };

    let text = TextAlias {
        protocol: TextAlias::PROTOCOL.to_string(),
        network_id: options.network_id.clone(),
        group: id.clone(),
        priority: TextAlias::PRIORITY.to_string(),
        override_mode: TextAlias::OVERRIDE.to_string(),
        hits: TextAlias::HITS.to_string(),
        timestamp: format_date_verbose(last).unwrap_or_default(),
        alias: format!("{user}.{alias_name}"),
    };

    let row = TalkGroupRow {
        id,
        user,
        name,
        last_heard: format_date_compact(last),
        notes: clean(record.get(attr::NOTES)),
        hits: clean(record.get(attr::HITS)),
    };

    Some(TalkGroupExport { row, markup, text })
}
