//! Radio ID (`User`) records.

use tracing::debug;
use trunk_model::{AliasIdType, ExportOptions, MarkupAlias, RadioRow, RawRecord, attr};
use trunk_rules::{RuleSet, parse_id};

use crate::TAG_ATTRS;
use crate::normalization::{clean, format_date_compact, sanitize_alias_text, upper_case};

/// A radio that makes it into the outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioExport {
    pub row: RadioRow,
    pub markup: MarkupAlias,
    /// The callsign was synthesized from a generic-label rule.
    pub generic: bool,
}

/// What happened to one radio record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioOutcome {
    Export(RadioExport),
    /// Inside an exclusion range; seen but not written.
    Excluded { id: String, label: String },
    /// No label in the source and none synthesized.
    Unlabelled { id: String },
}

/// Transform a radio record.
pub fn transform_radio(record: &RawRecord, rules: &RuleSet, options: &ExportOptions) -> RadioOutcome {
    let id = clean(record.id());

    let mut generic = false;
    let mut callsign = record.get(attr::LABEL).map(str::to_string);
    if callsign.is_none() && options.generic_rids {
        callsign = rules.generic_label_for(&id);
        generic = callsign.is_some();
    }
    let Some(callsign) = callsign else {
        return RadioOutcome::Unlabelled { id };
    };
    let callsign = if options.uppercase_callsigns {
        upper_case(Some(callsign.as_str())).unwrap_or(callsign)
    } else {
        callsign
    };

    if let Some(rule) = parse_id(&id).and_then(|value| rules.exclusion_for(value)) {
        debug!(rid = %id, label = %rule.label, "not writing excluded radio");
        return RadioOutcome::Excluded {
            id,
            label: rule.label.clone(),
        };
    }
    if generic {
        debug!(rid = %id, callsign = %callsign, "writing radio with generic label");
    }

    let markup = MarkupAlias {
        name: sanitize_alias_text(&callsign),
        color: MarkupAlias::COLOR.to_string(),
        group: None,
        list: options.list_name.clone(),
        id_type: AliasIdType::Radio,
        value: id.clone(),
        protocol: MarkupAlias::PROTOCOL.to_string(),
    };

    let row = RadioRow {
        callsign,
        radio_id: id,
        tag: clean(record.get_first(TAG_ATTRS)),
        last_heard: format_date_compact(record.get(attr::LAST)),
        notes: clean(record.get(attr::NOTES)),
        hits: clean(record.get(attr::HITS)),
    };

    RadioOutcome::Export(RadioExport {
        row,
        markup,
        generic,
    })
}
