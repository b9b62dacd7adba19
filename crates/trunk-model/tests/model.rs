//! Tests for trunk-model types.

use trunk_model::{
    ExportOptions, OutputKind, RadioRow, RangeRule, RawRecord, RecordKind, TableRow,
    TalkGroupRow, attr,
};

#[test]
fn absent_and_empty_attributes_differ() {
    let record = RawRecord::from_pairs(RecordKind::TalkGroup, [("id", "100"), ("label", "")]);
    assert_eq!(record.get(attr::LABEL), Some(""));
    assert_eq!(record.get(attr::TAG), None);
    assert_eq!(record.id(), Some("100"));
}

#[test]
fn get_first_respects_order() {
    let record = RawRecord::from_pairs(
        RecordKind::RadioUnit,
        [("tag", "from-tag"), ("brief", "from-brief")],
    );
    assert_eq!(record.get_first(&[attr::BRIEF, attr::TAG]), Some("from-brief"));

    let tag_only = RawRecord::from_pairs(RecordKind::RadioUnit, [("tag", "from-tag")]);
    assert_eq!(tag_only.get_first(&[attr::BRIEF, attr::TAG]), Some("from-tag"));
}

#[test]
fn talkgroup_row_fields_follow_header() {
    let row = TalkGroupRow {
        id: "100".to_string(),
        user: "RFS".to_string(),
        name: "Fire Ops".to_string(),
        last_heard: None,
        notes: String::new(),
        hits: "5".to_string(),
    };
    assert_eq!(TalkGroupRow::HEADER.len(), row.fields().len());
    assert_eq!(row.fields(), vec!["100", "RFS", "Fire Ops", "", "", "5"]);
}

#[test]
fn radio_row_alert_columns_are_off() {
    let row = RadioRow {
        callsign: "FRNSW.05123".to_string(),
        radio_id: "2005123".to_string(),
        tag: "Unit1".to_string(),
        last_heard: Some("01/01/2020".to_string()),
        notes: String::new(),
        hits: String::new(),
    };
    let fields = row.fields();
    assert_eq!(RadioRow::HEADER.len(), fields.len());
    assert_eq!(fields[2], "Off");
    assert_eq!(fields[3], "Off");
    assert_eq!(RadioRow::HEADER[4], "Brief");
}

#[test]
fn range_rule_bounds_are_inclusive() {
    let rule = RangeRule::new(2000000, 2009999, "FRNSW").with_label_digits(5);
    assert!(rule.contains(2000000));
    assert!(rule.contains(2009999));
    assert!(!rule.contains(1999999));
    assert!(!rule.contains(2010000));
    assert_eq!(rule.label_digits, Some(5));
}

#[test]
fn range_rule_overlap() {
    let a = RangeRule::new(0, 9999, "noise");
    let b = RangeRule::new(9999, 20000, "other");
    let c = RangeRule::new(10000, 20000, "other");
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
}

#[test]
fn output_kind_parses_aliases() {
    assert_eq!("table".parse::<OutputKind>().unwrap(), OutputKind::Table);
    assert_eq!("SDRTrunk".parse::<OutputKind>().unwrap(), OutputKind::MarkupAlias);
    assert_eq!("dsd".parse::<OutputKind>().unwrap(), OutputKind::TextAlias);
    assert!("xlsx".parse::<OutputKind>().is_err());
}

#[test]
fn export_options_defaults() {
    let options = ExportOptions::default();
    assert!(!options.generic_rids);
    assert!(options.uppercase_callsigns);
    assert!(OutputKind::ALL.iter().all(|kind| options.wants(*kind)));
    assert_eq!(options.list_name, "NSWGRN");
    assert_eq!(options.network_id, "BEE00.2D1");
}

#[test]
fn export_options_partial_toml_uses_defaults() {
    let options: ExportOptions = toml::from_str(
        r#"
generic_rids = true
outputs = ["table"]
"#,
    )
    .expect("parse options");
    assert!(options.generic_rids);
    assert!(options.uppercase_callsigns);
    assert!(options.wants(OutputKind::Table));
    assert!(!options.wants(OutputKind::TextAlias));
    assert_eq!(options.list_name, "NSWGRN");
}
