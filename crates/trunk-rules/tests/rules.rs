//! Property tests for range classification.

use proptest::prelude::*;
use trunk_model::RangeRule;
use trunk_rules::{ExportConfig, RuleSet, parse_id};

fn default_rules() -> RuleSet {
    ExportConfig::embedded().expect("embedded config").rules
}

#[test]
fn default_exclusions_cover_known_encrypted_users() {
    let rules = default_rules();
    assert!(rules.is_excluded(0));
    assert!(rules.is_excluded(9999));
    assert!(!rules.is_excluded(10000));
    assert!(rules.is_excluded(2175500));
    assert!(rules.is_excluded(9025000));
    assert!(!rules.is_excluded(2005123));
}

#[test]
fn default_generic_labels() {
    let rules = default_rules();
    assert_eq!(rules.generic_label_for("2005123").as_deref(), Some("FRNSW.05123"));
    assert_eq!(rules.generic_label_for("2130042").as_deref(), Some("YTH JSTCE.042"));
    assert_eq!(rules.generic_label_for("2380123").as_deref(), Some("RMS.Roads.0123"));
    assert_eq!(rules.generic_label_for("2040000"), None);
}

#[test]
fn parse_id_fails_soft() {
    assert_eq!(parse_id(" 2005123 "), Some(2005123));
    assert_eq!(parse_id("-5"), None);
    assert_eq!(parse_id("0x10"), None);
    assert_eq!(parse_id(""), None);
}

proptest! {
    #[test]
    fn excluded_iff_inside_a_range(id in 0u64..10_000_000) {
        let rules = default_rules();
        let inside = rules.exclusions().iter().any(|rule| rule.range_start <= id && id <= rule.range_end);
        prop_assert_eq!(rules.is_excluded(id), inside);
        prop_assert_eq!(rules.is_excluded_id(&id.to_string()), inside);
    }

    #[test]
    fn negative_ids_are_never_excluded(id in 1i64..10_000_000) {
        let rules = RuleSet::new(vec![RangeRule::new(0, u64::MAX, "all")], vec![]).unwrap();
        prop_assert!(!rules.is_excluded_id(&(-id).to_string()));
    }

    #[test]
    fn generic_labels_end_with_id_digits(id in 2_000_000u64..2_500_000) {
        let rules = default_rules();
        let text = id.to_string();
        if let Some(label) = rules.generic_label_for(&text) {
            let rule = rules.generic_labels().iter().find(|rule| rule.contains(id)).unwrap();
            let digits = rule.label_digits.unwrap();
            prop_assert!(label.starts_with(&rule.label));
            prop_assert!(label.ends_with(&text[text.len() - digits..]));
        }
    }
}
