#![deny(unsafe_code)]

use trunk_model::RangeRule;

use crate::error::{RuleSetKind, RulesError};

/// Parse a radio or talkgroup identifier for range lookups.
///
/// Returns `None` for empty, negative, or non-numeric input so callers treat
/// the record as outside every range.
pub fn parse_id(id: &str) -> Option<u64> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

/// Validated exclusion and generic-label tables.
///
/// Ranges within each table are pairwise disjoint, so lookups return the
/// same answer regardless of rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    exclusions: Vec<RangeRule>,
    generic_labels: Vec<RangeRule>,
}

impl RuleSet {
    pub fn new(
        exclusions: Vec<RangeRule>,
        generic_labels: Vec<RangeRule>,
    ) -> Result<Self, RulesError> {
        validate_rules(RuleSetKind::Exclusion, &exclusions)?;
        validate_rules(RuleSetKind::GenericLabel, &generic_labels)?;
        Ok(Self {
            exclusions,
            generic_labels,
        })
    }

    /// A rule set that excludes nothing and labels nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn exclusions(&self) -> &[RangeRule] {
        &self.exclusions
    }

    pub fn generic_labels(&self) -> &[RangeRule] {
        &self.generic_labels
    }

    /// The exclusion rule covering `id`, if any.
    pub fn exclusion_for(&self, id: u64) -> Option<&RangeRule> {
        self.exclusions.iter().find(|rule| rule.contains(id))
    }

    pub fn is_excluded(&self, id: u64) -> bool {
        self.exclusion_for(id).is_some()
    }

    /// Like [`RuleSet::is_excluded`], for a raw identifier string.
    pub fn is_excluded_id(&self, id: &str) -> bool {
        parse_id(id).is_some_and(|value| self.is_excluded(value))
    }

    /// Synthesize `LABEL.<last digits>` for an unlabelled radio ID.
    ///
    /// `None` when the ID does not parse, no rule covers it, or it has fewer
    /// characters than the rule's `label_digits`.
    pub fn generic_label_for(&self, id: &str) -> Option<String> {
        let trimmed = id.trim();
        let value = parse_id(trimmed)?;
        let rule = self
            .generic_labels
            .iter()
            .find(|rule| rule.contains(value))?;
        let digits = rule.label_digits?;
        let start = trimmed.len().checked_sub(digits)?;
        Some(format!("{}.{}", rule.label, &trimmed[start..]))
    }
}

fn validate_rules(set: RuleSetKind, rules: &[RangeRule]) -> Result<(), RulesError> {
    for rule in rules {
        if rule.range_start > rule.range_end {
            return Err(RulesError::InvertedRange {
                set,
                label: rule.label.clone(),
                start: rule.range_start,
                end: rule.range_end,
            });
        }
        match (set, rule.label_digits) {
            (RuleSetKind::GenericLabel, None) => {
                return Err(RulesError::MissingLabelDigits {
                    label: rule.label.clone(),
                });
            }
            (RuleSetKind::Exclusion, Some(_)) => {
                return Err(RulesError::UnexpectedLabelDigits {
                    label: rule.label.clone(),
                });
            }
            _ => {}
        }
    }

    let mut ordered: Vec<&RangeRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| (rule.range_start, rule.range_end));
    for pair in ordered.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if first.overlaps(second) {
            return Err(RulesError::Overlap {
                set,
                first: first.label.clone(),
                second: second.label.clone(),
                start: second.range_start,
                end: first.range_end.min(second.range_end),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frnsw() -> RangeRule {
        RangeRule::new(2000000, 2009999, "FRNSW").with_label_digits(5)
    }

    #[test]
    fn generic_label_uses_trailing_digits() {
        let rules = RuleSet::new(vec![], vec![frnsw()]).unwrap();
        assert_eq!(
            rules.generic_label_for("2005123").as_deref(),
            Some("FRNSW.05123")
        );
    }

    #[test]
    fn generic_label_outside_ranges_is_none() {
        let rules = RuleSet::new(vec![], vec![frnsw()]).unwrap();
        assert_eq!(rules.generic_label_for("2010000"), None);
        assert_eq!(rules.generic_label_for("abc"), None);
        assert_eq!(rules.generic_label_for(""), None);
    }

    #[test]
    fn generic_label_shorter_than_digits_is_none() {
        let short = RangeRule::new(0, 99, "SHORT").with_label_digits(5);
        let rules = RuleSet::new(vec![], vec![short]).unwrap();
        assert_eq!(rules.generic_label_for("42"), None);
    }

    #[test]
    fn exclusion_bounds_are_inclusive() {
        let rules = RuleSet::new(vec![RangeRule::new(210000, 799999, "encrypted user")], vec![])
            .unwrap();
        assert!(rules.is_excluded(210000));
        assert!(rules.is_excluded(799999));
        assert!(!rules.is_excluded(209999));
        assert!(!rules.is_excluded(800000));
        assert_eq!(
            rules.exclusion_for(500000).map(|rule| rule.label.as_str()),
            Some("encrypted user")
        );
    }

    #[test]
    fn unparsable_ids_are_never_excluded() {
        let rules = RuleSet::new(vec![RangeRule::new(0, 9999, "noise")], vec![]).unwrap();
        assert!(rules.is_excluded_id("42"));
        assert!(!rules.is_excluded_id("-1"));
        assert!(!rules.is_excluded_id("1A"));
        assert!(!rules.is_excluded_id(""));
    }

    #[test]
    fn overlapping_rules_are_rejected() {
        let err = RuleSet::new(
            vec![
                RangeRule::new(0, 9999, "noise"),
                RangeRule::new(5000, 20000, "encrypted user"),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RulesError::Overlap {
                set: RuleSetKind::Exclusion,
                start: 5000,
                end: 9999,
                ..
            }
        ));
    }

    #[test]
    fn adjacent_rules_are_accepted() {
        let rules = RuleSet::new(
            vec![
                RangeRule::new(2659500, 2659599, "encrypted user"),
                RangeRule::new(2659000, 2659499, "encrypted user"),
            ],
            vec![],
        );
        assert!(rules.is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = RuleSet::new(vec![RangeRule::new(10, 1, "bad")], vec![]).unwrap_err();
        assert!(matches!(err, RulesError::InvertedRange { .. }));
    }

    #[test]
    fn label_digits_required_only_for_generic_rules() {
        let err = RuleSet::new(vec![], vec![RangeRule::new(1, 2, "RFS")]).unwrap_err();
        assert!(matches!(err, RulesError::MissingLabelDigits { .. }));

        let err = RuleSet::new(vec![frnsw()], vec![]).unwrap_err();
        assert!(matches!(err, RulesError::UnexpectedLabelDigits { .. }));
    }
}
