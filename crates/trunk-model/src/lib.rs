pub mod alias;
pub mod error;
pub mod options;
pub mod record;
pub mod rows;
pub mod rules;

pub use alias::{AliasIdType, MarkupAlias, TextAlias};
pub use error::ModelError;
pub use options::{ExportOptions, OutputKind};
pub use record::{RawRecord, RecordKind, attr};
pub use rows::{RadioRow, TableRow, TalkGroupRow};
pub use rules::RangeRule;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kind_from_element_name() {
        assert_eq!(RecordKind::from_element("Group"), Some(RecordKind::TalkGroup));
        assert_eq!(RecordKind::from_element("User"), Some(RecordKind::RadioUnit));
        assert_eq!(RecordKind::from_element("Site"), None);
        assert_eq!(RecordKind::from_element("group"), None);
    }

    #[test]
    fn options_serialize() {
        let options = ExportOptions::default();
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ExportOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }
}
