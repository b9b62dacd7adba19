//! Record transformation for trunking system exports.
//!
//! - **normalization**: field cleaning, date slicing, hex parsing, alias text
//! - **talkgroup**: `Group` record → table row + both alias lines
//! - **radio**: `User` record → table row + playlist alias, or a skip reason

pub mod normalization;
pub mod radio;
pub mod talkgroup;

pub use radio::{RadioExport, RadioOutcome, transform_radio};
pub use talkgroup::{TalkGroupExport, transform_talkgroup};

/// Attributes holding the short user/brief tag, in lookup order.
pub(crate) const TAG_ATTRS: &[&str] = &[trunk_model::attr::BRIEF, trunk_model::attr::TAG];
