//! Normalization functions for single field values.
//!
//! - **text**: absent/empty handling, case folding, alias-safe text
//! - **datetime**: `YYYYMMDDhhmmss` timestamp slicing
//! - **numeric**: hex identifiers

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{format_date_compact, format_date_verbose, is_full_timestamp};
pub use numeric::hex_to_decimal;
pub use text::{clean, sanitize_alias_text, upper_case};
