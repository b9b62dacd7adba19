//! Timestamp slicing for `YYYYMMDDhhmmss` values.
//!
//! The export's `last` attribute is sliced by position without validation.
//! Short values give truncated output rather than an error, and slicing is
//! by character so odd input never panics.

/// Length of a full `YYYYMMDDhhmmss` timestamp.
pub const TIMESTAMP_LEN: usize = 14;

/// `DD/MM/YYYY` from a timestamp; uses only the first eight characters.
pub fn format_date_compact(timestamp: Option<&str>) -> Option<String> {
    let ts = timestamp?;
    Some(format!(
        "{}/{}/{}",
        char_slice(ts, 6, 8),
        char_slice(ts, 4, 6),
        char_slice(ts, 0, 4)
    ))
}

/// `YYYY/MM/DD hh:mm` from a timestamp.
pub fn format_date_verbose(timestamp: Option<&str>) -> Option<String> {
    let ts = timestamp?;
    Some(format!(
        "{}/{}/{} {}:{}",
        char_slice(ts, 0, 4),
        char_slice(ts, 4, 6),
        char_slice(ts, 6, 8),
        char_slice(ts, 8, 10),
        char_slice(ts, 10, 12)
    ))
}

/// True when the value is 14 ASCII digits.
pub fn is_full_timestamp(value: &str) -> bool {
    value.len() == TIMESTAMP_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Characters `start..end`, clamped to the value like a sequence slice.
fn char_slice(value: &str, start: usize, end: usize) -> &str {
    let offset = |n: usize| value.char_indices().nth(n).map_or(value.len(), |(i, _)| i);
    let from = offset(start);
    let to = offset(end.max(start));
    &value[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_slice_clamps() {
        assert_eq!(char_slice("2020", 0, 4), "2020");
        assert_eq!(char_slice("2020", 2, 10), "20");
        assert_eq!(char_slice("2020", 6, 8), "");
        assert_eq!(char_slice("ab", 1, 0), "");
    }

    #[test]
    fn char_slice_respects_multibyte() {
        assert_eq!(char_slice("é2020", 1, 3), "20");
    }
}
