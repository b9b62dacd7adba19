//! Text field normalization.

/// Absent values become the empty string; present values pass through.
pub fn clean(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}

/// Upper-case a present value; absent stays absent.
pub fn upper_case(value: Option<&str>) -> Option<String> {
    value.map(str::to_uppercase)
}

/// Make free text safe for alias lists: trim, and replace `&` with `.`.
pub fn sanitize_alias_text(text: &str) -> String {
    text.trim().replace('&', ".")
}
