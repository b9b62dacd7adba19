//! Numeric normalization utilities.

/// Parse a base-16 string and return its decimal form.
///
/// Accepts surrounding whitespace, a leading sign, a `0x` prefix and single
/// underscores between digit groups. Magnitudes up to 128 bits are supported.
/// Anything else gives an empty string instead of an error.
pub fn hex_to_decimal(value: &str) -> String {
    let trimmed = value.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => unsigned,
    };

    let mut groups = digits.split('_');
    if groups.any(|group| group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit())) {
        return String::new();
    }
    let joined: String = digits.chars().filter(|&c| c != '_').collect();
    match u128::from_str_radix(&joined, 16) {
        Ok(0) => "0".to_string(),
        Ok(magnitude) if negative => format!("-{magnitude}"),
        Ok(magnitude) => magnitude.to_string(),
        Err(_) => String::new(),
    }
}
