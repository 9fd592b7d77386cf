//! Thousands grouping for decimal text.

/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = ',';

/// Groups the integer digits of `text` in threes.
///
/// A leading sign is preserved and the fractional part (everything after
/// the first `.`) is left untouched.
///
/// # Examples
///
/// ```
/// use unitscale::math::group_thousands;
///
/// assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
/// assert_eq!(group_thousands("-1000"), "-1,000");
/// assert_eq!(group_thousands("0.123456"), "0.123456");
/// ```
#[must_use]
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    let lead = int_part.len() % 3;
    for (i, ch) in int_part.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
