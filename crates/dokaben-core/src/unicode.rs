//! Character-level classification used by the composing path.

/// Letters go to the composing buffer; everything else is committed directly.
/// Includes katakana, the prolonged sound mark ー, and Latin letters.
///
/// Letter numbers (Ⅰ, 〇) are excluded. Combining marks with the
/// `Other_Alphabetic` property still count as letters.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Convert a host primary code to a char. Negative codes are control keys.
pub fn char_from_code(code: i32) -> Option<char> {
    u32::try_from(code).ok().and_then(char::from_u32)
}

/// The last character of a string, used for "text before cursor" queries.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Replace the last character of `s` with `c`. No-op on an empty string.
pub fn replace_last_char(s: &mut String, c: char) {
    if s.pop().is_some() {
        s.push(c);
    }
}
