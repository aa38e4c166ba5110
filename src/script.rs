use once_cell::sync::Lazy;
use regex::Regex;

// Han script plus the two separators allowed inside a Chinese text unit.
static CHINESE_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{Han} \-]*$").unwrap());
static HAN_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Han}").unwrap());

/// Returns `true` if every character of `text` is a Han character, a space or
/// a hyphen. The empty string is Chinese text.
pub fn is_chinese_text(text: &str) -> bool {
    CHINESE_TEXT_REGEX.is_match(text)
}

/// Splits `text` into its Han characters, one `String` each, in order.
/// Anything outside the Han script is dropped.
pub fn extract_characters(text: &str) -> Vec<String> {
    HAN_CHAR_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect()
}
