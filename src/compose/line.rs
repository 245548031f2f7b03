//! Line classification
//!
//! An XCompose entry binds a key sequence to its output, e.g.
//!
//! ```text
//! <Multi_key> <a> <e> : "æ" ae
//! ```
//!
//! Only entries whose quoted output is a single code point are annotated.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix up to and including the colon and any whitespace, one quoted
/// character, then the rest of the line.
static ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.*:\s*)"(.)"(.*)$"#).expect("entry pattern is valid"));

/// An annotatable line split into its three parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Everything before the opening quote
    pub prefix: &'a str,
    /// The quoted character
    pub ch: char,
    /// Everything after the closing quote, without the line terminator
    pub suffix: &'a str,
}

/// Split a line into its body and its terminator (`\n`, `\r\n`, or empty)
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}

/// Classify one line
///
/// Returns `None` for pass-through lines. The line may carry its terminator.
pub fn classify(line: &str) -> Option<LineMatch<'_>> {
    let (body, _) = split_terminator(line);
    let caps = ENTRY_PATTERN.captures(body)?;

    let quoted = caps.get(2)?.as_str();
    let mut chars = quoted.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    Some(LineMatch {
        prefix: caps.get(1)?.as_str(),
        ch,
        suffix: caps.get(3)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_entry() {
        let m = classify("key: \"A\"\n").unwrap();
        assert_eq!(m.prefix, "key: ");
        assert_eq!(m.ch, 'A');
        assert_eq!(m.suffix, "");
    }

    #[test]
    fn test_xcompose_entry_with_keysym() {
        let m = classify("<Multi_key> <a> <e> : \"æ\" ae\n").unwrap();
        assert_eq!(m.prefix, "<Multi_key> <a> <e> : ");
        assert_eq!(m.ch, 'æ');
        assert_eq!(m.suffix, " ae");
    }

    #[test]
    fn test_no_whitespace_after_colon() {
        let m = classify("key:\"x\"").unwrap();
        assert_eq!(m.prefix, "key:");
        assert_eq!(m.ch, 'x');
    }

    #[test]
    fn test_multi_char_string_not_matched() {
        assert_eq!(classify("key: \"ab\"\n"), None);
        assert_eq!(classify("key: \"\"\n"), None);
    }

    #[test]
    fn test_non_entry_lines_not_matched() {
        assert_eq!(classify("# just a comment\n"), None);
        assert_eq!(classify("include \"%L\"\n"), None);
        assert_eq!(classify("\n"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_astral_character() {
        let m = classify("<Multi_key> <s> <m> : \"😀\"\n").unwrap();
        assert_eq!(m.ch, '😀');
    }

    #[test]
    fn test_quote_character_itself() {
        let m = classify("<Multi_key> <q> : \"\"\"\n").unwrap();
        assert_eq!(m.ch, '"');
    }

    #[test]
    fn test_last_colon_quote_site_wins() {
        // The prefix is greedy
        let m = classify("a: \"x\" b: \"y\" tail").unwrap();
        assert_eq!(m.prefix, "a: \"x\" b: ");
        assert_eq!(m.ch, 'y');
        assert_eq!(m.suffix, " tail");
    }

    #[test]
    fn test_crlf_excluded_from_suffix() {
        let m = classify("key: \"A\" note\r\n").unwrap();
        assert_eq!(m.suffix, " note");
    }

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("abc\n"), ("abc", "\n"));
        assert_eq!(split_terminator("abc\r\n"), ("abc", "\r\n"));
        assert_eq!(split_terminator("abc"), ("abc", ""));
    }
}
