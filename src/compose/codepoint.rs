//! Codepoint labels and Unicode names

/// Name used for code points the Unicode database does not name
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// The annotation appended to an entry: codepoint label and character name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// e.g. `U0041`
    pub label: String,
    /// e.g. `LATIN CAPITAL LETTER A`
    pub name: String,
}

impl Annotation {
    pub fn for_char(ch: char) -> Self {
        Self {
            label: codepoint_label(ch),
            name: char_name(ch),
        }
    }
}

/// Format a character as `U` plus at least four uppercase hex digits
pub fn codepoint_label(ch: char) -> String {
    format!("U{:04X}", ch as u32)
}

/// Look up the Unicode name of a character, falling back to `UNKNOWN`
pub fn char_name(ch: char) -> String {
    match unicode_names2::name(ch) {
        Some(name) => name.to_string(),
        None => UNKNOWN_NAME.to_string(),
    }
}
