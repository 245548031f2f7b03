//! Rewrite decision and formatting for annotatable lines

use super::{Annotation, LineMatch};

/// Outcome of rewriting a matched line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The suffix already mentions both label and name
    Keep,
    /// The new line, terminated with `\n`
    Annotated(String),
}

/// Decide whether a matched line needs an annotation and build it
///
/// The check for an existing annotation is a plain substring test on the
/// suffix: both the label and the name must appear somewhere in it.
pub fn rewrite_line(m: &LineMatch<'_>, annotation: &Annotation) -> Rewrite {
    if m.suffix.contains(&annotation.label) && m.suffix.contains(&annotation.name) {
        return Rewrite::Keep;
    }

    let suffix = if m.suffix.trim().is_empty() {
        ""
    } else {
        m.suffix
    };

    Rewrite::Annotated(format!(
        "{}\"{}\"   {} # {}{}\n",
        m.prefix, m.ch, annotation.label, annotation.name, suffix
    ))
}
