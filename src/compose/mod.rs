//! XCompose line handling

pub mod codepoint;
pub mod line;
pub mod rewrite;

pub use codepoint::Annotation;
pub use line::{classify, LineMatch};
pub use rewrite::{rewrite_line, Rewrite};
