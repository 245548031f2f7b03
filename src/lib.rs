//! xcompose-annotate library
//!
//! Core functionality for annotating XCompose entries with the codepoint
//! and Unicode name of the character they produce.

pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
