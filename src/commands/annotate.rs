//! Annotate command implementation
//!
//! Reads the compose file, appends `U<HEX> # <NAME>` to every entry whose
//! output is a single character, and writes the file back in place.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::{self, Annotation, Rewrite};
use crate::error::AnnotateError;

/// A line the annotator rewrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number
    pub line_number: usize,
    /// Original line, including its terminator
    pub before: String,
    /// Rewritten line, terminated with `\n`
    pub after: String,
}

/// Result of annotating a whole text
#[derive(Debug, Default)]
pub struct Annotated {
    /// The transformed text
    pub text: String,

    /// Number of lines read (and written)
    pub total_lines: usize,

    /// Entries left alone because they already carry their annotation
    pub already_annotated: usize,

    /// Lines that were rewritten, in file order
    pub changes: Vec<LineChange>,
}

/// Summary of one run over a compose file
#[derive(Debug)]
pub struct AnnotateReport {
    /// File that was processed
    pub path: PathBuf,

    /// Number of lines in the file
    pub total_lines: usize,

    /// Entries left alone because they already carry their annotation
    pub already_annotated: usize,

    /// Lines that were (or, in a dry run, would be) rewritten
    pub changes: Vec<LineChange>,

    /// Whether the file was written back
    pub written: bool,
}

/// Annotate every line of `input`
///
/// Output has exactly as many lines as the input. Lines that do not match
/// are copied byte for byte.
pub fn annotate_text(input: &str) -> Annotated {
    let mut out = Annotated {
        text: String::with_capacity(input.len()),
        ..Default::default()
    };

    for (index, line) in input.split_inclusive('\n').enumerate() {
        out.total_lines += 1;

        let Some(m) = compose::classify(line) else {
            out.text.push_str(line);
            continue;
        };

        let annotation = Annotation::for_char(m.ch);
        match compose::rewrite_line(&m, &annotation) {
            Rewrite::Keep => {
                log::debug!("line {}: {} already annotated", index + 1, annotation.label);
                out.already_annotated += 1;
                out.text.push_str(line);
            }
            Rewrite::Annotated(new_line) => {
                log::debug!(
                    "line {}: adding {} # {}",
                    index + 1,
                    annotation.label,
                    annotation.name
                );
                out.text.push_str(&new_line);
                out.changes.push(LineChange {
                    line_number: index + 1,
                    before: line.to_string(),
                    after: new_line,
                });
            }
        }
    }

    out
}

/// Read the compose file as UTF-8
pub fn read_compose_file(path: &Path) -> Result<String, AnnotateError> {
    let bytes = fs::read(path).map_err(|source| AnnotateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| AnnotateError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the compose file
pub fn write_compose_file(path: &Path, content: &str) -> Result<(), AnnotateError> {
    fs::write(path, content).map_err(|source| AnnotateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Annotate a compose file in place
///
/// With `dry_run` the file is read and transformed but never written.
pub fn annotate_file(path: &Path, dry_run: bool) -> Result<AnnotateReport, AnnotateError> {
    let input = read_compose_file(path)?;
    let annotated = annotate_text(&input);

    log::info!(
        "{}: {} line(s), {} to annotate, {} already annotated",
        path.display(),
        annotated.total_lines,
        annotated.changes.len(),
        annotated.already_annotated
    );

    if !dry_run {
        write_compose_file(path, &annotated.text)?;
    }

    Ok(AnnotateReport {
        path: path.to_path_buf(),
        total_lines: annotated.total_lines,
        already_annotated: annotated.already_annotated,
        changes: annotated.changes,
        written: !dry_run,
    })
}

/// Execute the annotate command
pub fn execute(path: &Path, dry_run: bool) -> Result<()> {
    let report = annotate_file(path, dry_run)
        .with_context(|| format!("Failed to annotate {}", path.display()))?;

    if dry_run {
        for change in &report.changes {
            println!("{}", format!("line {}:", change.line_number).dimmed());
            println!("  {} {}", "-".red(), change.before.trim_end().red());
            println!("  {} {}", "+".green(), change.after.trim_end().green());
        }
        println!();
        println!(
            "{} line(s) would be annotated in {} ({} already annotated)",
            report.changes.len(),
            report.path.display(),
            report.already_annotated
        );
        println!("{}", "(DRY-RUN) No changes made.".blue());
        return Ok(());
    }

    println!(
        "Annotated {} of {} line(s) ({} already annotated)",
        report.changes.len(),
        report.total_lines,
        report.already_annotated
    );
    println!("{} {}", "Updated".green(), report.path.display());

    Ok(())
}
