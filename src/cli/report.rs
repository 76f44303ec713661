//! Report formatting and printing utilities.
//!
//! Kept separate from the extraction core so keyscan can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::context::ProjectExtraction;
use crate::core::extract::{ExtractionRecord, SourceKind, VariableKnowledge};
use crate::issues::ParseErrorIssue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the widest source kind label, `templated-element`.
const SOURCE_KIND_WIDTH: usize = 17;

/// Print records grouped by file, followed by a summary line.
pub fn print_text(extraction: &ProjectExtraction) {
    print_text_to(extraction, &mut io::stdout().lock());
}

pub fn print_text_to<W: Write>(extraction: &ProjectExtraction, writer: &mut W) {
    for (file_path, records) in &extraction.records {
        if records.is_empty() {
            continue;
        }
        let _ = writeln!(writer, "{}", file_path.bold());
        print_records(records, writer);
        let _ = writeln!(writer);
    }

    print_summary(extraction, writer);
}

fn print_records<W: Write>(records: &[ExtractionRecord], writer: &mut W) {
    let positions: Vec<String> = records
        .iter()
        .map(|r| format!("{}:{}", r.line, r.col))
        .collect();
    let position_width = positions.iter().map(String::len).max().unwrap_or(0);
    let key_width = records
        .iter()
        .map(|r| r.i18n_key.width())
        .max()
        .unwrap_or(0);

    for (record, position) in records.iter().zip(&positions) {
        let kind = format!("{:<width$}", record.source.as_str(), width = SOURCE_KIND_WIDTH);
        let kind = match record.source {
            SourceKind::FunctionCall => kind.cyan(),
            SourceKind::TemplatedElement => kind.magenta(),
        };
        let padding = " ".repeat(key_width - record.i18n_key.width());
        let _ = writeln!(
            writer,
            "  {:<position_width$}  {}  {}{}  {}",
            position,
            kind,
            record.i18n_key,
            padding,
            format_variables(&record.variables),
        );
    }
}

fn format_variables(variables: &VariableKnowledge) -> String {
    match variables {
        VariableKnowledge::Known(names) => format!("[{}]", names.join(", ")),
        VariableKnowledge::Unknown => "?".yellow().to_string(),
    }
}

fn print_summary<W: Write>(extraction: &ProjectExtraction, writer: &mut W) {
    let record_count = extraction.record_count();
    let file_count = extraction.records.len();
    let error_count = extraction.parse_errors.len();

    let message = format!(
        "Extracted {} {} from {} source {}",
        record_count,
        if record_count == 1 { "key" } else { "keys" },
        file_count,
        if file_count == 1 { "file" } else { "files" }
    );

    if error_count == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} {} could not be parsed)",
            FAILURE_MARK.red(),
            message,
            error_count,
            if error_count == 1 { "file" } else { "files" }
        );
    }
}

/// Print records as a JSON object keyed by file path.
pub fn print_json(extraction: &ProjectExtraction) -> Result<()> {
    print_json_to(extraction, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(extraction: &ProjectExtraction, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(&extraction.records)
        .context("Failed to serialize extraction records")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print files that could not be parsed.
///
/// Each failure is listed only in verbose mode; otherwise a single summary
/// warning points at `-v`.
pub fn print_parse_errors(errors: &[ParseErrorIssue], verbose: bool) {
    print_parse_errors_to(errors, verbose, &mut io::stderr().lock());
}

pub fn print_parse_errors_to<W: Write>(errors: &[ParseErrorIssue], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }
    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            errors.len(),
            "-v".cyan()
        );
        return;
    }
    for issue in errors {
        let _ = writeln!(
            writer,
            "{} {} - {}",
            "warning:".bold().yellow(),
            issue.file_path,
            issue.error
        );
    }
}
