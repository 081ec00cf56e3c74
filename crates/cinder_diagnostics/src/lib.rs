pub mod diagnostic_report;
pub mod message;

use std::fmt::Write;

use cinder_type::file::SourceMap;
use colored::*;
use diagnostic_report::{Diagnostic, Severity};

pub fn render(
  diag: &Diagnostic,
  sm: &SourceMap,
) {
  print!("{}", render_to_string(diag, sm));
}

pub fn render_batch(
  diagnostics: &[Diagnostic],
  sm: &SourceMap,
) {
  for diag in diagnostics {
    render(diag, sm);
  }
}

pub fn render_to_string(
  diag: &Diagnostic,
  sm: &SourceMap,
) -> String {
  let mut out = String::new();

  write_header(&mut out, diag);
  write_body(&mut out, diag, sm);

  for note in &diag.notes {
    let _ = writeln!(out, "  {} {}", "note:".cyan().bold(), note);
  }

  for fixit in &diag.fixits {
    let (line, col) = sm.line_col(&fixit.span.file, fixit.span.start);
    let _ = writeln!(
      out,
      "  {} insert '{}' at {}:{}",
      "fix-it:".green().bold(),
      fixit.replacement,
      line,
      col
    );
  }

  out.push('\n');
  out
}

/// Count of diagnostics with the given severity.
pub fn count_severity(
  diagnostics: &[Diagnostic],
  severity: Severity,
) -> usize {
  diagnostics.iter().filter(|d| d.severity == severity).count()
}

fn write_header(
  out: &mut String,
  diag: &Diagnostic,
) {
  let message = diag.message.bold();
  let code = diag.error_code.bold();

  let _ = match diag.severity {
    Severity::Info => writeln!(out, "{}[{}]: {}", "Info".blue().bold(), code.blue(), message),
    Severity::Warning => writeln!(out, "{}[{}]: {}", "Warning".yellow().bold(), code.yellow(), message),
    Severity::Error => writeln!(out, "{}[{}]: {}", "Error".red().bold(), code.red().bold(), message),
    Severity::Hint => writeln!(out, "{}[{}]: {}", "Hint".cyan().bold(), code.cyan(), message),
  };
}

fn write_body(
  out: &mut String,
  diag: &Diagnostic,
  sm: &SourceMap,
) {
  let file = sm.get(&diag.primary_span.file);
  let (line, col) = sm.line_col(&diag.primary_span.file, diag.primary_span.start);
  let (end_line, end_col) = sm.line_col(&diag.primary_span.file, diag.primary_span.end);

  let _ = writeln!(
    out,
    "{:2}{} {}:{}:{}",
    "",
    "-->".blue().bold(),
    file.path.display().to_string().bold(),
    line.to_string().bold(),
    col.to_string().bold(),
  );

  let pipe = "|".blue().bold();

  if let Some(text) = file.line_text(line) {
    let _ = writeln!(out, "{:3}{:3}", "", pipe);
    let _ = writeln!(out, "{:3}{:3}{}", line.to_string().blue().bold(), pipe, text);

    let caret_len = if line == end_line {
      end_col.saturating_sub(col).max(1) as usize
    } else {
      text.chars().count().saturating_sub(col as usize - 1).max(1)
    };

    let caret = "^".repeat(caret_len).red().bold();
    let _ = writeln!(out, "{:3}{:3}{}{}", "", pipe, " ".repeat(col as usize - 1), caret);
  }

  for label in &diag.labels {
    let (label_line, label_col) = sm.line_col(&label.span.file, label.span.start);
    let _ = writeln!(out, "  {} {}", "label:".yellow().bold(), label.message);

    if let Some(text) = sm.get(&label.span.file).line_text(label_line) {
      let _ = writeln!(out, "{:3}{:3}{}", label_line.to_string().blue().bold(), pipe, text);
      let _ = writeln!(
        out,
        "{:3}{:3}{}{}",
        "",
        pipe,
        " ".repeat(label_col as usize - 1),
        "^".yellow().bold()
      );
    }
  }
}
