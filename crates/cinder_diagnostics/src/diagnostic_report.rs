use cinder_type::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Info,
  Warning,
  Error,
  Hint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
  pub span: Span,
  pub message: String,
}

/// Suggested source edit: replace `span` with `replacement`.
/// An empty `span` is a pure insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct FixIt {
  pub span: Span,
  pub replacement: String,
}

impl FixIt {
  pub fn insertion(
    at: Span,
    text: &str,
  ) -> Self {
    Self {
      span: at,
      replacement: text.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
  pub severity: Severity,
  pub message: String,
  pub error_code: String,
  pub primary_span: Span,
  pub labels: Vec<Label>,
  pub notes: Vec<String>,
  pub fixits: Vec<FixIt>,
}

impl Diagnostic {
  pub fn new(
    severity: Severity,
    message: String,
    error_code: String,
    primary_span: Span,
  ) -> Self {
    Self {
      severity,
      message,
      error_code,
      primary_span,
      labels: Vec::new(),
      notes: Vec::new(),
      fixits: Vec::new(),
    }
  }

  pub fn with_label(
    mut self,
    span: Span,
    message: String,
  ) -> Self {
    self.labels.push(Label { span, message });
    self
  }

  pub fn with_note(
    mut self,
    note: String,
  ) -> Self {
    self.notes.push(note);
    self
  }

  pub fn with_fixit(
    mut self,
    fixit: FixIt,
  ) -> Self {
    self.fixits.push(fixit);
    self
  }

  pub fn is_error(&self) -> bool {
    self.severity == Severity::Error
  }
}
