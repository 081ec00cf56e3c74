use std::fmt;

use cinder_type::span::Span;

use super::diagnostic_report::{Diagnostic, FixIt, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticMessage {
  // #region Attribute dispatch
  UnknownAttributeIgnored {
    name: String,
    span: Span,
  },
  UnsupportedDeclspecAttribute {
    name: String,
    span: Span,
  },
  AttributeInvalidOnStatement {
    name: String,
    span: Span,
    statement: Span,
  },
  // #endregion Attribute dispatch
  // #region Fallthrough
  FallthroughWrongTarget {
    span: Span,
    statement: Span,
    /// Where a `;` would turn the annotated label into a null statement.
    insert_semi: Option<Span>,
  },
  FallthroughOutsideSwitch {
    span: Span,
  },
  // #endregion Fallthrough
  // #region Loop hints
  LoopHintPrecedesNonLoop {
    span: Span,
  },
  LoopHintInvalidKeyword {
    span: Span,
  },
  LoopHintInvalidValue {
    span: Span,
  },
  LoopHintDuplicate {
    option: String,
    previous: String,
    current: String,
    span: Span,
  },
  LoopHintIncompatible {
    state_option: String,
    state_value: String,
    numeric_option: String,
    numeric_value: String,
    span: Span,
  },
  // #endregion Loop hints
}

impl fmt::Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::UnknownAttributeIgnored { name, .. } => {
        write!(f, "unknown attribute '{}' ignored", name)
      },
      DiagnosticMessage::UnsupportedDeclspecAttribute { name, .. } => {
        write!(f, "__declspec attribute '{}' is not supported", name)
      },
      DiagnosticMessage::AttributeInvalidOnStatement { name, .. } => {
        write!(f, "'{}' attribute cannot be applied to a statement", name)
      },
      DiagnosticMessage::FallthroughWrongTarget { .. } => {
        write!(f, "fallthrough annotation does not directly precede switch label")
      },
      DiagnosticMessage::FallthroughOutsideSwitch { .. } => {
        write!(f, "fallthrough annotation is outside switch statement")
      },
      DiagnosticMessage::LoopHintPrecedesNonLoop { .. } => {
        write!(f, "expected a for, while, or do-while loop to follow '#pragma clang loop'")
      },
      DiagnosticMessage::LoopHintInvalidKeyword { .. } => {
        write!(f, "invalid argument; expected 'enable' or 'disable'")
      },
      DiagnosticMessage::LoopHintInvalidValue { .. } => {
        write!(f, "invalid argument; expected a positive integer value")
      },
      DiagnosticMessage::LoopHintDuplicate {
        option,
        previous,
        current,
        ..
      } => {
        write!(
          f,
          "duplicate directives '{}({})' and '{}({})'",
          option, previous, option, current
        )
      },
      DiagnosticMessage::LoopHintIncompatible {
        state_option,
        state_value,
        numeric_option,
        numeric_value,
        ..
      } => {
        write!(
          f,
          "incompatible directives '{}({})' and '{}({})'",
          state_option, state_value, numeric_option, numeric_value
        )
      },
    }
  }
}

impl DiagnosticMessage {
  pub fn primary_span(&self) -> Span {
    match self {
      DiagnosticMessage::UnknownAttributeIgnored { span, .. }
      | DiagnosticMessage::UnsupportedDeclspecAttribute { span, .. }
      | DiagnosticMessage::AttributeInvalidOnStatement { span, .. }
      | DiagnosticMessage::FallthroughWrongTarget { span, .. }
      | DiagnosticMessage::FallthroughOutsideSwitch { span }
      | DiagnosticMessage::LoopHintPrecedesNonLoop { span }
      | DiagnosticMessage::LoopHintInvalidKeyword { span }
      | DiagnosticMessage::LoopHintInvalidValue { span }
      | DiagnosticMessage::LoopHintDuplicate { span, .. }
      | DiagnosticMessage::LoopHintIncompatible { span, .. } => span.clone(),
    }
  }

  pub fn code(&self) -> String {
    match self {
      DiagnosticMessage::UnknownAttributeIgnored { .. } => "S0001",
      DiagnosticMessage::UnsupportedDeclspecAttribute { .. } => "S0002",
      DiagnosticMessage::AttributeInvalidOnStatement { .. } => "S0003",
      DiagnosticMessage::FallthroughWrongTarget { .. } => "S0004",
      DiagnosticMessage::FallthroughOutsideSwitch { .. } => "S0005",
      DiagnosticMessage::LoopHintPrecedesNonLoop { .. } => "S0006",
      DiagnosticMessage::LoopHintInvalidKeyword { .. } => "S0007",
      DiagnosticMessage::LoopHintInvalidValue { .. } => "S0008",
      DiagnosticMessage::LoopHintDuplicate { .. } => "S0009",
      DiagnosticMessage::LoopHintIncompatible { .. } => "S0010",
    }
    .to_string()
  }

  fn level(&self) -> Severity {
    match self {
      DiagnosticMessage::UnknownAttributeIgnored { .. } | DiagnosticMessage::UnsupportedDeclspecAttribute { .. } => {
        Severity::Warning
      },
      _ => Severity::Error,
    }
  }

  fn secondary_labels(&self) -> Vec<(Span, String)> {
    match self {
      DiagnosticMessage::AttributeInvalidOnStatement { statement, .. }
      | DiagnosticMessage::FallthroughWrongTarget { statement, .. } => {
        vec![(statement.clone(), "statement begins here".to_string())]
      },
      _ => vec![],
    }
  }

  fn notes_and_fixits(&self) -> (Vec<String>, Vec<FixIt>) {
    match self {
      DiagnosticMessage::FallthroughWrongTarget {
        insert_semi: Some(at), ..
      } => (
        vec!["did you forget ';'?".to_string()],
        vec![FixIt::insertion(at.clone(), ";")],
      ),
      _ => (vec![], vec![]),
    }
  }

  pub fn report(&self) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(self.level(), self.to_string(), self.code(), self.primary_span());

    for (span, message) in self.secondary_labels() {
      diagnostic = diagnostic.with_label(span, message);
    }

    let (notes, fixits) = self.notes_and_fixits();
    for note in notes {
      diagnostic = diagnostic.with_note(note);
    }
    for fixit in fixits {
      diagnostic = diagnostic.with_fixit(fixit);
    }

    diagnostic
  }
}
