use std::fmt;

use crate::span::Span;

/// Loop-hint family a directive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoopHintCategory {
  Vectorize,
  Interleave,
  Unroll,
}

impl LoopHintCategory {
  pub const ALL: [LoopHintCategory; 3] = [
    LoopHintCategory::Vectorize,
    LoopHintCategory::Interleave,
    LoopHintCategory::Unroll,
  ];

  pub fn index(self) -> usize {
    match self {
      LoopHintCategory::Vectorize => 0,
      LoopHintCategory::Interleave => 1,
      LoopHintCategory::Unroll => 2,
    }
  }

  /// Spelling of the enable/disable form, e.g. `unroll`.
  pub fn state_option_name(self) -> &'static str {
    match self {
      LoopHintCategory::Vectorize => "vectorize",
      LoopHintCategory::Interleave => "interleave",
      LoopHintCategory::Unroll => "unroll",
    }
  }

  /// Spelling of the numeric form, e.g. `unroll_count`.
  pub fn numeric_option_name(self) -> &'static str {
    match self {
      LoopHintCategory::Vectorize => "vectorize_width",
      LoopHintCategory::Interleave => "interleave_count",
      LoopHintCategory::Unroll => "unroll_count",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopHintMode {
  Enable,
  Disable,
  Numeric,
}

impl LoopHintMode {
  pub fn is_numeric(self) -> bool {
    matches!(self, LoopHintMode::Numeric)
  }
}

/// Validated `#pragma clang loop` directive.
///
/// `value` is the constant for `Numeric`, and 1/0 for `Enable`/`Disable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoopHintAttr {
  pub category: LoopHintCategory,
  pub mode: LoopHintMode,
  pub value: i64,
  pub span: Span,
}

impl LoopHintAttr {
  pub fn new(
    category: LoopHintCategory,
    mode: LoopHintMode,
    value: i64,
    span: Span,
  ) -> Self {
    debug_assert!(
      !mode.is_numeric() || value >= 1,
      "numeric loop hint built with non-positive value {}",
      value
    );
    Self {
      category,
      mode,
      value,
      span,
    }
  }

  pub fn option_name(&self) -> &'static str {
    if self.mode.is_numeric() {
      self.category.numeric_option_name()
    } else {
      self.category.state_option_name()
    }
  }

  pub fn value_name(&self) -> String {
    match self.mode {
      LoopHintMode::Enable => "enable".to_string(),
      LoopHintMode::Disable => "disable".to_string(),
      LoopHintMode::Numeric => self.value.to_string(),
    }
  }
}

impl fmt::Display for LoopHintAttr {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "{}({})", self.option_name(), self.value_name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FallThroughAttr {
  pub span: Span,
}

/// Attribute that survived statement attribute validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StmtAttr {
  FallThrough(FallThroughAttr),
  LoopHint(LoopHintAttr),
}

impl StmtAttr {
  pub fn span(&self) -> &Span {
    match self {
      StmtAttr::FallThrough(attr) => &attr.span,
      StmtAttr::LoopHint(attr) => &attr.span,
    }
  }

  pub fn as_loop_hint(&self) -> Option<&LoopHintAttr> {
    match self {
      StmtAttr::LoopHint(hint) => Some(hint),
      _ => None,
    }
  }
}

impl fmt::Display for StmtAttr {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      StmtAttr::FallThrough(_) => write!(f, "fallthrough"),
      StmtAttr::LoopHint(hint) => write!(f, "loop {}", hint),
    }
  }
}
