use cinder_ast::attribute::ASTAttribute;
use cinder_config::DebugTrace;
use cinder_diagnostics::message::DiagnosticMessage;
use cinder_log::trace_dbg;
use cinder_type::attribute::{LoopHintAttr, LoopHintCategory, LoopHintMode, StmtAttr};

use crate::{AttrTarget, ConstEvalError, Sema};

/// Which argument a loop-hint option reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopHintValueKind {
  /// `enable` or `disable` keyword in the second slot.
  State,
  /// Integer constant expression in the third slot.
  Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopHintOption {
  pub name: &'static str,
  pub category: LoopHintCategory,
  pub kind: LoopHintValueKind,
}

pub static LOOP_HINT_OPTIONS: [LoopHintOption; 6] = [
  LoopHintOption {
    name: "vectorize",
    category: LoopHintCategory::Vectorize,
    kind: LoopHintValueKind::State,
  },
  LoopHintOption {
    name: "vectorize_width",
    category: LoopHintCategory::Vectorize,
    kind: LoopHintValueKind::Numeric,
  },
  LoopHintOption {
    name: "interleave",
    category: LoopHintCategory::Interleave,
    kind: LoopHintValueKind::State,
  },
  LoopHintOption {
    name: "interleave_count",
    category: LoopHintCategory::Interleave,
    kind: LoopHintValueKind::Numeric,
  },
  LoopHintOption {
    name: "unroll",
    category: LoopHintCategory::Unroll,
    kind: LoopHintValueKind::State,
  },
  LoopHintOption {
    name: "unroll_count",
    category: LoopHintCategory::Unroll,
    kind: LoopHintValueKind::Numeric,
  },
];

/// Resolve an option spelling.
///
/// Unrecognized names fall back to `vectorize` (enable/disable form)
/// instead of being reported.
// TODO: reject unknown option names here instead of treating them as `vectorize`.
pub fn lookup_loop_hint_option(name: &str) -> LoopHintOption {
  LOOP_HINT_OPTIONS
    .iter()
    .find(|option| option.name == name)
    .copied()
    .unwrap_or(LOOP_HINT_OPTIONS[0])
}

impl<'a> Sema<'a> {
  /// `#pragma clang loop option(value)` in front of a loop.
  ///
  /// Arguments are `(option, keyword, value)`: the keyword slot is used by
  /// the enable/disable forms, the value slot by the numeric forms.
  pub(crate) fn handle_loop_hint_attr(
    &mut self,
    target: &AttrTarget<'_>,
    attr: &ASTAttribute,
  ) -> Option<StmtAttr> {
    if !target.stmt.is_loop() {
      self.add_diagnostic(DiagnosticMessage::LoopHintPrecedesNonLoop { span: target.stmt.start() }.report());
      return None;
    }

    let option_name = attr
      .arg_as_ident(0)
      .and_then(|loc| loc.ident)
      .map(|ident| target.symbols.get(&ident))
      .unwrap_or_default();
    let option = lookup_loop_hint_option(option_name);

    let keyword_loc = attr.arg_as_ident(1);
    let value_span = keyword_loc.map(|loc| loc.span.clone()).unwrap_or_else(|| attr.span.clone());

    let (mode, value) = match option.kind {
      LoopHintValueKind::State => {
        let keyword = keyword_loc.and_then(|loc| loc.ident).map(|ident| target.symbols.get(&ident));

        match keyword {
          Some("disable") => (LoopHintMode::Disable, 0),
          Some("enable") => (LoopHintMode::Enable, 1),
          _ => {
            self.add_diagnostic(DiagnosticMessage::LoopHintInvalidKeyword { span: value_span }.report());
            return None;
          },
        }
      },
      LoopHintValueKind::Numeric => {
        // Value-dependent expressions (template parameters) are rejected
        // like any other non-constant; they are not deferred.
        let evaluated = match attr.arg_as_expr(2) {
          Some(expr) => self.evaluate_integer_constant(target.ast, expr),
          None => Err(ConstEvalError::Missing),
        };

        match evaluated {
          Ok(value) if value >= 1 => (LoopHintMode::Numeric, value),
          other => {
            trace_dbg!(self.config, DebugTrace::ConstEval, "{} rejected: {:?}", option.name, other);
            self.add_diagnostic(DiagnosticMessage::LoopHintInvalidValue { span: value_span }.report());
            return None;
          },
        }
      },
    };

    Some(StmtAttr::LoopHint(LoopHintAttr::new(
      option.category,
      mode,
      value,
      attr.span.clone(),
    )))
  }
}
