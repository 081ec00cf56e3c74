use cinder_config::DebugTrace;
use cinder_diagnostics::message::DiagnosticMessage;
use cinder_log::trace_dbg;
use cinder_type::attribute::{LoopHintCategory, LoopHintMode, StmtAttr};

use crate::Sema;

/// Hints seen so far for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CategoryState {
  /// Last `enable`/`disable` directive.
  pub state: Option<LoopHintMode>,
  /// Last numeric directive.
  pub numeric: Option<i64>,
}

impl CategoryState {
  fn is_disabled_with_value(&self) -> Option<i64> {
    match (self.state, self.numeric) {
      (Some(LoopHintMode::Disable), Some(value)) => Some(value),
      _ => None,
    }
  }
}

fn state_name(mode: LoopHintMode) -> &'static str {
  match mode {
    LoopHintMode::Enable => "enable",
    LoopHintMode::Disable => "disable",
    LoopHintMode::Numeric => unreachable!("numeric hint recorded in the enable/disable slot"),
  }
}

impl<'a> Sema<'a> {
  /// Check every loop hint on one statement against the others.
  ///
  /// Each category allows one enable/disable form and one numeric form, and
  /// `disable` cannot be combined with a numeric form. Runs over the whole
  /// list so that a later hint is checked against every earlier one.
  /// Returns the final per-category state.
  pub(crate) fn check_for_incompatible_attributes(
    &mut self,
    attrs: &[StmtAttr],
  ) -> [CategoryState; 3] {
    let mut categories = [CategoryState::default(); 3];

    for hint in attrs.iter().filter_map(StmtAttr::as_loop_hint) {
      let category = &mut categories[hint.category.index()];
      let location = hint.span.end_point();

      if hint.mode.is_numeric() {
        if let Some(previous) = category.numeric {
          self.add_diagnostic(
            DiagnosticMessage::LoopHintDuplicate {
              option: hint.option_name().to_string(),
              previous: previous.to_string(),
              current: hint.value_name(),
              span: location.clone(),
            }
            .report(),
          );
        }
        category.numeric = Some(hint.value);
      } else {
        if let Some(previous) = category.state {
          self.add_diagnostic(
            DiagnosticMessage::LoopHintDuplicate {
              option: hint.option_name().to_string(),
              previous: state_name(previous).to_string(),
              current: hint.value_name(),
              span: location.clone(),
            }
            .report(),
          );
        }
        category.state = Some(hint.mode);
      }

      if let Some(value) = category.is_disabled_with_value() {
        self.add_diagnostic(
          DiagnosticMessage::LoopHintIncompatible {
            state_option: hint.category.state_option_name().to_string(),
            state_value: "disable".to_string(),
            numeric_option: hint.category.numeric_option_name().to_string(),
            numeric_value: value.to_string(),
            span: location,
          }
          .report(),
        );
      }
    }

    trace_dbg!(self.config, DebugTrace::Compat, "{:?}", summarize(&categories));

    categories
  }
}

fn summarize(categories: &[CategoryState; 3]) -> Vec<(LoopHintCategory, CategoryState)> {
  LoopHintCategory::ALL
    .iter()
    .map(|c| (*c, categories[c.index()]))
    .filter(|(_, state)| *state != CategoryState::default())
    .collect()
}
