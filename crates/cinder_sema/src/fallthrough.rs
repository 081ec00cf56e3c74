use cinder_ast::attribute::ASTAttribute;
use cinder_diagnostics::message::DiagnosticMessage;
use cinder_type::attribute::{FallThroughAttr, StmtAttr};

use crate::{AttrTarget, Sema};

impl<'a> Sema<'a> {
  /// `[[fallthrough]]` must annotate a null statement inside a `switch`.
  pub(crate) fn handle_fallthrough_attr(
    &mut self,
    target: &AttrTarget<'_>,
    attr: &ASTAttribute,
  ) -> Option<StmtAttr> {
    if !target.stmt.is_null() {
      // `[[fallthrough]] case 2:` is almost always a missing `;`.
      let insert_semi = target.stmt.is_switch_case().then(|| target.range.end_point());

      self.add_diagnostic(
        DiagnosticMessage::FallthroughWrongTarget {
          span: attr.span.clone(),
          statement: target.stmt.start(),
          insert_semi,
        }
        .report(),
      );
      return None;
    }

    if self.switch_depth() == 0 {
      self.add_diagnostic(DiagnosticMessage::FallthroughOutsideSwitch { span: attr.span.clone() }.report());
      return None;
    }

    Some(StmtAttr::FallThrough(FallThroughAttr { span: attr.span.clone() }))
  }
}
