use cinder_ast::{ASTStore, NodeId, attribute::ASTAttribute};
use cinder_config::DebugTrace;
use cinder_diagnostics::message::DiagnosticMessage;
use cinder_log::trace_dbg;
use cinder_type::{attribute::StmtAttr, span::Span, symbol::SymbolTable};

use crate::{
  AttrTarget, Sema, StmtAttrResult,
  registry::{StmtAttrHandler, handler_for},
};

impl<'a> Sema<'a> {
  /// Validate the attributes written in front of `stmt_id`.
  ///
  /// Rejected attributes are diagnosed and dropped. Loop hints that survive
  /// are checked against each other once the whole list has been seen;
  /// conflicting hints are reported but stay attached.
  pub fn process_stmt_attributes(
    &mut self,
    ast: &ASTStore,
    symbols: &SymbolTable,
    stmt_id: &NodeId,
    attrs: &[ASTAttribute],
    range: &Span,
  ) -> StmtAttrResult {
    let Some(stmt) = ast.get(stmt_id).as_statement() else {
      debug_assert!(false, "statement attributes attached to an expression node");
      return StmtAttrResult::Unchanged(*stmt_id);
    };

    let target = AttrTarget {
      ast,
      symbols,
      stmt,
      range,
    };

    let mut validated = Vec::with_capacity(attrs.len());
    for attr in attrs {
      if let Some(valid) = self.process_stmt_attribute(&target, attr) {
        validated.push(valid);
      }
    }

    self.check_for_incompatible_attributes(&validated);

    trace_dbg!(
      self.config,
      DebugTrace::Attributes,
      "{}: {} of {} attribute(s) kept",
      stmt.kind_name(),
      validated.len(),
      attrs.len()
    );

    if validated.is_empty() {
      return StmtAttrResult::Unchanged(*stmt_id);
    }

    StmtAttrResult::Attributed {
      attributes: validated,
      statement: *stmt_id,
      range: range.clone(),
    }
  }

  fn process_stmt_attribute(
    &mut self,
    target: &AttrTarget<'_>,
    attr: &ASTAttribute,
  ) -> Option<StmtAttr> {
    let name = target.symbols.get(&attr.name);
    let handler = handler_for(attr.kind);

    trace_dbg!(self.config, DebugTrace::Attributes, "'{}' -> {:?}", name, handler);

    match handler {
      StmtAttrHandler::Unknown => {
        let message = if attr.is_declspec() {
          DiagnosticMessage::UnsupportedDeclspecAttribute {
            name: name.to_string(),
            span: attr.span.clone(),
          }
        } else {
          DiagnosticMessage::UnknownAttributeIgnored {
            name: name.to_string(),
            span: attr.span.clone(),
          }
        };
        self.add_diagnostic(message.report());
        None
      },
      StmtAttrHandler::FallThrough => self.handle_fallthrough_attr(target, attr),
      StmtAttrHandler::LoopHint => self.handle_loop_hint_attr(target, attr),
      StmtAttrHandler::DeclarationOnly => {
        self.add_diagnostic(
          DiagnosticMessage::AttributeInvalidOnStatement {
            name: name.to_string(),
            span: attr.span.clone(),
            statement: target.stmt.start(),
          }
          .report(),
        );
        None
      },
    }
  }
}
