//! Statement attribute validation.
//!
//! The parser hands every statement's raw attribute list to
//! [`Sema::process_stmt_attributes`]. Each attribute is validated on its
//! own, the survivors are checked against each other, and the caller gets
//! back either the statement unchanged or the attributes to wrap it with.

mod compat;
mod const_eval;
mod fallthrough;
mod loop_hint;
mod process;
mod registry;

use cinder_ast::{
  ASTNode, ASTStore, NodeId,
  statements::{ASTStatement, attributed::ASTAttributed},
};
use cinder_config::CinderConfig;
use cinder_diagnostics::diagnostic_report::Diagnostic;
use cinder_type::{attribute::StmtAttr, span::Span, symbol::SymbolTable};

pub use const_eval::ConstEvalError;
pub use loop_hint::{LOOP_HINT_OPTIONS, LoopHintOption, LoopHintValueKind, lookup_loop_hint_option};

/// Per-function state the parser maintains while it walks a body.
#[derive(Debug, Clone, Default)]
pub struct FunctionScopeInfo {
  /// Spans of the `switch` statements currently open, innermost last.
  pub switch_stack: Vec<Span>,
}

/// What the AST builder should do with a statement after its attributes
/// have been processed.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtAttrResult {
  /// Nothing survived validation; use the statement as is.
  Unchanged(NodeId),
  /// Wrap `statement` with `attributes`. `range` covers the attribute list.
  Attributed {
    attributes: Vec<StmtAttr>,
    statement: NodeId,
    range: Span,
  },
}

impl StmtAttrResult {
  pub fn attributes(&self) -> &[StmtAttr] {
    match self {
      StmtAttrResult::Unchanged(_) => &[],
      StmtAttrResult::Attributed { attributes, .. } => attributes,
    }
  }

  /// Allocate the attributed wrapper if one is needed and return the node
  /// the parent should reference.
  pub fn build(
    self,
    ast: &mut ASTStore,
  ) -> NodeId {
    match self {
      StmtAttrResult::Unchanged(id) => id,
      StmtAttrResult::Attributed {
        attributes,
        statement,
        range,
      } => {
        let stmt_span = ast.get(&statement).span().clone();
        let span = Span::merge(&range, &stmt_span);

        ast.alloc(ASTNode::Statement(ASTStatement::Attributed(ASTAttributed::new(
          attributes, statement, span,
        ))))
      },
    }
  }
}

/// Read-only view of what an attribute is attached to.
pub(crate) struct AttrTarget<'t> {
  pub ast: &'t ASTStore,
  pub symbols: &'t SymbolTable,
  pub stmt: &'t ASTStatement,
  pub range: &'t Span,
}

pub struct Sema<'a> {
  config: &'a CinderConfig,
  function_scopes: Vec<FunctionScopeInfo>,
  diagnostics: Vec<Diagnostic>,
}

impl<'a> Sema<'a> {
  pub fn new(config: &'a CinderConfig) -> Self {
    Self {
      config,
      function_scopes: Vec::new(),
      diagnostics: Vec::new(),
    }
  }

  pub fn config(&self) -> &'a CinderConfig {
    self.config
  }

  pub fn push_function_scope(&mut self) {
    self.function_scopes.push(FunctionScopeInfo::default());
  }

  pub fn pop_function_scope(&mut self) -> Option<FunctionScopeInfo> {
    self.function_scopes.pop()
  }

  pub fn cur_function(&self) -> Option<&FunctionScopeInfo> {
    self.function_scopes.last()
  }

  /// Called by the parser before it parses a `switch` body.
  ///
  /// Opens an implicit function scope when none is active, so top-level
  /// fixtures and tests behave like a function body.
  pub fn act_on_start_of_switch(
    &mut self,
    span: Span,
  ) {
    if self.function_scopes.is_empty() {
      self.push_function_scope();
    }

    if let Some(scope) = self.function_scopes.last_mut() {
      scope.switch_stack.push(span);
    }
  }

  pub fn act_on_finish_switch(&mut self) {
    if let Some(scope) = self.function_scopes.last_mut() {
      scope.switch_stack.pop();
    }
  }

  pub fn switch_depth(&self) -> usize {
    self.cur_function().map(|f| f.switch_stack.len()).unwrap_or(0)
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
    std::mem::take(&mut self.diagnostics)
  }

  fn add_diagnostic(
    &mut self,
    diagnostic: Diagnostic,
  ) {
    self.diagnostics.push(diagnostic);
  }
}
