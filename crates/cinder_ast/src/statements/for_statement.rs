use cinder_type::{span::Span, symbol::SymbolId};

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTFor {
  pub initializer: Option<NodeId>,
  pub condition: Option<NodeId>,
  pub increment: Option<NodeId>,
  pub body: NodeId,
  pub span: Span,
}

impl ASTFor {
  pub fn new(
    initializer: Option<NodeId>,
    condition: Option<NodeId>,
    increment: Option<NodeId>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      initializer,
      condition,
      increment,
      body,
      span,
    }
  }
}

/// `for (binding : range) body`
#[derive(Debug, PartialEq, Clone)]
pub struct ASTForRange {
  pub binding: SymbolId,
  pub range: NodeId,
  pub body: NodeId,
  pub span: Span,
}

impl ASTForRange {
  pub fn new(
    binding: SymbolId,
    range: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      binding,
      range,
      body,
      span,
    }
  }
}
