use cinder_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTWhile {
  pub condition: NodeId,
  pub body: NodeId,
  pub span: Span,
}

impl ASTWhile {
  pub fn new(
    condition: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { condition, body, span }
  }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ASTDoWhile {
  pub body: NodeId,
  pub condition: NodeId,
  pub span: Span,
}

impl ASTDoWhile {
  pub fn new(
    body: NodeId,
    condition: NodeId,
    span: Span,
  ) -> Self {
    Self { body, condition, span }
  }
}
