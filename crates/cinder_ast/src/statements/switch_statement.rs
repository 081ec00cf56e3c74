use cinder_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTSwitch {
  pub condition: NodeId,
  pub body: NodeId,
  pub span: Span,
}

impl ASTSwitch {
  pub fn new(
    condition: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { condition, body, span }
  }
}

/// `case value: body`
#[derive(Debug, PartialEq, Clone)]
pub struct ASTCase {
  pub value: NodeId,
  pub body: NodeId,
  pub span: Span,
}

impl ASTCase {
  pub fn new(
    value: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { value, body, span }
  }
}

/// `default: body`
#[derive(Debug, PartialEq, Clone)]
pub struct ASTDefault {
  pub body: NodeId,
  pub span: Span,
}

impl ASTDefault {
  pub fn new(
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { body, span }
  }
}
