use cinder_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTCall {
  pub callee: NodeId,
  pub arguments: Vec<NodeId>,
  pub span: Span,
}

impl ASTCall {
  pub fn new(
    callee: NodeId,
    arguments: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      callee,
      arguments,
      span,
    }
  }
}
