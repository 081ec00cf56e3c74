use cinder_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTReturn {
  pub value: Option<NodeId>,
  pub span: Span,
}

impl ASTReturn {
  pub fn new(
    value: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}
