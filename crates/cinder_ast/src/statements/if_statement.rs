use cinder_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTIf {
  pub condition: NodeId,
  pub then_branch: NodeId,
  pub else_branch: Option<NodeId>,
  pub span: Span,
}

impl ASTIf {
  pub fn new(
    condition: NodeId,
    then_branch: NodeId,
    else_branch: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      condition,
      then_branch,
      else_branch,
      span,
    }
  }
}
