use cinder_type::{attribute::StmtAttr, span::Span};

use crate::NodeId;

/// Statement wrapped with the attributes that survived validation.
#[derive(Debug, PartialEq, Clone)]
pub struct ASTAttributed {
  pub attributes: Vec<StmtAttr>,
  pub statement: NodeId,
  pub span: Span,
}

impl ASTAttributed {
  pub fn new(
    attributes: Vec<StmtAttr>,
    statement: NodeId,
    span: Span,
  ) -> Self {
    Self {
      attributes,
      statement,
      span,
    }
  }
}
