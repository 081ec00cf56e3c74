pub mod attribute;
pub mod expressions;
pub mod statements;

use cinder_type::{Id, Store, span::Span};

use crate::expressions::ASTExpression;
use crate::statements::ASTStatement;

pub type NodeId = Id<ASTNode>;

pub type ASTStore = Store<ASTNode>;

#[derive(Debug, PartialEq, Clone)]
pub enum ASTNode {
  Expression(ASTExpression),
  Statement(ASTStatement),
}

impl ASTNode {
  pub fn span(&self) -> &Span {
    match self {
      ASTNode::Expression(expr) => expr.span(),
      ASTNode::Statement(stmt) => stmt.span(),
    }
  }

  pub fn as_statement(&self) -> Option<&ASTStatement> {
    match self {
      ASTNode::Statement(stmt) => Some(stmt),
      ASTNode::Expression(_) => None,
    }
  }

  pub fn as_expression(&self) -> Option<&ASTExpression> {
    match self {
      ASTNode::Expression(expr) => Some(expr),
      ASTNode::Statement(_) => None,
    }
  }
}
