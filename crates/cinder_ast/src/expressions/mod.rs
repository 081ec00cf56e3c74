use cinder_type::span::Span;

use crate::expressions::{
  binary::ASTBinary, call::ASTCall, grouped::ASTGrouped, literal::ASTLiteral, ternary::ASTTernary, unary::ASTUnary,
  variable::{ASTTemplateParam, ASTVariable},
};

pub mod binary;
pub mod call;
pub mod grouped;
pub mod literal;
pub mod ternary;
pub mod unary;
pub mod variable;

#[derive(Debug, PartialEq, Clone)]
pub enum ASTExpression {
  Literal(ASTLiteral),
  Variable(ASTVariable),
  TemplateParam(ASTTemplateParam),
  Unary(ASTUnary),
  Binary(ASTBinary),
  Grouped(ASTGrouped),
  Ternary(ASTTernary),
  Call(ASTCall),
}

impl ASTExpression {
  pub fn span(&self) -> &Span {
    match self {
      ASTExpression::Literal(lit) => &lit.span,
      ASTExpression::Variable(var) => &var.span,
      ASTExpression::TemplateParam(param) => &param.span,
      ASTExpression::Unary(unary) => &unary.span,
      ASTExpression::Binary(binary) => &binary.span,
      ASTExpression::Grouped(grouped) => &grouped.span,
      ASTExpression::Ternary(ternary) => &ternary.span,
      ASTExpression::Call(call) => &call.span,
    }
  }
}
