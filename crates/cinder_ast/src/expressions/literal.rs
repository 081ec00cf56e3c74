use cinder_type::span::Span;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ASTLiteralValue {
  Int(i64),
  Bool(bool),
  Char(u8),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ASTLiteral {
  pub value: ASTLiteralValue,
  pub span: Span,
}

impl ASTLiteral {
  pub fn new(
    value: ASTLiteralValue,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}
