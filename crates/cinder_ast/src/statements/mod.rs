use cinder_type::span::Span;

use crate::{
  NodeId,
  statements::{
    attributed::ASTAttributed,
    block::ASTBlock,
    for_statement::{ASTFor, ASTForRange},
    if_statement::ASTIf,
    return_statement::ASTReturn,
    switch_statement::{ASTCase, ASTDefault, ASTSwitch},
    while_statement::{ASTDoWhile, ASTWhile},
  },
};

pub mod attributed;
pub mod block;
pub mod for_statement;
pub mod if_statement;
pub mod return_statement;
pub mod switch_statement;
pub mod while_statement;

#[derive(Debug, PartialEq, Clone)]
pub struct ASTExpressionStatement {
  pub expression: NodeId,
  pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ASTStatement {
  /// `;` on its own.
  Null(Span),
  Expression(ASTExpressionStatement),
  Block(ASTBlock),
  If(ASTIf),
  Switch(ASTSwitch),
  Case(ASTCase),
  Default(ASTDefault),
  For(ASTFor),
  ForRange(ASTForRange),
  While(ASTWhile),
  DoWhile(ASTDoWhile),
  Break(Span),
  Continue(Span),
  Return(ASTReturn),
  Attributed(ASTAttributed),
}

impl ASTStatement {
  pub fn span(&self) -> &Span {
    match self {
      ASTStatement::Null(span) | ASTStatement::Break(span) | ASTStatement::Continue(span) => span,
      ASTStatement::Expression(expr) => &expr.span,
      ASTStatement::Block(block) => &block.span,
      ASTStatement::If(if_) => &if_.span,
      ASTStatement::Switch(switch) => &switch.span,
      ASTStatement::Case(case) => &case.span,
      ASTStatement::Default(default) => &default.span,
      ASTStatement::For(for_) => &for_.span,
      ASTStatement::ForRange(for_range) => &for_range.span,
      ASTStatement::While(while_) => &while_.span,
      ASTStatement::DoWhile(do_) => &do_.span,
      ASTStatement::Return(ret) => &ret.span,
      ASTStatement::Attributed(attributed) => &attributed.span,
    }
  }

  /// Location of the first token of the statement.
  pub fn start(&self) -> Span {
    self.span().start_point()
  }

  pub fn is_null(&self) -> bool {
    matches!(self, ASTStatement::Null(_))
  }

  /// `for`, range-`for`, `while` or `do`.
  pub fn is_loop(&self) -> bool {
    matches!(
      self,
      ASTStatement::For(_) | ASTStatement::ForRange(_) | ASTStatement::While(_) | ASTStatement::DoWhile(_)
    )
  }

  /// `case X:` or `default:` label.
  pub fn is_switch_case(&self) -> bool {
    matches!(self, ASTStatement::Case(_) | ASTStatement::Default(_))
  }

  pub fn kind_name(&self) -> &'static str {
    match self {
      ASTStatement::Null(_) => "null statement",
      ASTStatement::Expression(_) => "expression statement",
      ASTStatement::Block(_) => "compound statement",
      ASTStatement::If(_) => "if statement",
      ASTStatement::Switch(_) => "switch statement",
      ASTStatement::Case(_) => "case label",
      ASTStatement::Default(_) => "default label",
      ASTStatement::For(_) => "for loop",
      ASTStatement::ForRange(_) => "range-based for loop",
      ASTStatement::While(_) => "while loop",
      ASTStatement::DoWhile(_) => "do-while loop",
      ASTStatement::Break(_) => "break statement",
      ASTStatement::Continue(_) => "continue statement",
      ASTStatement::Return(_) => "return statement",
      ASTStatement::Attributed(_) => "attributed statement",
    }
  }
}
