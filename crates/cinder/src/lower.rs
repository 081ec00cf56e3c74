//! Builds AST nodes from a fixture the way the parser would: children
//! first, `switch` bodies bracketed by the switch callbacks, and statement
//! attributes processed right after the statement they precede.

use cinder_ast::{
  ASTNode, ASTStore, NodeId,
  attribute::{ASTAttribute, ASTAttributeArg, ASTAttributeKind, ASTIdentifierLoc},
  expressions::{
    ASTExpression,
    binary::ASTBinary,
    grouped::ASTGrouped,
    literal::{ASTLiteral, ASTLiteralValue},
    ternary::ASTTernary,
    unary::ASTUnary,
    variable::{ASTTemplateParam, ASTVariable},
  },
  statements::{
    ASTExpressionStatement, ASTStatement,
    block::ASTBlock,
    for_statement::{ASTFor, ASTForRange},
    if_statement::ASTIf,
    return_statement::ASTReturn,
    switch_statement::{ASTCase, ASTDefault, ASTSwitch},
    while_statement::{ASTDoWhile, ASTWhile},
  },
};
use cinder_config::DebugTrace;
use cinder_log::trace_dbg;
use cinder_sema::Sema;
use cinder_type::{attribute::StmtAttr, file::FileId, span::Span, symbol::SymbolTable};

use crate::fixture::{ArgFixture, AttrFixture, ExprFixture, Fixture, FixtureError, SpanRef, StmtFixture, StmtKindFixture};

/// A statement that kept at least one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedStmt {
  pub kind: &'static str,
  pub span: Span,
  pub attributes: Vec<StmtAttr>,
}

pub struct Lowering<'s, 'a> {
  sema: &'s mut Sema<'a>,
  file: FileId,
  source: &'s str,
  pub ast: ASTStore,
  pub symbols: SymbolTable,
  pub attributed: Vec<AttributedStmt>,
}

impl<'s, 'a> Lowering<'s, 'a> {
  pub fn new(
    sema: &'s mut Sema<'a>,
    file: FileId,
    source: &'s str,
  ) -> Self {
    Self {
      sema,
      file,
      source,
      ast: ASTStore::new(),
      symbols: SymbolTable::new(),
      attributed: Vec::new(),
    }
  }

  /// Lower every top-level statement as the body of one function.
  pub fn lower_fixture(
    &mut self,
    fixture: &Fixture,
  ) -> Result<Vec<NodeId>, FixtureError> {
    self.sema.push_function_scope();
    let result = self.lower_stmts(&fixture.statements);
    self.sema.pop_function_scope();

    result
  }

  fn span(
    &self,
    at: &SpanRef,
  ) -> Result<Span, FixtureError> {
    at.resolve(self.file, self.source)
  }

  fn alloc_stmt(
    &mut self,
    stmt: ASTStatement,
  ) -> NodeId {
    self.ast.alloc(ASTNode::Statement(stmt))
  }

  fn alloc_expr(
    &mut self,
    expr: ASTExpression,
  ) -> NodeId {
    self.ast.alloc(ASTNode::Expression(expr))
  }

  fn int(
    &mut self,
    value: i64,
    span: Span,
  ) -> NodeId {
    self.alloc_expr(ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Int(value), span)))
  }

  fn lower_stmts(
    &mut self,
    stmts: &[StmtFixture],
  ) -> Result<Vec<NodeId>, FixtureError> {
    stmts.iter().map(|stmt| self.lower_stmt(stmt)).collect()
  }

  /// Missing bodies become an empty statement right after the header.
  fn lower_body(
    &mut self,
    body: &Option<Box<StmtFixture>>,
    span: &Span,
  ) -> Result<NodeId, FixtureError> {
    match body {
      Some(body) => self.lower_stmt(body),
      None => Ok(self.alloc_stmt(ASTStatement::Null(span.end_point()))),
    }
  }

  fn lower_stmt(
    &mut self,
    fixture: &StmtFixture,
  ) -> Result<NodeId, FixtureError> {
    let span = self.span(&fixture.at)?;

    let stmt = match &fixture.kind {
      StmtKindFixture::Null => ASTStatement::Null(span.clone()),
      StmtKindFixture::Break => ASTStatement::Break(span.clone()),
      StmtKindFixture::Continue => ASTStatement::Continue(span.clone()),
      StmtKindFixture::Expr => {
        let expression = self.int(0, span.clone());
        ASTStatement::Expression(ASTExpressionStatement {
          expression,
          span: span.clone(),
        })
      },
      StmtKindFixture::Return => ASTStatement::Return(ASTReturn::new(None, span.clone())),
      StmtKindFixture::Block { body } => {
        let statements = self.lower_stmts(body)?;
        ASTStatement::Block(ASTBlock::new(statements, span.clone()))
      },
      StmtKindFixture::If { then, otherwise } => {
        let condition = self.int(1, span.clone());
        let then_branch = self.lower_stmt(then)?;
        let else_branch = match otherwise {
          Some(otherwise) => Some(self.lower_stmt(otherwise)?),
          None => None,
        };
        ASTStatement::If(ASTIf::new(condition, then_branch, else_branch, span.clone()))
      },
      StmtKindFixture::Switch { body } => {
        let condition = self.int(0, span.clone());

        self.sema.act_on_start_of_switch(span.clone());
        let statements = self.lower_stmts(body);
        self.sema.act_on_finish_switch();

        let block = self.alloc_stmt(ASTStatement::Block(ASTBlock::new(statements?, span.clone())));
        ASTStatement::Switch(ASTSwitch::new(condition, block, span.clone()))
      },
      StmtKindFixture::Case { value, body } => {
        let value = self.int(*value, span.clone());
        let body = self.lower_body(body, &span)?;
        ASTStatement::Case(ASTCase::new(value, body, span.clone()))
      },
      StmtKindFixture::Default { body } => {
        let body = self.lower_body(body, &span)?;
        ASTStatement::Default(ASTDefault::new(body, span.clone()))
      },
      StmtKindFixture::For { body } => {
        let body = self.lower_body(body, &span)?;
        ASTStatement::For(ASTFor::new(None, None, None, body, span.clone()))
      },
      StmtKindFixture::ForRange { binding, body } => {
        let binding = self.symbols.intern(binding);
        let range = self.int(0, span.clone());
        let body = self.lower_body(body, &span)?;
        ASTStatement::ForRange(ASTForRange::new(binding, range, body, span.clone()))
      },
      StmtKindFixture::While { body } => {
        let condition = self.int(1, span.clone());
        let body = self.lower_body(body, &span)?;
        ASTStatement::While(ASTWhile::new(condition, body, span.clone()))
      },
      StmtKindFixture::DoWhile { body } => {
        let condition = self.int(0, span.clone());
        let body = self.lower_body(body, &span)?;
        ASTStatement::DoWhile(ASTDoWhile::new(body, condition, span.clone()))
      },
    };

    let kind = stmt.kind_name();
    let id = self.alloc_stmt(stmt);

    if fixture.attrs.is_empty() {
      return Ok(id);
    }

    let attrs = fixture
      .attrs
      .iter()
      .map(|attr| self.lower_attr(attr))
      .collect::<Result<Vec<_>, _>>()?;

    let range = match &fixture.attr_range {
      Some(range) => self.span(range)?,
      None => attrs
        .iter()
        .map(|attr| attr.span.clone())
        .reduce(|a, b| Span::merge(&a, &b))
        .unwrap_or_else(|| span.start_point()),
    };

    trace_dbg!(
      self.sema.config(),
      DebugTrace::Fixture,
      "{} at {}..{}: {} raw attribute(s)",
      kind,
      span.start,
      span.end,
      attrs.len()
    );

    let result = self
      .sema
      .process_stmt_attributes(&self.ast, &self.symbols, &id, &attrs, &range);

    if !result.attributes().is_empty() {
      self.attributed.push(AttributedStmt {
        kind,
        span,
        attributes: result.attributes().to_vec(),
      });
    }

    Ok(result.build(&mut self.ast))
  }

  fn lower_attr(
    &mut self,
    fixture: &AttrFixture,
  ) -> Result<ASTAttribute, FixtureError> {
    let span = self.span(&fixture.at)?;
    let syntax = fixture.syntax.into();
    let kind = ASTAttributeKind::from_name(&fixture.name, syntax);
    let name = self.symbols.intern(&fixture.name);

    let mut args = Vec::with_capacity(fixture.args.len());
    for arg in &fixture.args {
      let arg = match arg {
        ArgFixture::Expr(expr) => ASTAttributeArg::Expression(self.lower_expr(expr)?),
        ArgFixture::Ident { ident, at } => {
          let ident = ident.as_deref().map(|ident| self.symbols.intern(ident));
          ASTAttributeArg::Identifier(ASTIdentifierLoc::new(ident, self.span(at)?))
        },
      };
      args.push(arg);
    }

    Ok(ASTAttribute::new(kind, name, args, span, syntax))
  }

  fn lower_expr(
    &mut self,
    fixture: &ExprFixture,
  ) -> Result<NodeId, FixtureError> {
    let expr = match fixture {
      ExprFixture::Int { value, at } => {
        ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Int(*value), self.span(at)?))
      },
      ExprFixture::Bool { value, at } => {
        ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Bool(*value), self.span(at)?))
      },
      ExprFixture::Var { name, at } => {
        let span = self.span(at)?;
        ASTExpression::Variable(ASTVariable::new(self.symbols.intern(name), span))
      },
      ExprFixture::TemplateParam { name, at } => {
        let span = self.span(at)?;
        ASTExpression::TemplateParam(ASTTemplateParam::new(self.symbols.intern(name), 0, 0, span))
      },
      ExprFixture::Unary { op, operand, at } => {
        let span = self.span(at)?;
        let operand = self.lower_expr(operand)?;
        ASTExpression::Unary(ASTUnary::new((*op).into(), operand, span))
      },
      ExprFixture::Binary { op, left, right, at } => {
        let span = self.span(at)?;
        let left = self.lower_expr(left)?;
        let right = self.lower_expr(right)?;
        ASTExpression::Binary(ASTBinary::new(left, right, (*op).into(), span))
      },
      ExprFixture::Grouped { inner, at } => {
        let span = self.span(at)?;
        let inner = self.lower_expr(inner)?;
        ASTExpression::Grouped(ASTGrouped::new(inner, span))
      },
      ExprFixture::Ternary {
        condition,
        then,
        otherwise,
        at,
      } => {
        let span = self.span(at)?;
        let condition = self.lower_expr(condition)?;
        let then_expr = self.lower_expr(then)?;
        let else_expr = self.lower_expr(otherwise)?;
        ASTExpression::Ternary(ASTTernary::new(condition, then_expr, else_expr, span))
      },
    };

    Ok(self.alloc_expr(expr))
  }
}
