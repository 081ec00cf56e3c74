use std::fmt;

use cinder_ast::{
  ASTNode, ASTStore, NodeId,
  expressions::{
    ASTExpression,
    binary::{ASTBinary, ASTBinaryOperator},
    literal::ASTLiteralValue,
    unary::UnaryOperator,
  },
};

use crate::Sema;

/// Why an expression is not an integer constant expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstEvalError {
  /// No expression was written.
  Missing,
  /// Refers to something only known at run time (variables, calls).
  NotConstant,
  /// Depends on a template parameter.
  ValueDependent,
  Overflow,
  DivisionByZero,
  InvalidShift,
}

impl fmt::Display for ConstEvalError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ConstEvalError::Missing => write!(f, "missing expression"),
      ConstEvalError::NotConstant => write!(f, "not a constant expression"),
      ConstEvalError::ValueDependent => write!(f, "value depends on a template parameter"),
      ConstEvalError::Overflow => write!(f, "integer overflow"),
      ConstEvalError::DivisionByZero => write!(f, "division by zero"),
      ConstEvalError::InvalidShift => write!(f, "shift amount out of range"),
    }
  }
}

impl<'a> Sema<'a> {
  pub(crate) fn evaluate_integer_constant(
    &self,
    ast: &ASTStore,
    node_id: &NodeId,
  ) -> Result<i64, ConstEvalError> {
    evaluate(ast, node_id)
  }
}

/// Fold an integer constant expression with checked `i64` arithmetic.
pub fn evaluate(
  ast: &ASTStore,
  node_id: &NodeId,
) -> Result<i64, ConstEvalError> {
  let expr = match ast.get(node_id) {
    ASTNode::Expression(expr) => expr,
    ASTNode::Statement(_) => return Err(ConstEvalError::NotConstant),
  };

  match expr {
    ASTExpression::Literal(lit) => Ok(match lit.value {
      ASTLiteralValue::Int(value) => value,
      ASTLiteralValue::Bool(value) => value as i64,
      ASTLiteralValue::Char(value) => value as i64,
    }),
    ASTExpression::Variable(_) | ASTExpression::Call(_) => Err(ConstEvalError::NotConstant),
    ASTExpression::TemplateParam(_) => Err(ConstEvalError::ValueDependent),
    ASTExpression::Grouped(grouped) => evaluate(ast, &grouped.expression),
    ASTExpression::Unary(unary) => {
      let operand = evaluate(ast, &unary.operand)?;

      match unary.operator {
        UnaryOperator::Negate => operand.checked_neg().ok_or(ConstEvalError::Overflow),
        UnaryOperator::Plus => Ok(operand),
        UnaryOperator::Not => Ok((operand == 0) as i64),
        UnaryOperator::BitNot => Ok(!operand),
      }
    },
    ASTExpression::Ternary(ternary) => {
      if evaluate(ast, &ternary.condition)? != 0 {
        evaluate(ast, &ternary.then_expr)
      } else {
        evaluate(ast, &ternary.else_expr)
      }
    },
    ASTExpression::Binary(binary) => evaluate_binary(ast, binary),
  }
}

fn evaluate_binary(
  ast: &ASTStore,
  binary: &ASTBinary,
) -> Result<i64, ConstEvalError> {
  let left = evaluate(ast, &binary.left)?;

  // The unevaluated side of `&&` / `||` does not have to be constant.
  match binary.operator {
    ASTBinaryOperator::And if left == 0 => return Ok(0),
    ASTBinaryOperator::Or if left != 0 => return Ok(1),
    _ => {},
  }

  let right = evaluate(ast, &binary.right)?;

  match binary.operator {
    ASTBinaryOperator::Add => left.checked_add(right).ok_or(ConstEvalError::Overflow),
    ASTBinaryOperator::Subtract => left.checked_sub(right).ok_or(ConstEvalError::Overflow),
    ASTBinaryOperator::Multiply => left.checked_mul(right).ok_or(ConstEvalError::Overflow),
    ASTBinaryOperator::Divide | ASTBinaryOperator::Modulo if right == 0 => Err(ConstEvalError::DivisionByZero),
    ASTBinaryOperator::Divide => left.checked_div(right).ok_or(ConstEvalError::Overflow),
    ASTBinaryOperator::Modulo => left.checked_rem(right).ok_or(ConstEvalError::Overflow),
    ASTBinaryOperator::ShiftLeft => {
      let amount = shift_amount(right)?;
      let shifted = left.checked_shl(amount).ok_or(ConstEvalError::InvalidShift)?;

      if shifted >> amount != left {
        return Err(ConstEvalError::Overflow);
      }
      Ok(shifted)
    },
    ASTBinaryOperator::ShiftRight => Ok(left >> shift_amount(right)?),
    ASTBinaryOperator::BitAnd => Ok(left & right),
    ASTBinaryOperator::BitOr => Ok(left | right),
    ASTBinaryOperator::BitXor => Ok(left ^ right),
    ASTBinaryOperator::Equal => Ok((left == right) as i64),
    ASTBinaryOperator::NotEqual => Ok((left != right) as i64),
    ASTBinaryOperator::LessThan => Ok((left < right) as i64),
    ASTBinaryOperator::LessThanOrEqual => Ok((left <= right) as i64),
    ASTBinaryOperator::GreaterThan => Ok((left > right) as i64),
    ASTBinaryOperator::GreaterThanOrEqual => Ok((left >= right) as i64),
    ASTBinaryOperator::And | ASTBinaryOperator::Or => Ok((right != 0) as i64),
  }
}

fn shift_amount(value: i64) -> Result<u32, ConstEvalError> {
  if (0..64).contains(&value) {
    Ok(value as u32)
  } else {
    Err(ConstEvalError::InvalidShift)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cinder_ast::expressions::{
    binary::ASTBinary, call::ASTCall, grouped::ASTGrouped, literal::ASTLiteral, ternary::ASTTernary, unary::ASTUnary,
    variable::{ASTTemplateParam, ASTVariable},
  };
  use cinder_type::{span::Span, symbol::SymbolTable};

  fn int(
    ast: &mut ASTStore,
    value: i64,
  ) -> NodeId {
    ast.alloc(ASTNode::Expression(ASTExpression::Literal(ASTLiteral::new(
      ASTLiteralValue::Int(value),
      Span::default(),
    ))))
  }

  fn binary(
    ast: &mut ASTStore,
    left: NodeId,
    operator: ASTBinaryOperator,
    right: NodeId,
  ) -> NodeId {
    ast.alloc(ASTNode::Expression(ASTExpression::Binary(ASTBinary::new(
      left,
      right,
      operator,
      Span::default(),
    ))))
  }

  #[test]
  fn test_arithmetic() {
    let mut ast = ASTStore::new();
    let two = int(&mut ast, 2);
    let three = int(&mut ast, 3);
    let four = int(&mut ast, 4);
    let product = binary(&mut ast, three, ASTBinaryOperator::Multiply, four);
    let sum = binary(&mut ast, two, ASTBinaryOperator::Add, product);
    let grouped = ast.alloc(ASTNode::Expression(ASTExpression::Grouped(ASTGrouped::new(
      sum,
      Span::default(),
    ))));

    assert_eq!(evaluate(&ast, &grouped), Ok(14));
  }

  #[test]
  fn test_negate_and_shift() {
    let mut ast = ASTStore::new();
    let one = int(&mut ast, 1);
    let three = int(&mut ast, 3);
    let shifted = binary(&mut ast, one, ASTBinaryOperator::ShiftLeft, three);
    let negated = ast.alloc(ASTNode::Expression(ASTExpression::Unary(ASTUnary::new(
      UnaryOperator::Negate,
      shifted,
      Span::default(),
    ))));

    assert_eq!(evaluate(&ast, &shifted), Ok(8));
    assert_eq!(evaluate(&ast, &negated), Ok(-8));
  }

  #[test]
  fn test_errors() {
    let mut ast = ASTStore::new();
    let mut symbols = SymbolTable::new();
    let n = symbols.intern("N");
    let one = int(&mut ast, 1);
    let zero = int(&mut ast, 0);
    let big = int(&mut ast, i64::MAX);
    let sixty_four = int(&mut ast, 64);

    let div = binary(&mut ast, one, ASTBinaryOperator::Divide, zero);
    let overflow = binary(&mut ast, big, ASTBinaryOperator::Add, one);
    let shift = binary(&mut ast, one, ASTBinaryOperator::ShiftLeft, sixty_four);
    let var = ast.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariable::new(
      n,
      Span::default(),
    ))));
    let param = ast.alloc(ASTNode::Expression(ASTExpression::TemplateParam(ASTTemplateParam::new(
      n,
      0,
      0,
      Span::default(),
    ))));
    let call = ast.alloc(ASTNode::Expression(ASTExpression::Call(ASTCall::new(
      var,
      vec![],
      Span::default(),
    ))));

    assert_eq!(evaluate(&ast, &div), Err(ConstEvalError::DivisionByZero));
    assert_eq!(evaluate(&ast, &overflow), Err(ConstEvalError::Overflow));
    assert_eq!(evaluate(&ast, &shift), Err(ConstEvalError::InvalidShift));
    assert_eq!(evaluate(&ast, &var), Err(ConstEvalError::NotConstant));
    assert_eq!(evaluate(&ast, &param), Err(ConstEvalError::ValueDependent));
    assert_eq!(evaluate(&ast, &call), Err(ConstEvalError::NotConstant));
  }

  #[test]
  fn test_short_circuit_skips_unevaluated_side() {
    let mut ast = ASTStore::new();
    let mut symbols = SymbolTable::new();
    let x = symbols.intern("x");
    let zero = int(&mut ast, 0);
    let one = int(&mut ast, 1);
    let four = int(&mut ast, 4);
    let var = ast.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariable::new(
      x,
      Span::default(),
    ))));

    let and = binary(&mut ast, zero, ASTBinaryOperator::And, var);
    let or = binary(&mut ast, one, ASTBinaryOperator::Or, var);
    let ternary = ast.alloc(ASTNode::Expression(ASTExpression::Ternary(ASTTernary::new(
      one,
      four,
      var,
      Span::default(),
    ))));

    assert_eq!(evaluate(&ast, &and), Ok(0));
    assert_eq!(evaluate(&ast, &or), Ok(1));
    assert_eq!(evaluate(&ast, &ternary), Ok(4));
  }
}
