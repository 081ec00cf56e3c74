//! JSON fixtures: a source text plus the statement trees a parser would
//! have produced for it, with raw attributes still attached.

use std::fmt;
use std::path::{Path, PathBuf};

use cinder_ast::{
  attribute::ASTAttributeSyntax,
  expressions::{binary::ASTBinaryOperator, unary::UnaryOperator},
};
use cinder_type::{BytePosition, file::FileId, span::Span};
use serde::Deserialize;

#[derive(Debug)]
pub enum FixtureError {
  IoError { path: PathBuf, source: std::io::Error },

  JsonError { path: PathBuf, message: String },

  /// A `{ "find": .. }` span whose text does not occur in the source.
  TextNotFound { text: String, nth: usize },

  /// A `[start, end]` span outside the source or reversed.
  InvalidRange { start: u32, end: u32, len: u32 },
}

impl fmt::Display for FixtureError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      FixtureError::IoError { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      FixtureError::JsonError { path, message } => {
        write!(f, "invalid fixture '{}': {}", path.display(), message)
      },

      FixtureError::TextNotFound { text, nth } => {
        write!(f, "occurrence {} of '{}' not found in fixture source", nth, text)
      },

      FixtureError::InvalidRange { start, end, len } => {
        write!(f, "span [{}, {}] is invalid for a source of {} bytes", start, end, len)
      },
    }
  }
}

impl std::error::Error for FixtureError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      FixtureError::IoError { source, .. } => Some(source),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
  #[serde(default)]
  pub name: Option<String>,

  pub source: String,

  #[serde(default)]
  pub statements: Vec<StmtFixture>,
}

impl Fixture {
  pub fn parse(
    path: &Path,
    content: &str,
  ) -> Result<Self, FixtureError> {
    serde_json::from_str(content).map_err(|e| FixtureError::JsonError {
      path: path.to_path_buf(),
      message: e.to_string(),
    })
  }

  pub fn load(path: &Path) -> Result<Self, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|e| FixtureError::IoError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(path, &content)
  }
}

/// Location in the fixture source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpanRef {
  /// `[start, end]` byte offsets.
  Range(u32, u32),
  /// `{ "find": "text", "nth": 0 }`: the `nth` occurrence of `text`.
  Find {
    find: String,
    #[serde(default)]
    nth: usize,
  },
}

impl SpanRef {
  pub fn resolve(
    &self,
    file: FileId,
    source: &str,
  ) -> Result<Span, FixtureError> {
    match self {
      SpanRef::Range(start, end) => {
        let len = source.len() as u32;
        if start > end || *end > len {
          return Err(FixtureError::InvalidRange {
            start: *start,
            end: *end,
            len,
          });
        }
        Ok(Span::new(file, BytePosition(*start), BytePosition(*end)))
      },
      SpanRef::Find { find, nth } => {
        let (start, _) = source
          .match_indices(find.as_str())
          .nth(*nth)
          .ok_or_else(|| FixtureError::TextNotFound {
            text: find.clone(),
            nth: *nth,
          })?;

        Ok(Span::new(
          file,
          BytePosition(start as u32),
          BytePosition((start + find.len()) as u32),
        ))
      },
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StmtFixture {
  #[serde(flatten)]
  pub kind: StmtKindFixture,

  pub at: SpanRef,

  #[serde(default)]
  pub attrs: Vec<AttrFixture>,

  /// Span of the whole attribute list, brackets included. Defaults to the
  /// union of the attribute spans.
  #[serde(default)]
  pub attr_range: Option<SpanRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StmtKindFixture {
  Null,
  Expr,
  Break,
  Continue,
  Return,
  Block {
    #[serde(default)]
    body: Vec<StmtFixture>,
  },
  If {
    then: Box<StmtFixture>,
    #[serde(default, rename = "else")]
    otherwise: Option<Box<StmtFixture>>,
  },
  Switch {
    #[serde(default)]
    body: Vec<StmtFixture>,
  },
  Case {
    #[serde(default)]
    value: i64,
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
  Default {
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
  For {
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
  ForRange {
    #[serde(default = "default_binding")]
    binding: String,
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
  While {
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
  DoWhile {
    #[serde(default)]
    body: Option<Box<StmtFixture>>,
  },
}

fn default_binding() -> String {
  "x".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxFixture {
  #[default]
  Standard,
  Gnu,
  Declspec,
  Pragma,
}

impl From<SyntaxFixture> for ASTAttributeSyntax {
  fn from(value: SyntaxFixture) -> ASTAttributeSyntax {
    match value {
      SyntaxFixture::Standard => ASTAttributeSyntax::Standard,
      SyntaxFixture::Gnu => ASTAttributeSyntax::Gnu,
      SyntaxFixture::Declspec => ASTAttributeSyntax::Declspec,
      SyntaxFixture::Pragma => ASTAttributeSyntax::Pragma,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttrFixture {
  pub name: String,

  #[serde(default)]
  pub syntax: SyntaxFixture,

  pub at: SpanRef,

  #[serde(default)]
  pub args: Vec<ArgFixture>,
}

/// Attribute argument. Expressions are tried first since an identifier
/// location is just `{ "at": .. }` with an optional name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArgFixture {
  Expr(ExprFixture),
  Ident {
    #[serde(default)]
    ident: Option<String>,
    at: SpanRef,
  },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum ExprFixture {
  Int {
    value: i64,
    at: SpanRef,
  },
  Bool {
    value: bool,
    at: SpanRef,
  },
  Var {
    name: String,
    at: SpanRef,
  },
  TemplateParam {
    name: String,
    at: SpanRef,
  },
  Unary {
    op: UnaryOpFixture,
    operand: Box<ExprFixture>,
    at: SpanRef,
  },
  Binary {
    op: BinaryOpFixture,
    left: Box<ExprFixture>,
    right: Box<ExprFixture>,
    at: SpanRef,
  },
  Grouped {
    inner: Box<ExprFixture>,
    at: SpanRef,
  },
  Ternary {
    condition: Box<ExprFixture>,
    then: Box<ExprFixture>,
    #[serde(rename = "else")]
    otherwise: Box<ExprFixture>,
    at: SpanRef,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnaryOpFixture {
  #[serde(rename = "-")]
  Negate,
  #[serde(rename = "+")]
  Plus,
  #[serde(rename = "!")]
  Not,
  #[serde(rename = "~")]
  BitNot,
}

impl From<UnaryOpFixture> for UnaryOperator {
  fn from(value: UnaryOpFixture) -> UnaryOperator {
    match value {
      UnaryOpFixture::Negate => UnaryOperator::Negate,
      UnaryOpFixture::Plus => UnaryOperator::Plus,
      UnaryOpFixture::Not => UnaryOperator::Not,
      UnaryOpFixture::BitNot => UnaryOperator::BitNot,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BinaryOpFixture {
  #[serde(rename = "+")]
  Add,
  #[serde(rename = "-")]
  Subtract,
  #[serde(rename = "*")]
  Multiply,
  #[serde(rename = "/")]
  Divide,
  #[serde(rename = "%")]
  Modulo,
  #[serde(rename = "<<")]
  ShiftLeft,
  #[serde(rename = ">>")]
  ShiftRight,
  #[serde(rename = "&")]
  BitAnd,
  #[serde(rename = "|")]
  BitOr,
  #[serde(rename = "^")]
  BitXor,
  #[serde(rename = "==")]
  Equal,
  #[serde(rename = "!=")]
  NotEqual,
  #[serde(rename = "<")]
  LessThan,
  #[serde(rename = "<=")]
  LessThanOrEqual,
  #[serde(rename = ">")]
  GreaterThan,
  #[serde(rename = ">=")]
  GreaterThanOrEqual,
  #[serde(rename = "&&")]
  And,
  #[serde(rename = "||")]
  Or,
}

impl From<BinaryOpFixture> for ASTBinaryOperator {
  fn from(value: BinaryOpFixture) -> ASTBinaryOperator {
    match value {
      BinaryOpFixture::Add => ASTBinaryOperator::Add,
      BinaryOpFixture::Subtract => ASTBinaryOperator::Subtract,
      BinaryOpFixture::Multiply => ASTBinaryOperator::Multiply,
      BinaryOpFixture::Divide => ASTBinaryOperator::Divide,
      BinaryOpFixture::Modulo => ASTBinaryOperator::Modulo,
      BinaryOpFixture::ShiftLeft => ASTBinaryOperator::ShiftLeft,
      BinaryOpFixture::ShiftRight => ASTBinaryOperator::ShiftRight,
      BinaryOpFixture::BitAnd => ASTBinaryOperator::BitAnd,
      BinaryOpFixture::BitOr => ASTBinaryOperator::BitOr,
      BinaryOpFixture::BitXor => ASTBinaryOperator::BitXor,
      BinaryOpFixture::Equal => ASTBinaryOperator::Equal,
      BinaryOpFixture::NotEqual => ASTBinaryOperator::NotEqual,
      BinaryOpFixture::LessThan => ASTBinaryOperator::LessThan,
      BinaryOpFixture::LessThanOrEqual => ASTBinaryOperator::LessThanOrEqual,
      BinaryOpFixture::GreaterThan => ASTBinaryOperator::GreaterThan,
      BinaryOpFixture::GreaterThanOrEqual => ASTBinaryOperator::GreaterThanOrEqual,
      BinaryOpFixture::And => ASTBinaryOperator::And,
      BinaryOpFixture::Or => ASTBinaryOperator::Or,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(json: &str) -> Fixture {
    Fixture::parse(Path::new("test.json"), json).unwrap()
  }

  #[test]
  fn test_parse_statement_tree() {
    let fixture = parse(
      r#"{
        "name": "missing semicolon",
        "source": "switch (n) {\ncase 1:\n  [[fallthrough]]\ncase 2:\n  break;\n}\n",
        "statements": [
          {
            "kind": "switch",
            "at": [0, 52],
            "body": [
              { "kind": "case", "at": { "find": "case 1:" } },
              {
                "kind": "case",
                "value": 2,
                "at": { "find": "case 2:" },
                "attrs": [{ "name": "fallthrough", "at": { "find": "fallthrough" } }],
                "attr_range": { "find": "[[fallthrough]]" }
              }
            ]
          }
        ]
      }"#,
    );

    assert_eq!(fixture.name.as_deref(), Some("missing semicolon"));
    let StmtKindFixture::Switch { body } = &fixture.statements[0].kind else {
      panic!("expected switch");
    };
    assert_eq!(body.len(), 2);
    assert!(matches!(body[1].kind, StmtKindFixture::Case { value: 2, .. }));
    assert_eq!(body[1].attrs[0].syntax, SyntaxFixture::Standard);
    assert!(body[1].attr_range.is_some());
  }

  #[test]
  fn test_parse_attribute_arguments() {
    let fixture = parse(
      r#"{
        "source": "x",
        "statements": [{
          "kind": "for",
          "at": [0, 1],
          "attrs": [{
            "name": "loop",
            "syntax": "pragma",
            "at": [0, 1],
            "args": [
              { "ident": "unroll_count", "at": [0, 1] },
              { "at": [0, 1] },
              { "expr": "binary", "op": "*", "at": [0, 1],
                "left": { "expr": "int", "value": 2, "at": [0, 1] },
                "right": { "expr": "template_param", "name": "N", "at": [0, 1] } }
            ]
          }]
        }]
      }"#,
    );

    let args = &fixture.statements[0].attrs[0].args;
    assert!(matches!(&args[0], ArgFixture::Ident { ident: Some(name), .. } if name == "unroll_count"));
    assert!(matches!(&args[1], ArgFixture::Ident { ident: None, .. }));
    assert!(matches!(
      &args[2],
      ArgFixture::Expr(ExprFixture::Binary {
        op: BinaryOpFixture::Multiply,
        ..
      })
    ));
  }

  #[test]
  fn test_invalid_json_is_reported() {
    let err = Fixture::parse(Path::new("bad.json"), "{ \"source\": 3 }").unwrap_err();

    assert!(matches!(err, FixtureError::JsonError { .. }));
    assert!(err.to_string().starts_with("invalid fixture 'bad.json'"));
  }

  #[test]
  fn test_resolve_spans() {
    let file = FileId::new(0);
    let source = "a; b; a;";

    let second = SpanRef::Find {
      find: "a;".to_string(),
      nth: 1,
    };
    let span = second.resolve(file, source).unwrap();
    assert_eq!((span.start, span.end), (BytePosition(6), BytePosition(8)));

    assert_eq!(
      SpanRef::Range(3, 4).resolve(file, source).unwrap().start,
      BytePosition(3)
    );
    assert!(matches!(
      SpanRef::Range(4, 99).resolve(file, source),
      Err(FixtureError::InvalidRange { len: 8, .. })
    ));
    assert!(matches!(
      SpanRef::Find {
        find: "c".to_string(),
        nth: 0
      }
      .resolve(file, source),
      Err(FixtureError::TextNotFound { .. })
    ));
  }
}
