use cinder_type::{span::Span, symbol::SymbolId};

/// Reference to a runtime variable. Never a constant expression here.
#[derive(Debug, PartialEq, Clone)]
pub struct ASTVariable {
  pub name: SymbolId,
  pub span: Span,
}

impl ASTVariable {
  pub fn new(
    name: SymbolId,
    span: Span,
  ) -> Self {
    Self { name, span }
  }
}

/// Reference to a non-type template parameter. The value depends on the
/// instantiation, so it cannot be evaluated when the template is parsed.
#[derive(Debug, PartialEq, Clone)]
pub struct ASTTemplateParam {
  pub name: SymbolId,
  pub depth: u32,
  pub index: u32,
  pub span: Span,
}

impl ASTTemplateParam {
  pub fn new(
    name: SymbolId,
    depth: u32,
    index: u32,
    span: Span,
  ) -> Self {
    Self {
      name,
      depth,
      index,
      span,
    }
  }
}
