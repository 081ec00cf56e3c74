use cinder_type::{span::Span, symbol::SymbolId};

use crate::NodeId;

/// How an attribute was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ASTAttributeSyntax {
  /// `[[name]]` or `[[clang::name]]`
  Standard,
  /// `__attribute__((name))`
  Gnu,
  /// `__declspec(name)`
  Declspec,
  /// `#pragma clang loop name(...)`
  Pragma,
}

/// Kind tag assigned by the parser.
///
/// `Unknown` covers every spelling the parser does not recognize. The
/// declaration-only kinds are known attributes that are never valid in
/// statement position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ASTAttributeKind {
  Unknown,
  FallThrough,
  LoopHint,
  Aligned,
  AlwaysInline,
  Cold,
  Deprecated,
  NoDiscard,
  NoReturn,
  Packed,
  Unused,
}

impl ASTAttributeKind {
  /// Resolve an attribute spelling to its kind.
  ///
  /// Accepts an optional `clang::` or `gnu::` scope and GNU-style
  /// `__name__` wrapping.
  pub fn from_name(
    name: &str,
    syntax: ASTAttributeSyntax,
  ) -> Self {
    if syntax == ASTAttributeSyntax::Pragma {
      return match name {
        "loop" | "clang loop" => ASTAttributeKind::LoopHint,
        _ => ASTAttributeKind::Unknown,
      };
    }

    let name = name
      .strip_prefix("clang::")
      .or_else(|| name.strip_prefix("gnu::"))
      .unwrap_or(name);
    let name = name
      .strip_prefix("__")
      .and_then(|n| n.strip_suffix("__"))
      .unwrap_or(name);

    match name {
      "fallthrough" => ASTAttributeKind::FallThrough,
      "aligned" => ASTAttributeKind::Aligned,
      "always_inline" => ASTAttributeKind::AlwaysInline,
      "cold" => ASTAttributeKind::Cold,
      "deprecated" => ASTAttributeKind::Deprecated,
      "nodiscard" | "warn_unused_result" => ASTAttributeKind::NoDiscard,
      "noreturn" => ASTAttributeKind::NoReturn,
      "packed" => ASTAttributeKind::Packed,
      "unused" | "maybe_unused" => ASTAttributeKind::Unused,
      _ => ASTAttributeKind::Unknown,
    }
  }
}

/// Identifier argument slot. `ident` is `None` when the slot exists but
/// holds no identifier (e.g. `unroll_count(8)` has an empty keyword slot).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ASTIdentifierLoc {
  pub ident: Option<SymbolId>,
  pub span: Span,
}

impl ASTIdentifierLoc {
  pub fn new(
    ident: Option<SymbolId>,
    span: Span,
  ) -> Self {
    Self { ident, span }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ASTAttributeArg {
  Identifier(ASTIdentifierLoc),
  Expression(NodeId),
}

/// Parsed but unvalidated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ASTAttribute {
  pub kind: ASTAttributeKind,
  pub name: SymbolId,
  pub args: Vec<ASTAttributeArg>,
  pub span: Span,
  pub syntax: ASTAttributeSyntax,
}

impl ASTAttribute {
  pub fn new(
    kind: ASTAttributeKind,
    name: SymbolId,
    args: Vec<ASTAttributeArg>,
    span: Span,
    syntax: ASTAttributeSyntax,
  ) -> Self {
    Self {
      kind,
      name,
      args,
      span,
      syntax,
    }
  }

  pub fn is_declspec(&self) -> bool {
    self.syntax == ASTAttributeSyntax::Declspec
  }

  pub fn arg_as_ident(
    &self,
    index: usize,
  ) -> Option<&ASTIdentifierLoc> {
    match self.args.get(index)? {
      ASTAttributeArg::Identifier(loc) => Some(loc),
      ASTAttributeArg::Expression(_) => None,
    }
  }

  pub fn arg_as_expr(
    &self,
    index: usize,
  ) -> Option<&NodeId> {
    match self.args.get(index)? {
      ASTAttributeArg::Expression(expr) => Some(expr),
      ASTAttributeArg::Identifier(_) => None,
    }
  }
}

/// Attributes written in front of one statement, with the source range
/// they cover.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ASTAttributeList {
  pub attributes: Vec<ASTAttribute>,
  pub range: Span,
}

impl ASTAttributeList {
  pub fn new(
    attributes: Vec<ASTAttribute>,
    range: Span,
  ) -> Self {
    Self { attributes, range }
  }

  pub fn is_empty(&self) -> bool {
    self.attributes.is_empty()
  }
}
