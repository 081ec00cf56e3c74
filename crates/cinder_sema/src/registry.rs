use cinder_ast::attribute::ASTAttributeKind;

/// How the driver treats an attribute kind in statement position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StmtAttrHandler {
  /// Spelling the parser did not recognize: warn and drop.
  Unknown,
  FallThrough,
  LoopHint,
  /// Known attribute that only applies to declarations: error and drop.
  DeclarationOnly,
}

pub(crate) fn handler_for(kind: ASTAttributeKind) -> StmtAttrHandler {
  match kind {
    ASTAttributeKind::Unknown => StmtAttrHandler::Unknown,
    ASTAttributeKind::FallThrough => StmtAttrHandler::FallThrough,
    ASTAttributeKind::LoopHint => StmtAttrHandler::LoopHint,
    ASTAttributeKind::Aligned
    | ASTAttributeKind::AlwaysInline
    | ASTAttributeKind::Cold
    | ASTAttributeKind::Deprecated
    | ASTAttributeKind::NoDiscard
    | ASTAttributeKind::NoReturn
    | ASTAttributeKind::Packed
    | ASTAttributeKind::Unused => StmtAttrHandler::DeclarationOnly,
  }
}
