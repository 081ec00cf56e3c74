use cinder_ast::{
  ASTNode, ASTStore, NodeId,
  attribute::{ASTAttribute, ASTAttributeArg, ASTAttributeKind, ASTAttributeSyntax, ASTIdentifierLoc},
  expressions::{
    ASTExpression,
    literal::{ASTLiteral, ASTLiteralValue},
    variable::{ASTTemplateParam, ASTVariable},
  },
  statements::{
    ASTExpressionStatement, ASTStatement,
    for_statement::{ASTFor, ASTForRange},
    switch_statement::{ASTCase, ASTDefault},
    while_statement::{ASTDoWhile, ASTWhile},
  },
};
use cinder_config::CinderConfig;
use cinder_diagnostics::diagnostic_report::{Diagnostic, Severity};
use cinder_sema::{Sema, StmtAttrResult};
use cinder_type::{BytePosition, file::FileId, file::SourceMap, span::Span, symbol::SymbolTable};

/// Builds statements and attributes whose spans point into `source`.
///
/// Nodes are located by searching the source text, so every needle a test
/// uses has to occur in it.
pub struct Harness {
  pub source_map: SourceMap,
  pub file: FileId,
  pub ast: ASTStore,
  pub symbols: SymbolTable,
  pub config: CinderConfig,
}

#[allow(dead_code)]
impl Harness {
  pub fn new(src: &str) -> Self {
    let mut source_map = SourceMap::new();
    let file = source_map.add_file("test.c", src.to_string());

    Self {
      source_map,
      file,
      ast: ASTStore::new(),
      symbols: SymbolTable::new(),
      config: CinderConfig::new_basic(false, vec![], true, 0),
    }
  }

  /// Span of the `n`th (0-based) occurrence of `needle`.
  pub fn span_nth(
    &self,
    needle: &str,
    n: usize,
  ) -> Span {
    let text = &self.source_map.get(&self.file).text;
    let (start, _) = text
      .match_indices(needle)
      .nth(n)
      .unwrap_or_else(|| panic!("'{}' (occurrence {}) not found in source", needle, n));

    Span::new(
      self.file,
      BytePosition(start as u32),
      BytePosition((start + needle.len()) as u32),
    )
  }

  pub fn span(
    &self,
    needle: &str,
  ) -> Span {
    self.span_nth(needle, 0)
  }

  fn stmt(
    &mut self,
    stmt: ASTStatement,
  ) -> NodeId {
    self.ast.alloc(ASTNode::Statement(stmt))
  }

  fn expr(
    &mut self,
    expr: ASTExpression,
  ) -> NodeId {
    self.ast.alloc(ASTNode::Expression(expr))
  }

  /// Empty statement used as a loop or label body.
  fn empty_body(
    &mut self,
    after: &Span,
  ) -> NodeId {
    self.stmt(ASTStatement::Null(after.end_point()))
  }

  pub fn int(
    &mut self,
    value: i64,
    span: Span,
  ) -> NodeId {
    self.expr(ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Int(value), span)))
  }

  pub fn variable(
    &mut self,
    name: &str,
    span: Span,
  ) -> NodeId {
    let name = self.symbols.intern(name);
    self.expr(ASTExpression::Variable(ASTVariable::new(name, span)))
  }

  pub fn template_param(
    &mut self,
    name: &str,
    span: Span,
  ) -> NodeId {
    let name = self.symbols.intern(name);
    self.expr(ASTExpression::TemplateParam(ASTTemplateParam::new(name, 0, 0, span)))
  }

  pub fn null_stmt(
    &mut self,
    needle: &str,
    n: usize,
  ) -> NodeId {
    let span = self.span_nth(needle, n);
    self.stmt(ASTStatement::Null(span))
  }

  pub fn expr_stmt(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let expression = self.int(1, span.clone());

    self.stmt(ASTStatement::Expression(ASTExpressionStatement { expression, span }))
  }

  pub fn case_label(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let value = self.int(0, span.clone());
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::Case(ASTCase::new(value, body, span)))
  }

  pub fn default_label(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::Default(ASTDefault::new(body, span)))
  }

  pub fn for_loop(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::For(ASTFor::new(None, None, None, body, span)))
  }

  pub fn range_for_loop(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let binding = self.symbols.intern("x");
    let range = self.variable("xs", span.clone());
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::ForRange(ASTForRange::new(binding, range, body, span)))
  }

  pub fn while_loop(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let condition = self.int(1, span.clone());
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::While(ASTWhile::new(condition, body, span)))
  }

  pub fn do_while_loop(
    &mut self,
    needle: &str,
  ) -> NodeId {
    let span = self.span(needle);
    let condition = self.int(0, span.clone());
    let body = self.empty_body(&span);

    self.stmt(ASTStatement::DoWhile(ASTDoWhile::new(body, condition, span)))
  }

  /// `[[name]]`-style attribute without arguments.
  pub fn attr(
    &mut self,
    name: &str,
    syntax: ASTAttributeSyntax,
  ) -> ASTAttribute {
    let span = self.span(name);
    let kind = ASTAttributeKind::from_name(name, syntax);
    let name = self.symbols.intern(name);

    ASTAttribute::new(kind, name, vec![], span, syntax)
  }

  pub fn fallthrough(&mut self) -> ASTAttribute {
    self.attr("fallthrough", ASTAttributeSyntax::Standard)
  }

  /// Loop hint written as `option(value)` in the source, e.g.
  /// `unroll(disable)` or `unroll_count(4)`.
  ///
  /// Integer values become literals. Any other value is a keyword for
  /// enable/disable options and a variable reference for numeric ones.
  pub fn hint_nth(
    &mut self,
    text: &str,
    n: usize,
  ) -> ASTAttribute {
    let span = self.span_nth(text, n);
    let open = text.find('(').unwrap_or(text.len());
    let option = &text[..open];
    let value = text[open..].trim_start_matches('(').trim_end_matches(')');

    let option_span = Span::new(self.file, span.start, BytePosition(span.start.0 + option.len() as u32));
    let value_start = span.start.0 + (open as u32) + 1;
    let value_span = Span::new(
      self.file,
      BytePosition(value_start),
      BytePosition(value_start + value.len() as u32),
    );

    let numeric = option.ends_with("_width") || option.ends_with("_count");
    let mut args = vec![ASTAttributeArg::Identifier(ASTIdentifierLoc::new(
      Some(self.symbols.intern(option)),
      option_span,
    ))];

    if numeric {
      let expr = match value.parse::<i64>() {
        Ok(int) => self.int(int, value_span.clone()),
        Err(_) => self.variable(value, value_span.clone()),
      };
      args.push(ASTAttributeArg::Identifier(ASTIdentifierLoc::new(None, value_span)));
      args.push(ASTAttributeArg::Expression(expr));
    } else {
      let keyword = value.parse::<i64>().is_err().then(|| self.symbols.intern(value));
      args.push(ASTAttributeArg::Identifier(ASTIdentifierLoc::new(keyword, value_span)));
    }

    let name = self.symbols.intern("loop");
    ASTAttribute::new(ASTAttributeKind::LoopHint, name, args, span, ASTAttributeSyntax::Pragma)
  }

  pub fn hint(
    &mut self,
    text: &str,
  ) -> ASTAttribute {
    self.hint_nth(text, 0)
  }

  /// Numeric loop hint with a caller-built value expression.
  pub fn hint_with_expr(
    &mut self,
    text: &str,
    option: &str,
    value: NodeId,
  ) -> ASTAttribute {
    let span = self.span(text);
    let value_span = self.ast.get(&value).span().clone();
    let option_span = Span::new(self.file, span.start, BytePosition(span.start.0 + option.len() as u32));
    let args = vec![
      ASTAttributeArg::Identifier(ASTIdentifierLoc::new(Some(self.symbols.intern(option)), option_span)),
      ASTAttributeArg::Identifier(ASTIdentifierLoc::new(None, value_span)),
      ASTAttributeArg::Expression(value),
    ];

    let name = self.symbols.intern("loop");
    ASTAttribute::new(ASTAttributeKind::LoopHint, name, args, span, ASTAttributeSyntax::Pragma)
  }

  /// Run attribute processing on `stmt` with a fresh analyzer.
  ///
  /// `in_switch` opens one `switch` around the statement first.
  pub fn process(
    &mut self,
    stmt: NodeId,
    attrs: &[ASTAttribute],
    in_switch: bool,
  ) -> Processed {
    let range = attrs
      .iter()
      .map(|attr| attr.span.clone())
      .reduce(|a, b| Span::merge(&a, &b))
      .unwrap_or_else(|| self.ast.get(&stmt).span().start_point());

    self.process_with_range(stmt, attrs, range, in_switch)
  }

  /// Like [`Harness::process`], with the attribute list covering `range`
  /// (brackets included).
  pub fn process_with_range(
    &mut self,
    stmt: NodeId,
    attrs: &[ASTAttribute],
    range: Span,
    in_switch: bool,
  ) -> Processed {
    let mut sema = Sema::new(&self.config);
    if in_switch {
      sema.act_on_start_of_switch(Span::empty_at(self.file, BytePosition(0)));
    }

    let result = sema.process_stmt_attributes(&self.ast, &self.symbols, &stmt, attrs, &range);

    if in_switch {
      sema.act_on_finish_switch();
    }

    Processed {
      result,
      diagnostics: sema.take_diagnostics(),
    }
  }

  /// 1-based line and column of a diagnostic's primary location.
  pub fn line_col(
    &self,
    diag: &Diagnostic,
  ) -> (u32, u32) {
    self
      .source_map
      .line_col(&diag.primary_span.file, diag.primary_span.start)
  }

  /// Format diagnostics for stable snapshot comparison (sorted by position)
  pub fn format_diagnostics(
    &self,
    diags: &[Diagnostic],
  ) -> String {
    let mut sorted = diags.to_vec();
    sorted.sort_by(|a, b| {
      a.primary_span
        .start
        .cmp(&b.primary_span.start)
        .then_with(|| a.error_code.cmp(&b.error_code))
    });

    if sorted.is_empty() {
      return "(no diagnostics)".to_string();
    }

    let mut output = String::new();
    for diag in &sorted {
      let severity = match diag.severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARN",
        Severity::Info => "INFO",
        Severity::Hint => "HINT",
      };
      let (line, col) = self.line_col(diag);
      output.push_str(&format!("[{}] {}: {}\n  at {}:{}\n", severity, diag.error_code, diag.message, line, col));

      for label in &diag.labels {
        let (line, col) = self.source_map.line_col(&label.span.file, label.span.start);
        output.push_str(&format!("  label: {} at {}:{}\n", label.message, line, col));
      }
      for note in &diag.notes {
        output.push_str(&format!("  note: {}\n", note));
      }
      for fixit in &diag.fixits {
        let (line, col) = self.source_map.line_col(&fixit.span.file, fixit.span.start);
        output.push_str(&format!("  fix-it: insert '{}' at {}:{}\n", fixit.replacement, line, col));
      }
    }
    output
  }
}

pub struct Processed {
  pub result: StmtAttrResult,
  pub diagnostics: Vec<Diagnostic>,
}

#[allow(dead_code)]
impl Processed {
  pub fn codes(&self) -> Vec<&str> {
    self.diagnostics.iter().map(|d| d.error_code.as_str()).collect()
  }

  /// Kept attributes rendered as `fallthrough` / `loop unroll(disable)`.
  pub fn kept(&self) -> Vec<String> {
    self.result.attributes().iter().map(|attr| attr.to_string()).collect()
  }
}
