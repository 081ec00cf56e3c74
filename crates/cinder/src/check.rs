use std::path::{Path, PathBuf};

use cinder_config::CinderConfig;
use cinder_diagnostics::{count_severity, diagnostic_report::Diagnostic, diagnostic_report::Severity, render_batch};
use cinder_log::{log_dbg, log_trc, phase_log, phase_ok, phase_warn};
use cinder_sema::Sema;
use cinder_type::file::SourceMap;
use colored::Colorize;

use crate::{
  fixture::{Fixture, FixtureError},
  lower::{AttributedStmt, Lowering},
};

/// Result of checking one fixture.
pub struct FixtureReport {
  pub source_map: SourceMap,
  pub diagnostics: Vec<Diagnostic>,
  pub attributed: Vec<AttributedStmt>,
}

impl FixtureReport {
  /// One line per attributed statement: `line:col kind: attr, attr`.
  pub fn dump_attributes(&self) -> String {
    let mut out = String::new();

    for stmt in &self.attributed {
      let (line, col) = self.source_map.line_col(&stmt.span.file, stmt.span.start);
      let attrs: Vec<String> = stmt.attributes.iter().map(|attr| attr.to_string()).collect();

      out.push_str(&format!("{}:{} {}: {}\n", line, col, stmt.kind, attrs.join(", ")));
    }

    out
  }
}

pub fn check_fixture(
  config: &CinderConfig,
  path: &Path,
  fixture: &Fixture,
) -> Result<FixtureReport, FixtureError> {
  let mut source_map = SourceMap::new();
  let file = source_map.add_file(path, fixture.source.clone());
  let mut sema = Sema::new(config);

  let attributed = {
    let mut lowering = Lowering::new(&mut sema, file, &fixture.source);
    lowering.lower_fixture(fixture)?;
    lowering.attributed
  };

  Ok(FixtureReport {
    source_map,
    diagnostics: sema.take_diagnostics(),
    attributed,
  })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
  pub errors: usize,
  pub warnings: usize,
  /// Fixtures that could not be loaded or lowered.
  pub broken: usize,
}

impl CheckSummary {
  pub fn failed(
    &self,
    deny_warnings: bool,
  ) -> bool {
    self.errors > 0 || self.broken > 0 || (deny_warnings && self.warnings > 0)
  }
}

/// Check every fixture, rendering diagnostics (and attribute dumps) to stdout.
pub fn run(
  config: &CinderConfig,
  fixtures: &[PathBuf],
) -> CheckSummary {
  let mut summary = CheckSummary::default();

  for path in fixtures {
    phase_log!(config, "Checking {}", path.display());

    let report = match Fixture::load(path).and_then(|fixture| check_fixture(config, path, &fixture)) {
      Ok(report) => report,
      Err(err) => {
        eprintln!("{} {}", "error:".red().bold(), err);
        summary.broken += 1;
        continue;
      },
    };

    log_trc!(config, "{}: {} attributed statement(s)", path.display(), report.attributed.len());
    render_batch(&report.diagnostics, &report.source_map);

    if config.dump_attrs {
      print!("{}", report.dump_attributes());
    }

    let errors = count_severity(&report.diagnostics, Severity::Error);
    let warnings = count_severity(&report.diagnostics, Severity::Warning);
    log_dbg!(config, "{}: {} error(s), {} warning(s)", path.display(), errors, warnings);

    summary.errors += errors;
    summary.warnings += warnings;
  }

  if summary.failed(config.deny_warnings) {
    phase_warn!(
      config,
      "{} error(s), {} warning(s) in {} fixture(s)",
      summary.errors,
      summary.warnings,
      fixtures.len()
    );
  } else {
    phase_ok!(config, "{} fixture(s) ok", fixtures.len());
  }

  summary
}
