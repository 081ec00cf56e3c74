use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugTrace {
  /// Attribute dispatch and validation.
  Attributes,
  /// Loop-hint compatibility checking.
  Compat,
  /// Integer constant folding of loop-hint values.
  ConstEval,
  /// Fixture loading and lowering.
  Fixture,
}

/// Root structure of cinder.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct CinderProjectToml {
  pub package: PackageConfig,

  #[serde(default)]
  pub check: CheckTomlConfig,
}

/// The `[package]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageConfig {
  pub name: String,

  #[serde(default = "default_version")]
  pub version: String,

  #[serde(default)]
  pub description: String,
}

/// The `[check]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CheckTomlConfig {
  /// Fixture files relative to the project root. Used when the command
  /// line names none.
  #[serde(default)]
  pub fixtures: Vec<String>,

  /// Treat warnings (unknown attributes) as failures. Default: false.
  #[serde(default)]
  pub deny_warnings: bool,

  /// Print the validated attributes of every statement. Default: false.
  #[serde(default)]
  pub dump_attrs: bool,
}

fn default_version() -> String {
  "0.1.0".to_string()
}

impl CinderProjectToml {
  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }
}

#[derive(Debug, Clone, Default)]
pub struct CinderConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub deny_warnings: bool,
  pub dump_attrs: bool,
  pub project: Option<CinderProjectToml>,
}

impl CinderConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      ..Self::default()
    }
  }

  /// Merge settings from cinder.toml. Flags already set on the command line win.
  pub fn apply_project(
    &mut self,
    project: CinderProjectToml,
  ) {
    self.deny_warnings |= project.check.deny_warnings;
    self.dump_attrs |= project.check.dump_attrs;
    self.project = Some(project);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_minimal_toml() {
    let toml_str = r#"
[package]
name = "loops"
"#;
    let parsed = CinderProjectToml::parse(toml_str).unwrap();

    assert_eq!(parsed.package.name, "loops");
    assert_eq!(parsed.package.version, "0.1.0");
    assert!(parsed.check.fixtures.is_empty());
    assert!(!parsed.check.deny_warnings);
    assert!(!parsed.check.dump_attrs);
  }

  #[test]
  fn test_check_section() {
    let toml_str = r#"
[package]
name = "loops"
version = "0.3.0"

[check]
fixtures = ["fixtures/unroll.json", "fixtures/switch.json"]
deny_warnings = true
"#;
    let parsed = CinderProjectToml::parse(toml_str).unwrap();

    assert_eq!(parsed.check.fixtures.len(), 2);
    assert!(parsed.check.deny_warnings);

    let mut config = CinderConfig::new_basic(false, vec![], false, 0);
    config.apply_project(parsed);

    assert!(config.deny_warnings);
    assert!(!config.dump_attrs);
    assert!(config.project.is_some());
  }

  #[test]
  fn test_missing_package_is_error() {
    assert!(CinderProjectToml::parse("[check]\ndeny_warnings = true\n").is_err());
  }
}
