use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use cinder_config::DebugTrace;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum DebugTraceCli {
  /// Attribute dispatch
  Attributes,
  /// Loop-hint compatibility checks
  Compat,
  /// Constant evaluation of loop-hint values
  ConstEval,
  /// Fixture loading and lowering
  Fixture,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Attributes => DebugTrace::Attributes,
      DebugTraceCli::Compat => DebugTrace::Compat,
      DebugTraceCli::ConstEval => DebugTrace::ConstEval,
      DebugTraceCli::Fixture => DebugTrace::Fixture,
    }
  }
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckCommand {
  /// Fixture files to check, or nothing to use the cinder.toml fixture list
  pub fixtures: Vec<String>,

  /// Explicit project directory (overrides auto-detection)
  #[arg(long)]
  pub project: Option<String>,

  /// Treat warnings as errors
  #[arg(long)]
  pub deny_warnings: bool,

  /// Print the validated attributes of every attributed statement
  #[arg(long)]
  pub dump_attrs: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SubCommand {
  /// Validate statement attributes in one or more fixtures
  Check(CheckCommand),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Statement attribute checker", long_about = None)]
#[command(propagate_version = true)]
#[command(color = ColorChoice::Auto)]
pub struct Cli {
  #[command(subcommand)]
  pub subcommand: SubCommand,

  /// Enable internal debug mode
  #[arg(long, default_value = "false", global = true)]
  pub debug: bool,

  /// Enable debug tracing for subsystems
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Don't print any output
  #[arg(long, short = 'q', default_value = "false", global = true)]
  pub quiet: bool,

  /// Use verbose output
  #[arg(long, short, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_check() {
    let cli = Cli::parse_from([
      "cinder",
      "check",
      "a.json",
      "b.json",
      "--dump-attrs",
      "--debug-trace",
      "compat",
      "-vv",
    ]);

    let SubCommand::Check(check) = &cli.subcommand;
    assert_eq!(check.fixtures, vec!["a.json".to_string(), "b.json".to_string()]);
    assert!(check.dump_attrs);
    assert!(!check.deny_warnings);
    assert_eq!(cli.debug_trace, vec![DebugTraceCli::Compat]);
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn test_check_without_fixtures() {
    let cli = Cli::parse_from(["cinder", "--quiet", "check", "--project", "demos"]);

    let SubCommand::Check(check) = &cli.subcommand;
    assert!(check.fixtures.is_empty());
    assert_eq!(check.project.as_deref(), Some("demos"));
    assert!(cli.quiet);
  }
}
