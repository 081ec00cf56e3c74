mod check;
mod cli;
mod fixture;
mod lower;
mod project;

use std::path::PathBuf;

use clap::Parser as ClapParser;
use cinder_config::CinderConfig;
use cinder_log::log_dbg;
use colored::Colorize;

use cli::{CheckCommand, Cli, SubCommand};
use project::{PROJECT_FILE, ProjectError, find_project_root, load_project_toml, project_fixtures};

fn parse_cli_to_config(cli: &Cli) -> CinderConfig {
  let mut config = CinderConfig::new_basic(
    cli.debug,
    cli.debug_trace.iter().copied().map(Into::into).collect(),
    cli.quiet,
    cli.verbose,
  );

  match &cli.subcommand {
    SubCommand::Check(check) => {
      config.deny_warnings = check.deny_warnings;
      config.dump_attrs = check.dump_attrs;
    },
  }

  config
}

/// Apply the nearest cinder.toml and decide which fixtures to check.
///
/// Fixtures named on the command line win over the `[check]` list.
fn resolve_fixtures(
  config: &mut CinderConfig,
  check: &CheckCommand,
) -> Result<Vec<PathBuf>, ProjectError> {
  let start = match &check.project {
    Some(dir) => PathBuf::from(dir),
    None => std::env::current_dir().map_err(|e| ProjectError::IoError {
      path: PathBuf::from("."),
      source: e,
    })?,
  };

  let root = match find_project_root(&start) {
    Some(root) => root,
    None if check.project.is_some() => return Err(ProjectError::NotFound { searched_from: start }),
    None => return Ok(check.fixtures.iter().map(PathBuf::from).collect()),
  };

  let project = load_project_toml(&root.join(PROJECT_FILE))?;
  log_dbg!(config, "using project '{}' at {}", project.package.name, root.display());

  let fixtures = if check.fixtures.is_empty() {
    project_fixtures(&root, &project)?
  } else {
    check.fixtures.iter().map(PathBuf::from).collect()
  };

  config.apply_project(project);
  Ok(fixtures)
}

fn exit_with_error(message: &dyn std::fmt::Display) -> ! {
  eprintln!("{} {}", "error:".red().bold(), message);
  std::process::exit(1);
}

fn main() {
  let cli = Cli::parse();
  let mut config = parse_cli_to_config(&cli);

  let SubCommand::Check(check) = &cli.subcommand;

  let fixtures = match resolve_fixtures(&mut config, check) {
    Ok(fixtures) => fixtures,
    Err(err) => exit_with_error(&err),
  };

  if fixtures.is_empty() {
    exit_with_error(&format!(
      "no fixtures given. Pass fixture files or list them under [check] in {}",
      PROJECT_FILE
    ));
  }

  let summary = check::run(&config, &fixtures);

  if summary.failed(config.deny_warnings) {
    std::process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::Path;

  fn check_command(
    fixtures: &[&str],
    project: Option<&Path>,
  ) -> CheckCommand {
    CheckCommand {
      fixtures: fixtures.iter().map(|f| f.to_string()).collect(),
      project: project.map(|p| p.display().to_string()),
      deny_warnings: false,
      dump_attrs: false,
    }
  }

  #[test]
  fn test_project_fixtures_and_settings() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
      temp.path().join(PROJECT_FILE),
      "[package]\nname = \"demo\"\n\n[check]\nfixtures = [\"a.json\"]\ndump_attrs = true\n",
    )
    .unwrap();
    fs::write(temp.path().join("a.json"), "{}").unwrap();

    let mut config = CinderConfig::default();
    let fixtures = resolve_fixtures(&mut config, &check_command(&[], Some(temp.path()))).unwrap();

    assert_eq!(fixtures, vec![temp.path().join("a.json")]);
    assert!(config.dump_attrs);
    assert_eq!(config.project.map(|p| p.package.name), Some("demo".to_string()));
  }

  #[test]
  fn test_command_line_fixtures_win() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
      temp.path().join(PROJECT_FILE),
      "[package]\nname = \"demo\"\n\n[check]\nfixtures = [\"missing.json\"]\n",
    )
    .unwrap();

    let mut config = CinderConfig::default();
    let fixtures = resolve_fixtures(&mut config, &check_command(&["b.json"], Some(temp.path()))).unwrap();

    assert_eq!(fixtures, vec![PathBuf::from("b.json")]);
  }

  #[test]
  fn test_cli_flags_reach_config() {
    let cli = Cli::parse_from(["cinder", "-q", "check", "--deny-warnings", "x.json"]);
    let config = parse_cli_to_config(&cli);

    assert!(config.quiet);
    assert!(config.deny_warnings);
    assert!(!config.dump_attrs);
  }
}
