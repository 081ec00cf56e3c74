//! Locating and loading cinder.toml.

use std::fmt;
use std::path::{Path, PathBuf};

use cinder_config::CinderProjectToml;

/// The project manifest filename.
pub const PROJECT_FILE: &str = "cinder.toml";

#[derive(Debug)]
pub enum ProjectError {
  /// No cinder.toml found when searching upward from the given directory.
  NotFound { searched_from: PathBuf },

  /// I/O error while reading the manifest.
  IoError { path: PathBuf, source: std::io::Error },

  /// The manifest is not valid TOML or doesn't match the schema.
  TomlParseError { path: PathBuf, message: String },

  /// A fixture listed under `[check]` does not exist.
  FixtureNotFound { path: PathBuf },
}

impl fmt::Display for ProjectError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ProjectError::NotFound { searched_from } => {
        write!(f, "no {} found (searched from '{}')", PROJECT_FILE, searched_from.display())
      },

      ProjectError::IoError { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      ProjectError::TomlParseError { path, message } => {
        write!(f, "failed to parse '{}': {}", path.display(), message)
      },

      ProjectError::FixtureNotFound { path } => {
        write!(f, "fixture listed in {} not found: '{}'", PROJECT_FILE, path.display())
      },
    }
  }
}

impl std::error::Error for ProjectError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ProjectError::IoError { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Search upward from `start` for a directory containing cinder.toml.
///
/// Returns the project root directory, not the manifest path.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
  let mut current = if start.is_file() {
    start.parent()?.to_path_buf()
  } else {
    start.to_path_buf()
  };

  loop {
    if current.join(PROJECT_FILE).is_file() {
      return Some(current);
    }

    if !current.pop() {
      return None;
    }
  }
}

pub fn load_project_toml(toml_path: &Path) -> Result<CinderProjectToml, ProjectError> {
  let content = std::fs::read_to_string(toml_path).map_err(|e| ProjectError::IoError {
    path: toml_path.to_path_buf(),
    source: e,
  })?;

  CinderProjectToml::parse(&content).map_err(|e| ProjectError::TomlParseError {
    path: toml_path.to_path_buf(),
    message: e.to_string(),
  })
}

/// Fixture paths from `[check] fixtures`, resolved against `root`.
pub fn project_fixtures(
  root: &Path,
  project: &CinderProjectToml,
) -> Result<Vec<PathBuf>, ProjectError> {
  project
    .check
    .fixtures
    .iter()
    .map(|fixture| {
      let path = root.join(fixture);
      if path.is_file() {
        Ok(path)
      } else {
        Err(ProjectError::FixtureNotFound { path })
      }
    })
    .collect()
}
