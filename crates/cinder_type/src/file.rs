use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use ahash::AHasher;

use crate::{BytePosition, Id, Store};

pub type FileId = Id<SourceFile>;

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceFile {
  pub path: PathBuf,
  pub text: String,
  pub line_starts: Vec<BytePosition>,
  pub hash: u64,
}

impl SourceFile {
  pub fn new(
    path: PathBuf,
    text: String,
  ) -> Self {
    let line_starts = compute_line_starts(&text);
    let hash = content_hash(&text);

    Self {
      path,
      text,
      line_starts,
      hash,
    }
  }

  /// Text of the 1-based line `line`, without its terminator.
  pub fn line_text(
    &self,
    line: u32,
  ) -> Option<&str> {
    let idx = (line as usize).checked_sub(1)?;
    let start = self.line_starts.get(idx)?.0 as usize;
    let end = self
      .line_starts
      .get(idx + 1)
      .map(|p| p.0 as usize)
      .unwrap_or(self.text.len());

    Some(self.text[start..end].trim_end_matches(['\r', '\n']))
  }
}

impl std::fmt::Display for Id<SourceFile> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "(file id: {})", self.index())
  }
}

#[derive(Debug, Default)]
pub struct SourceMap {
  files: Store<SourceFile>,
  by_path: HashMap<PathBuf, FileId>,
}

impl SourceMap {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_file<P: Into<PathBuf>>(
    &mut self,
    path: P,
    text: String,
  ) -> FileId {
    let path = path.into();

    if let Some(id) = self.by_path.get(&path) {
      return *id;
    }

    let id = self.files.alloc(SourceFile::new(path.clone(), text));
    self.by_path.insert(path, id);
    id
  }

  pub fn add_virtual(
    &mut self,
    label: &str,
    text: String,
  ) -> FileId {
    let path = PathBuf::from(format!("<{}>", label));

    self.files.alloc(SourceFile::new(path, text))
  }

  #[inline]
  pub fn get(
    &self,
    id: &FileId,
  ) -> &SourceFile {
    self.files.get(id)
  }

  pub fn lookup_by_path<P: AsRef<Path>>(
    &self,
    path: P,
  ) -> Option<FileId> {
    self.by_path.get(path.as_ref()).copied()
  }

  /// 1-based (line, column) of `pos`. Columns count chars, not bytes.
  pub fn line_col(
    &self,
    file: &FileId,
    pos: BytePosition,
  ) -> (u32, u32) {
    let f = self.get(file);
    let pos = pos.0.min(f.len_bytes());
    let line = f.line_starts.partition_point(|start| start.0 <= pos).saturating_sub(1);
    let line_start = f.line_starts[line].0 as usize;
    let col = unicode_column(&f.text.as_bytes()[line_start..pos as usize]);

    ((line as u32) + 1, (col as u32) + 1)
  }
}

impl SourceFile {
  #[inline]
  pub fn len_bytes(&self) -> u32 {
    self.text.len() as u32
  }
}

fn compute_line_starts(text: &str) -> Vec<BytePosition> {
  let mut v = Vec::with_capacity(64);
  v.push(BytePosition(0));

  for (i, b) in text.bytes().enumerate() {
    if b == b'\n' {
      v.push(BytePosition((i + 1) as u32));
    }
  }
  v
}

fn unicode_column(slice: &[u8]) -> usize {
  std::str::from_utf8(slice)
    .map(|s| s.chars().count())
    .unwrap_or(slice.len())
}

fn content_hash(text: &str) -> u64 {
  let mut h = AHasher::default();
  text.hash(&mut h);
  h.finish()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_line_col() {
    let mut sm = SourceMap::new();
    let file = sm.add_virtual("test", "int a;\nfor (;;) {}\n".to_string());

    assert_eq!(sm.line_col(&file, BytePosition(0)), (1, 1));
    assert_eq!(sm.line_col(&file, BytePosition(4)), (1, 5));
    assert_eq!(sm.line_col(&file, BytePosition(7)), (2, 1));
    assert_eq!(sm.line_col(&file, BytePosition(11)), (2, 5));
  }

  #[test]
  fn test_line_text() {
    let mut sm = SourceMap::new();
    let file = sm.add_virtual("test", "a;\r\nb;\n".to_string());

    assert_eq!(sm.get(&file).line_text(1), Some("a;"));
    assert_eq!(sm.get(&file).line_text(2), Some("b;"));
    assert_eq!(sm.get(&file).line_text(0), None);
  }

  #[test]
  fn test_add_file_dedups_by_path() {
    let mut sm = SourceMap::new();
    let a = sm.add_file("loop.c", "x".to_string());
    let b = sm.add_file("loop.c", "y".to_string());

    assert_eq!(a, b);
    assert_eq!(sm.lookup_by_path("loop.c"), Some(a));
  }
}
