//! Regression-fixture harness, gated behind the `fixtures` feature so the core library ships
//! with zero I/O surface by default.
//!
//! Fixtures are gzip-compressed files of lines in the format
//! `docid \t section_title_offsets \t section_abstract_offsets`, where each
//! `section_*_offsets` field is a comma-separated list of `begin:end` pairs — one pair per
//! sentence, matching [`crate::sentence::SentenceAssembler`]'s output exactly.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::SegError;
use crate::sentence::Sentence;

/// One parsed fixture line: a document id and the expected `(begin, end)` sentence-offset pairs
/// for its title and abstract sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
  pub doc_id: String,
  pub title_offsets: Vec<(usize, usize)>,
  pub abstract_offsets: Vec<(usize, usize)>,
}

fn parse_offsets(field: &str, line: &str) -> Result<Vec<(usize, usize)>, SegError> {
  if field.is_empty() {
    return Ok(Vec::new());
  }

  field
    .split(',')
    .map(|pair| {
      let (b, e) = pair
        .split_once(':')
        .ok_or_else(|| SegError::FixtureFormat { line: line.to_string() })?;
      let begin: usize = b.parse().map_err(|_| SegError::FixtureFormat { line: line.to_string() })?;
      let end: usize = e.parse().map_err(|_| SegError::FixtureFormat { line: line.to_string() })?;
      Ok((begin, end))
    })
    .collect()
}

fn parse_line(line: &str) -> Result<FixtureRecord, SegError> {
  let fields: Vec<&str> = line.split('\t').collect();
  if fields.len() != 3 {
    return Err(SegError::FixtureFormat { line: line.to_string() });
  }

  Ok(FixtureRecord {
    doc_id: fields[0].to_string(),
    title_offsets: parse_offsets(fields[1], line)?,
    abstract_offsets: parse_offsets(fields[2], line)?,
  })
}

/// Reads and decodes a gzip-compressed fixture file into its [`FixtureRecord`]s, skipping blank
/// lines.
pub fn read_gz(path: impl AsRef<Path>) -> Result<Vec<FixtureRecord>, SegError> {
  let file = File::open(path)?;
  let mut decoder = GzDecoder::new(file);
  let mut contents = String::new();
  decoder.read_to_string(&mut contents)?;

  contents.lines().filter(|l| !l.is_empty()).map(parse_line).collect()
}

/// Reads and decodes a gzip-compressed byte buffer directly, for tests that build fixtures
/// in-memory rather than from a file on disk.
pub fn read_gz_bytes(bytes: &[u8]) -> Result<Vec<FixtureRecord>, SegError> {
  let mut decoder = GzDecoder::new(bytes);
  let mut contents = String::new();
  decoder.read_to_string(&mut contents)?;

  contents.lines().filter(|l| !l.is_empty()).map(parse_line).collect()
}

/// One disagreement between an expected and an actual sentence offset at a given index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureMismatch {
  pub index: usize,
  pub expected: Option<(usize, usize)>,
  pub actual: Option<(usize, usize)>,
}

/// Compares expected `(begin, end)` sentence offsets against the offsets actually produced by
/// [`crate::sentence::SentenceAssembler`], reporting every index where they disagree. Differing
/// lengths are reported too: the shorter side's missing entries come back as `None`.
pub fn diff(expected: &[(usize, usize)], actual: &[Sentence]) -> Vec<FixtureMismatch> {
  let len = expected.len().max(actual.len());
  let mut mismatches = Vec::new();

  for i in 0..len {
    let exp = expected.get(i).copied();
    let act = actual.get(i).map(|s| (s.begin(), s.end()));

    if exp != act {
      mismatches.push(FixtureMismatch {
        index: i,
        expected: exp,
        actual: act,
      });
    }
  }

  mismatches
}
