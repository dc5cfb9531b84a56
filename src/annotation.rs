//! Parsing of tab-separated annotation records and the `EntityType` they carry.

use phf::phf_map;

use crate::error::SegError;

/// The class of named entity an annotation's word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
  Other,
  Abbreviation,
  Family,
  Formula,
  Identifier,
  Multiple,
  Systematic,
  Trivial,
}

static ENTITY_TOKENS: phf::Map<&'static str, EntityType> = phf_map! {
  "OTHER" => EntityType::Other,
  "ABBREVIATION" => EntityType::Abbreviation,
  "FAMILY" => EntityType::Family,
  "FORMULA" => EntityType::Formula,
  "IDENTIFIER" => EntityType::Identifier,
  "MULTIPLE" => EntityType::Multiple,
  "SYSTEMATIC" => EntityType::Systematic,
  "TRIVIAL" => EntityType::Trivial,
};

impl EntityType {
  /// Maps a fixed uppercase token to its `EntityType`, defaulting to `Other` for anything
  /// unrecognized — matching the permissive lookup the Go original performed.
  pub fn from_token(token: &str) -> EntityType {
    ENTITY_TOKENS.get(token).copied().unwrap_or(EntityType::Other)
  }
}

/// A parsed six-column annotation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
  doc_id: String,
  section: String,
  begin: usize,
  end: usize,
  word: String,
  entity: EntityType,
}

impl Annotation {
  /// Parses one tab-separated annotation line: doc id, section id, begin offset, end offset,
  /// word text, entity type token.
  pub fn parse(line: &str) -> Result<Annotation, SegError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 6 {
      return Err(SegError::MalformedInputLine { line: line.to_string() });
    }

    let [doc_id, section, begin, end, word, entity] = match <[&str; 6]>::try_from(fields) {
      Ok(f) => f,
      Err(_) => return Err(SegError::MalformedInputLine { line: line.to_string() }),
    };

    let begin: usize = begin
      .parse()
      .map_err(|_| SegError::MalformedInputLine { line: line.to_string() })?;
    let end: usize = end
      .parse()
      .map_err(|_| SegError::MalformedInputLine { line: line.to_string() })?;

    Ok(Annotation {
      doc_id: doc_id.to_string(),
      section: section.to_string(),
      begin,
      end,
      word: word.to_string(),
      entity: EntityType::from_token(entity),
    })
  }

  #[inline]
  pub fn doc_id(&self) -> &str {
    &self.doc_id
  }

  #[inline]
  pub fn section(&self) -> &str {
    &self.section
  }

  #[inline]
  pub fn begin(&self) -> usize {
    self.begin
  }

  #[inline]
  pub fn end(&self) -> usize {
    self.end
  }

  #[inline]
  pub fn word(&self) -> &str {
    &self.word
  }

  #[inline]
  pub fn entity(&self) -> EntityType {
    self.entity
  }
}
