//! The `Document` container: up to three named sections, their tokens, sentences, and any words
//! bound to them by annotation.

use std::collections::BTreeMap;

use crate::annotation::Annotation;
use crate::error::SegError;
use crate::sentence::{Sentence, SentenceAssembler};
use crate::token::TextToken;
use crate::tokenizer::Tokenizer;
use crate::word::Word;

/// Which of a document's (at most three) sections a span of text belongs to.
///
/// A closed enum rather than the Go original's bare `"T"` / `"A"` / `"B"` strings — every section
/// reference is checked at compile time instead of at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
  Title,
  Abstract,
  Body,
}

#[derive(Debug, Default)]
struct Section<'a> {
  text: &'a str,
  tokens: Vec<TextToken<'a>>,
  sentences: Vec<Sentence>,
  words: Vec<Word>,
}

/// A document identified by an id, holding whichever of its three sections have been populated.
///
/// Borrows its section text from the caller (`'a`) rather than copying it — the same zero-copy
/// philosophy as `TextToken`. Callers own the original strings and keep them alive for as long as
/// the `Document` is in use.
#[derive(Debug)]
pub struct Document<'a> {
  id: String,
  sections: BTreeMap<SectionId, Section<'a>>,
}

impl<'a> Document<'a> {
  /// Creates an empty document. Fails on an empty id.
  pub fn new(id: &str) -> Result<Document<'a>, SegError> {
    if id.is_empty() {
      return Err(SegError::EmptyIdentifier);
    }
    Ok(Document {
      id: id.to_string(),
      sections: BTreeMap::new(),
    })
  }

  #[inline]
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Populates (or replaces) a section's text. Fails on empty text.
  pub fn set_section(&mut self, section: SectionId, text: &'a str) -> Result<(), SegError> {
    if text.is_empty() {
      return Err(SegError::EmptySection);
    }
    self.sections.insert(
      section,
      Section {
        text,
        tokens: Vec::new(),
        sentences: Vec::new(),
        words: Vec::new(),
      },
    );
    Ok(())
  }

  fn section_mut(&mut self, section: SectionId) -> Result<&mut Section<'a>, SegError> {
    self.sections.get_mut(&section).ok_or(SegError::EmptySection)
  }

  fn section(&self, section: SectionId) -> Result<&Section<'a>, SegError> {
    self.sections.get(&section).ok_or(SegError::EmptySection)
  }

  /// Tokenizes a populated section, storing the result.
  pub fn tokenize(&mut self, section: SectionId) -> Result<(), SegError> {
    let s = self.section_mut(section)?;
    s.tokens = Tokenizer::new(s.text).collect();
    log::debug!("document: tokenized section {section:?} into {} tokens", s.tokens.len());
    Ok(())
  }

  /// Assembles sentences from a section's already-tokenized spans.
  pub fn assemble(&mut self, section: SectionId) -> Result<(), SegError> {
    let s = self.section_mut(section)?;
    s.sentences = SentenceAssembler::new(&s.tokens).collect();
    log::debug!("document: assembled {} sentences in section {section:?}", s.sentences.len());
    Ok(())
  }

  /// Returns the tokens stored for a section, if it has been tokenized.
  pub fn tokens(&self, section: SectionId) -> Result<&[TextToken<'a>], SegError> {
    Ok(&self.section(section)?.tokens)
  }

  /// Returns the sentences stored for a section, if it has been assembled.
  pub fn sentences(&self, section: SectionId) -> Result<&[Sentence], SegError> {
    Ok(&self.section(section)?.sentences)
  }

  /// Returns the words bound to a section via `annotate`.
  pub fn words(&self, section: SectionId) -> Result<&[Word], SegError> {
    Ok(&self.section(section)?.words)
  }

  /// Binds an annotation to the token pair whose begin/end exactly match its offsets, recording a
  /// `Word`. Fails if no such token pair exists.
  pub fn annotate(&mut self, section: SectionId, annotation: &Annotation) -> Result<(), SegError> {
    let s = self.section_mut(section)?;

    let begin_tok = s.tokens.iter().position(|t| t.begin() == annotation.begin());
    let end_tok = s.tokens.iter().position(|t| t.end() == annotation.end());

    match (begin_tok, end_tok) {
      (Some(b), Some(e)) if b <= e => {
        s.words.push(Word::new(b, e, annotation.entity()));
        Ok(())
      }
      _ => Err(SegError::AnnotationMismatch {
        begin: annotation.begin(),
        end: annotation.end(),
      }),
    }
  }
}
