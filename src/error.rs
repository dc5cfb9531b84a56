//! Error taxonomy for the collaborator layer (`document`, `annotation`, `fixture`).
//!
//! The core (`classify`, `tokenizer`, `sentence`) never fails: every rune classifies to some
//! `TokenKind`, and mismatched groupers are tolerated by design rather than rejected. Only code
//! that sits above the core — binding annotations to token offsets, parsing TSV records, reading
//! fixture files — has failure modes worth a `Result`.

/// Errors raised by the `document`, `annotation`, and `fixture` modules.
#[derive(Debug, thiserror::Error)]
pub enum SegError {
  #[error("empty document identifier")]
  EmptyIdentifier,

  #[error("empty section text")]
  EmptySection,

  #[error("annotation at [{begin}, {end}] does not align with any token boundary")]
  AnnotationMismatch { begin: usize, end: usize },

  /// The line lacks six tab-separated columns, or one of its offset fields is not a valid
  /// integer.
  #[error("malformed annotation line (expected 6 tab-separated columns with integer offsets): {line:?}")]
  MalformedInputLine { line: String },

  #[cfg(feature = "fixtures")]
  #[error("I/O error reading fixture")]
  Io(#[from] std::io::Error),

  #[cfg(feature = "fixtures")]
  #[error("malformed fixture line: {line:?}")]
  FixtureFormat { line: String },
}
