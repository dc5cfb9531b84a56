//! Shared types used across the classifier, tokenizer, and sentence assembler.
//!
//! `TokenKind` is a closed, exhaustive sum type rather than a set of stringly-typed constants;
//! `TokenKind::description` exists purely so logging and fixture output have a stable label,
//! never for control flow.

/// The kind of an emitted token, or an intermediate classification result for a single rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  /// Whitespace rune (Unicode space property).
  Space,
  /// Single letter rune. Only appears in intermediate classification — emitted tokens coalesce
  /// consecutive letters into `MayBeWord`.
  Letter,
  /// Single digit rune. Likewise coalesced into `MayBeWord` by the tokenizer.
  Number,
  /// Definite sentence terminator: `!`, `?`, U+3002, U+FF01, U+FF1F.
  Term,
  /// Possible terminator: `.`, U+FF0E.
  MayBeTerm,
  /// `,`, `:`, `;`.
  Pause,
  ParenOpen,
  ParenClose,
  BracketOpen,
  BracketClose,
  BraceOpen,
  BraceClose,
  /// `'`
  Squote,
  /// `"`
  Dquote,
  /// Unicode initial-punctuation class (general category Pi).
  IniQuote,
  /// Unicode final-punctuation class (general category Pf).
  FinQuote,
  /// Other Unicode punctuation.
  Punct,
  /// Unicode symbol.
  Symbol,
  /// None of the above.
  Other,
  /// A coalesced run of letters (or of digits); emitted by the tokenizer.
  MayBeWord,
  /// Reserved for downstream lexical promotion of a `MayBeWord` into a recognized word.
  Word,
  /// Emitted by the sentence assembler.
  Sentence,
}

impl TokenKind {
  /// A stable label for logging and fixture diagnostics. Never used for control flow.
  pub fn description(&self) -> &'static str {
    match *self {
      TokenKind::Space => "Space",
      TokenKind::Letter => "Letter",
      TokenKind::Number => "Number",
      TokenKind::Term => "Term",
      TokenKind::MayBeTerm => "MayBeTerm",
      TokenKind::Pause => "Pause",
      TokenKind::ParenOpen => "ParenOpen",
      TokenKind::ParenClose => "ParenClose",
      TokenKind::BracketOpen => "BracketOpen",
      TokenKind::BracketClose => "BracketClose",
      TokenKind::BraceOpen => "BraceOpen",
      TokenKind::BraceClose => "BraceClose",
      TokenKind::Squote => "Squote",
      TokenKind::Dquote => "Dquote",
      TokenKind::IniQuote => "IniQuote",
      TokenKind::FinQuote => "FinQuote",
      TokenKind::Punct => "Punct",
      TokenKind::Symbol => "Symbol",
      TokenKind::Other => "Other",
      TokenKind::MayBeWord => "MayBeWord",
      TokenKind::Word => "Word",
      TokenKind::Sentence => "Sentence",
    }
  }

  /// True for the kinds the tokenizer emits as single-rune tokens (everything except the
  /// coalescing Letter/Number intermediate kinds).
  #[inline]
  pub fn is_single_rune(&self) -> bool {
    !matches!(self, TokenKind::Letter | TokenKind::Number)
  }

  #[inline]
  pub fn is_paren(&self) -> bool {
    matches!(self, TokenKind::ParenOpen | TokenKind::ParenClose)
  }

  #[inline]
  pub fn is_bracket(&self) -> bool {
    matches!(self, TokenKind::BracketOpen | TokenKind::BracketClose)
  }

  #[inline]
  pub fn is_brace(&self) -> bool {
    matches!(self, TokenKind::BraceOpen | TokenKind::BraceClose)
  }

  #[inline]
  pub fn is_group_open(&self) -> bool {
    matches!(
      self,
      TokenKind::ParenOpen | TokenKind::BracketOpen | TokenKind::BraceOpen
    )
  }

  #[inline]
  pub fn is_group_close(&self) -> bool {
    matches!(
      self,
      TokenKind::ParenClose | TokenKind::BracketClose | TokenKind::BraceClose
    )
  }

  /// The opener kind that matches this closer, if this is a group-close kind.
  #[inline]
  pub fn matching_open(&self) -> Option<TokenKind> {
    match self {
      TokenKind::ParenClose => Some(TokenKind::ParenOpen),
      TokenKind::BracketClose => Some(TokenKind::BracketOpen),
      TokenKind::BraceClose => Some(TokenKind::BraceOpen),
      _ => None,
    }
  }
}

/// An immutable slice of the input, annotated with a kind and inclusive begin/end byte offsets.
///
/// Borrows from the input string it was produced from — no copying. `end` is the offset of the
/// token's last byte (inclusive), not one-past-the-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextToken<'a> {
  text: &'a str,
  begin: usize,
  end: usize,
  kind: TokenKind,
}

impl<'a> TextToken<'a> {
  #[inline]
  pub(crate) fn new(text: &'a str, begin: usize, end: usize, kind: TokenKind) -> TextToken<'a> {
    debug_assert!(begin <= end);
    debug_assert_eq!(text.len(), end - begin + 1);

    TextToken {
      text,
      begin,
      end,
      kind,
    }
  }

  #[inline]
  pub fn text(&self) -> &'a str {
    self.text
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
  pub fn kind(&self) -> TokenKind {
    self.kind
  }
}

/// An entry on the sentence assembler's group stack. Internal: never leaves the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GroupStackEntry {
  pub token_index: usize,
  pub opener_kind: TokenKind,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn description_is_stable_logging_label() {
    assert_eq!(TokenKind::MayBeTerm.description(), "MayBeTerm");
    assert_eq!(TokenKind::Sentence.description(), "Sentence");
  }

  #[test]
  fn matching_open_pairs_groupers() {
    assert_eq!(TokenKind::ParenClose.matching_open(), Some(TokenKind::ParenOpen));
    assert_eq!(TokenKind::BraceClose.matching_open(), Some(TokenKind::BraceOpen));
    assert_eq!(TokenKind::Letter.matching_open(), None);
  }
}
