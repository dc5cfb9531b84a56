//! Pure rune → `TokenKind` classification.

use unicode_categories::UnicodeCategories;

use crate::token::TokenKind;

/// Classifies a single Unicode scalar value.
///
/// Total and deterministic: every `char` maps to some `TokenKind`, with `TokenKind::Other` as
/// the catch-all. Ordering matters — terminators and maybe-terminators are tested before the
/// generic punctuation category so they are not absorbed by it, and letters are tested before
/// numbers so scripts whose letters carry numeric properties keep stable precedence.
#[inline]
pub fn classify(c: char) -> TokenKind {
  if c.is_whitespace() {
    return TokenKind::Space;
  }
  if c.is_alphabetic() {
    return TokenKind::Letter;
  }
  if c.is_numeric() {
    return TokenKind::Number;
  }

  match c {
    '!' | '?' | '\u{3002}' | '\u{FF01}' | '\u{FF1F}' => return TokenKind::Term,
    '.' | '\u{FF0E}' => return TokenKind::MayBeTerm,
    ',' | ':' | ';' => return TokenKind::Pause,
    '(' => return TokenKind::ParenOpen,
    ')' => return TokenKind::ParenClose,
    '[' => return TokenKind::BracketOpen,
    ']' => return TokenKind::BracketClose,
    '{' => return TokenKind::BraceOpen,
    '}' => return TokenKind::BraceClose,
    '\'' => return TokenKind::Squote,
    '"' => return TokenKind::Dquote,
    _ => {}
  }

  if c.is_punctuation_initial_quote() {
    return TokenKind::IniQuote;
  }
  if c.is_punctuation_final_quote() {
    return TokenKind::FinQuote;
  }
  if c.is_punctuation() {
    return TokenKind::Punct;
  }
  if c.is_symbol() {
    return TokenKind::Symbol;
  }

  TokenKind::Other
}
