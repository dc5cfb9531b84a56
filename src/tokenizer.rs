//! The micro-tokenizer: a lazy, forward-only, non-restartable producer of [`TextToken`]s.
//!
//! Consecutive letters coalesce into a single `MayBeWord` token; consecutive digits likewise.
//! Every other rune class becomes a single-rune token. The tokenizer cannot fail: exhaustion is
//! `Iterator::next` returning `None`, same as any other Rust iterator.

use crate::classify::classify;
use crate::token::{TextToken, TokenKind};

/// Which kind of run (if any) is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
  None,
  Letters,
  Digits,
}

/// Iterates [`TextToken`]s out of a `&str`.
///
/// Holds the input, a running byte index, and the currently-open run (if any). Each call to
/// `next` advances the state and returns the next token; the iterator holds no obligations beyond
/// the input string's lifetime, since every emitted token borrows from it directly.
pub struct Tokenizer<'a> {
  doc: &'a str,
  idx: usize,
  base: usize,
  run: Run,
  run_begin: usize,
}

impl<'a> Tokenizer<'a> {
  /// Tokenizes `doc` starting at byte offset 0.
  #[inline]
  pub fn new(doc: &'a str) -> Tokenizer<'a> {
    Tokenizer::with_offset(doc, 0)
  }

  /// Tokenizes `doc`, treating `start` as the base byte offset added to every reported token
  /// offset — `doc` itself is still indexed from 0. Used when `doc` is a substring (e.g. one
  /// section of a larger document) whose tokens must carry offsets into the containing string.
  #[inline]
  pub fn with_offset(doc: &'a str, start: usize) -> Tokenizer<'a> {
    Tokenizer {
      doc,
      idx: 0,
      base: start,
      run: Run::None,
      run_begin: 0,
    }
  }

  #[inline]
  fn flush_run(&mut self, run_end: usize) -> TextToken<'a> {
    let text = &self.doc[self.run_begin..=run_end];
    let tok = TextToken::new(text, self.base + self.run_begin, self.base + run_end, TokenKind::MayBeWord);
    log::trace!(
      "tokenizer: flush run [{}, {}] -> MayBeWord",
      self.base + self.run_begin,
      self.base + run_end
    );
    self.run = Run::None;
    tok
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = TextToken<'a>;

  fn next(&mut self) -> Option<TextToken<'a>> {
    loop {
      let rest = &self.doc[self.idx..];
      let c = match rest.chars().next() {
        Some(c) => c,
        None => {
          return if self.run != Run::None {
            Some(self.flush_run(self.idx - 1))
          } else {
            None
          };
        }
      };

      let kind = classify(c);
      let begin = self.idx;
      let end = begin + c.len_utf8() - 1;

      match kind {
        TokenKind::Letter => match self.run {
          Run::Digits => return Some(self.flush_run(begin - 1)),
          Run::Letters => {
            self.idx = end + 1;
          }
          Run::None => {
            self.run = Run::Letters;
            self.run_begin = begin;
            self.idx = end + 1;
          }
        },
        TokenKind::Number => match self.run {
          Run::Letters => return Some(self.flush_run(begin - 1)),
          Run::Digits => {
            self.idx = end + 1;
          }
          Run::None => {
            self.run = Run::Digits;
            self.run_begin = begin;
            self.idx = end + 1;
          }
        },
        TokenKind::Other => {
          if self.run == Run::None {
            self.run = Run::Letters;
            self.run_begin = begin;
          }
          self.idx = end + 1;
        }
        _ => {
          // Any single-rune kind: if a run is open, it must be flushed first without
          // consuming the classifying rune — it is re-read on the next call.
          if self.run != Run::None {
            return Some(self.flush_run(begin - 1));
          }

          self.idx = end + 1;
          log::trace!(
            "tokenizer: emit single-rune token [{}, {}] -> {:?}",
            self.base + begin,
            self.base + end,
            kind
          );
          return Some(TextToken::new(
            &self.doc[begin..=end],
            self.base + begin,
            self.base + end,
            kind,
          ));
        }
      }
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.doc.len().saturating_sub(self.idx);
    (remaining / 8, Some(remaining + 1))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn toks(s: &str) -> Vec<(String, usize, usize, TokenKind)> {
    Tokenizer::new(s)
      .map(|t| (t.text().to_string(), t.begin(), t.end(), t.kind()))
      .collect()
  }

  #[test]
  fn coalesces_letters_into_maybe_word() {
    let v = toks("hello");
    assert_eq!(v, vec![("hello".to_string(), 0, 4, TokenKind::MayBeWord)]);
  }

  #[test]
  fn coalesces_digits_into_maybe_word() {
    let v = toks("1234");
    assert_eq!(v, vec![("1234".to_string(), 0, 3, TokenKind::MayBeWord)]);
  }

  #[test]
  fn single_rune_tokens_emitted_individually() {
    let v = toks("a, b");
    assert_eq!(
      v,
      vec![
        ("a".to_string(), 0, 0, TokenKind::MayBeWord),
        (",".to_string(), 1, 1, TokenKind::Pause),
        (" ".to_string(), 2, 2, TokenKind::Space),
        ("b".to_string(), 3, 3, TokenKind::MayBeWord),
      ]
    );
  }

  #[test]
  fn letters_then_digits_split_into_two_runs() {
    let v = toks("abc123");
    assert_eq!(
      v,
      vec![
        ("abc".to_string(), 0, 2, TokenKind::MayBeWord),
        ("123".to_string(), 3, 5, TokenKind::MayBeWord),
      ]
    );
  }

  #[test]
  fn decimal_looking_sequence_does_not_split_mid_token() {
    // "20-30 deg.c." -- "deg" letters, then '.', then "c" letter, then '.'.
    let v = toks("deg.c.");
    assert_eq!(
      v,
      vec![
        ("deg".to_string(), 0, 2, TokenKind::MayBeWord),
        (".".to_string(), 3, 3, TokenKind::MayBeTerm),
        ("c".to_string(), 4, 4, TokenKind::MayBeWord),
        (".".to_string(), 5, 5, TokenKind::MayBeTerm),
      ]
    );
  }

  #[test]
  fn coverage_is_contiguous_and_gapless() {
    let s = "An aryl-substituted, compound (i.e., foo) etc. works!";
    let v: Vec<_> = Tokenizer::new(s).collect();
    let mut expect = 0usize;
    for t in &v {
      assert_eq!(t.begin(), expect, "gap or overlap before token {:?}", t);
      expect = t.end() + 1;
    }
    assert_eq!(expect, s.len());
  }

  #[test]
  fn offset_fidelity_last_token_ends_at_len_minus_one() {
    let s = "one two three.";
    let v: Vec<_> = Tokenizer::new(s).collect();
    assert_eq!(v.last().unwrap().end(), s.len() - 1);
  }

  #[test]
  fn text_faithfulness_every_token_matches_slice() {
    let s = "Multi-byte: café déjà vu, 日本語。";
    for t in Tokenizer::new(s) {
      assert_eq!(&s[t.begin()..=t.end()], t.text());
    }
  }

  #[test]
  fn multibyte_runes_advance_end_by_encoded_length() {
    // U+00E9 'é' is 2 bytes in UTF-8.
    let v = toks("café");
    assert_eq!(v, vec![("café".to_string(), 0, 4, TokenKind::MayBeWord)]);
  }

  #[test]
  fn with_offset_starts_counting_from_given_start() {
    let s = "hello";
    let v: Vec<_> = Tokenizer::with_offset(s, 100).collect();
    assert_eq!(v[0].begin(), 100);
    assert_eq!(v[0].end(), 104);
  }

  #[test]
  fn empty_input_yields_no_tokens() {
    assert_eq!(Tokenizer::new("").next(), None);
  }

  #[test]
  fn trailing_letter_with_no_terminator_flushes_on_exhaustion() {
    let v = toks("no terminator here");
    assert_eq!(v.last().unwrap().2, "no terminator here".len() - 1);
  }

  #[test]
  fn idempotent_retokenization_yields_identical_sequence() {
    let s = "Re-tokenizing (should) be, stable! Right?";
    let a = toks(s);
    let b = toks(s);
    assert_eq!(a, b);
  }
}
