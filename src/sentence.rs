//! The sentence assembler: a boundary state machine consuming a token sequence and emitting
//! [`Sentence`]s, tolerant of abbreviations, decimal numbers, parenthetical asides, and
//! directly-quoted continuations.

use crate::abbrev::{MAY_BE_TERM_ABBREVS, MAY_BE_TERM_GROUP_ABBREVS, NON_TERM_ABBREVS};
use crate::token::{GroupStackEntry, TextToken, TokenKind};

/// A transient state of proximity to a terminator. Equivalent to the three independent mood
/// flags (`in_term`, `in_maybe_term`, `in_term_spc`) of the original design, collapsed into one
/// enum — nothing downstream of the initial terminator decision distinguishes a hard `Term` mood
/// from a soft `MaybeTerm` one once a space has been seen, so both promote to `TermSpace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mood {
  Clean,
  Term,
  MaybeTerm,
  TermSpace,
}

/// An assembled sentence: its text, its inclusive byte span in the original input, and the
/// inclusive token-index range it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
  text: String,
  begin: usize,
  end: usize,
  begin_tok: usize,
  end_tok: usize,
}

impl Sentence {
  #[inline]
  pub fn text(&self) -> &str {
    &self.text
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
  pub fn begin_tok(&self) -> usize {
    self.begin_tok
  }

  #[inline]
  pub fn end_tok(&self) -> usize {
    self.end_tok
  }
}

#[inline]
fn starts_uppercase(s: &str) -> bool {
  s.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Consumes a token slice and produces [`Sentence`]s lazily. Purely consumer-side: it never
/// mutates the tokens it was given.
pub struct SentenceAssembler<'a> {
  tokens: &'a [TextToken<'a>],
  idx: usize,
  start: usize,
  idx_term: Option<usize>,
  buffer: String,
  mood: Mood,
  stack: Vec<GroupStackEntry>,
  finished: bool,
  #[allow(dead_code)]
  technical_mode: bool,
}

impl<'a> SentenceAssembler<'a> {
  /// Builds an assembler over `tokens`, starting from token index 0.
  pub fn new(tokens: &'a [TextToken<'a>]) -> SentenceAssembler<'a> {
    SentenceAssembler {
      tokens,
      idx: 0,
      start: 0,
      idx_term: None,
      buffer: String::new(),
      mood: Mood::Clean,
      stack: Vec::new(),
      finished: false,
      technical_mode: false,
    }
  }

  /// Builds an assembler in "technical" mode. Reserved for future domain tuning — as of this
  /// release it selects no behavioral difference from [`SentenceAssembler::new`].
  pub fn new_technical(tokens: &'a [TextToken<'a>]) -> SentenceAssembler<'a> {
    SentenceAssembler {
      technical_mode: true,
      ..SentenceAssembler::new(tokens)
    }
  }

  #[inline]
  fn prev_non_space_before(&self, before: usize) -> Option<(usize, &'a TextToken<'a>)> {
    (0..before)
      .rev()
      .find(|&i| self.tokens[i].kind() != TokenKind::Space)
      .map(|i| (i, &self.tokens[i]))
  }

  #[inline]
  fn next_non_space_after(&self, after: usize) -> Option<(usize, &'a TextToken<'a>)> {
    self.tokens[after + 1..]
      .iter()
      .enumerate()
      .find(|(_, t)| t.kind() != TokenKind::Space)
      .map(|(i, t)| (after + 1 + i, t))
  }

  /// The index a new sentence should resume at when starting right after `after`: the next
  /// non-space token's index, so an emitted sentence never begins with a leading space (matching
  /// the `TermSpace` path in `handle_generic`, which resumes at the word itself, not the gap).
  #[inline]
  fn resume_after(&self, after: usize) -> usize {
    self
      .next_non_space_after(after)
      .map(|(i, _)| i)
      .unwrap_or(self.tokens.len())
  }

  /// Resolves "e.g." / "i.e." compound abbreviations. `last` is the letter the terminator's
  /// immediately preceding token spelled out (`'g'` or `'e'`); `idx` is that preceding token's
  /// index. Looks back across one intervening `.` to find the other half of the compound.
  fn resolve_compound_abbrev(&self, idx: usize, last: char) -> Mood {
    let required = match MAY_BE_TERM_GROUP_ABBREVS.get(&last) {
      Some(r) => r,
      None => return Mood::Term,
    };

    if let Some((p2_idx, p2)) = self.prev_non_space_before(idx) {
      if p2.text() == "." {
        if let Some((_, p3)) = self.prev_non_space_before(p2_idx) {
          if required.iter().any(|r| p3.text().eq_ignore_ascii_case(&r.to_string())) {
            return Mood::Clean;
          }
        }
      } else if required.iter().any(|r| p2.text().eq_ignore_ascii_case(&r.to_string())) {
        return Mood::Clean;
      }
    }

    Mood::Term
  }

  /// Decides the mood transition for a `Term` or `MayBeTerm` token, per the abbreviation and
  /// orthography rules.
  fn term_mood(&self, idx: usize) -> Mood {
    let prev = self.prev_non_space_before(idx);

    let (prev_idx, pt) = match prev {
      None => return Mood::Clean,
      Some(p) => p,
    };

    if matches!(pt.kind(), TokenKind::Symbol | TokenKind::Punct) {
      return Mood::MaybeTerm;
    }

    let prev_lc = pt.text().to_lowercase();

    if NON_TERM_ABBREVS.contains(prev_lc.as_str()) {
      return Mood::Clean;
    }

    if prev_lc == "g" || prev_lc == "e" {
      return self.resolve_compound_abbrev(prev_idx, prev_lc.chars().next().unwrap());
    }

    if MAY_BE_TERM_ABBREVS.contains(prev_lc.as_str()) {
      return Mood::MaybeTerm;
    }

    Mood::Term
  }

  /// Builds and returns the pending sentence, resetting assembler state for the next one.
  fn emit(&mut self, end_tok: usize, resume: usize) -> Sentence {
    let begin_tok = self.start;
    let begin = self.tokens[begin_tok].begin();
    let end = self.tokens[end_tok].end();
    let text = std::mem::take(&mut self.buffer);

    log::debug!("sentence: emit [{begin}, {end}] tokens[{begin_tok}..={end_tok}]");

    self.mood = Mood::Clean;
    self.idx_term = None;
    self.start = resume;
    self.idx = resume;

    Sentence {
      text,
      begin,
      end,
      begin_tok,
      end_tok,
    }
  }

  fn handle_space(&mut self, t: &TextToken<'a>) {
    match self.mood {
      Mood::Term | Mood::MaybeTerm => {
        log::trace!("sentence: mood {:?} -> TermSpace on space", self.mood);
        self.mood = Mood::TermSpace;
      }
      Mood::TermSpace => {}
      Mood::Clean => self.buffer.push_str(t.text()),
    }
    self.idx += 1;
  }

  fn handle_term(&mut self, t: &TextToken<'a>) {
    let mood = self.term_mood(self.idx);
    log::trace!("sentence: terminator at {} -> mood {:?}", self.idx, mood);
    self.mood = mood;
    self.buffer.push_str(t.text());
    self.idx_term = Some(self.idx);
    self.idx += 1;
  }

  fn handle_group_open(&mut self, t: &TextToken<'a>) -> Option<Sentence> {
    self.stack.push(GroupStackEntry {
      token_index: self.idx,
      opener_kind: t.kind(),
    });

    if matches!(self.mood, Mood::Term | Mood::TermSpace) {
      let end_tok = self.idx_term.expect("term mood implies idx_term is set");
      let resume = self.idx;
      return Some(self.emit(end_tok, resume));
    }

    self.mood = Mood::Clean;
    self.buffer.push_str(t.text());
    self.idx += 1;
    None
  }

  fn handle_group_close(&mut self, t: &TextToken<'a>) -> Option<Sentence> {
    if let Some(top) = self.stack.last() {
      if Some(top.opener_kind) == t.kind().matching_open() {
        self.stack.pop();
      }
      // Mismatched closes are tolerated: the stack is left unchanged.
    }

    if matches!(self.mood, Mood::Term | Mood::TermSpace) {
      if let Some((next_idx, next)) = self.next_non_space_after(self.idx) {
        let blocked = matches!(next.kind(), TokenKind::Pause | TokenKind::Punct | TokenKind::Symbol);

        if !blocked && starts_uppercase(next.text()) {
          let end_tok = self.idx_term.expect("term mood implies idx_term is set");
          return Some(self.emit(end_tok, next_idx));
        }
      }
    }

    self.mood = Mood::Clean;
    self.buffer.push_str(t.text());
    self.idx += 1;
    None
  }

  /// Squote / Dquote / FinQuote: seal a quoted sentence when directly following a hard
  /// terminator.
  fn handle_quote_seal(&mut self, t: &TextToken<'a>) -> Option<Sentence> {
    if self.mood == Mood::Term {
      self.buffer.push_str(t.text());
      let end_tok = self.idx;
      let resume = self.resume_after(self.idx);
      return Some(self.emit(end_tok, resume));
    }

    self.handle_generic(t)
  }

  /// IniQuote: starts a new sentence when a terminator-plus-space is pending.
  fn handle_ini_quote(&mut self, t: &TextToken<'a>) -> Option<Sentence> {
    if self.mood == Mood::TermSpace {
      let end_tok = self.idx_term.expect("term space mood implies idx_term is set");
      let resume = self.idx;
      return Some(self.emit(end_tok, resume));
    }

    self.handle_generic(t)
  }

  /// The catch-all rule ("any other token"), and the fallback for the quote kinds when their own
  /// dedicated guard does not fire.
  fn handle_generic(&mut self, t: &TextToken<'a>) -> Option<Sentence> {
    if self.mood == Mood::TermSpace {
      let idx_term = self.idx_term.expect("term space mood implies idx_term is set");
      let quote_like = matches!(t.kind(), TokenKind::Squote | TokenKind::Dquote | TokenKind::IniQuote);

      if starts_uppercase(t.text()) || quote_like {
        let resume = self.idx;
        return Some(self.emit(idx_term, resume));
      }

      if self.idx > idx_term {
        for i in (idx_term + 1)..self.idx {
          self.buffer.push_str(self.tokens[i].text());
        }
      }
    }

    self.mood = Mood::Clean;
    self.buffer.push_str(t.text());
    self.idx += 1;
    None
  }

  fn handle_end(&mut self) -> Option<Sentence> {
    if self.finished {
      return None;
    }
    self.finished = true;

    if self.buffer.is_empty() {
      return None;
    }

    let mut chars = self.buffer.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
      if !c.is_alphabetic() && !c.is_numeric() {
        self.buffer.clear();
        return None;
      }
    }

    let end_tok = self.tokens.len() - 1;
    Some(self.emit(end_tok, self.tokens.len()))
  }
}

impl<'a> Iterator for SentenceAssembler<'a> {
  type Item = Sentence;

  fn next(&mut self) -> Option<Sentence> {
    loop {
      let t = match self.tokens.get(self.idx) {
        Some(t) => *t,
        None => return self.handle_end(),
      };

      let emitted = match t.kind() {
        TokenKind::Space => {
          self.handle_space(&t);
          None
        }
        TokenKind::Term | TokenKind::MayBeTerm => {
          self.handle_term(&t);
          None
        }
        TokenKind::ParenOpen | TokenKind::BracketOpen | TokenKind::BraceOpen => {
          self.handle_group_open(&t)
        }
        TokenKind::ParenClose | TokenKind::BracketClose | TokenKind::BraceClose => {
          self.handle_group_close(&t)
        }
        TokenKind::Squote | TokenKind::Dquote | TokenKind::FinQuote => self.handle_quote_seal(&t),
        TokenKind::IniQuote => self.handle_ini_quote(&t),
        _ => self.handle_generic(&t),
      };

      if emitted.is_some() {
        return emitted;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::Tokenizer;

  fn sentences(s: &str) -> Vec<String> {
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    SentenceAssembler::new(&tokens)
      .map(|sent| sent.text().to_string())
      .collect()
  }

  #[test]
  fn scenario_one_title_with_no_terminator_is_one_sentence() {
    let s = "Aryl-group-substituted acrylonitrile compound, its production and use";
    let v = sentences(s);
    assert_eq!(v.len(), 1);
    assert_eq!(v[0], s);
  }

  #[test]
  fn scenario_two_splits_on_hard_terminator_before_uppercase() {
    let s = "An aryl-substituted acrylonitrile compound, its production and use are disclosed. It can be used for antineoplastic and to treat leukemia, hepatocarcinoma, gastric carcinoma and mastopathy.";
    let v = sentences(s);
    assert_eq!(v.len(), 2);
    assert!(v[0].ends_with("disclosed."));
    assert!(v[1].starts_with("It"));
  }

  #[test]
  fn scenario_three_etc_without_trailing_period_does_not_split() {
    let s = "difatty acid-sebacic acid copolymer, poly(erucic acid dipolymer-sebacic acid), poly(fumaric acid-sebacic acid), etc or their composition.";
    let v = sentences(s);
    assert_eq!(v.len(), 1);
  }

  #[test]
  fn etc_period_followed_by_lowercase_recovers_false_alarm() {
    let s = "We used solvent A, solvent B, etc. and some adjuvants.";
    let v = sentences(s);
    assert_eq!(v.len(), 1, "etc. should not split before a lowercase continuation: {v:?}");
    assert_eq!(v[0], s);
  }

  #[test]
  fn etc_period_followed_by_uppercase_does_split() {
    let s = "We used solvent A, solvent B, etc. New compounds followed.";
    let v = sentences(s);
    assert_eq!(v.len(), 2, "{v:?}");
    assert!(v[0].ends_with("etc."));
    assert!(v[1].starts_with("New"));
  }

  #[test]
  fn scenario_four_decimal_like_abbreviation_does_not_split_mid_token() {
    let s = "has viscosity of 80-3000 cp at 20-30 deg.c. The slow released microsphere continued.";
    let v = sentences(s);
    assert_eq!(v.len(), 2, "{v:?}");
    assert!(v[0].ends_with("deg.c."), "{:?}", v[0]);
    assert!(v[1].starts_with("The"));
  }

  #[test]
  fn eg_abbreviation_does_not_split() {
    let s = "Use a solvent, e.g. ethanol, for this step.";
    let v = sentences(s);
    assert_eq!(v.len(), 1, "{v:?}");
  }

  #[test]
  fn ie_abbreviation_does_not_split() {
    let s = "Use the same amount, i.e. ten grams, for each batch.";
    let v = sentences(s);
    assert_eq!(v.len(), 1, "{v:?}");
  }

  #[test]
  fn scenario_five_ie_parenthetical_literal_regression() {
    // See DESIGN.md's Open Questions for the section 4.4 / scenario 5 contradiction this pins:
    // the comma, space, and "foo" between "i.e." and ")" all clear mood to Clean per section
    // 4.4's own rules, so no terminator mood survives to the close-paren and no split occurs.
    let s = "(i.e., foo) Bar is next.";
    let v = sentences(s);
    assert_eq!(v.len(), 1, "{v:?}");
  }

  #[test]
  fn salutation_abbreviation_does_not_split() {
    let s = "Please see Dr. Smith for the results.";
    let v = sentences(s);
    assert_eq!(v.len(), 1, "{v:?}");
  }

  #[test]
  fn closing_paren_before_uppercase_splits_after_hard_terminator() {
    // The terminator inside the parenthetical is a hard one, so its mood survives up to the
    // close-paren (no space intervenes between "!" and ")"), letting the group-close rule see
    // it and split before the upcoming capitalized word.
    let s = "The method works (see the note!) Later steps follow.";
    let v = sentences(s);
    assert_eq!(v.len(), 2, "{v:?}");
    assert!(v[0].ends_with(")"));
    assert!(v[1].starts_with("Later"));
  }

  #[test]
  fn quote_seals_sentence_inclusive_of_closing_quote() {
    let s = "She said \"it works.\" He agreed.";
    let v = sentences(s);
    assert_eq!(v.len(), 2, "{v:?}");
    assert!(v[0].ends_with("\""));
    assert!(v[1].starts_with("He"));
  }

  #[test]
  fn scenario_six_trailing_letter_with_no_terminator_flushes_one_sentence() {
    let s = "no terminating punctuation at all here";
    let v = sentences(s);
    assert_eq!(v.len(), 1);
    assert_eq!(v[0], s);
  }

  #[test]
  fn coverage_every_byte_of_every_sentence_is_in_bounds() {
    let s = "First one. Second one! Third, with etc. and more.";
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    for sent in SentenceAssembler::new(&tokens) {
      assert!(sent.end() < s.len());
      assert!(sent.begin() <= sent.end());
    }
  }

  #[test]
  fn sentence_containment_matches_token_offsets() {
    let s = "First one. Second one!";
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    for sent in SentenceAssembler::new(&tokens) {
      assert_eq!(tokens[sent.begin_tok()].begin(), sent.begin());
      assert_eq!(tokens[sent.end_tok()].end(), sent.end());
      assert!(sent.begin_tok() <= sent.end_tok());
    }
  }

  #[test]
  fn sentence_ordering_is_strictly_increasing_and_non_overlapping() {
    let s = "One. Two! Three? Four.";
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    let sents: Vec<_> = SentenceAssembler::new(&tokens).collect();
    for w in sents.windows(2) {
      assert!(w[0].end_tok() < w[1].begin_tok());
    }
  }

  #[test]
  fn idempotent_reassembly_yields_identical_sentences() {
    let s = "Repeat this. It should be stable, e.g. twice.";
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    let a: Vec<_> = SentenceAssembler::new(&tokens).map(|s| s.text().to_string()).collect();
    let b: Vec<_> = SentenceAssembler::new(&tokens).map(|s| s.text().to_string()).collect();
    assert_eq!(a, b);
  }

  #[test]
  fn technical_mode_constructor_has_identical_semantics_today() {
    let s = "Technical mode is reserved. It should act the same for now.";
    let tokens: Vec<_> = Tokenizer::new(s).collect();
    let a: Vec<_> = SentenceAssembler::new(&tokens).map(|s| s.text().to_string()).collect();
    let b: Vec<_> = SentenceAssembler::new_technical(&tokens)
      .map(|s| s.text().to_string())
      .collect();
    assert_eq!(a, b);
  }
}
