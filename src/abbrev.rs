//! Static, `'static`-lifetime abbreviation tables consulted by the sentence assembler when a
//! `Term` or `MayBeTerm` token is encountered. All keys are lowercase; callers lowercase the
//! token text before lookup.

use phf::{phf_map, phf_set};

/// Preceded by one of these, a `.` does not end a sentence.
pub static NON_TERM_ABBREVS: phf::Set<&'static str> = phf_set! {
  "viz", "eg", "ex", "fig", "mr", "ms", "mrs", "dr", "prof",
};

/// Preceded by one of these, a `.` is an ambiguous (soft) sentence boundary.
pub static MAY_BE_TERM_ABBREVS: phf::Set<&'static str> = phf_set! {
  "etc",
};

/// Compound abbreviations needing two-token lookahead across intervening `.` and space tokens,
/// keyed by the last letter of the abbreviation and mapping to its required preceding letters.
/// `'g' => ['e']` matches "e.g."; `'e' => ['i']` matches "i.e.".
pub static MAY_BE_TERM_GROUP_ABBREVS: phf::Map<char, &'static [char]> = phf_map! {
  'g' => &['e'],
  'e' => &['i'],
};
