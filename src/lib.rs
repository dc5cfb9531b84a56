//! A rune-classifying tokenizer and abbreviation-aware sentence boundary segmenter for
//! scientific and patent text.
//!
//! The core pipeline is two stages:
//!
//! 1. [`tokenizer::Tokenizer`] turns a `&str` into a lazy sequence of [`token::TextToken`]s,
//!    coalescing runs of letters or digits into `MayBeWord` tokens and classifying everything
//!    else with [`classify::classify`].
//! 2. [`sentence::SentenceAssembler`] turns that token sequence into a lazy sequence of
//!    [`sentence::Sentence`]s, using a boundary state machine that knows about abbreviations
//!    (`abbrev`), decimal-looking runs, parenthetical asides, and quoted continuations.
//!
//! Everything else in this crate — [`document`], [`annotation`], [`word`], and the
//! `fixtures`-gated [`fixture`] module — is a thin collaborator layer that indexes into the
//! core's token and sentence spans; none of it implements sentence-boundary logic itself.
//!
//! ```
//! use microseg::tokenizer::Tokenizer;
//! use microseg::sentence::SentenceAssembler;
//!
//! let text = "An aryl-substituted compound is disclosed. It treats leukemia.";
//! let tokens: Vec<_> = Tokenizer::new(text).collect();
//! let sentences: Vec<_> = SentenceAssembler::new(&tokens).collect();
//!
//! assert_eq!(sentences.len(), 2);
//! assert!(sentences[0].text().ends_with("disclosed."));
//! assert!(sentences[1].text().starts_with("It"));
//! ```

pub mod abbrev;
pub mod annotation;
pub mod classify;
pub mod document;
pub mod error;
#[cfg(feature = "fixtures")]
pub mod fixture;
pub mod sentence;
pub mod token;
pub mod tokenizer;
pub mod word;

pub use classify::classify;
pub use document::{Document, SectionId};
pub use error::SegError;
pub use sentence::{Sentence, SentenceAssembler};
pub use token::{TextToken, TokenKind};
pub use tokenizer::Tokenizer;
