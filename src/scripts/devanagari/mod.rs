//! Devanagari syllable grammar and frequency analyzer.
//!
//! Words are split into syllables by an ordered grammar over codepoint ranges.
//! A word that the grammar cannot cover completely is rejected as a whole and
//! only counted as a fault.
//!
//! # Grammar
//!
//! | Alternative  | Shape                                                      |
//! |---|---|
//! | Vowel letter | vowel letter, optional diacritical mark                    |
//! | Consonant    | consonant, optional nukta, vowel sign, diacritical mark    |
//! | Digit        | a single digit                                             |
//!
//! Alternatives are tried in that order at each position and take their
//! optional parts greedily. The virama is deliberately unclassified, so
//! conjuncts such as `क्ष` are rejected.
//!
//! # Codepoint Ranges
//!
//! | Category         | Ranges                       |
//! |---|---|
//! | Diacritical mark | U+0900–U+0903                |
//! | Vowel letter     | U+0904–U+0914                |
//! | Consonant letter | U+0915–U+0939, U+0958–U+095F |
//! | Nukta sign       | U+093C                       |
//! | Vowel sign       | U+093D–U+094C, U+094E–U+094F |
//! | Digit            | U+0966–U+096F                |
//!
//! # Examples
//!
//! ## Tokenizing a Word
//!
//! ```rust
//! use syllabary::scripts::devanagari::{DevanagariAnalyzer, WordMatch};
//!
//! let analyzer = DevanagariAnalyzer::new()?;
//! let WordMatch::Accepted(syllables) = analyzer.tokenize_word("राम") else {
//!     panic!("राम should be accepted");
//! };
//! let strings: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
//! assert_eq!(strings, ["रा", "म"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Ranking a Corpus
//!
//! ```rust,no_run
//! use syllabary::{SyllableAnalyzer, corpus::Corpus};
//! use syllabary::scripts::devanagari::{AnalyzerParamsBuilder, DevanagariAnalyzer};
//! use std::path::PathBuf;
//!
//! let analyzer = DevanagariAnalyzer::new()?;
//! let corpus = Corpus::from_dir(&PathBuf::from("data/corpus"))?;
//! let params = AnalyzerParamsBuilder::default().batch_size(5).build()?;
//!
//! let result = analyzer.analyze_corpus_with_params(&corpus, params)?;
//! println!("{} syllables, {} rejected words", result.entries.len(), result.fault_count);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod frequency;
pub mod grammar;
pub mod normalize;
pub mod syllable;

pub use analyzer::{AnalyzerParams, AnalyzerParamsBuilder, DevanagariAnalyzer};
pub use classifier::{category_of, is_in_script, Category};
pub use error::DevanagariError;
pub use frequency::{BatchCounts, FrequencyTable};
pub use grammar::WordMatch;
pub use normalize::normalize_text;
pub use syllable::Syllable;
