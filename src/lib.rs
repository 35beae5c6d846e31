//! # syllabary
//!
//! A Rust library that splits script text into grammar-defined syllables and
//! ranks them by corpus frequency, producing a reference syllable inventory.
//!
//! ## Features
//!
//! - **Devanagari grammar**: vowel-letter, consonant and digit syllables over
//!   explicit Unicode ranges, with whole-word rejection of anything else
//! - **Nukta folding**: nukta-bearing and plain consonants count as one entry
//! - **Batched counting**: corpora are processed a batch of files at a time
//! - **Exporters**: JSON records and grouped plain text for review
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! syllabary = { version = "2026.10", features = ["devanagari"] }
//! ```
//!
//! ```ignore
//! use std::path::PathBuf;
//! use syllabary::{corpus::Corpus, scripts::devanagari::DevanagariAnalyzer, SyllableAnalyzer};
//!
//! let analyzer = DevanagariAnalyzer::new()?;
//! let corpus = Corpus::from_dir(&PathBuf::from("data/corpus"))?;
//!
//! let result = analyzer.analyze_corpus(&corpus)?;
//! result.write_json(&PathBuf::from("frequency.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod corpus;
pub mod export;
pub mod scripts;

use std::fmt::Display;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;

/// One row of the ranked inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry<S> {
    pub syllable: S,
    pub frequency: u64,
}

/// The result of a frequency analysis.
///
/// Entries are ordered by canonical string, not by frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult<S> {
    /// The most frequent syllables, sorted by their string form
    pub entries: Vec<RankedEntry<S>>,
    /// Words rejected by the grammar
    pub fault_count: u64,
    /// Words seen, accepted or not
    pub total_word_count: u64,
}

impl<S> AnalysisResult<S> {
    /// Share of words the grammar rejected, `0.0` for an empty run.
    pub fn fault_ratio(&self) -> f64 {
        if self.total_word_count == 0 {
            0.0
        } else {
            self.fault_count as f64 / self.total_word_count as f64
        }
    }
}

impl<S: Serialize + Display> AnalysisResult<S> {
    /// Write the entries as a JSON array of `{syllable, frequency}` records.
    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let writer = BufWriter::new(File::create(path)?);
        export::write_json(&self.entries, writer)?;
        Ok(())
    }

    /// Write canonical strings one per line, grouped into blocks.
    pub fn write_text(
        &self,
        path: &Path,
        params: &export::ExportParams,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let writer = BufWriter::new(File::create(path)?);
        export::write_grouped_text(&self.entries, writer, params)?;
        Ok(())
    }
}

/// Common interface for script-specific syllable analyzers.
///
/// Each analyzer defines its own syllable type and run parameters.
pub trait SyllableAnalyzer {
    /// The syllable record produced by the script's grammar
    type Syllable;
    /// Parameters for a run (batch size, cut-off, etc.)
    type Params: Default;

    /// Analyze in-memory source texts using default parameters.
    fn analyze<I, T>(
        &self,
        texts: I,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.analyze_with_params(texts, Self::Params::default())
    }

    /// Analyze in-memory source texts, in caller order, with custom parameters.
    fn analyze_with_params<I, T>(
        &self,
        texts: I,
        params: Self::Params,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>;

    /// Analyze every file of a corpus using default parameters.
    fn analyze_corpus(
        &self,
        corpus: &Corpus,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>> {
        self.analyze_corpus_with_params(corpus, Self::Params::default())
    }

    /// Analyze every file of a corpus with custom parameters.
    fn analyze_corpus_with_params(
        &self,
        corpus: &Corpus,
        params: Self::Params,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>>;
}
