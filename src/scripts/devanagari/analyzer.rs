use derive_builder::Builder;

use crate::corpus::{Corpus, TEXT_SEPARATOR};
use crate::{AnalysisResult, SyllableAnalyzer};

use super::classifier::{validate_ranges, CodepointRange, RANGES};
use super::error::DevanagariError;
use super::frequency::{self, BatchCounts};
use super::grammar::{self, WordMatch};
use super::normalize::normalize_text;
use super::syllable::Syllable;

/// Number of source texts tokenized together before merging into the running table.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Number of syllables kept in the ranked output.
pub const DEFAULT_TOP_N: usize = 300;

/// Parameters for a frequency run.
///
/// ```rust
/// use syllabary::scripts::devanagari::AnalyzerParamsBuilder;
///
/// let params = AnalyzerParamsBuilder::default().top_n(50).build()?;
/// assert_eq!(params.batch_size, 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct AnalyzerParams {
    /// Source texts per batch. Affects peak memory only, never the counts.
    #[builder(default = "DEFAULT_BATCH_SIZE")]
    pub batch_size: usize,
    /// How many of the most frequent syllables to keep.
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalyzerParams {
    fn check(&self) -> Result<(), DevanagariError> {
        check_sizes(Some(self.batch_size), Some(self.top_n))
            .map_err(DevanagariError::InvalidParams)
    }
}

impl AnalyzerParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        check_sizes(self.batch_size, self.top_n)
    }
}

fn check_sizes(batch_size: Option<usize>, top_n: Option<usize>) -> Result<(), String> {
    if batch_size == Some(0) {
        return Err("batch_size must be at least 1".to_string());
    }
    if top_n == Some(0) {
        return Err("top_n must be at least 1".to_string());
    }
    Ok(())
}

/// Devanagari syllable frequency analyzer.
///
/// Construction validates the codepoint range table; a broken table is a
/// configuration error and no analyzer exists without a valid one. All
/// tokenization goes through an analyzer, so nothing is ever matched against
/// an unvalidated table.
///
/// ```rust
/// use syllabary::{SyllableAnalyzer, scripts::devanagari::DevanagariAnalyzer};
///
/// let analyzer = DevanagariAnalyzer::new()?;
/// let result = analyzer.analyze(["राम राम सीता"])?;
/// assert_eq!(result.total_word_count, 3);
/// assert_eq!(result.fault_count, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DevanagariAnalyzer {
    ranges: &'static [CodepointRange],
}

impl DevanagariAnalyzer {
    /// Analyzer over the builtin Devanagari ranges.
    pub fn new() -> Result<Self, DevanagariError> {
        Self::with_ranges(RANGES)
    }

    /// Analyzer over a custom range table, rejected if malformed or overlapping.
    pub fn with_ranges(ranges: &'static [CodepointRange]) -> Result<Self, DevanagariError> {
        validate_ranges(ranges)?;
        log::debug!("Validated {} Devanagari codepoint ranges", ranges.len());
        Ok(Self { ranges })
    }

    /// The codepoint ranges the grammar classifies against.
    pub fn ranges(&self) -> &'static [CodepointRange] {
        self.ranges
    }

    /// Split one word into syllables, or reject it whole.
    pub fn tokenize_word(&self, word: &str) -> WordMatch {
        grammar::tokenize_word(self.ranges, word)
    }

    /// Tokenize, fold and count already normalized words.
    pub fn process_words<'a, I>(&self, words: I) -> BatchCounts
    where
        I: IntoIterator<Item = &'a str>,
    {
        frequency::process_words(self.ranges, words)
    }

    /// Count one batch of source texts.
    ///
    /// Batches share no state, so callers may evaluate several at once and
    /// merge the returned counts afterwards.
    pub fn analyze_batch<T: AsRef<str>>(&self, texts: &[T]) -> BatchCounts {
        let joined = texts
            .iter()
            .map(|text| text.as_ref())
            .collect::<Vec<_>>()
            .join(TEXT_SEPARATOR);
        let normalized = normalize_text(&joined);
        self.process_words(normalized.split_whitespace())
    }

    /// Rank accumulated counts into the final result.
    pub fn finish(&self, counts: BatchCounts, top_n: usize) -> AnalysisResult<Syllable> {
        let entries = counts.table.rank(top_n);
        log::info!(
            "Ranked {} of {} distinct syllables from {} words ({} rejected)",
            entries.len(),
            counts.table.len(),
            counts.word_count,
            counts.fault_count
        );
        AnalysisResult {
            entries,
            fault_count: counts.fault_count,
            total_word_count: counts.word_count,
        }
    }

    /// Analyze in-memory texts in batches of `params.batch_size`.
    pub fn run<I, T>(
        &self,
        texts: I,
        params: &AnalyzerParams,
    ) -> Result<AnalysisResult<Syllable>, DevanagariError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        params.check()?;

        let mut total = BatchCounts::default();
        let mut batch = Vec::with_capacity(params.batch_size);
        for text in texts {
            batch.push(text);
            if batch.len() == params.batch_size {
                total.merge(self.analyze_batch(&batch));
                batch.clear();
            }
        }
        if !batch.is_empty() {
            total.merge(self.analyze_batch(&batch));
        }

        Ok(self.finish(total, params.top_n))
    }

    /// Analyze every file of a corpus, reading one batch at a time.
    pub fn run_corpus(
        &self,
        corpus: &Corpus,
        params: &AnalyzerParams,
    ) -> Result<AnalysisResult<Syllable>, DevanagariError> {
        params.check()?;

        let mut total = BatchCounts::default();
        for start in (0..corpus.len()).step_by(params.batch_size) {
            let text = corpus.read_batch(start, params.batch_size)?;
            let end = (start + params.batch_size).min(corpus.len());
            log::debug!("Processing corpus files {start}..{end}");
            total.merge(self.analyze_batch(&[text]));
        }

        Ok(self.finish(total, params.top_n))
    }
}

impl SyllableAnalyzer for DevanagariAnalyzer {
    type Syllable = Syllable;
    type Params = AnalyzerParams;

    fn analyze_with_params<I, T>(
        &self,
        texts: I,
        params: Self::Params,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Ok(self.run(texts, &params)?)
    }

    fn analyze_corpus_with_params(
        &self,
        corpus: &Corpus,
        params: Self::Params,
    ) -> Result<AnalysisResult<Self::Syllable>, Box<dyn std::error::Error>> {
        Ok(self.run_corpus(corpus, &params)?)
    }
}
