use std::cmp::Reverse;
use std::collections::HashMap;

use crate::RankedEntry;

use super::classifier::CodepointRange;
use super::grammar::{tokenize_word, WordMatch};
use super::syllable::Syllable;

/// Counts of folded syllables.
///
/// Keys compare by the full field tuple, not by canonical string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Syllable, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, syllable: Syllable) {
        *self.counts.entry(syllable).or_insert(0) += 1;
    }

    /// Fold another table into this one. Order of merges never changes the result.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (syllable, count) in other.counts {
            *self.counts.entry(syllable).or_insert(0) += count;
        }
    }

    pub fn get(&self, syllable: &Syllable) -> u64 {
        self.counts.get(syllable).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Syllable, u64)> {
        self.counts.iter().map(|(syllable, &count)| (syllable, count))
    }

    /// Select the `top_n` most frequent syllables, then order them by canonical string.
    ///
    /// Ties on count are broken by the syllable's field order, so the cut at
    /// `top_n` depends only on the counts and never on insertion history.
    pub fn rank(&self, top_n: usize) -> Vec<RankedEntry<Syllable>> {
        let mut ranked: Vec<(Syllable, u64)> = self
            .counts
            .iter()
            .map(|(&syllable, &count)| (syllable, count))
            .collect();
        ranked.sort_by_key(|&(syllable, count)| (Reverse(count), syllable));
        ranked.truncate(top_n);

        let mut entries: Vec<RankedEntry<Syllable>> = ranked
            .into_iter()
            .map(|(syllable, frequency)| RankedEntry {
                syllable,
                frequency,
            })
            .collect();
        entries.sort_by_cached_key(|entry| (entry.syllable.to_string(), entry.syllable));
        entries
    }
}

impl FromIterator<Syllable> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Syllable>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for syllable in iter {
            table.add(syllable);
        }
        table
    }
}

/// Per-batch tally: the table plus word-level counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchCounts {
    pub table: FrequencyTable,
    pub fault_count: u64,
    pub word_count: u64,
}

impl BatchCounts {
    pub fn merge(&mut self, other: BatchCounts) {
        self.table.merge(other.table);
        self.fault_count += other.fault_count;
        self.word_count += other.word_count;
    }
}

/// Tokenize, fold and count a sequence of words.
///
/// A rejected word adds one fault and nothing to the table. `ranges` must be
/// a validated table; the public entry point is `DevanagariAnalyzer::process_words`.
pub(crate) fn process_words<'a, I>(ranges: &[CodepointRange], words: I) -> BatchCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BatchCounts::default();

    for word in words {
        counts.word_count += 1;
        match tokenize_word(ranges, word) {
            WordMatch::Accepted(syllables) => {
                for syllable in syllables {
                    counts.table.add(syllable.fold());
                }
            }
            WordMatch::Rejected {
                covered, length, ..
            } => {
                log::debug!("Rejected word {word:?}: matched {covered} of {length} characters");
                counts.fault_count += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripts::devanagari::classifier::RANGES;

    fn syllable(text: &str) -> Syllable {
        match tokenize_word(RANGES, text) {
            WordMatch::Accepted(syllables) if syllables.len() == 1 => syllables[0].fold(),
            other => panic!("{text:?} is not a single syllable: {other:?}"),
        }
    }

    #[test]
    fn counts_accepted_and_skips_rejected() {
        let counts = process_words(RANGES, ["ममx", "मम"]);
        assert_eq!(counts.word_count, 2);
        assert_eq!(counts.fault_count, 1);
        assert_eq!(counts.table.len(), 1);
        assert_eq!(counts.table.get(&syllable("म")), 2);
    }

    #[test]
    fn nukta_variants_share_an_entry() {
        let counts = process_words(RANGES, ["ड\u{093C}ा", "डा"]);
        assert_eq!(counts.table.len(), 1);
        assert_eq!(counts.table.get(&syllable("डा")), 2);
    }

    #[test]
    fn empty_input_yields_empty_counts() {
        let counts = process_words(RANGES, std::iter::empty());
        assert_eq!(counts, BatchCounts::default());
    }

    #[test]
    fn merge_is_order_independent() {
        let a = process_words(RANGES, ["राम", "मम"]);
        let b = process_words(RANGES, ["सीता", "राम"]);

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);
        assert_eq!(ab, ba);
        assert_eq!(ab.table.get(&syllable("रा")), 2);
    }

    #[test]
    fn rank_cuts_by_count_then_sorts_by_string() {
        let table: FrequencyTable = ["म", "म", "म", "क", "क", "अ", "ग"]
            .iter()
            .map(|s| syllable(s))
            .collect();

        let ranked = table.rank(3);
        let rendered: Vec<(String, u64)> = ranked
            .iter()
            .map(|entry| (entry.syllable.to_string(), entry.frequency))
            .collect();
        // ग beats अ on the tie: an absent vowel orders first
        assert_eq!(
            rendered,
            vec![
                ("क".to_string(), 2),
                ("ग".to_string(), 1),
                ("म".to_string(), 3),
            ]
        );
    }

    #[test]
    fn rank_zero_is_empty() {
        let table: FrequencyTable = [syllable("म")].into_iter().collect();
        assert!(table.rank(0).is_empty());
    }
}
