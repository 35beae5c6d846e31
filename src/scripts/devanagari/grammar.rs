use super::classifier::{category_in, Category, CodepointRange};
use super::syllable::Syllable;

/// Outcome of tokenizing a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordMatch {
    /// Every character of the word was consumed by some syllable.
    Accepted(Vec<Syllable>),
    /// Part of the word matched no alternative. Nothing from it may be counted.
    Rejected {
        /// Characters consumed by the syllables that did match.
        covered: usize,
        /// Character length of the whole word.
        length: usize,
        /// Syllables found along the way, kept for diagnostics only.
        partial: Vec<Syllable>,
    },
}

impl WordMatch {
    pub fn is_accepted(&self) -> bool {
        matches!(self, WordMatch::Accepted(_))
    }

    /// The syllables of an accepted word; empty for a rejected one.
    pub fn into_syllables(self) -> Vec<Syllable> {
        match self {
            WordMatch::Accepted(syllables) => syllables,
            WordMatch::Rejected { .. } => Vec::new(),
        }
    }
}

/// Grammar alternatives, tried in this order at every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternative {
    VowelLetter,
    Consonant,
    Digit,
}

const ALTERNATIVES: [Alternative; 3] = [
    Alternative::VowelLetter,
    Alternative::Consonant,
    Alternative::Digit,
];

/// Character cursor over a word.
struct Cursor<'a> {
    ranges: &'a [CodepointRange],
    chars: &'a [char],
    pos: usize,
}

impl Cursor<'_> {
    fn peek_category(&self) -> Option<Category> {
        let c = *self.chars.get(self.pos)?;
        category_in(self.ranges, c)
    }

    /// Consume the next character if it falls in `category`.
    fn take(&mut self, category: Category) -> Option<char> {
        if self.peek_category() == Some(category) {
            let c = self.chars[self.pos];
            self.pos += 1;
            Some(c)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

impl Alternative {
    /// Match this alternative at the cursor, consuming greedily.
    /// Leaves the cursor untouched when the required head is absent.
    fn try_match(self, cursor: &mut Cursor<'_>) -> Option<Syllable> {
        match self {
            Alternative::VowelLetter => {
                let vowel = cursor.take(Category::VowelLetter)?;
                let mark = cursor.take(Category::DiacriticalMark);
                Some(Syllable::vowel(vowel, mark))
            }
            Alternative::Consonant => {
                let consonant = cursor.take(Category::ConsonantLetter)?;
                let nukta = cursor.take(Category::NuktaSign);
                let sign = cursor.take(Category::VowelSign);
                let mark = cursor.take(Category::DiacriticalMark);
                Some(Syllable::consonant(consonant, nukta, sign, mark))
            }
            Alternative::Digit => cursor.take(Category::Digit).map(Syllable::digit),
        }
    }
}

/// Split one word into syllables, or reject it whole.
///
/// `ranges` must already have passed `validate_ranges`; callers outside the
/// crate reach this through `DevanagariAnalyzer::tokenize_word`.
///
/// Scans left to right trying the vowel-letter, consonant and digit
/// alternatives in order. An unmatched character is skipped so the rest of
/// the word is still scanned, but the word is then rejected because the
/// matched characters no longer cover its full length.
pub(crate) fn tokenize_word(ranges: &[CodepointRange], word: &str) -> WordMatch {
    let chars: Vec<char> = word.chars().collect();
    let mut cursor = Cursor {
        ranges,
        chars: &chars,
        pos: 0,
    };
    let mut syllables = Vec::new();

    while !cursor.at_end() {
        let matched = ALTERNATIVES
            .iter()
            .find_map(|alternative| alternative.try_match(&mut cursor));
        match matched {
            Some(syllable) => syllables.push(syllable),
            None => cursor.pos += 1,
        }
    }

    let covered: usize = syllables.iter().map(Syllable::char_len).sum();
    if covered == chars.len() {
        WordMatch::Accepted(syllables)
    } else {
        WordMatch::Rejected {
            covered,
            length: chars.len(),
            partial: syllables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripts::devanagari::classifier::RANGES;

    fn tokenize(word: &str) -> WordMatch {
        tokenize_word(RANGES, word)
    }

    fn accepted(word: &str) -> Vec<Syllable> {
        match tokenize(word) {
            WordMatch::Accepted(syllables) => syllables,
            other => panic!("expected {word:?} to be accepted, got {other:?}"),
        }
    }

    #[test]
    fn splits_ram_into_two_syllables() {
        let syllables = accepted("राम");
        assert_eq!(
            syllables,
            vec![
                Syllable::consonant('र', None, Some('ा'), None),
                Syllable::consonant('म', None, None, None),
            ]
        );
        let strings: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
        assert_eq!(strings, vec!["रा", "म"]);
    }

    #[test]
    fn consonant_consumes_nukta_sign_and_mark_in_order() {
        let syllables = accepted("\u{0921}\u{093C}\u{093E}\u{0901}");
        assert_eq!(
            syllables,
            vec![Syllable::consonant('ड', Some('\u{093C}'), Some('ा'), Some('ँ'))]
        );
    }

    #[test]
    fn vowel_letter_takes_optional_mark() {
        assert_eq!(
            accepted("अंक"),
            vec![
                Syllable::vowel('अ', Some('ं')),
                Syllable::consonant('क', None, None, None),
            ]
        );
    }

    #[test]
    fn digits_stand_alone() {
        assert_eq!(
            accepted("२०"),
            vec![Syllable::digit('२'), Syllable::digit('०')]
        );
        // a diacritical mark never attaches to a digit
        assert!(!tokenize("२ं").is_accepted());
    }

    #[test]
    fn rejects_word_with_latin_letter() {
        match tokenize("रामx") {
            WordMatch::Rejected {
                covered,
                length,
                partial,
            } => {
                assert_eq!(covered, 3);
                assert_eq!(length, 4);
                assert_eq!(partial.len(), 2);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(tokenize("रामx").into_syllables().is_empty());
    }

    #[test]
    fn rejects_virama_conjunct() {
        // क्ष: consonant, virama, consonant
        assert!(!tokenize("क्ष").is_accepted());
    }

    #[test]
    fn rejects_orphan_vowel_sign() {
        assert!(!tokenize("ाम").is_accepted());
    }

    #[test]
    fn scanning_continues_past_unmatched_character() {
        match tokenize("क।म") {
            WordMatch::Rejected { partial, .. } => assert_eq!(partial.len(), 2),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn accepted_words_are_fully_covered() {
        for word in ["नमस्ते", "भारत", "हिंदी", "ज\u{093C}िंदगी", "१९४७", "आओ", "ऋषि"] {
            if let WordMatch::Accepted(syllables) = tokenize(word) {
                let covered: usize = syllables.iter().map(Syllable::char_len).sum();
                assert_eq!(covered, word.chars().count(), "{word}");
            }
        }
    }

    #[test]
    fn canonical_form_reconstructs_word_without_nukta() {
        for word in ["भारत", "हिंदी", "ज\u{093C}िंदगी", "\u{0921}\u{093C}\u{093E}\u{0901}", "१९४७", "आओ"] {
            let rebuilt: String = accepted(word)
                .iter()
                .map(|s| s.fold().to_string())
                .collect();
            let expected: String = word.chars().filter(|&c| c != '\u{093C}').collect();
            assert_eq!(rebuilt, expected, "{word}");
        }
    }

    #[test]
    fn empty_word_is_trivially_accepted() {
        assert_eq!(tokenize(""), WordMatch::Accepted(Vec::new()));
    }
}
