use std::fmt;

use serde::Serialize;

/// One grammar-matched unit of Devanagari text.
///
/// Exactly one of three shapes is populated:
/// - vowel letter, optionally followed by a diacritical mark
/// - consonant, optionally followed by nukta, vowel sign and diacritical mark
/// - a lone digit
///
/// Instances are only produced by the tokenizer, which guarantees the shape.
/// Equality and hashing cover every field, nukta included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Syllable {
    pub vowel: Option<char>,
    pub consonant: Option<char>,
    pub nukta: Option<char>,
    pub vowel_sign: Option<char>,
    pub diacritical_mark: Option<char>,
    pub digit: Option<char>,
}

impl Syllable {
    pub(crate) fn vowel(vowel: char, diacritical_mark: Option<char>) -> Self {
        Self {
            vowel: Some(vowel),
            consonant: None,
            nukta: None,
            vowel_sign: None,
            diacritical_mark,
            digit: None,
        }
    }

    pub(crate) fn consonant(
        consonant: char,
        nukta: Option<char>,
        vowel_sign: Option<char>,
        diacritical_mark: Option<char>,
    ) -> Self {
        Self {
            vowel: None,
            consonant: Some(consonant),
            nukta,
            vowel_sign,
            diacritical_mark,
            digit: None,
        }
    }

    pub(crate) fn digit(digit: char) -> Self {
        Self {
            vowel: None,
            consonant: None,
            nukta: None,
            vowel_sign: None,
            diacritical_mark: None,
            digit: Some(digit),
        }
    }

    /// Copy of this syllable with the nukta dropped.
    ///
    /// Applied to every accepted syllable before counting, so nukta-bearing
    /// and plain variants share one frequency entry.
    pub fn fold(&self) -> Self {
        Self { nukta: None, ..*self }
    }

    /// Number of characters the grammar consumed to produce this syllable.
    pub fn char_len(&self) -> usize {
        self.fields().iter().filter(|field| field.is_some()).count()
    }

    /// Canonical string form: vowel, consonant, vowel sign, diacritical mark, digit.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn fields(&self) -> [Option<char>; 6] {
        [
            self.vowel,
            self.consonant,
            self.nukta,
            self.vowel_sign,
            self.diacritical_mark,
            self.digit,
        ]
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // nukta is never part of the canonical form
        let parts = [
            self.vowel,
            self.consonant,
            self.vowel_sign,
            self.diacritical_mark,
            self.digit,
        ];
        for c in parts.into_iter().flatten() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
