use super::error::DevanagariError;

/// First codepoint of the Devanagari Unicode block.
pub const BLOCK_START: char = '\u{0900}';

/// Last codepoint of the Devanagari Unicode block.
pub const BLOCK_END: char = '\u{097F}';

/// Number of codepoints in the block.
pub const BLOCK_LEN: usize = 128;

/// Structural role of a codepoint in the syllable grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VowelLetter,
    ConsonantLetter,
    VowelSign,
    DiacriticalMark,
    NuktaSign,
    Digit,
}

/// A closed interval of codepoints tagged with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    pub low: char,
    pub high: char,
    pub category: Category,
}

impl CodepointRange {
    pub const fn new(low: char, high: char, category: Category) -> Self {
        Self {
            low,
            high,
            category,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.low <= c && c <= self.high
    }

    /// Every codepoint in the interval, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.low..=self.high
    }

    fn describe(&self) -> String {
        format!(
            "{:?} U+{:04X}..U+{:04X}",
            self.category, self.low as u32, self.high as u32
        )
    }

    fn overlaps(&self, other: &CodepointRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

/// Grammar ranges for Devanagari.
///
/// The virama (U+094D) sits between the two vowel-sign intervals on purpose:
/// it is left unclassified so halant-joined conjuncts never match.
pub const RANGES: &[CodepointRange] = &[
    CodepointRange::new('\u{0900}', '\u{0903}', Category::DiacriticalMark),
    CodepointRange::new('\u{0904}', '\u{0914}', Category::VowelLetter),
    CodepointRange::new('\u{0915}', '\u{0939}', Category::ConsonantLetter),
    CodepointRange::new('\u{093C}', '\u{093C}', Category::NuktaSign),
    CodepointRange::new('\u{093D}', '\u{094C}', Category::VowelSign),
    CodepointRange::new('\u{094E}', '\u{094F}', Category::VowelSign),
    CodepointRange::new('\u{0958}', '\u{095F}', Category::ConsonantLetter),
    CodepointRange::new('\u{0966}', '\u{096F}', Category::Digit),
];

/// Look up the grammar category of a codepoint.
///
/// Returns `None` for anything outside the grammar ranges, including
/// in-block characters such as the virama or the danda.
pub fn category_of(c: char) -> Option<Category> {
    category_in(RANGES, c)
}

/// Look up the category of a codepoint in an explicit range table.
pub fn category_in(ranges: &[CodepointRange], c: char) -> Option<Category> {
    ranges
        .iter()
        .find(|range| range.contains(c))
        .map(|range| range.category)
}

/// Every codepoint of `category`, in table order.
pub fn chars_of(ranges: &[CodepointRange], category: Category) -> Vec<char> {
    ranges
        .iter()
        .filter(|range| range.category == category)
        .flat_map(CodepointRange::chars)
        .collect()
}

/// Every consonant + vowel-sign combination the grammar accepts.
pub fn consonant_vowel_pairs(ranges: &[CodepointRange]) -> Vec<String> {
    let signs = chars_of(ranges, Category::VowelSign);
    chars_of(ranges, Category::ConsonantLetter)
        .into_iter()
        .flat_map(|consonant| signs.iter().map(move |sign| format!("{consonant}{sign}")))
        .collect()
}

/// One line per block codepoint: `U+0915 ConsonantLetter क`, `-` when unclassified.
pub fn render_block(ranges: &[CodepointRange]) -> String {
    let mut out = String::new();
    for c in BLOCK_START..=BLOCK_END {
        let category = category_in(ranges, c)
            .map(|category| format!("{category:?}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("U+{:04X} {category:<15} {c}\n", c as u32));
    }
    out
}

/// Whether `c` belongs to the Devanagari block at all.
pub fn is_in_script(c: char) -> bool {
    (BLOCK_START..=BLOCK_END).contains(&c)
}

/// Check a range table for inverted or overlapping intervals.
pub fn validate_ranges(ranges: &[CodepointRange]) -> Result<(), DevanagariError> {
    for range in ranges {
        if range.low > range.high {
            return Err(DevanagariError::MalformedRange {
                low: range.low as u32,
                high: range.high as u32,
            });
        }
    }

    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            if a.overlaps(b) {
                return Err(DevanagariError::OverlappingRanges {
                    first: a.describe(),
                    second: b.describe(),
                });
            }
        }
    }

    Ok(())
}

/// Count occurrences of each in-block codepoint, indexed by offset from U+0900.
pub fn character_histogram(text: &str) -> [u64; BLOCK_LEN] {
    let mut counts = [0u64; BLOCK_LEN];
    for c in text.chars().filter(|&c| is_in_script(c)) {
        counts[(c as u32 - BLOCK_START as u32) as usize] += 1;
    }
    counts
}

/// Render a histogram as 8 rows of 16 `char count` cells.
pub fn render_histogram(counts: &[u64; BLOCK_LEN]) -> String {
    let mut out = String::new();
    for (row, chunk) in counts.chunks(16).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, count)| {
                let offset = (row * 16 + col) as u32;
                let c = char::from_u32(BLOCK_START as u32 + offset).unwrap_or(' ');
                format!("{c:3} {count:7}")
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out
}
