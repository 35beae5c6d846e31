use std::path::PathBuf;
use std::time::Instant;

use syllabary::{
    corpus::Corpus,
    export::ExportParams,
    scripts::devanagari::{classifier, AnalyzerParamsBuilder, DevanagariAnalyzer},
    SyllableAnalyzer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let corpus_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/corpus"));
    let out_dir = PathBuf::from("data");

    let analyzer = DevanagariAnalyzer::new()?;
    let corpus = Corpus::from_dir(&corpus_dir)?;
    println!("Corpus: {} files in {}", corpus.len(), corpus_dir.display());

    if let Some(first) = corpus.paths().first() {
        let sample = std::fs::read_to_string(first)?;
        println!("Character histogram of {}:", first.display());
        print!(
            "{}",
            classifier::render_histogram(&classifier::character_histogram(&sample))
        );
    }

    if std::env::var_os("SYLLABARY_SHOW_GRAMMAR").is_some() {
        print!("{}", classifier::render_block(analyzer.ranges()));
        for pair in classifier::consonant_vowel_pairs(analyzer.ranges()) {
            println!("{pair}");
        }
    }

    let params = AnalyzerParamsBuilder::default()
        .batch_size(10)
        .top_n(300)
        .build()?;

    let start = Instant::now();
    let result = analyzer.analyze_corpus_with_params(&corpus, params)?;
    println!(
        "Ranked {} syllables from {} words in {:.2?} ({} rejected, {:.1}%)",
        result.entries.len(),
        result.total_word_count,
        start.elapsed(),
        result.fault_count,
        result.fault_ratio() * 100.0
    );

    result.write_json(&out_dir.join("frequency.json"))?;
    result.write_text(&out_dir.join("syllables.txt"), &ExportParams::default())?;
    println!("Saved to {}", out_dir.display());

    Ok(())
}
