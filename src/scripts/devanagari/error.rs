#[derive(thiserror::Error, Debug)]
pub enum DevanagariError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed codepoint range U+{low:04X}..U+{high:04X}: low end is above high end")]
    MalformedRange { low: u32, high: u32 },
    #[error("Codepoint ranges overlap: {first} and {second}")]
    OverlappingRanges { first: String, second: String },
    #[error("Invalid analyzer parameters: {0}")]
    InvalidParams(String),
}
