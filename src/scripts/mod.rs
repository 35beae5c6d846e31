//! Script grammars.
//!
//! This module contains the syllable grammars and analyzers for each script.
//!
//! # Available Scripts
//!
//! Enable scripts via Cargo features:
//! - `devanagari` - Devanagari (U+0900–U+097F), enabled by default

#[cfg(feature = "devanagari")]
pub mod devanagari;
