//! Serialization of ranked inventories.
//!
//! Two formats are provided: a JSON array of records for machine consumption
//! and a grouped plain-text dump of canonical strings for human review.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use crate::RankedEntry;

/// Lines per block in the plain-text dump.
pub const DEFAULT_BLOCK_SIZE: usize = 20;

/// Parameters for the plain-text exporter.
#[derive(Debug, Clone)]
pub struct ExportParams {
    /// Entries per visual block. Blocks are separated by two blank lines.
    pub block_size: usize,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Write entries as `[{"syllable": {..}, "frequency": n}, ..]`.
pub fn write_json<S: Serialize, W: Write>(
    entries: &[RankedEntry<S>],
    writer: W,
) -> serde_json::Result<()> {
    serde_json::to_writer(writer, entries)
}

/// Write each entry's string form on its own line, `block_size` lines per block.
pub fn write_grouped_text<S: Display, W: Write>(
    entries: &[RankedEntry<S>],
    mut writer: W,
    params: &ExportParams,
) -> io::Result<()> {
    for block in entries.chunks(params.block_size.max(1)) {
        for entry in block {
            writeln!(writer, "{}", entry.syllable)?;
        }
        writer.write_all(b"\n\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<RankedEntry<String>> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| RankedEntry {
                syllable: name.to_string(),
                frequency: i as u64 + 1,
            })
            .collect()
    }

    #[test]
    fn groups_lines_into_blocks() {
        let mut out = Vec::new();
        let params = ExportParams { block_size: 2 };
        write_grouped_text(&entries(&["क", "ख", "ग"]), &mut out, &params).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "क\nख\n\n\nग\n\n\n");
    }

    #[test]
    fn empty_inventory_writes_nothing() {
        let mut out = Vec::new();
        write_grouped_text(&entries(&[]), &mut out, &ExportParams::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn json_records_carry_frequency() {
        let mut out = Vec::new();
        write_json(&entries(&["क"]), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, serde_json::json!([{"syllable": "क", "frequency": 1}]));
    }
}
