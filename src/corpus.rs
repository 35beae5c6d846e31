//! Corpus discovery and batch loading.
//!
//! The analyzers never touch the file system themselves; this module turns a
//! directory of plain-text files into an explicit, ordered list of sources
//! and reads them a batch at a time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Separator placed between texts read into the same batch.
pub const TEXT_SEPARATOR: &str = "\n\n";

/// An ordered list of UTF-8 text files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    paths: Vec<PathBuf>,
}

impl Corpus {
    /// Collect every regular file directly inside `dir`.
    ///
    /// Paths are sorted so that runs are reproducible regardless of the order
    /// the platform lists directory entries in.
    pub fn from_dir(dir: &Path) -> io::Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            } else {
                log::warn!("Skipping non-file corpus entry {}", path.display());
            }
        }
        paths.sort();

        log::info!("Found {} corpus files in {}", paths.len(), dir.display());
        Ok(Self { paths })
    }

    /// Use the given files in the given order.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Read up to `count` files starting at `start`, joined by [`TEXT_SEPARATOR`].
    ///
    /// A range past the end yields an empty string.
    pub fn read_batch(&self, start: usize, count: usize) -> io::Result<String> {
        let end = start.saturating_add(count).min(self.paths.len());
        let start = start.min(end);

        let texts = self.paths[start..end]
            .iter()
            .map(fs::read_to_string)
            .collect::<io::Result<Vec<String>>>()?;
        Ok(texts.join(TEXT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::Corpus;
    use std::fs;

    #[test]
    fn discovers_files_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "दो").unwrap();
        fs::write(dir.path().join("a.txt"), "एक").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let corpus = Corpus::from_dir(dir.path()).unwrap();
        let names: Vec<_> = corpus
            .paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn reads_batches_with_separator() {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in [("1.txt", "क"), ("2.txt", "ख"), ("3.txt", "ग")] {
            fs::write(dir.path().join(name), text).unwrap();
        }
        let corpus = Corpus::from_dir(dir.path()).unwrap();

        assert_eq!(corpus.read_batch(0, 2).unwrap(), "क\n\nख");
        assert_eq!(corpus.read_batch(2, 2).unwrap(), "ग");
        assert_eq!(corpus.read_batch(5, 2).unwrap(), "");
    }

    #[test]
    fn missing_file_is_an_error() {
        let corpus = Corpus::from_paths(vec!["/nonexistent/corpus.txt".into()]);
        assert!(corpus.read_batch(0, 1).is_err());
    }
}
