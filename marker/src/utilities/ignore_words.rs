//!
//! Ignore-Word Loader
//!
//! This module loads the list of low-information words that are excluded from keyword
//! comparisons. The list is a newline-delimited plain-text file, one word per line, with no
//! header, comments or escaping.
//!
//! # Functionality
//!
//! - Checks the existence, type and size of the file before reading it.
//! - Lowercases and trims every entry, skipping blank lines.
//! - Returns an immutable [`IgnoreSet`] meant to be built once at startup and shared by reference.
//!
//! # Error Handling
//!
//! Returns [`MarkerError::Io`] for missing, unreadable or oversized files.

use crate::error::MarkerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Maximum allowed size for the ignore-word file.
const MAX_IGNORE_FILE_SIZE: u64 = 1024 * 1024; // 1MB

/// Immutable set of lowercase words excluded from keyword comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    words: HashSet<String>,
}

impl IgnoreSet {
    /// Builds a set from in-memory words, normalizing them the same way [`IgnoreSet::load`] does.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads the set from a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::Io`] if the file is missing, not a file, unreadable, or too large.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MarkerError> {
        let path = path.as_ref();
        check_file(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read ignore-word file {}: {}", path.display(), e);
            MarkerError::Io(format!("Failed to read {}", path.display()))
        })?;

        let set = Self::from_words(content.lines());
        info!(path = %path.display(), words = set.len(), "Loaded ignore words");
        Ok(set)
    }

    /// Membership test. `word` is expected to be lowercase already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn check_file(path: &Path) -> Result<(), MarkerError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(MarkerError::Io(format!("File not found: {}", path.display())));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(MarkerError::Io(format!("Not a file: {}", path.display())));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        MarkerError::Io(format!("File unreadable: {}", path.display()))
    })?;

    if metadata.len() > MAX_IGNORE_FILE_SIZE {
        error!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_IGNORE_FILE_SIZE
        );
        return Err(MarkerError::Io(format!("File too large: {}", path.display())));
    }

    Ok(())
}
