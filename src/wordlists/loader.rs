//! Word list loading utilities
//!
//! Lists are line-delimited. Lines are trimmed and blank lines skipped; any
//! other line must be a valid word or loading fails.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank entry is not a valid word; `line` is 1-based
    #[error("line {line}: invalid word {text:?}")]
    MalformedWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::MalformedWord` for the first invalid entry.
///
/// # Examples
/// ```no_run
/// use quordle_ai::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_lines(content.lines())
}

/// Convert an embedded string slice to words
///
/// # Errors
///
/// Returns `LoadError::MalformedWord` for the first invalid entry; `line` is
/// its 1-based index in the slice.
///
/// # Examples
/// ```
/// use quordle_ai::wordlists::loader::words_from_slice;
/// use quordle_ai::wordlists::SAMPLE_ANSWERS;
///
/// let words = words_from_slice(SAMPLE_ANSWERS).unwrap();
/// assert_eq!(words.len(), SAMPLE_ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, LoadError> {
    parse_lines(slice.iter().copied())
}

fn parse_lines<'a, I>(lines: I) -> Result<Vec<Word>, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| LoadError::MalformedWord {
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_list(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("quordle_ai_{}_{name}.txt", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", " irate "]).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        let err = words_from_slice(&["crane", "toolong", "slate"]).unwrap_err();

        match err {
            LoadError::MalformedWord { line, text, source } => {
                assert_eq!(line, 2);
                assert_eq!(text, "toolong");
                assert_eq!(source, WordError::InvalidLength(7));
            }
            LoadError::Io { .. } => panic!("unexpected I/O error"),
        }
    }

    #[test]
    fn words_from_slice_empty() {
        let words = words_from_slice(&[]).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let path = temp_list("blank", "crane\n\n  slate  \r\n\nstone\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "stone"]);
    }

    #[test]
    fn load_from_file_reports_malformed_line() {
        let path = temp_list("malformed", "crane\n\nsl4te\nstone\n");
        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::MalformedWord { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: invalid word \"sl4te\"");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/quordle_ai/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::SAMPLE_ANSWERS;

        let words = words_from_slice(SAMPLE_ANSWERS).unwrap();
        assert_eq!(words.len(), SAMPLE_ANSWERS.len());
    }
}
