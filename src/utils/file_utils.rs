/// Input handling utilities
///
/// This module provides functions for acquiring the strings to annotate (a
/// literal argument, a file, or standard input) and for loading the public
/// suffix list used by the internet classifier.

use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::core::internet::SuffixSet;

/// Default column width for file and stdin input
pub const DEFAULT_COL_WIDTH: usize = 50;

/// Suffix list bundled with the binary (every delegated root zone TLD)
pub const BUNDLED_TLD_LIST: &str = include_str!("../../data/IANA_TLDs.txt");

/// Errors raised while acquiring input or reference resources
#[derive(Debug, thiserror::Error)]
pub enum InterestringError {
    /// The strings input file could not be read
    #[error("Failed to read input file {path}: {source}")]
    InputFile { path: PathBuf, source: io::Error },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// The suffix list could not be read
    #[error("Failed to read TLD list {path}: {source}")]
    TldList { path: PathBuf, source: io::Error },
}

/// Where the strings to annotate come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single string given on the command line
    Literal(String),
    /// A strings dump on disk
    File(PathBuf),
    /// Piped standard input
    Stdin,
}

impl InputSource {
    /// Resolve the positional argument.
    ///
    /// An existing path is read as a file, anything else is the string to
    /// look up. No argument means stdin.
    pub fn from_argument(argument: Option<&str>) -> Self {
        match argument {
            Some(value) if Path::new(value).exists() => InputSource::File(PathBuf::from(value)),
            Some(value) => InputSource::Literal(value.to_string()),
            None => InputSource::Stdin,
        }
    }
}

/// Lines to annotate plus the column width suited to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsInput {
    pub lines: Vec<String>,
    pub col_width: usize,
}

/// Read the input to annotate.
///
/// A literal is a single line whose column width is its own length; files and
/// stdin use [`DEFAULT_COL_WIDTH`].
pub fn get_input(source: &InputSource) -> Result<StringsInput, InterestringError> {
    match source {
        InputSource::Literal(value) => Ok(StringsInput {
            lines: vec![value.clone()],
            col_width: value.chars().count(),
        }),
        InputSource::File(path) => Ok(StringsInput {
            lines: readlines_file(path)?,
            col_width: DEFAULT_COL_WIDTH,
        }),
        InputSource::Stdin => {
            let stdin = io::stdin();
            Ok(StringsInput {
                lines: readlines(stdin.lock()).map_err(InterestringError::Stdin)?,
                col_width: DEFAULT_COL_WIDTH,
            })
        }
    }
}

/// Read all lines of a file.
///
/// Strings dumps can carry stray non-UTF-8 bytes; those are replaced rather
/// than rejected.
pub fn readlines_file(path: &Path) -> Result<Vec<String>, InterestringError> {
    let bytes = fs::read(path).map_err(|source| InterestringError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
    }

    info!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(content.lines().map(str::to_string).collect())
}

/// Read all lines from a reader, replacing invalid UTF-8
pub fn readlines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Load the public suffix list.
///
/// Uses the given file, or the bundled IANA list when no path is given. The
/// first line of the list is a header and is skipped. A list with no entries
/// loads as an empty set, so only IP addresses are reported as internet
/// strings.
pub fn load_tld_set(path: Option<&Path>) -> Result<SuffixSet, InterestringError> {
    let (name, suffixes) = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| InterestringError::TldList {
                path: path.to_path_buf(),
                source,
            })?;
            (path.display().to_string(), SuffixSet::parse_list(&content))
        }
        None => ("<bundled>".to_string(), SuffixSet::parse_list(BUNDLED_TLD_LIST)),
    };

    if suffixes.is_empty() {
        warn!("TLD list {} contains no suffixes, domains will not be matched", name);
    }

    info!("Loaded {} suffixes from {}", suffixes.len(), name);
    Ok(suffixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_readlines_replaces_invalid_utf8() {
        let reader = Cursor::new(b"kernel32.dll\r\n\xff\xfe bad\nlast".to_vec());
        let lines = readlines(reader).expect("Failed to read lines");

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "kernel32.dll");
        assert_eq!(lines[1], "\u{FFFD}\u{FFFD} bad");
        assert_eq!(lines[2], "last");
    }

    #[test]
    fn test_readlines_empty_reader() {
        let lines = readlines(Cursor::new(Vec::new())).expect("Failed to read lines");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_literal_width_is_its_length() {
        let input = get_input(&InputSource::Literal("ntdll.dll".to_string())).expect("Failed to get input");
        assert_eq!(input.lines, vec!["ntdll.dll".to_string()]);
        assert_eq!(input.col_width, 9);
    }

    #[test]
    fn test_header_only_tld_list_loads_empty() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("header.txt");
        fs::write(&path, "# Version 1\n").expect("Failed to write TLD list");

        let suffixes = load_tld_set(Some(&path)).expect("Failed to load TLD list");
        assert!(suffixes.is_empty());
    }
}
