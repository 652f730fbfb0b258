/// Core annotator implementation
///
/// This file contains the Annotator, which applies the classifiers to each
/// string in a fixed priority order and drives the line-by-line pipeline.

use std::fmt;

use anyhow::Result;
use log::{debug, info};
use rayon::prelude::*;

use crate::core::classifiers::{
    check_registry, is_format_string, is_possible_registry_key, lookup_dll_exact,
    lookup_known_string, lookup_win32_api,
};
use crate::core::internet::{is_interwebs, SuffixSet};
use crate::core::normalizer::{clean_line, is_header};
use crate::core::tables::ReferenceTables;

/// Explanation attached to a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    KnownString(String),
    Msdn(String),
    Dll(String),
    /// A registry hit; the description is empty when the key is not in the table
    Registry(String),
    Interwebs,
    FormatString,
}

impl Annotation {
    /// Short category label, as printed in front of the description
    pub fn category(&self) -> &'static str {
        match self {
            Annotation::KnownString(_) => "KNOWN STRING",
            Annotation::Msdn(_) => "MSDN",
            Annotation::Dll(_) => "DLL",
            Annotation::Registry(_) => "REGISTRY",
            Annotation::Interwebs => "INTERWEBS",
            Annotation::FormatString => "FORMAT STRING",
        }
    }

    /// Description text, empty for tag-only annotations
    pub fn detail(&self) -> &str {
        match self {
            Annotation::KnownString(text)
            | Annotation::Msdn(text)
            | Annotation::Dll(text)
            | Annotation::Registry(text) => text.as_str(),
            Annotation::Interwebs | Annotation::FormatString => "",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Interwebs | Annotation::FormatString => write!(f, "{}", self.category()),
            _ => write!(f, "{}: {}", self.category(), self.detail()),
        }
    }
}

/// An input line together with its annotation, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// The original line, trimmed
    pub line: String,
    pub annotation: Option<Annotation>,
}

impl AnnotatedLine {
    /// Annotation text, empty when the line is unclassified
    pub fn annotation_text(&self) -> String {
        self.annotation
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Applies the classifiers to strings
pub struct Annotator<'a> {
    /// Lookup tables for known strings, APIs, DLLs and registry keys
    tables: &'a ReferenceTables,

    /// Public suffixes for the internet classifier
    suffixes: &'a SuffixSet,
}

impl<'a> Annotator<'a> {
    /// Create an annotator over the built-in reference tables
    pub fn new(suffixes: &'a SuffixSet) -> Self {
        Self::with_tables(ReferenceTables::builtin(), suffixes)
    }

    /// Create an annotator over custom reference tables
    pub fn with_tables(tables: &'a ReferenceTables, suffixes: &'a SuffixSet) -> Self {
        Self { tables, suffixes }
    }

    /// Look up the given (cleaned) string and provide relevant information.
    ///
    /// Checks run in priority order and the first match wins:
    /// known string, Win32 API, DLL, registry, internet, format string.
    pub fn annotate_line(&self, line: &str) -> Option<Annotation> {
        if let Some(text) = lookup_known_string(line, &self.tables.known_strings) {
            return Some(Annotation::KnownString(text.to_string()));
        }

        if let Some(text) = lookup_win32_api(line, &self.tables.win32_api) {
            return Some(Annotation::Msdn(text.to_string()));
        }

        if let Some(text) = lookup_dll_exact(line, &self.tables.dlls) {
            return Some(Annotation::Dll(text.to_string()));
        }

        // Full key names and abbreviations both count
        if is_possible_registry_key(&line.to_uppercase()) {
            let text = check_registry(line, &self.tables.registry);
            return Some(Annotation::Registry(text.to_string()));
        }

        if is_interwebs(line, self.suffixes) {
            return Some(Annotation::Interwebs);
        }

        if is_format_string(line) {
            return Some(Annotation::FormatString);
        }

        None
    }

    /// Annotate one raw line of strings output.
    ///
    /// The line is trimmed; header lines are passed through unannotated and
    /// every other line is stripped of its type tag before classification.
    pub fn annotate_raw_line(&self, raw: &str) -> AnnotatedLine {
        let line = raw.trim();

        let annotation = if is_header(line) {
            None
        } else {
            self.annotate_line(clean_line(line))
        };

        AnnotatedLine {
            line: line.to_string(),
            annotation,
        }
    }

    /// Iterate through the strings and annotate them.
    ///
    /// # Arguments
    ///
    /// * `lines` - The raw strings output, one string per entry
    /// * `annotated_only` - Drop lines without an annotation
    /// * `jobs` - Worker threads; 1 runs inline, 0 uses every core
    ///
    /// # Returns
    ///
    /// Annotated lines in input order
    pub fn annotate_strings<S>(&self, lines: &[S], annotated_only: bool, jobs: usize) -> Result<Vec<AnnotatedLine>>
    where
        S: AsRef<str> + Sync,
    {
        info!("Annotating {} lines", lines.len());

        let annotated: Vec<AnnotatedLine> = if jobs == 1 {
            lines.iter().map(|raw| self.annotate_raw_line(raw.as_ref())).collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))?;

            pool.install(|| {
                lines
                    .par_iter()
                    .map(|raw| self.annotate_raw_line(raw.as_ref()))
                    .collect()
            })
        };

        let matched = annotated.iter().filter(|a| a.annotation.is_some()).count();
        debug!("{} of {} lines annotated", matched, annotated.len());

        if annotated_only {
            Ok(annotated.into_iter().filter(|a| a.annotation.is_some()).collect())
        } else {
            Ok(annotated)
        }
    }
}
