/// interestring - annotate strings output for malware triage
///
/// This library explains the lines produced by strings-extraction tools: known
/// DLLs, Win32 APIs, registry persistence keys, domains and IP addresses, and
/// printf-style format strings.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main annotator types for convenience
pub use crate::core::annotator::{AnnotatedLine, Annotation, Annotator};
pub use crate::core::internet::SuffixSet;
pub use crate::utils::file_utils::{load_tld_set, InterestringError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Annotate a single string with the bundled reference data.
///
/// This is a convenience function for simple use cases. The string is treated
/// like one line of strings output.
///
/// # Returns
///
/// The annotation text, empty if the string is unclassified
pub fn annotate(line: &str) -> anyhow::Result<String> {
    let suffixes = load_tld_set(None)?;
    let annotator = Annotator::new(&suffixes);

    Ok(annotator.annotate_raw_line(line).annotation_text())
}

/// Library configuration
pub mod config {
    use anyhow::{Context, Result};
    use serde::Deserialize;
    use std::path::{Path, PathBuf};

    use crate::utils::file_utils::DEFAULT_COL_WIDTH;

    /// Settings for a run, loadable from a JSON file
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    #[serde(default)]
    pub struct Config {
        /// Width of the string column
        pub col_width: usize,
        /// Only emit annotated lines
        pub annotated_only: bool,
        /// Suffix list to use instead of the bundled one
        pub tld_file: Option<PathBuf>,
        /// Truncate lines longer than the column width
        pub truncate: bool,
        /// Worker threads (0 = all cores)
        pub jobs: usize,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                col_width: DEFAULT_COL_WIDTH,
                annotated_only: false,
                tld_file: None,
                truncate: false,
                jobs: 1,
            }
        }
    }

    /// Create default configuration
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Load configuration from a JSON file
    pub fn load_config(path: &Path) -> Result<Config> {
        let config_str = std::fs::read_to_string(path)
            .context(format!("Configuration file not found: {}", path.display()))?;

        serde_json::from_str(&config_str)
            .context(format!("Invalid JSON in configuration file: {}", path.display()))
    }
}

/// Command-line application functionality
pub mod app {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::core::annotator::Annotator;
    use crate::utils::file_utils::{get_input, load_tld_set, InputSource};
    use crate::utils::output_formatter::format_results;
    use crate::AnnotatedLine;

    /// Output of a run: the annotated lines and the width to print them at
    #[derive(Debug)]
    pub struct RunOutput {
        pub results: Vec<AnnotatedLine>,
        pub col_width: usize,
    }

    impl RunOutput {
        /// Text rows ready for printing
        pub fn rows(&self, truncate: bool) -> Vec<String> {
            format_results(&self.results, self.col_width, truncate)
        }
    }

    /// Run the annotator on an input source
    ///
    /// # Arguments
    ///
    /// * `source` - Where to read strings from
    /// * `config` - Run settings
    ///
    /// # Returns
    ///
    /// Annotated lines and the column width chosen for them
    pub fn run_annotator(source: &InputSource, config: &Config) -> Result<RunOutput> {
        let suffixes = load_tld_set(config.tld_file.as_deref())?;
        let input = get_input(source).context("Failed getting input")?;

        // A literal sets its own width; otherwise the configured width applies
        let col_width = match source {
            InputSource::Literal(_) => input.col_width,
            _ => config.col_width,
        };

        info!("Annotating input from {:?}", source);

        let annotator = Annotator::new(&suffixes);
        let results = annotator.annotate_strings(&input.lines, config.annotated_only, config.jobs)?;

        Ok(RunOutput { results, col_width })
    }
}
