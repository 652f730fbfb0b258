/// Output formatter for annotated strings
///
/// This module handles formatting annotated lines as aligned text rows and
/// exporting them as JSON or CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::annotator::AnnotatedLine;

/// Width of the annotation column
pub const ANNOTATION_WIDTH: usize = 40;

/// Marker printed in front of an annotation
pub const ANNOTATION_MARKER: &str = "> ";

/// Serializable form of an annotated line
#[derive(Debug, Serialize)]
pub struct AnnotationRecord<'a> {
    pub line: &'a str,
    pub category: Option<&'static str>,
    pub annotation: &'a str,
}

impl<'a> From<&'a AnnotatedLine> for AnnotationRecord<'a> {
    fn from(annotated: &'a AnnotatedLine) -> Self {
        Self {
            line: &annotated.line,
            category: annotated.annotation.as_ref().map(|a| a.category()),
            annotation: annotated.annotation.as_ref().map_or("", |a| a.detail()),
        }
    }
}

/// Format one annotated line as a text row
///
/// # Arguments
///
/// * `annotated` - The line and its annotation
/// * `col_width` - Width the line is padded to
/// * `truncate` - Cut lines longer than `col_width`
///
/// # Returns
///
/// `line<TAB>annotation`, with the annotation padded to [`ANNOTATION_WIDTH`]
pub fn format_row(annotated: &AnnotatedLine, col_width: usize, truncate: bool) -> String {
    let line: String = if truncate {
        annotated.line.chars().take(col_width).collect()
    } else {
        annotated.line.clone()
    };

    let annotation = match &annotated.annotation {
        Some(annotation) => format!("{}{}", ANNOTATION_MARKER, annotation),
        None => String::new(),
    };

    format!(
        "{:<col_width$}\t{:<ann_width$}",
        line,
        annotation,
        col_width = col_width,
        ann_width = ANNOTATION_WIDTH
    )
}

/// Format all annotated lines for console output
pub fn format_results(results: &[AnnotatedLine], col_width: usize, truncate: bool) -> Vec<String> {
    results
        .iter()
        .map(|annotated| format_row(annotated, col_width, truncate))
        .collect()
}

/// Export annotated lines to a JSON file
pub fn export_results_json(results: &[AnnotatedLine], output_path: &Path) -> Result<()> {
    let records: Vec<AnnotationRecord> = results.iter().map(AnnotationRecord::from).collect();

    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &records).context("Failed to write JSON data")?;

    Ok(())
}

/// Export annotated lines to a CSV file
pub fn create_csv_report(results: &[AnnotatedLine], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for annotated in results {
        writer
            .serialize(AnnotationRecord::from(annotated))
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
