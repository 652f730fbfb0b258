/// Utility modules for interestring
///
/// This module contains utility functions for acquiring input, loading the
/// suffix list, and formatting or exporting annotated output.

pub mod file_utils;
pub mod output_formatter;
