/// Classifiers for individual strings
///
/// Each classifier is an independent lookup or predicate. None of them fail:
/// a string they cannot make sense of is simply not a match. The order in
/// which they are applied lives in [`crate::core::annotator`].

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::core::tables::{canonical_root, REGISTRY_ROOTS, REGISTRY_SIGNATURES};

/// Fallback description for DLL names missing from the table
pub const LIKELY_DLL: &str = "Likely DLL";

lazy_static! {
    /// Runs of backslashes, collapsed to a single `|` in registry keys
    static ref BACKSLASH_RUN: Regex = Regex::new(r"\\+").unwrap();

    /// printf-style conversion at the start of a line
    static ref FORMAT_STRING: Regex =
        Regex::new(r"^%[#l+]?\d{0,5}\.?\d{0,5}[diuoxXfFeEgGaAcsPn%]\W").unwrap();
}

/// Look up an exact, case-sensitive known string
pub fn lookup_known_string<'a>(line: &str, table: &'a HashMap<String, String>) -> Option<&'a str> {
    table.get(line).map(String::as_str)
}

/// Derive the Win32 base symbol by dropping an ANSI or Unicode suffix.
///
/// A trailing `A` is always dropped. A trailing `W` is only dropped after a
/// lower-case letter, so names that end in a genuine capital `W` survive.
pub fn strip_api_suffix(line: &str) -> &str {
    if let Some(base) = line.strip_suffix('A') {
        return base;
    }

    if let Some(base) = line.strip_suffix('W') {
        if base.chars().last().map_or(false, char::is_lowercase) {
            return base;
        }
    }

    line
}

/// Look up a Win32 API symbol as-is, then by its base name
pub fn lookup_win32_api<'a>(line: &str, table: &'a HashMap<String, String>) -> Option<&'a str> {
    table
        .get(line)
        .or_else(|| table.get(strip_api_suffix(line)))
        .map(String::as_str)
}

/// Look up a DLL name, case-insensitively, returning only table hits.
///
/// This is the lookup the annotator uses.
pub fn lookup_dll_exact<'a>(line: &str, table: &'a HashMap<String, String>) -> Option<&'a str> {
    table.get(&line.to_uppercase()).map(String::as_str)
}

/// Look up a DLL name with a generic fallback for unknown names
pub fn check_dll<'a>(line: &str, table: &'a HashMap<String, String>) -> &'a str {
    lookup_dll_exact(line, table).unwrap_or(LIKELY_DLL)
}

/// Treat any `.dll`-suffixed token as a DLL, known or not.
///
/// The token is upper-cased before the suffix check, so `evil.dll`, `Evil.Dll`
/// and `EVIL.DLL` all match, the same way the table lookup ignores case.
/// Returns `None` for strings that do not look like a DLL file name at all.
pub fn classify_as_dll_heuristic<'a>(line: &str, table: &'a HashMap<String, String>) -> Option<&'a str> {
    let upper = line.to_uppercase();
    let stem = upper.strip_suffix(".DLL")?;

    if stem.is_empty() || stem.chars().any(char::is_whitespace) {
        return None;
    }

    Some(check_dll(line, table))
}

/// Check whether an upper-cased line could be a registry path.
///
/// True when it starts with a root key name or abbreviation, or contains a
/// registry signature such as `CURRENTVERSION`. The check is a pre-filter and
/// also fires on unrelated strings that mention those words.
pub fn is_possible_registry_key(upper_line: &str) -> bool {
    REGISTRY_ROOTS
        .iter()
        .any(|(name, _)| upper_line.starts_with(name))
        || REGISTRY_SIGNATURES
            .iter()
            .any(|signature| upper_line.contains(signature))
}

/// Normalize a registry path into its table key form.
///
/// Backslash runs become `|`, the whole key is upper-cased and the root is
/// replaced by its canonical abbreviation. An unknown root becomes the empty
/// string, leaving a key of the form `|REMAINDER`.
pub fn normalize_registry_key(line: &str) -> String {
    let piped = BACKSLASH_RUN.replace_all(line, "|").to_uppercase();
    let (root, remainder) = piped.split_once('|').unwrap_or((piped.as_str(), ""));
    let root = canonical_root(root).unwrap_or("");

    format!("{}|{}", root, remainder)
}

/// Look up a registry path, returning an empty description on a miss
pub fn check_registry<'a>(line: &str, table: &'a HashMap<String, String>) -> &'a str {
    let key = normalize_registry_key(line);
    log::debug!("Registry lookup key: {}", key);

    table.get(&key).map(String::as_str).unwrap_or("")
}

/// Check for a printf-style format specifier at the start of the line
pub fn is_format_string(line: &str) -> bool {
    FORMAT_STRING.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_api_suffix() {
        assert_eq!(strip_api_suffix("CreateFileA"), "CreateFile");
        assert_eq!(strip_api_suffix("CreateFileW"), "CreateFile");
        assert_eq!(strip_api_suffix("SHOW"), "SHOW");
        assert_eq!(strip_api_suffix("W"), "W");
        assert_eq!(strip_api_suffix(""), "");
    }

    #[test]
    fn test_normalize_unknown_root() {
        assert_eq!(normalize_registry_key(r"SOFTWARE\Foo"), "|FOO");
        assert_eq!(normalize_registry_key("HKLM"), "HKLM|");
    }

    #[test]
    fn test_normalize_collapses_backslash_runs() {
        assert_eq!(
            normalize_registry_key(r"HKEY_CURRENT_USER\\\Software\\Test"),
            "HKCU|SOFTWARE|TEST"
        );
    }
}
