/// Line normalization for strings-tool output
///
/// Strings utilities such as FLOSS prefix each result with its encoding or
/// origin and group results under section headers. This module strips the
/// prefix and recognises the headers so only the raw string is classified.

/// Type tags emitted in front of each string by FLOSS-style extractors
pub const STRING_TYPE_TAGS: &[&str] = &["(ascii)", "(16-le)", "(stack8)", "(stack16)", "(stack32)"];

/// Section header prefixes of grouped FLOSS output
pub const HEADER_PREFIXES: &[&str] = &[
    "FLOSS decoded",
    "FLOSS static",
    "FLOSS extracted",
    "FLOSS DECODED",
    "FLOSS STATIC",
    "FLOSS STACK",
    "FLOSS TIGHT",
];

/// Strip off line number and string type info.
///
/// Returns the text after the last occurrence of a recognised type tag,
/// trimmed. When several different tags are present, the tag listed last in
/// [`STRING_TYPE_TAGS`] decides. A line without any tag is returned unchanged.
pub fn clean_line(line: &str) -> &str {
    let mut cleaned = line;

    for tag in STRING_TYPE_TAGS {
        if let Some(index) = line.rfind(tag) {
            cleaned = line[index + tag.len()..].trim();
        }
    }

    cleaned
}

/// Check if the line is a section header from a strings program.
pub fn is_header(line: &str) -> bool {
    HEADER_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_prefix() {
        assert_eq!(clean_line("0x1000 (ascii) CreateFileA"), "CreateFileA");
        assert_eq!(clean_line("(16-le)  kernel32.dll  "), "kernel32.dll");
    }

    #[test]
    fn test_clean_line_uses_last_occurrence() {
        assert_eq!(clean_line("(ascii) foo (ascii) bar"), "bar");
    }

    #[test]
    fn test_clean_line_without_tag() {
        assert_eq!(clean_line("  untouched  "), "  untouched  ");
    }

    #[test]
    fn test_header_detection() {
        assert!(is_header("FLOSS static Unicode strings"));
        assert!(is_header("FLOSS STACK STRINGS"));
        assert!(!is_header("  FLOSS static Unicode strings"));
        assert!(!is_header("floss static"));
    }
}
