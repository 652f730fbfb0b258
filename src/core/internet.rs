/// Internet-related string detection
///
/// Splits a candidate host name into subdomain, registrable domain and public
/// suffix using a suffix list, and decides whether the string looks like an
/// IP address or a domain name.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::net::IpAddr;

lazy_static! {
    static ref SCHEME: Regex = Regex::new(r"^(?:[a-z0-9.+-]+:)?//").unwrap();
}

/// Minimum number of characters in the domain part of a host name.
/// Anything shorter is too noisy to report (`ab.co`).
const MIN_DOMAIN_LEN: usize = 4;

/// Set of public suffixes loaded from a suffix list.
///
/// Entries may span several labels (`co.uk`) and may use public suffix list
/// rule syntax: `*.ck` matches any label under `ck`, `!www.ck` excludes a name
/// from a wildcard.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    rules: HashSet<String>,
    wildcards: HashSet<String>,
    exceptions: HashSet<String>,
}

impl SuffixSet {
    /// Build a suffix set from individual rules.
    ///
    /// Rules are trimmed and lower-cased; blank lines and comments are skipped.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for rule in rules {
            let rule = rule.as_ref().trim().to_lowercase();
            if rule.is_empty() || rule.starts_with("//") || rule.starts_with('#') {
                continue;
            }

            if let Some(exception) = rule.strip_prefix('!') {
                set.exceptions.insert(exception.to_string());
            } else if let Some(parent) = rule.strip_prefix("*.") {
                set.wildcards.insert(parent.to_string());
            } else {
                set.rules.insert(rule);
            }
        }

        set
    }

    /// Parse the contents of a suffix list file, skipping its first line
    pub fn parse_list(content: &str) -> Self {
        Self::from_rules(content.lines().skip(1))
    }

    /// Number of rules of any kind
    pub fn len(&self) -> usize {
        self.rules.len() + self.wildcards.len() + self.exceptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a suffix is a listed public suffix
    pub fn contains(&self, suffix: &str) -> bool {
        if suffix.is_empty() || self.exceptions.contains(suffix) {
            return false;
        }

        if self.rules.contains(suffix) {
            return true;
        }

        match suffix.split_once('.') {
            Some((_, parent)) => self.wildcards.contains(parent),
            None => false,
        }
    }

    /// Index of the first label of the longest matching public suffix
    fn suffix_start(&self, labels: &[&str]) -> Option<usize> {
        for start in 0..labels.len() {
            let candidate = labels[start..].join(".");

            // An exception rule makes its parent the public suffix
            if self.exceptions.contains(&candidate) {
                return Some(start + 1);
            }
            if self.contains(&candidate) {
                return Some(start);
            }
        }

        None
    }
}

/// Components of a host name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedDomain {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

/// Reduce a URL-ish string to its host part
fn host_part(line: &str) -> &str {
    let without_scheme = match SCHEME.find(line) {
        Some(found) => &line[found.end()..],
        None => line,
    };

    let netloc = without_scheme
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");

    match netloc.rfind('@') {
        Some(index) => &netloc[index + 1..],
        None => netloc,
    }
}

/// Return the IP literal of a host, bare or in `[v6]` form
fn ip_literal(host: &str) -> Option<&str> {
    if host.parse::<IpAddr>().is_ok() {
        return Some(host);
    }

    let inner = host.strip_prefix('[')?.split(']').next()?;
    inner.parse::<IpAddr>().ok().map(|_| inner)
}

/// Split a string into subdomain, domain and public suffix.
///
/// IP addresses come back as the domain with an empty suffix. When no
/// suffix in the set matches, the last label is the domain.
pub fn extract_domain(line: &str, suffixes: &SuffixSet) -> ExtractedDomain {
    let lowered = line.trim().to_lowercase();
    let host = host_part(&lowered);

    if let Some(ip) = ip_literal(host) {
        return ExtractedDomain {
            domain: ip.to_string(),
            ..Default::default()
        };
    }

    let host = host.split(':').next().unwrap_or("");
    if is_valid_ip_address(host) {
        return ExtractedDomain {
            domain: host.to_string(),
            ..Default::default()
        };
    }

    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();

    match suffixes.suffix_start(&labels) {
        Some(start) if start > 0 => ExtractedDomain {
            subdomain: labels[..start - 1].join("."),
            domain: labels[start - 1].to_string(),
            suffix: labels[start..].join("."),
        },
        Some(_) => ExtractedDomain {
            suffix: host.to_string(),
            ..Default::default()
        },
        None => ExtractedDomain {
            subdomain: labels[..labels.len() - 1].join("."),
            domain: labels[labels.len() - 1].to_string(),
            suffix: String::new(),
        },
    }
}

/// Check if a string parses as an IPv4 or IPv6 address
pub fn is_valid_ip_address(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Check if a line is related to internet/web stuff.
///
/// True for IP addresses, and for names with a listed suffix whose domain
/// part is longer than three characters.
pub fn is_interwebs(line: &str, suffixes: &SuffixSet) -> bool {
    let extracted = extract_domain(line, suffixes);

    if is_valid_ip_address(&extracted.domain) {
        return true;
    }

    suffixes.contains(&extracted.suffix) && extracted.domain.chars().count() >= MIN_DOMAIN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffixes() -> SuffixSet {
        SuffixSet::from_rules(["com", "co", "uk", "co.uk", "*.ck", "!www.ck"])
    }

    #[test]
    fn test_extract_simple_domain() {
        let extracted = extract_domain("www.Example.com", &suffixes());
        assert_eq!(extracted.subdomain, "www");
        assert_eq!(extracted.domain, "example");
        assert_eq!(extracted.suffix, "com");
    }

    #[test]
    fn test_extract_longest_suffix() {
        let extracted = extract_domain("http://user@news.bbc.co.uk:8080/path?q=1", &suffixes());
        assert_eq!(extracted.subdomain, "news");
        assert_eq!(extracted.domain, "bbc");
        assert_eq!(extracted.suffix, "co.uk");
    }

    #[test]
    fn test_extract_wildcard_and_exception() {
        let extracted = extract_domain("foo.bar.ck", &suffixes());
        assert_eq!(extracted.domain, "foo");
        assert_eq!(extracted.suffix, "bar.ck");

        let extracted = extract_domain("www.ck", &suffixes());
        assert_eq!(extracted.domain, "www");
        assert_eq!(extracted.suffix, "ck");
    }

    #[test]
    fn test_extract_unknown_suffix() {
        let extracted = extract_domain("kernel32.dll", &suffixes());
        assert_eq!(extracted.domain, "dll");
        assert_eq!(extracted.suffix, "");
    }

    #[test]
    fn test_extract_ip_literals() {
        assert_eq!(extract_domain("10.0.0.1", &suffixes()).domain, "10.0.0.1");
        assert_eq!(extract_domain("::1", &suffixes()).domain, "::1");
        assert_eq!(extract_domain("http://[fe80::1]:80/", &suffixes()).domain, "fe80::1");
        assert_eq!(extract_domain("192.168.1.1:8080", &suffixes()).domain, "192.168.1.1");
    }

    #[test]
    fn test_parse_list_skips_header() {
        let set = SuffixSet::parse_list("# Version 1\nCOM\n\nNET\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("com"));
        assert!(!set.contains("# version 1"));
    }
}
