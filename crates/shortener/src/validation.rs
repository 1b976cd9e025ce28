//! URL validation and normalization.
//!
//! Pure functions, no network access. Parsing is delegated to the [`url`] crate, so
//! percent-encoding leniency follows whatever it accepts.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Scheme prepended to bare hosts such as `example.com`.
pub const DEFAULT_SCHEME: &str = "https://";

static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme regex is valid")
});

/// `http(s)://...` or `www....` up to the next whitespace or markup delimiter.
static URL_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("url regex is valid")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Returns true if `input` starts with `<scheme>://`.
pub fn has_scheme(input: &str) -> bool {
    SCHEME_PREFIX.is_match(input)
}

/// Host part (before any `/`, `?` or `#`) contains a dot, no whitespace or `@`, and at most
/// a numeric port. Rejects things like `mailto:someone@example.com`.
fn looks_like_host(input: &str) -> bool {
    let authority = input
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or("");
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    let port_ok = port.map_or(true, |p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    port_ok
        && host.contains('.')
        && !host.starts_with('.')
        && !host.contains('@')
        && !host.chars().any(char::is_whitespace)
}

/// Trims `input` and prepends [`DEFAULT_SCHEME`] when it is a bare host without a scheme.
///
/// Inputs that already carry a scheme, or that do not look like a host at all
/// (no dot, embedded whitespace), are returned trimmed but otherwise unchanged;
/// [`is_valid`] rejects the latter.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if has_scheme(trimmed) || !looks_like_host(trimmed) {
        return trimmed.to_string();
    }
    format!("{}{}", DEFAULT_SCHEME, trimmed)
}

/// True iff `input` parses as an absolute URL with a non-empty scheme and a non-empty host.
pub fn is_valid(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Finds URL-shaped substrings in free text, in order of appearance, without duplicates.
///
/// Trailing sentence punctuation (`.`, `,`, `)` ...) is not part of the match.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in URL_IN_TEXT.find_iter(text) {
        let candidate = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        if candidate.is_empty() || found.iter().any(|u| u == candidate) {
            continue;
        }
        found.push(candidate.to_string());
    }
    found
}
