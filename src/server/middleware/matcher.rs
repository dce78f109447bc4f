use std::sync::LazyLock;

use regex::RegexSet;

use crate::server::{config::DEFAULT_PUBLIC_ROUTES, error::config::ConfigError};

/// File extensions served as static assets, which never go through route protection.
const STATIC_EXTENSIONS: &[&str] = &[
    "html", "htm", "css", "js", "mjs", "wasm", "map", "jpg", "jpeg", "webp", "png", "gif",
    "svg", "ico", "ttf", "woff", "woff2", "csv", "doc", "docx", "xls", "xlsx", "zip",
    "webmanifest", "txt",
];

/// Path prefixes served by the asset pipeline.
const STATIC_PREFIXES: &[&str] = &["/assets/", "/_dioxus", "/wasm/"];

static DEFAULT_PUBLIC: LazyLock<RouteMatcher> = LazyLock::new(|| {
    RouteMatcher::new(DEFAULT_PUBLIC_ROUTES).expect("default public routes are valid patterns")
});

/// Classifies request paths as public or protected.
///
/// Patterns use the path-to-regexp syntax common to web frameworks:
/// - literal text, matched exactly
/// - `(...)`, a regular expression group such as `/sign-in(.*)`
/// - `:name`, a single path segment
/// - `:name*` and `:name+`, zero or more and one or more segments
/// - `:name?`, an optional segment
/// - `*`, anything
///
/// Every pattern is anchored to the whole path. Classification only depends on the path.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    patterns: Vec<String>,
    regexes: Vec<String>,
    set: RegexSet,
}

impl RouteMatcher {
    /// Compiles the public route patterns.
    ///
    /// # Returns
    /// - `Ok(RouteMatcher)` - Every pattern compiled
    /// - `Err(ConfigError::InvalidEnvValue)` - A pattern is not a valid route pattern
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().to_string())
            .collect();
        let regexes: Vec<String> = patterns.iter().map(|p| to_regex(p)).collect();

        let set = RegexSet::new(&regexes).map_err(|e| ConfigError::InvalidEnvValue {
            var: "PUBLIC_ROUTES".to_string(),
            reason: format!("invalid route pattern: {}", e),
        })?;

        Ok(Self {
            patterns,
            regexes,
            set,
        })
    }

    /// Matcher built from [`DEFAULT_PUBLIC_ROUTES`].
    pub fn default_public() -> Self {
        DEFAULT_PUBLIC.clone()
    }

    /// Patterns as configured
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `path` matches any public pattern
    pub fn is_public(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// Whether a pattern makes every path public, leaving nothing protected
    pub fn matches_everything(&self) -> bool {
        self.regexes
            .iter()
            .any(|regex| matches!(regex.as_str(), "^(.*)$" | "^.*$" | "^(.*)?$"))
    }

    /// Whether route protection applies to `path` at all.
    ///
    /// API routes always apply. Static assets, identified by their prefix or by a file
    /// extension on the final segment, are skipped.
    pub fn applies_to(path: &str) -> bool {
        if path.starts_with("/api/") || path == "/api" {
            return true;
        }

        if STATIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
            return false;
        }

        let last_segment = path.rsplit('/').next().unwrap_or(path);

        match last_segment.rsplit_once('.') {
            Some((_, extension)) => !STATIC_EXTENSIONS
                .iter()
                .any(|ext| extension.eq_ignore_ascii_case(ext)),
            None => true,
        }
    }
}

/// Translates a route pattern into an anchored regular expression.
fn to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' => {
                // Copy the group verbatim up to its closing parenthesis
                let mut depth = 0;
                while i < chars.len() {
                    let c = chars[i];
                    regex.push(c);
                    match c {
                        '\\' if i + 1 < chars.len() => {
                            i += 1;
                            regex.push(chars[i]);
                        }
                        '(' => depth += 1,
                        ')' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&':') => {
                let (segment, next) = parameter(&chars, i + 1, true);
                regex.push_str(&segment);
                i = next;
            }
            ':' => {
                let (segment, next) = parameter(&chars, i, false);
                regex.push_str(&segment);
                i = next;
            }
            '*' => {
                regex.push_str(".*");
                i += 1;
            }
            c => {
                regex.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}

/// Translates the parameter starting at the `:` found at `start`.
///
/// Returns the regex and the index after the parameter and its modifier.
fn parameter(chars: &[char], start: usize, prefixed: bool) -> (String, usize) {
    let mut end = start + 1;
    while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
        end += 1;
    }

    // A lone `:` is literal text
    if end == start + 1 {
        let literal = if prefixed { "/:" } else { ":" };
        return (regex::escape(literal), end);
    }

    let modifier = chars.get(end).copied().filter(|c| matches!(c, '*' | '+' | '?'));
    let next = if modifier.is_some() { end + 1 } else { end };
    let prefix = if prefixed { "/" } else { "" };

    let segment = match modifier {
        Some('*') => format!("(?:{}[^/]+)*", prefix),
        Some('+') => format!("(?:{}[^/]+)+", prefix),
        Some('?') => format!("(?:{}[^/]+)?", prefix),
        _ => format!("{}([^/]+)", prefix),
    };

    (segment, next)
}
