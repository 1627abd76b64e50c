//! Deep links and activation arguments.

use std::fmt;

use super::errors::ShellError;

/// A URL using the application's registered scheme, e.g. `lisk://main/voting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    url: String,
}

impl DeepLink {
    /// Accept `raw` only if its scheme is `scheme` (case-insensitive).
    pub fn parse(raw: &str, scheme: &str) -> Result<Self, ShellError> {
        let raw = raw.trim();
        let Some((found, _rest)) = raw.split_once(':') else {
            return Err(ShellError::InvalidDeepLink(raw.to_string()));
        };
        if !is_valid_scheme(found) {
            return Err(ShellError::InvalidDeepLink(raw.to_string()));
        }
        if !found.eq_ignore_ascii_case(scheme) {
            return Err(ShellError::UnsupportedScheme {
                expected: scheme.to_string(),
                found: found.to_string(),
            });
        }
        Ok(Self {
            url: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Process arguments as handed to the UI: everything after the executable.
pub fn forwarded_argv(argv: &[String]) -> Vec<String> {
    argv.iter().skip(1).cloned().collect()
}
