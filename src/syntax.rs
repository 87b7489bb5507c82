//! Syntax template tokenizer.
//!
//! A component's `syntax` (for example `netty:protocol://host:port`) is a
//! connector name followed by field names, joined by literal separators. The
//! tokenizer splits the template into tokens and recovers the exact separator
//! text between each adjacent pair so a URI can be sliced (and rebuilt)
//! against it.

use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::BTreeSet;

/// Recognized separators, longest first. Replacement order matters: `://`
/// must collapse before `//` and `:` get a chance to split it.
pub const SEPARATORS: [&str; 5] = ["://", "//", ":", "/", "#"];

const CANONICAL_SEPARATOR: &str = ":";

/// Splits `text` into tokens on every recognized separator.
///
/// Replacement is literal, not pattern based; consecutive separators produce
/// empty tokens.
pub fn split_tokens(text: &str) -> Vec<String> {
    let simplified = SEPARATORS
        .iter()
        .fold(text.to_string(), |acc, separator| {
            acc.replace(separator, CANONICAL_SEPARATOR)
        });
    simplified
        .split(CANONICAL_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// A parsed syntax template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyntaxTemplate {
    raw: String,
    tokens: Vec<String>,
    separators: Vec<String>,
}

impl SyntaxTemplate {
    /// Split `raw` into tokens and recover the separator between each pair.
    pub fn parse(raw: &str) -> Self {
        let tokens = split_tokens(raw);
        let separators = recover_separators(raw, &tokens);
        Self {
            raw: raw.to_string(),
            tokens,
            separators,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// The leading constant token.
    pub fn connector(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// Field names in positional order (every token after the connector).
    pub fn fields(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// The connector followed by every separator with empty slots, e.g.
    /// `netty:://:` for `netty:protocol://host:port`.
    pub fn bare_uri(&self) -> String {
        let mut uri = self.connector().to_string();
        for separator in &self.separators {
            uri.push_str(separator);
        }
        uri
    }

    /// Checks that the template can be sliced reliably.
    ///
    /// Rejects empty tokens, repeated field names, separators that are empty
    /// or contain non-separator characters, and templates whose tokens and
    /// separators do not rebuild the raw text.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.tokens.iter().position(String::is_empty) {
            bail!(
                "syntax '{}' has an empty token at position {}",
                self.raw,
                index
            );
        }

        let mut seen = BTreeSet::new();
        for field in self.fields() {
            if !seen.insert(field.as_str()) {
                bail!("syntax '{}' repeats field '{}'", self.raw, field);
            }
        }

        for separator in &self.separators {
            if separator.is_empty()
                || !separator.chars().all(|c| matches!(c, ':' | '/' | '#'))
            {
                bail!(
                    "syntax '{}' has an unrecognized separator '{}'",
                    self.raw,
                    separator
                );
            }
        }

        let rebuilt = self.rebuild();
        if rebuilt != self.raw {
            bail!(
                "syntax '{}' does not round-trip through its tokens (got '{}')",
                self.raw,
                rebuilt
            );
        }
        Ok(())
    }

    fn rebuild(&self) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                if let Some(separator) = self.separators.get(index - 1) {
                    out.push_str(separator);
                }
            }
            out.push_str(token);
        }
        out
    }
}

// The cursor only moves forward, so a token whose text also occurs earlier in
// the template (`ab:b/c`) is matched at its own position.
fn recover_separators(raw: &str, tokens: &[String]) -> Vec<String> {
    let mut separators = Vec::with_capacity(tokens.len().saturating_sub(1));
    let mut cursor = 0;
    for pair in tokens.windows(2) {
        let (part, next) = (pair[0].as_str(), pair[1].as_str());
        let part_at = raw
            .get(cursor..)
            .and_then(|rest| rest.find(part))
            .map(|offset| cursor + offset)
            .unwrap_or(cursor);
        let start = (part_at + part.len()).min(raw.len());
        let end = raw[start..]
            .find(next)
            .map(|offset| start + offset)
            .unwrap_or(start);
        let separator = raw[start..end].to_string();
        cursor = (part_at + part.len() + separator.len()).min(raw.len());
        separators.push(separator);
    }
    separators
}
