//! Address token extraction, normalization and validation.
//!
//! Raw header lines in the corpus wrap addresses in a handful of ways
//! (`<bob@enron.com>`, `[mailto:bob@enron.com]`, trailing commas). A token is
//! first pulled out of the line, then [`normalize`]d, and only then checked
//! with [`is_valid`]. Normalization never fails; validity is a separate
//! predicate so callers decide what to do with rejected addresses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static ADDRESS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+").expect("address token pattern"));

static VALID_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("address validity pattern")
});

/// Wrapper syntax removed by [`normalize`], applied in order.
const WRAPPER_TOKENS: &[&str] = &["[mailto:", "]", "<mailto:", ">]", "mailto:", "<", ">", ","];

/// A normalized email address.
///
/// Holding an `EmailAddress` does not imply the address is valid; check
/// [`EmailAddress::is_valid`] before using it as a graph endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize a raw token into an address
    pub fn normalize(raw: &str) -> Self {
        normalize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the address against the syntactic pattern
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip wrapper tokens (angle brackets, `mailto:` prefixes, commas) from a raw token.
pub fn normalize(raw: &str) -> EmailAddress {
    let cleaned = WRAPPER_TOKENS
        .iter()
        .fold(raw.to_string(), |acc, token| acc.replace(token, ""));
    EmailAddress(cleaned)
}

/// Local part, `@`, dotted domain ending in a 2-3 character segment.
pub fn is_valid(address: &str) -> bool {
    VALID_ADDRESS.is_match(address)
}

/// Whitespace-delimited tokens containing `@`, in line order.
pub fn address_tokens(line: &str) -> impl Iterator<Item = &str> {
    ADDRESS_TOKEN.find_iter(line).map(|m| m.as_str())
}
