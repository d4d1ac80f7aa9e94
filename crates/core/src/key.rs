//! Namespaced keys.
//!
//! Keys are `namespace:key` identifiers (e.g. `minecraft:stone`) as used by
//! the server's registries. Namespaces allow `a-z0-9._-`, keys additionally
//! allow `/`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ArgumentError;

/// Namespace used when neither the input nor the caller provides one.
pub const MINECRAFT_NAMESPACE: &str = "minecraft";

/// Longest accepted `namespace:key` rendering.
const MAX_LENGTH: usize = 255;

/// A validated `namespace:key` pair.
///
/// Ordering is lexical by `(namespace, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    /// Build a key from its parts, returning `None` if either part is invalid.
    pub fn new(namespace: &str, key: &str) -> Option<Self> {
        if !is_valid_namespace(namespace) || !is_valid_key(key) {
            return None;
        }
        if namespace.len() + 1 + key.len() > MAX_LENGTH {
            return None;
        }

        Some(Self {
            namespace: namespace.to_string(),
            key: key.to_string(),
        })
    }

    /// Build a key in the `minecraft` namespace.
    pub fn minecraft(key: &str) -> Option<Self> {
        Self::new(MINECRAFT_NAMESPACE, key)
    }

    /// Parse a key, falling back to `default_namespace` (or `minecraft`) when
    /// the input has no namespace or an empty one (`:stone`).
    ///
    /// Returns `Ok(None)` for input that cannot form a key: more than one `:`,
    /// a bare key with invalid characters, or parts that stay invalid after
    /// lowercasing. Empty input is a caller error.
    pub fn from_string(
        input: &str,
        default_namespace: Option<&str>,
    ) -> Result<Option<Self>, ArgumentError> {
        if input.is_empty() {
            return Err(ArgumentError::Empty("input"));
        }

        let fallback = default_namespace
            .map(|ns| ns.to_lowercase())
            .unwrap_or_else(|| MINECRAFT_NAMESPACE.to_string());

        let Some((namespace, key)) = input.split_once(':') else {
            if !is_valid_key(input) {
                return Ok(None);
            }
            return Ok(Self::new(&fallback, input));
        };

        if key.contains(':') {
            return Ok(None);
        }

        let key = key.to_lowercase();
        if namespace.is_empty() {
            return Ok(Self::new(&fallback, &key));
        }

        Ok(Self::new(&namespace.to_lowercase(), &key))
    }

    /// Namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key component.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s, None)?.ok_or_else(|| ArgumentError::InvalidKey(s.to_string()))
    }
}

/// Whether `key` is a valid key component (`[a-z0-9/._-]+`).
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '/' | '.' | '_' | '-'))
}

/// Whether `namespace` is a valid namespace component (`[a-z0-9._-]+`).
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
}
