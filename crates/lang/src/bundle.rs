use std::collections::{btree_map, BTreeMap};
use std::fmt;

use crate::LangError;

/// Text rendered for an absent positional argument.
pub const NULL_ARGUMENT: &str = "null";

/// Mapping of message nodes to template strings with substitution.
///
/// Lookups never fail: a node without a template resolves to the node itself,
/// so a missing translation shows up as its key.
pub trait LanguageBundle {
    /// Store (or overwrite) the template for `node`.
    fn set_string(&mut self, node: &str, value: &str) -> Result<(), LangError>;

    /// Resolve `node`, replacing `{0}`, `{1}`, ... with `args`, then global
    /// placeholders, then running the post-processing hook.
    fn get_string_with(&self, node: &str, args: &[&dyn fmt::Display]) -> String;

    /// Resolve `node` without positional arguments; `{0}` tokens are kept.
    fn get_string(&self, node: &str) -> String;

    /// Every node with a template.
    fn keys(&self) -> btree_map::Keys<'_, String, String>;

    /// Whether `node` has a template.
    fn exists(&self, node: &str) -> bool;

    /// Register a placeholder replacing `%identifier%`. Returns the previous
    /// replacement, if any.
    fn add_global_placeholder(
        &mut self,
        identifier: &str,
        replacement: &str,
    ) -> Result<Option<String>, LangError>;

    /// Remove a placeholder. Returns whether one was registered.
    fn remove_global_placeholder(&mut self, identifier: &str) -> bool;

    /// Read-only view of node templates.
    fn as_map(&self) -> &BTreeMap<String, String>;

    /// Drop every node template. Global placeholders are kept.
    fn clear(&mut self);
}

/// Positional argument that renders as `null` when absent.
///
/// ```
/// use mc_commons_lang::{LanguageBundle, MemoryLanguageBundle, Nullable};
///
/// let mut bundle = MemoryLanguageBundle::new();
/// bundle.set_string("greet", "Hello {0}").unwrap();
/// let name: Option<&str> = None;
/// assert_eq!(bundle.get_string_with("greet", &[&Nullable(name)]), "Hello null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL_ARGUMENT),
        }
    }
}
