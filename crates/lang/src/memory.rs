//! In-memory language bundle.

use std::collections::{btree_map, BTreeMap};
use std::fmt;

use crate::{LangError, LanguageBundle, TextProcessor};

/// Language bundle held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLanguageBundle {
    nodes: BTreeMap<String, String>,
    placeholders: BTreeMap<String, String>,
    post_processor: TextProcessor,
}

impl MemoryLanguageBundle {
    /// Empty bundle translating `&` color codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty bundle with a custom post-processing hook.
    pub fn with_post_processor(post_processor: TextProcessor) -> Self {
        Self {
            post_processor,
            ..Self::default()
        }
    }

    /// Replace the post-processing hook.
    pub fn set_post_processor(&mut self, post_processor: TextProcessor) {
        self.post_processor = post_processor;
    }

    /// Read-only view of the global placeholders.
    pub fn placeholders(&self) -> &BTreeMap<String, String> {
        &self.placeholders
    }

    fn process(&self, template: &str, args: &[&dyn fmt::Display]) -> String {
        let mut text = template.to_string();

        for (index, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{index}}}"), &arg.to_string());
        }

        for (identifier, replacement) in &self.placeholders {
            text = text.replace(&format!("%{identifier}%"), replacement);
        }

        self.post_processor.apply(text)
    }
}

impl LanguageBundle for MemoryLanguageBundle {
    fn set_string(&mut self, node: &str, value: &str) -> Result<(), LangError> {
        if node.is_empty() {
            return Err(LangError::InvalidArgument("node"));
        }
        if value.is_empty() {
            return Err(LangError::InvalidArgument("value"));
        }

        self.nodes.insert(node.to_string(), value.to_string());
        Ok(())
    }

    fn get_string_with(&self, node: &str, args: &[&dyn fmt::Display]) -> String {
        match self.nodes.get(node) {
            Some(template) => self.process(template, args),
            None => node.to_string(),
        }
    }

    fn get_string(&self, node: &str) -> String {
        self.get_string_with(node, &[])
    }

    fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.nodes.keys()
    }

    fn exists(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    fn add_global_placeholder(
        &mut self,
        identifier: &str,
        replacement: &str,
    ) -> Result<Option<String>, LangError> {
        if identifier.is_empty() {
            return Err(LangError::InvalidArgument("identifier"));
        }

        Ok(self
            .placeholders
            .insert(identifier.to_string(), replacement.to_string()))
    }

    fn remove_global_placeholder(&mut self, identifier: &str) -> bool {
        self.placeholders.remove(identifier).is_some()
    }

    fn as_map(&self) -> &BTreeMap<String, String> {
        &self.nodes
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}
