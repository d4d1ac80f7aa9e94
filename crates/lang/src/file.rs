//! Language bundle persisted as a line-oriented text file.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::format::{parse_entries, write_entries};
use crate::{
    BundleConfig, LangError, LanguageBundle, LoadTarget, MemoryLanguageBundle, TextProcessor,
};

/// A [`MemoryLanguageBundle`] that reads and writes the format in
/// [`crate::format`].
///
/// With the default [`LoadTarget::Placeholders`], loading fills global
/// placeholders while saving writes node templates. Saving and reloading a
/// bundle therefore does not restore its nodes. Use [`LoadTarget::Nodes`] for
/// a symmetric round trip.
#[derive(Debug, Clone, Default)]
pub struct FileLanguageBundle {
    inner: MemoryLanguageBundle,
    load_target: LoadTarget,
}

impl FileLanguageBundle {
    /// Empty bundle with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty bundle using the hook and load target from `config`.
    pub fn from_config(config: &BundleConfig) -> Self {
        Self {
            inner: MemoryLanguageBundle::with_post_processor(config.post_processor()),
            load_target: config.load_target,
        }
    }

    /// Table that loads write into.
    pub fn load_target(&self) -> LoadTarget {
        self.load_target
    }

    /// Change the table that loads write into.
    pub fn set_load_target(&mut self, target: LoadTarget) {
        self.load_target = target;
    }

    /// Replace the post-processing hook.
    pub fn set_post_processor(&mut self, post_processor: TextProcessor) {
        self.inner.set_post_processor(post_processor);
    }

    /// Read-only view of the global placeholders.
    pub fn placeholders(&self) -> &BTreeMap<String, String> {
        self.inner.placeholders()
    }

    /// Parse `source` and apply every entry to the load target.
    ///
    /// Nothing is applied if any line is malformed. Returns the number of
    /// entries applied.
    pub fn load_from_str(&mut self, source: &str) -> Result<usize, LangError> {
        let entries = parse_entries(source)?;
        let mut count = 0;

        for entry in entries {
            match self.load_target {
                LoadTarget::Placeholders => {
                    self.inner.add_global_placeholder(&entry.key, &entry.value)?;
                }
                LoadTarget::Nodes => {
                    if entry.value.is_empty() {
                        debug!(line = entry.line, key = %entry.key, "Skipping empty lang value");
                        continue;
                    }
                    self.inner.set_string(&entry.key, &entry.value)?;
                }
            }
            count += 1;
        }

        Ok(count)
    }

    /// Render the node templates (not the placeholders) as language file text.
    pub fn save_to_string(&self) -> String {
        write_entries(self.inner.as_map())
    }

    /// Read UTF-8 text from `reader` and load it.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> Result<usize, LangError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.load_from_str(&source)
    }

    /// Load the file at `path`.
    ///
    /// A missing file is reported as [`LangError::NotFound`].
    pub fn load(&mut self, path: &Path) -> Result<usize, LangError> {
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LangError::NotFound(path.to_path_buf()),
            _ => LangError::Io(err),
        })?;
        self.load_from_str(&source)
    }

    /// Clear node templates, then load `path`.
    ///
    /// A missing file leaves the bundle cleared. Other failures are logged and
    /// otherwise ignored.
    pub fn reload(&mut self, path: &Path) {
        self.clear();
        match self.load(path) {
            Ok(count) => debug!("Loaded {count} lang entries from {}", path.display()),
            Err(LangError::NotFound(_)) => {
                debug!("Language file {} not found, nothing loaded", path.display())
            }
            Err(err) => warn!("Failed to reload {}: {err}", path.display()),
        }
    }

    /// Write the node templates to `path`, creating parent directories and
    /// overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<(), LangError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.save_to_string())?;
        Ok(())
    }

    /// Bundle loaded from `path`. A missing file yields an empty bundle;
    /// other failures are logged and yield an empty bundle too.
    pub fn load_from_file(path: &Path) -> Self {
        let mut bundle = Self::new();
        match bundle.load(path) {
            Ok(_) | Err(LangError::NotFound(_)) => {}
            Err(err) => warn!("Failed to load {}: {err}", path.display()),
        }
        bundle
    }

    /// Bundle loaded from `reader`. Failures are logged and yield an empty
    /// bundle.
    pub fn load_from_reader<R: Read>(reader: R) -> Self {
        let mut bundle = Self::new();
        if let Err(err) = bundle.load_reader(reader) {
            warn!("Failed to load language bundle: {err}");
        }
        bundle
    }
}

impl LanguageBundle for FileLanguageBundle {
    fn set_string(&mut self, node: &str, value: &str) -> Result<(), LangError> {
        self.inner.set_string(node, value)
    }

    fn get_string_with(&self, node: &str, args: &[&dyn fmt::Display]) -> String {
        self.inner.get_string_with(node, args)
    }

    fn get_string(&self, node: &str) -> String {
        self.inner.get_string(node)
    }

    fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.inner.keys()
    }

    fn exists(&self, node: &str) -> bool {
        self.inner.exists(node)
    }

    fn add_global_placeholder(
        &mut self,
        identifier: &str,
        replacement: &str,
    ) -> Result<Option<String>, LangError> {
        self.inner.add_global_placeholder(identifier, replacement)
    }

    fn remove_global_placeholder(&mut self, identifier: &str) -> bool {
        self.inner.remove_global_placeholder(identifier)
    }

    fn as_map(&self) -> &BTreeMap<String, String> {
        self.inner.as_map()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
