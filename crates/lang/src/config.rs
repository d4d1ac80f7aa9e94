//! Bundle configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{FileLanguageBundle, LangError, TextProcessor, DEFAULT_ALT_COLOR_CHAR};

/// Which table [`FileLanguageBundle::load_from_str`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTarget {
    /// Loaded entries become global placeholders. Saving still writes node
    /// templates, so a save/load cycle does not round-trip.
    #[default]
    Placeholders,
    /// Loaded entries become node templates, mirroring what `save` writes.
    Nodes,
}

/// Settings for constructing language bundles.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Prefix translated into the client color marker.
    pub color_char: char,
    /// Whether resolved strings go through color translation.
    pub translate_colors: bool,
    /// Table that loaded entries are written to.
    pub load_target: LoadTarget,
    /// Language file opened by [`BundleConfig::open_bundle`].
    pub file: Option<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            color_char: DEFAULT_ALT_COLOR_CHAR,
            translate_colors: true,
            load_target: LoadTarget::Placeholders,
            file: None,
        }
    }
}

impl BundleConfig {
    /// Parse configuration from TOML text.
    pub fn parse_str(input: &str) -> Result<Self, LangError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from `path`, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("Bundle config not found at {}. Using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), LangError> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Post-processing hook implied by these settings.
    pub fn post_processor(&self) -> TextProcessor {
        if self.translate_colors {
            TextProcessor::color_codes(self.color_char)
        } else {
            TextProcessor::identity()
        }
    }

    /// Build a bundle with these settings, loading [`Self::file`] if set.
    pub fn open_bundle(&self) -> FileLanguageBundle {
        let mut bundle = FileLanguageBundle::from_config(self);
        if let Some(file) = &self.file {
            bundle.reload(file);
        }
        bundle
    }
}
