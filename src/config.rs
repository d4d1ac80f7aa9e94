use anyhow::{Context, Result};
use mc_commons_lang::BundleConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, warn};

const DEFAULT_CONFIG_PATH: &str = "config/commons.toml";

/// Plugin-wide settings: log filter plus the `[lang]` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommonsConfig {
    /// Filter used by [`crate::init_tracing`] when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Language bundle settings from the `[lang]` table.
    pub lang: BundleConfig,
}

impl Default for CommonsConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            lang: BundleConfig::default(),
        }
    }
}

impl CommonsConfig {
    /// Load from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(cfg) => cfg,
            Err(err) if !path.exists() => {
                debug!("No config at {}: {err:#}. Using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Failed to load {}: {err:#}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Load configuration, reporting read and parse failures.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_commons_lang::LoadTarget;
    use mc_commons_testkit::{scratch_dir, scratch_path};

    #[test]
    fn partial_file_keeps_defaults() {
        let path = scratch_path("commons-config", "toml");
        fs::write(&path, "[lang]\nload_target = \"nodes\"\n").unwrap();

        let cfg = CommonsConfig::load_from_path(&path);
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.lang.load_target, LoadTarget::Nodes);
        assert_eq!(cfg.lang.color_char, '&');
    }

    #[test]
    fn broken_file_falls_back_but_strict_reports() {
        let path = scratch_path("commons-config-broken", "toml");
        fs::write(&path, "log_filter = [").unwrap();

        assert_eq!(CommonsConfig::load_from_path(&path), CommonsConfig::default());
        let err = CommonsConfig::load_strict(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_dir("commons-config-save").join("nested/commons.toml");
        let mut cfg = CommonsConfig::default();
        cfg.log_filter = "mc_commons_lang=debug".to_string();
        cfg.lang.translate_colors = false;

        cfg.save_to_path(&path).unwrap();
        assert_eq!(CommonsConfig::load_strict(&path).unwrap(), cfg);
    }
}
