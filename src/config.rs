use std::env;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CateringError, Result};
use crate::models::{Guests, Variant};

const DEFAULT_CONFIG_FILE: &str = "catering.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub variant: Variant,
    /// Guest count used when none is given on the command line
    pub default_guests: u32,
    /// How many blank records the manual entry form starts with
    pub manual_ingredient_count: usize,
    pub log_level: String,
}

impl Settings {
    /// Load settings from defaults, an optional TOML file and the environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CATERING__DEFAULT_GUESTS, etc.)
    /// 2. `config_path`, else CATERING_CONFIG, else ./catering.toml if present
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("variant", "with-units")?
            .set_default("default_guests", 10)?
            .set_default("manual_ingredient_count", 5)?
            .set_default("log_level", "info")?;

        let explicit = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os("CATERING_CONFIG").map(PathBuf::from));

        match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder = builder.add_source(File::from(path).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix("CATERING")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        Guests::new(self.default_guests).map_err(|e| CateringError::InvalidSetting {
            key: "default_guests",
            reason: e.to_string(),
        })?;

        if self.manual_ingredient_count == 0 {
            return Err(CateringError::InvalidSetting {
                key: "manual_ingredient_count",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    pub fn default_guests(&self) -> Result<Guests> {
        Ok(Guests::new(self.default_guests)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("catering.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        (dir, path)
    }

    #[test]
    fn test_file_overrides_defaults() {
        let (_dir, path) = write_config("variant = \"basic\"\ndefault_guests = 40\n");

        let settings = Settings::load(Some(&path)).expect("Failed to load settings");

        assert_eq!(settings.variant, Variant::Basic);
        assert_eq!(settings.default_guests, 40);
        assert_eq!(settings.manual_ingredient_count, 5);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_zero_guests_rejected() {
        let (_dir, path) = write_config("default_guests = 0\n");

        let result = Settings::load(Some(&path));

        assert!(matches!(
            result,
            Err(CateringError::InvalidSetting {
                key: "default_guests",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_manual_count_rejected() {
        let (_dir, path) = write_config("manual_ingredient_count = 0\n");

        let result = Settings::load(Some(&path));

        assert!(matches!(
            result,
            Err(CateringError::InvalidSetting {
                key: "manual_ingredient_count",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let (_dir, path) = write_config("variant = \"metric\"\n");

        let result = Settings::load(Some(&path));

        assert!(matches!(result, Err(CateringError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = Settings::load(Some(Path::new("/nonexistent/catering.toml")));

        assert!(matches!(result, Err(CateringError::Config(_))));
    }
}
