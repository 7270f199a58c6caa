//! User configuration for default generator settings.

use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::constants::{DEFAULT_DATE_RANGE, MAX_DATE_RANGE};
use crate::error::{DemoGenError, DemoGenResult};
use crate::mode::Mode;

fn default_date_range() -> u32 {
    DEFAULT_DATE_RANGE
}

/// Defaults read from ~/.config/demogen/config.toml
///
/// Every key is optional. Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoGenConfig {
    #[serde(default, rename = "type")]
    pub mode: Mode,

    #[serde(default = "default_date_range")]
    pub date_range: u32,

    #[serde(default)]
    pub realistic: bool,

    #[serde(default)]
    pub with_overdue: bool,

    #[serde(default)]
    pub with_undated: bool,
}

impl Default for DemoGenConfig {
    fn default() -> Self {
        DemoGenConfig {
            mode: Mode::default(),
            date_range: DEFAULT_DATE_RANGE,
            realistic: false,
            with_overdue: false,
            with_undated: false,
        }
    }
}

impl DemoGenConfig {
    pub fn config_path() -> DemoGenResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DemoGenError::Config("Could not determine config directory".into()))?
            .join("demogen");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at the default location. A missing file yields defaults.
    pub fn load() -> DemoGenResult<Self> {
        Self::load_from(&Self::config_path()?, false)
    }

    /// Load the config at `path`. When `required` is set, a missing file is an error.
    pub fn load_from(path: &Path, required: bool) -> DemoGenResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .build()
            .map_err(|e| DemoGenError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DemoGenError::Config(e.to_string()))?;

        check_date_range(config.date_range)?;
        Ok(config)
    }
}

/// Reject event windows too wide to express as calendar dates.
pub fn check_date_range(days: u32) -> DemoGenResult<()> {
    if days > MAX_DATE_RANGE {
        return Err(DemoGenError::Config(format!(
            "date_range must be at most {} days, got {}",
            MAX_DATE_RANGE, days
        )));
    }
    Ok(())
}
