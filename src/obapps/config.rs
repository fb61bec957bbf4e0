use crate::error::{ObAppsError, Result};
use crate::serializer::Formatting;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INDENT_WIDTH: usize = 2;

/// Editor preferences, stored as JSON next to other obapps state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObAppsConfig {
    /// Keep a `.bak` copy of the rc file before overwriting it.
    #[serde(default = "default_make_backup")]
    pub make_backup: bool,

    /// Spaces per indent level for rules this editor generates.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_make_backup() -> bool {
    true
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for ObAppsConfig {
    fn default() -> Self {
        Self {
            make_backup: true,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl ObAppsConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path).map_err(ObAppsError::Io)?;
        let config: ObAppsConfig = serde_json::from_str(&content).map_err(ObAppsError::Config)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ObAppsError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ObAppsError::Config)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ObAppsError::Io)?;
        Ok(())
    }

    pub fn formatting(&self) -> Formatting {
        Formatting::with_indent_width(self.indent_width)
    }
}
