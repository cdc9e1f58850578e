use std::path::PathBuf;

use serde::Deserialize;
use tracing::Level;

use crate::pgerrors::{Error, Result};
use crate::pgerrors::config::load::replace_env_vars;
use crate::pgerrors::sqlstate::{NameBuilder, is_identifier};


// Things that are not configurable, but might be one day
pub const MAX_QUALIFIED_NAME_LEN: usize = 120;
pub const DEFAULT_CONFIG_NAME: &str = "pgerrors.yaml";

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// config_path is the path of the loaded config file, None if not loaded from a file
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
    /// module_name is the dotted name of the module the error types are published in.
    /// Each type's qualified name is module_name + "." + type name. Default "pgerrors.errors".
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// log_level is the maximum level of log output: trace, debug, info, warn or error. Default info.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_module_name() -> String { "pgerrors.errors".to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config_path: None,
            module_name: default_module_name(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Parse settings from yaml text, replacing ${ENV_VAR[:DEFAULT]} parameters first.
    pub fn from_yaml_str(raw_yaml: &str) -> Result<Settings> {
        let yaml_text = replace_env_vars(raw_yaml)?;
        let mut settings: Settings = serde_yaml::from_str(&yaml_text)?;
        settings.load(None)?;
        Ok(settings)
    }

    pub(crate) fn load(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.config_path = path;
        if !self.module_name.split('.').all(is_identifier) {
            return Err(Error::new(format!("module_name '{}' must be a dotted identifier", self.module_name)));
        }
        NameBuilder::for_module(&self.module_name)?;
        self.log_level = self.log_level.to_lowercase();
        if self.log_level.parse::<Level>().is_err() {
            return Err(Error::new(format!("unknown log_level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
