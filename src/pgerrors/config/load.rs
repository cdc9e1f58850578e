use std::path::{Path, PathBuf};
use std::env;
use std::borrow::Cow;

use regex::{Regex, Captures};
use tracing::{info_span, info, debug};

use crate::pgerrors::{Error, Result};
use crate::pgerrors::config::config::Settings;


/// Environment variable that, when set, gives the full path of the config file.
pub const CONFIG_PATH_ENV: &str = "PGERRORS_CONFIG";

/// Load configuration settings from config_name (typically pgerrors.yaml)
/// Searching in order:
/// 1) the path in the PGERRORS_CONFIG environment variable
/// 2) Current directory
/// 3) Any parent directory of the current directory, up to root
/// 4) ~/.config/pgerrors/
/// 5) ~/.{config_name}
/// 6) /etc/pgerrors/
///
/// This replaces ${ENV_VAR[:DEFAULT]} parameters in the yaml file with values from the environment
/// variable, if set, otherwise, optionally with the given default value after the :
pub fn load_config(config_name: &str) -> Result<Settings> {
    let _span = info_span!("loading config file").entered();
    let config_path = find_config_file(config_name)?;
    info!(config_path = %config_path.to_string_lossy().into_owned(), "found config file");
    let raw_yaml = std::fs::read_to_string(&config_path)?;
    let yaml_text = replace_env_vars(&raw_yaml)?;

    let mut settings: Settings = serde_yaml::from_str(&yaml_text)?;
    settings.load(Some(config_path))?;
    Ok(settings)
}

fn find_config_file(config_name: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        debug!("using config path from {}", CONFIG_PATH_ENV);
        return Ok(PathBuf::from(path));
    }

    // Check the current directory or any of its parents for config_name
    if let Ok(start) = env::current_dir() {
        let mut dir = start.as_path();
        loop {
            debug!("checking for config file in {}", dir.to_string_lossy());
            let fp = Path::join(dir, config_name);
            if fp.exists() {
                return Ok(fp);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }

    // HOME is required to be set on POSIX systems, but if it's not set we'll try ~/
    let home = env::var("HOME").unwrap_or_else(|_| "~/".to_string());
    let candidates = [
        Path::new(&home).join(".config/pgerrors").join(config_name),
        Path::new(&home).join(".".to_string() + config_name),
        Path::new("/etc/pgerrors").join(config_name),
    ];
    for conf_path in candidates.iter() {
        debug!("checking for config file in {}", conf_path.to_string_lossy());
        if conf_path.exists() {
            return Ok(conf_path.clone());
        }
    }

    Err(Error::new(format!("config file {} not found", config_name)))
}

/// Replace ${ENV_VAR}, ${ENV_VAR:default} and ${ENV_VAR:?error message} in raw_yaml.
/// An unset variable without a default is an error, as is the ? form.
pub(crate) fn replace_env_vars(raw_yaml: &str) -> Result<Cow<str>> {
    // We only call this function once and then never again, so don't keep the regex
    let re_var = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)(?::([^}]+?))?\}")?;

    let mut errors = Vec::<String>::new();

    let replaced_text = re_var.replace_all(raw_yaml, |caps: &Captures| {
        match env::var(&caps[1]) {
            Ok(val) => val,
            Err(_) => {
                if let Some(default) = caps.get(2) {
                    let s = default.as_str();
                    if let Some(msg) = s.strip_prefix('?') {
                        errors.push(msg.to_string());
                        String::new()
                    } else {
                        s.to_string()
                    }
                } else {
                    errors.push(format!("environment variable {} is required but not defined", &caps[1]));
                    String::new()
                }
            }
        }
    });

    if errors.is_empty() {
        Ok(replaced_text)
    } else {
        Err(Error::new(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_env_vars() {
        env::set_var("PGERRORS_TEST_MODULE", "app.errors");
        let text = replace_env_vars("module_name: ${PGERRORS_TEST_MODULE}\nlog_level: ${PGERRORS_TEST_UNSET_LEVEL:warn}\n").unwrap();
        assert_eq!(text, "module_name: app.errors\nlog_level: warn\n");
    }

    #[test]
    fn test_replace_env_vars_missing() {
        let err = replace_env_vars("a: ${PGERRORS_TEST_UNSET_A}").unwrap_err();
        assert_eq!(err.to_string(), "environment variable PGERRORS_TEST_UNSET_A is required but not defined");
        let err = replace_env_vars("a: ${PGERRORS_TEST_UNSET_B:?set PGERRORS_TEST_UNSET_B please}").unwrap_err();
        assert_eq!(err.to_string(), "set PGERRORS_TEST_UNSET_B please");
    }

    #[test]
    fn test_no_vars() {
        assert!(matches!(replace_env_vars("log_level: info").unwrap(), Cow::Borrowed(_)));
    }
}
