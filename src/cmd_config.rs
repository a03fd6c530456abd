//! `config` commands and config file resolution.

use std::path::{Path, PathBuf};

use venuescout_config::{ConfigError, ConfigLoader, ConfigValidator, ScoutConfig};

use crate::cli::ConfigAction;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// An explicit path must exist; the default path may be absent.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ScoutConfig, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

pub(crate) fn run_config(
    action: ConfigAction,
    config: &ScoutConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Check => {
            let result = ConfigValidator::validate(config);
            for error in &result.errors {
                println!("error: {}: {}", error.path, error.message);
            }
            for warning in &result.warnings {
                println!("warning: {}: {}", warning.path, warning.message);
            }
            if result.is_valid() {
                println!("Configuration is valid");
            }
            Ok(result.is_valid())
        }
        ConfigAction::Show => {
            print!("{}", ConfigLoader::to_toml(config)?);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/venuescout.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
