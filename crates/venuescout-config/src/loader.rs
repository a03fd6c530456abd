//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::ScoutConfig;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<ScoutConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<ScoutConfig, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(ScoutConfig::default())
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<ScoutConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: ScoutConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Render a configuration back to TOML.
    pub fn to_toml(config: &ScoutConfig) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.venuescout`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.crawl.concurrency, 4);
        assert_eq!(config.site.seed_url, "https://ny.eater.com/");
    }

    #[test]
    fn test_load_overrides() {
        let content = r#"
            [site]
            seed_url = "https://la.eater.com/"

            [discovery]
            result_cap = 10
            iteration_cap = 3

            [heuristics]
            cuisine_hints = ["ramen", "noodle"]
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.site.seed_url, "https://la.eater.com/");
        assert_eq!(config.discovery.result_cap, 10);
        assert_eq!(config.discovery.iteration_cap, 3);
        assert_eq!(config.heuristics.cuisine_hints, vec!["ramen", "noodle"]);
        // untouched tables keep their defaults
        assert!(!config.heuristics.junk_phrases.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]").unwrap();
        writeln!(file, "pagination_settle_ms = 500").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.timeouts.pagination_settle_ms, 500);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/venuescout.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/venuescout.toml")).unwrap();
        assert_eq!(config.discovery.result_cap, 40);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("concurrency = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: unique test-only variable
        unsafe {
            std::env::set_var("VENUESCOUT_TEST_SEED", "https://sf.eater.com/");
        }
        let content = "[site]\nseed_url = \"${VENUESCOUT_TEST_SEED}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.site.seed_url, "https://sf.eater.com/");
        unsafe {
            std::env::remove_var("VENUESCOUT_TEST_SEED");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${VENUESCOUT_UNSET_VAR_9981}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_to_toml_roundtrips_defaults() {
        let rendered = ConfigLoader::to_toml(&ScoutConfig::default()).unwrap();
        assert!(rendered.contains("[crawl]"));
        let reparsed = ConfigLoader::load_str(&rendered).unwrap();
        assert_eq!(reparsed.crawl.concurrency, 4);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/venuescout.toml");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/venuescout.toml"));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = ConfigLoader::load_str(include_str!("../../../config/default.toml")).unwrap();
        let defaults = ScoutConfig::default();
        assert_eq!(config.site.seed_url, defaults.site.seed_url);
        assert_eq!(config.selectors.article_heading, defaults.selectors.article_heading);
        assert_eq!(config.browser.viewport_height, 1800);
        assert_eq!(config.heuristics.cuisine_hints, defaults.heuristics.cuisine_hints);
    }
}
