//! Configuration validation.

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::ScoutConfig;

/// Above this, the shared browser tends to thrash rather than go faster.
const CONCURRENCY_WARN_ABOVE: usize = 16;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into the first error, if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &ScoutConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_site(config, &mut result);
        Self::validate_selectors(config, &mut result);
        Self::validate_limits(config, &mut result);
        Self::validate_timeouts(config, &mut result);
        Self::validate_heuristics(config, &mut result);

        result
    }

    fn validate_site(config: &ScoutConfig, result: &mut ValidationResult) {
        let url = &config.site.seed_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "site.seed_url",
                "seed_url must start with http:// or https://",
            ));
        }
    }

    fn validate_selectors(config: &ScoutConfig, result: &mut ValidationResult) {
        let s = &config.selectors;
        let fields = [
            ("selectors.article_link", &s.article_link),
            ("selectors.load_more_candidates", &s.load_more_candidates),
            ("selectors.map_card", &s.map_card),
            ("selectors.map_heading", &s.map_heading),
            ("selectors.article_heading", &s.article_heading),
        ];
        for (path, value) in fields {
            if value.trim().is_empty() {
                result.add_error(ValidationError::new(path, "Selector cannot be empty"));
            }
        }

        if let Err(e) = Regex::new(&s.load_more_pattern) {
            result.add_error(ValidationError::new(
                "selectors.load_more_pattern",
                format!("Invalid regex: {}", e),
            ));
        }
    }

    fn validate_limits(config: &ScoutConfig, result: &mut ValidationResult) {
        if config.discovery.result_cap == 0 {
            result.add_error(ValidationError::new(
                "discovery.result_cap",
                "result_cap must be greater than 0",
            ));
        }

        if config.discovery.iteration_cap == 0 {
            result.add_error(ValidationError::new(
                "discovery.iteration_cap",
                "iteration_cap must be greater than 0",
            ));
        }

        if config.crawl.concurrency == 0 {
            result.add_error(ValidationError::new(
                "crawl.concurrency",
                "concurrency must be greater than 0",
            ));
        } else if config.crawl.concurrency > CONCURRENCY_WARN_ABOVE {
            result.add_warning(ValidationWarning::new(
                "crawl.concurrency",
                format!(
                    "concurrency is very high (>{}), pages may time out under load",
                    CONCURRENCY_WARN_ABOVE
                ),
            ));
        }
    }

    fn validate_timeouts(config: &ScoutConfig, result: &mut ValidationResult) {
        let t = &config.timeouts;
        let fields = [
            ("timeouts.seed_load_ms", t.seed_load_ms),
            ("timeouts.article_nav_ms", t.article_nav_ms),
            ("timeouts.pagination_settle_ms", t.pagination_settle_ms),
        ];
        for (path, value) in fields {
            if value == 0 {
                result.add_error(ValidationError::new(path, "Timeout must be greater than 0"));
            }
        }
    }

    fn validate_heuristics(config: &ScoutConfig, result: &mut ValidationResult) {
        let h = &config.heuristics;

        if h.min_name_len > h.max_name_len {
            result.add_error(ValidationError::new(
                "heuristics.min_name_len",
                "min_name_len cannot exceed max_name_len",
            ));
        }

        for (path, pattern) in h.patterns() {
            if let Err(e) = Regex::new(pattern) {
                result.add_error(ValidationError::new(path, format!("Invalid regex: {}", e)));
            }
        }

        if h.cuisine_hints.is_empty() {
            result.add_warning(ValidationWarning::new(
                "heuristics.cuisine_hints",
                "No cuisine hints, every venue will be labelled 'unknown'",
            ));
        }

        let tables = [
            ("heuristics.bar_keywords", &h.bar_keywords),
            ("heuristics.bar_context", &h.bar_context),
            ("heuristics.restaurant_keywords", &h.restaurant_keywords),
            ("heuristics.restaurant_context", &h.restaurant_context),
        ];
        for (path, table) in tables {
            if table.is_empty() {
                result.add_warning(ValidationWarning::new(path, "Table is empty"));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
