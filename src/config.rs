use anyhow::{bail, Result};
use std::path::PathBuf;

/// Deployment environment; production is stricter about table problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!(
                "Invalid SITE_ENV '{}': expected 'development' or 'production'",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,

    /// Root of the content collections (`blog/`, `events/`, `faq/`)
    pub content_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup function.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = match var("SITE_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::default(),
        };

        Ok(Self {
            environment,
            content_dir: var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("src/content")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.content_dir, PathBuf::from("src/content"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SITE_ENV", "Production"),
            ("CONTENT_DIR", "/srv/content"),
        ])
        .unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
    }

    #[test]
    fn test_invalid_environment() {
        let err = config_from(&[("SITE_ENV", "staging")]).unwrap_err();
        assert!(err.to_string().contains("SITE_ENV"));
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = config_from(&[("SITE_URL", "not a url"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }
}
