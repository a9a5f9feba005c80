//! Configuration System
//!
//! TOML configuration for routes, the topic catalog, the placeholder user
//! and logging. Every field has a default, so an empty document is valid.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::preferences::TopicCatalog;
use crate::routes::{AppRoute, RouteTable};
use crate::session::DEFAULT_PLACEHOLDER_NAME;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub topics: TopicCatalog,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Client-side route paths
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutesConfig {
    /// Canonical login path, used for links
    #[serde(default = "default_login_path")]
    pub login: String,

    /// Extra paths that also render the login view
    #[serde(default = "default_login_aliases")]
    pub login_aliases: Vec<String>,

    #[serde(default = "default_news_path")]
    pub news: String,

    #[serde(default = "default_preferences_path")]
    pub preferences: String,
}

fn default_login_path() -> String {
    "/register".to_string()
}

fn default_login_aliases() -> Vec<String> {
    vec!["/login".to_string()]
}

fn default_news_path() -> String {
    "/news".to_string()
}

fn default_preferences_path() -> String {
    "/preferences".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: default_login_path(),
            login_aliases: default_login_aliases(),
            news: default_news_path(),
            preferences: default_preferences_path(),
        }
    }
}

impl RoutesConfig {
    /// Build the table the shell dispatches on
    pub fn to_table(&self) -> RouteTable {
        let mut table = RouteTable::new().route(&self.login, AppRoute::Login);
        for alias in &self.login_aliases {
            table = table.route(alias, AppRoute::Login);
        }
        table
            .route(&self.news, AppRoute::News)
            .route(&self.preferences, AppRoute::Preferences)
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Display name of the user created by the login action
    #[serde(default = "default_placeholder_name")]
    pub placeholder_name: String,
}

fn default_placeholder_name() -> String {
    DEFAULT_PLACEHOLDER_NAME.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            placeholder_name: default_placeholder_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate configuration held in memory
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check route paths, topic ids and the log level
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = self.routes.to_table();
        if let Some((path, _)) = table.entries().find(|(p, _)| !p.starts_with('/')) {
            return Err(ConfigError::InvalidRoutePath(path.to_string()));
        }
        if let Some(path) = table.first_conflict() {
            return Err(ConfigError::DuplicateRoute(path.to_string()));
        }

        if self.topics.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if let Some(id) = self.topics.first_duplicate() {
            return Err(ConfigError::DuplicateTopic(id.to_string()));
        }

        self.logging.max_level()?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {origin}: {error}")]
    Parse { origin: String, error: String },

    #[error("Route path must start with '/': {0}")]
    InvalidRoutePath(String),

    #[error("Route path registered twice: {0}")]
    DuplicateRoute(String),

    #[error("Topic id listed twice: {0}")]
    DuplicateTopic(String),

    #[error("Topic catalog is empty")]
    EmptyCatalog,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Newsdesk Configuration

[routes]
# Canonical login path, used by navigation links
login = "/register"

# Other paths that render the login view
login_aliases = ["/login"]

news = "/news"
preferences = "/preferences"

[session]
# Display name of the user created by the login button
placeholder_name = "User"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Topics offered on the preferences form, in display order
[[topics]]
id = "technology"
label = "Technology"

[[topics]]
id = "health"
label = "Health"

[[topics]]
id = "business"
label = "Business"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let parsed = Config::from_toml_str("").unwrap();
        assert_eq!(parsed.routes.login, "/register");
        assert_eq!(parsed.topics.len(), 3);
        assert_eq!(parsed.session.placeholder_name, "User");
    }

    #[test]
    fn test_default_table_has_login_alias() {
        let table = Config::default().routes.to_table();
        let login_paths: Vec<_> = table
            .entries()
            .filter(|(_, r)| *r == AppRoute::Login)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(login_paths, vec!["/register", "/login"]);
        assert_eq!(table.path_for(AppRoute::Login), Some("/register"));
        assert_eq!(table.path_for(AppRoute::News), Some("/news"));
    }

    #[test]
    fn test_rejects_relative_route() {
        let err = Config::from_toml_str("[routes]\nnews = \"news\"\n").unwrap_err();
        assert_eq!(err, ConfigError::InvalidRoutePath("news".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_route() {
        let err = Config::from_toml_str("[routes]\nlogin_aliases = [\"/news\"]\n").unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRoute("/news".to_string()));
    }

    #[test]
    fn test_rejects_route_differing_by_trailing_slash() {
        let err = Config::from_toml_str("[routes]\nlogin_aliases = [\"/news/\"]\n").unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRoute("/news".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_topic() {
        let doc = r#"
[[topics]]
id = "health"
label = "Health"

[[topics]]
id = "health"
label = "Health again"
"#;
        let err = Config::from_toml_str(doc).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTopic("health".to_string()));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let err = Config::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
        assert_eq!(
            LoggingConfig::default().max_level().unwrap(),
            tracing::Level::INFO
        );
    }

    #[test]
    fn test_parse_error_reports_origin() {
        let err = Config::from_toml_str("[routes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == "<inline>"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nplaceholder_name = \"Reader\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.session.placeholder_name, "Reader");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
