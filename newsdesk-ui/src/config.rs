//! Embedded Configuration
//!
//! The frontend has no filesystem, so `newsdesk.toml` is compiled in.

use newsdesk::{Config, ConfigError};

const EMBEDDED_CONFIG: &str = include_str!("../newsdesk.toml");

/// Parse and validate the configuration shipped with the bundle
pub fn load_embedded() -> Result<Config, ConfigError> {
    Config::from_toml_str(EMBEDDED_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = load_embedded().unwrap();
        assert_eq!(config, Config::default());
    }
}
