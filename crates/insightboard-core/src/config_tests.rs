//! Tests for config module

#[cfg(test)]
mod tests {
    use crate::config::*;
    use tempfile::TempDir;

    // ========================================================================
    // Defaults
    // ========================================================================

    #[test]
    fn test_default_config_values() {
        // Arrange & Act
        let config = InsightConfig::default();

        // Assert
        assert_eq!(config.storage.database_url, "sqlite://insightboard.db");
        assert_eq!(config.storage.max_connections, 5);
        assert!(config.storage.create_if_missing);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(InsightConfig::default().validate().is_ok());
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        // Arrange
        let toml_str = r#"
[server]
port = 8080

[storage]
database_url = "sqlite:///var/lib/insightboard/records.db"
"#;

        // Act
        let config = InsightConfig::from_toml(toml_str).expect("parse");

        // Assert
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.storage.database_url,
            "sqlite:///var/lib/insightboard/records.db"
        );
        assert_eq!(config.storage.max_connections, 5);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        let config = InsightConfig::from_toml("").expect("parse");

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_toml_rejects_wrong_type() {
        // Arrange
        let toml_str = r#"
[server]
port = "not a port"
"#;

        // Act
        let result = InsightConfig::from_toml(toml_str);

        // Assert
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");

        // Act
        let config =
            InsightConfig::load_from_path(dir.path().join("absent.toml")).expect("load");

        // Assert
        assert_eq!(config.server.port, 5000);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn invalid_key(config: &InsightConfig) -> String {
        match config.validate() {
            Err(ConfigError::InvalidValue { key, .. }) => key,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_sqlite_url() {
        let mut config = InsightConfig::default();
        config.storage.database_url = "postgres://localhost/db".to_string();

        assert_eq!(invalid_key(&config), "storage.database_url");
    }

    #[test]
    fn test_validate_accepts_memory_url() {
        let mut config = InsightConfig::default();
        config.storage.database_url = "sqlite::memory:".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_max_connections_range() {
        let mut config = InsightConfig::default();

        config.storage.max_connections = 0;
        assert_eq!(invalid_key(&config), "storage.max_connections");

        config.storage.max_connections = 65;
        assert_eq!(invalid_key(&config), "storage.max_connections");

        config.storage.max_connections = 64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_privileged_port() {
        let mut config = InsightConfig::default();
        config.server.port = 80;

        assert_eq!(invalid_key(&config), "server.port");
    }

    #[test]
    fn test_validate_logging_values() {
        let mut config = InsightConfig::default();
        config.logging.level = "verbose".to_string();
        assert_eq!(invalid_key(&config), "logging.level");

        let mut config = InsightConfig::default();
        config.logging.format = "json".to_string();
        assert_eq!(invalid_key(&config), "logging.format");
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    #[test]
    fn test_to_toml_round_trip() {
        // Arrange
        let mut config = InsightConfig::default();
        config.server.port = 9000;
        config.logging.format = "compact".to_string();

        // Act
        let toml_str = config.to_toml().expect("serialize");
        let parsed = InsightConfig::from_toml(&toml_str).expect("parse");

        // Assert
        assert!(toml_str.contains("[server]"));
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.logging.format, "compact");
    }

    #[test]
    fn test_write_to_path_then_load() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut config = InsightConfig::default();
        config.storage.max_connections = 12;

        // Act
        config.write_to_path(&path).expect("write");
        let loaded = InsightConfig::load_from_path(&path).expect("load");

        // Assert
        assert_eq!(loaded.storage.max_connections, 12);
    }
}
