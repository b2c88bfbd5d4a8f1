//! Service configuration file
//!
//! A JSON document; every field has a default, so an empty object (or no
//! file at all) yields a working local setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::DatabaseConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listener and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// PostgreSQL connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log output format (default: "pretty")
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, port: Option<u16>, database_url: Option<String>) -> Self {
        if let Some(port) = port {
            self.http.port = port;
        }
        if let Some(url) = database_url {
            self.database.url = Some(url);
        }
        self
    }

    /// Validate everything that is parsed at startup
    pub fn validate(&self) -> CliResult<()> {
        self.http
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        self.database
            .connect_options()
            .map_err(|e| CliError::config_error(format!("Invalid database config: {}", e)))?;

        Ok(())
    }

    /// Copy of this config safe to print
    pub fn redacted(&self) -> Self {
        Self {
            database: self.database.redacted(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.http.port, 8000);
        assert_eq!(config.database.dbname, "items");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_nested_sections() {
        let file = write_config(
            r#"{
                "http": {"port": 9000, "cors_origin": "https://shop.example"},
                "database": {"host": "db.internal", "password": "s3cret"},
                "log_format": "json"
            }"#,
        );
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.cors_origin, "https://shop.example");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/itemd.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{not json");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let file = write_config(r#"{"http": {"host": "localhost"}}"#);
        assert!(Config::load(file.path()).is_err());

        let file = write_config(r#"{"database": {"sslmode": "sometimes"}}"#);
        assert!(Config::load(file.path()).is_err());

        let file = write_config(r#"{"log_format": "xml"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_overrides(Some(9001), Some("postgres://app@pg/items".to_string()));

        assert_eq!(config.http.port, 9001);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://app@pg/items")
        );

        let options = config.database.connect_options().unwrap();
        assert_eq!(options.get_host(), "pg");
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let config = Config::load_or_default(None).unwrap().with_overrides(None, None);
        assert_eq!(config.http.port, 8000);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_redacted_hides_password() {
        let json = serde_json::to_string(&Config::default().redacted()).unwrap();
        assert!(json.contains("********"));
        assert!(!json.contains("\"password\":\"items\""));
    }
}
