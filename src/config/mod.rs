mod database;
mod export;

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Error;

pub use self::database::DatabaseConfig;
pub use self::export::{ExportConfig, MissingColumns};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(database_path: P, table: S) -> Self {
        Self {
            database: DatabaseConfig {
                path: database_path.into(),
                table: table.into(),
            },
            export: ExportConfig::default(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, Error> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The table name ends up inside `PRAGMA` and `SELECT` text, so only plain
    /// identifiers are accepted.
    pub fn validate(&self) -> Result<(), Error> {
        let ident_re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map_err(|e| Error::Config(format!("Invalid regex: {}", e)))?;

        if !ident_re.is_match(&self.database.table) {
            return Err(Error::Config(format!(
                "Table name is not a plain SQL identifier: {:?}",
                self.database.table
            )));
        }

        if self.export.index_file.trim().is_empty() {
            return Err(Error::Config("Index file name must not be empty".to_string()));
        }

        let index_file = &self.export.index_file;
        if index_file.contains('/') || index_file.contains('\\') || index_file == ".." {
            return Err(Error::Config(format!(
                "Index file should be a bare file name inside the output directory, got {:?}",
                index_file
            )));
        }

        if self.export.link_extension.contains('/') || self.export.link_extension.starts_with('.') {
            return Err(Error::Config(format!(
                "Link extension should be a bare extension like \"html\", got {:?}",
                self.export.link_extension
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let config = Config::from_str(include_str!("../../test_data/config.yml")).unwrap();

        assert_eq!(config.database.path, PathBuf::from("ripdb.sqlite"));
        assert_eq!(config.database.table, "dc_ripdb");

        assert_eq!(config.export.output_dir, PathBuf::from("output"));
        assert_eq!(config.export.index_file, "README.md");
        assert_eq!(config.export.link_extension, "html");
        assert_eq!(config.export.missing_columns, MissingColumns::Fail);
    }

    #[test]
    fn test_export_section_is_optional() {
        let config = Config::from_str(
            r#"
            database:
                path: rips.db
                table: rips
            "#,
        )
        .unwrap();

        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_new_matches_defaults() {
        let config = Config::new("rips.db", "rips");
        assert_eq!(config.database.table, "rips");
        assert_eq!(config.export.output_dir, PathBuf::from("output"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_injected_table_name() {
        let result = Config::from_str(
            r#"
            database:
                path: rips.db
                table: "rips; DROP TABLE rips"
            "#,
        );

        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("plain SQL identifier")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_dotted_link_extension() {
        let mut config = Config::new("rips.db", "rips");
        config.export.link_extension = ".html".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_index_file_outside_output_dir() {
        for index_file in ["../README.md", "sub/index.md", "..\\README.md", ".."] {
            let mut config = Config::new("rips.db", "rips");
            config.export.index_file = index_file.to_string();
            match config.validate() {
                Err(Error::Config(msg)) => assert!(msg.contains("bare file name"), "{}", msg),
                other => panic!("Expected Config error for {:?}, got {:?}", index_file, other),
            }
        }

        let mut config = Config::new("rips.db", "rips");
        config.export.index_file = "index.md".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("nonexistent.yml");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_str("invalid: yaml: [");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }
}
