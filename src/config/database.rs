use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub table: String,
}
