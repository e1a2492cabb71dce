use serde::Deserialize;
use std::path::PathBuf;

/// What to do when the table lacks one of the columns a page is built from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingColumns {
    /// Refuse to export before anything is written.
    #[default]
    Fail,
    /// Render the missing fields as empty text.
    Blank,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub index_file: String,
    /// Extension used by index links. Pages are always written as `.md`.
    pub link_extension: String,
    pub missing_columns: MissingColumns,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            index_file: "README.md".to_string(),
            link_extension: "html".to_string(),
            missing_columns: MissingColumns::Fail,
        }
    }
}
