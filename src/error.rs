use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Storage(rusqlite::Error),
    Schema(String),
    Config(String),
    Processing(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Yaml(err) => write!(f, "YAML parsing error: {}", err),
            Error::Storage(err) => write!(f, "SQLite error: {}", err),
            Error::Schema(msg) => write!(f, "Schema error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Processing(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(err)
    }
}
