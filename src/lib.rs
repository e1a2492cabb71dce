pub mod config;
pub mod exporter;
pub mod error;
pub mod logging;

pub use config::Config;
pub use exporter::{export, ExportSummary, Exporter};
pub use error::Error;
