use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{error, LevelFilter};
use ripdb_export::{logging, Config, Exporter};

const DEFAULT_DATABASE: &str = "ripdb.sqlite";
const DEFAULT_TABLE: &str = "dc_ripdb";

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Export every row of a rip database table to its own Markdown page.
#[derive(Debug, Parser)]
#[command(name = "ripdb-export", version)]
struct Cli {
    /// YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Table to export
    #[arg(short, long)]
    table: Option<String>,

    /// Directory the pages and index are written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum log level; `RUST_LOG` still filters other crates
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Print plain progress lines instead of a progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(DEFAULT_DATABASE, DEFAULT_TABLE),
        };

        if let Some(database) = self.database {
            config.database.path = database;
        }
        if let Some(table) = self.table {
            config.database.table = table;
        }
        if let Some(output) = self.output {
            config.export.output_dir = output;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.clone().into());

    if let Err(e) = run(cli) {
        error!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let show_progress = !cli.no_progress;
    let config = cli.into_config()?;
    let table = config.database.table.clone();

    let summary = Exporter::new(config)?
        .with_progress(show_progress)
        .export()?;

    println!(
        "\nSuccessfully exported {} rows from table '{}'",
        summary.rows, table
    );
    Ok(())
}
