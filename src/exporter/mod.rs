mod markdown;
mod record;
mod schema;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rusqlite::{Connection, OpenFlags};

use crate::config::{Config, MissingColumns};
use crate::error::Error;

use self::markdown::{index_line, page_stem, render_page};
use self::record::RipRecord;
use self::schema::{TableSchema, SORT_COLUMN};

/// What a finished export wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub rows: usize,
    pub index_path: PathBuf,
    /// Page files in the order they were written.
    pub files: Vec<PathBuf>,
}

/// Per-row progress. Draws a bar on a terminal, plain lines otherwise.
struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    fn new(total: u64, enabled: bool) -> Result<Self, Error> {
        let bar = if enabled {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map_err(|e| Error::Processing(format!("Failed to set progress bar style: {}", e)))?);

        Ok(Self { bar })
    }

    fn row_written(&self, seq: usize, path: &Path) {
        let message = format!("Exported row {} to {}", seq, path.display());
        if self.bar.is_hidden() {
            println!("{}", message);
        } else {
            self.bar.println(message);
        }
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_with_message("Export complete");
    }
}

pub struct Exporter {
    config: Config,
    show_progress: bool,
}

impl Exporter {
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn export(&self) -> Result<ExportSummary, Error> {
        let table = &self.config.database.table;
        let output_dir = &self.config.export.output_dir;
        info!(
            "Exporting table '{}' from {} into {}",
            table,
            self.config.database.path.display(),
            output_dir.display()
        );

        fs::create_dir_all(output_dir)?;

        let conn = self.open_connection()?;
        let schema = schema::discover(&conn, table)?;
        self.check_page_columns(&schema)?;

        let rows = record::fetch_rows(&conn, &schema)?;
        debug!("Fetched {} rows from '{}'", rows.len(), table);

        let summary = self.write_pages(&schema, &rows)?;

        conn.close().map_err(|(_, err)| Error::Storage(err))?;

        info!(
            "Successfully exported {} rows from table '{}'",
            summary.rows, table
        );
        Ok(summary)
    }

    /// Opens read-only and without the create flag, so a wrong path is an
    /// error instead of a fresh empty database.
    fn open_connection(&self) -> Result<Connection, Error> {
        let path = &self.config.database.path;
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("Opened database {}", path.display());
        Ok(conn)
    }

    fn check_page_columns(&self, schema: &TableSchema) -> Result<(), Error> {
        if !schema.has_column(SORT_COLUMN) {
            return Err(Error::Schema(format!(
                "Table '{}' has no '{}' column",
                schema.table, SORT_COLUMN
            )));
        }

        let missing = schema.missing_page_columns();
        if missing.is_empty() {
            return Ok(());
        }

        match self.config.export.missing_columns {
            MissingColumns::Fail => Err(Error::Schema(format!(
                "Table '{}' is missing columns: {}",
                schema.table,
                missing.join(", ")
            ))),
            MissingColumns::Blank => {
                warn!(
                    "Table '{}' is missing columns {}; those sections will be empty",
                    schema.table,
                    missing.join(", ")
                );
                Ok(())
            }
        }
    }

    fn write_pages(
        &self,
        schema: &TableSchema,
        rows: &[Vec<rusqlite::types::Value>],
    ) -> Result<ExportSummary, Error> {
        let export = &self.config.export;
        let index_path = export.output_dir.join(&export.index_file);
        let mut index = BufWriter::new(File::create(&index_path)?);
        let progress = ProgressReporter::new(rows.len() as u64, self.show_progress)?;

        let mut files = Vec::with_capacity(rows.len());
        for (seq, values) in rows.iter().enumerate().map(|(i, v)| (i + 1, v)) {
            let record = RipRecord::from_row(schema, values)?;
            let page_path = export.output_dir.join(format!("{}.md", page_stem(&record)));

            index.write_all(index_line(&record, &export.link_extension).as_bytes())?;
            fs::write(&page_path, render_page(&record))?;

            progress.row_written(seq, &page_path);
            files.push(page_path);
        }

        index.flush()?;
        progress.finish();

        Ok(ExportSummary {
            rows: files.len(),
            index_path,
            files,
        })
    }
}

/// Exports `table` from the database at `database_path` into `output_dir`
/// with default settings and returns the number of rows written.
pub fn export<P, Q>(database_path: P, table: &str, output_dir: Q) -> Result<usize, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut config = Config::new(database_path.as_ref(), table);
    config.export.output_dir = output_dir.as_ref().to_path_buf();

    let summary = Exporter::new(config)?.export()?;
    Ok(summary.rows)
}
