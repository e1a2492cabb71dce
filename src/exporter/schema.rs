use log::debug;
use rusqlite::Connection;
use crate::error::Error;

/// Columns a rip page is built from. `game_name` is also the sort key and
/// the file name source, so it is required no matter the missing-column policy.
pub const PAGE_COLUMNS: [&str; 7] = [
    "game_name",
    "downsample",
    "binhack",
    "status",
    "comments",
    "user_name",
    "date",
];

pub const SORT_COLUMN: &str = "game_name";

#[derive(Clone, Debug, PartialEq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<String>,
}

impl TableSchema {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Page columns absent from this table, in page order.
    pub fn missing_page_columns(&self) -> Vec<&'static str> {
        PAGE_COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}

pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Reads the ordered column list with `PRAGMA table_info`. SQLite answers an
/// unknown table with zero rows rather than an error.
pub fn discover(conn: &Connection, table: &str) -> Result<TableSchema, Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({});", quote_ident(table)))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(Error::Schema(format!("Table '{}' does not exist", table)));
    }

    debug!("Table '{}' has columns {:?}", table, columns);
    Ok(TableSchema {
        table: table.to_string(),
        columns,
    })
}
