use std::collections::HashMap;
use rusqlite::types::Value;
use rusqlite::Connection;
use crate::error::Error;
use crate::exporter::schema::{quote_ident, TableSchema, SORT_COLUMN};

/// One rip as it appears on its page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RipRecord {
    pub identifier: String,
    pub game_name: String,
    pub downsample: String,
    pub binhack: String,
    pub status: String,
    pub comments: String,
    pub user_name: String,
    pub date: String,
}

impl RipRecord {
    /// Builds a record from one result row. Columns the table lacks come out
    /// empty; callers decide beforehand whether that is acceptable.
    pub fn from_row(schema: &TableSchema, values: &[Value]) -> Result<Self, Error> {
        if values.len() != schema.columns.len() {
            return Err(Error::Processing(format!(
                "Row has {} values but table '{}' has {} columns",
                values.len(),
                schema.table,
                schema.columns.len()
            )));
        }

        let identifier = values.first().map(render_value).unwrap_or_default();
        let fields: HashMap<&str, String> = schema
            .columns
            .iter()
            .map(String::as_str)
            .zip(values.iter().map(render_value))
            .collect();
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();

        Ok(Self {
            identifier,
            game_name: field("game_name"),
            downsample: field("downsample"),
            binhack: field("binhack"),
            status: field("status"),
            comments: field("comments"),
            user_name: field("user_name"),
            date: field("date"),
        })
    }
}

/// Text form of a column value. NULL renders as empty text.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => render_real(*f),
        Value::Text(s) => s.clone(),
        Value::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Shortest round-trip form with a signed, two-digit exponent (`1e+20`,
/// `2.5e-05`).
fn render_real(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }

    let text = format!("{:?}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Loads every row of the table, sorted case-insensitively by game name.
pub fn fetch_rows(conn: &Connection, schema: &TableSchema) -> Result<Vec<Vec<Value>>, Error> {
    let sql = format!(
        "SELECT * FROM {} ORDER BY UPPER({})",
        quote_ident(&schema.table),
        quote_ident(SORT_COLUMN)
    );
    let mut stmt = conn.prepare(&sql)?;
    let column_count = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            (0..column_count)
                .map(|idx| row.get::<_, Value>(idx))
                .collect::<Result<Vec<_>, _>>()
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}
