use std::path::{Path, PathBuf};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub type RipRow<'a> = (i64, &'a str, &'a str, &'a str, &'a str, &'a str, &'a str, &'a str);

pub const PAC_MAN: RipRow<'static> = (
    1,
    "Pac-Man",
    "Reduce to 4-bit",
    "Patch jump table",
    "done",
    "great hack",
    "alice",
    "2024-01-01",
);

pub fn setup_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_path_buf();
    (temp_dir, base_path)
}

/// Creates `ripdb.sqlite` under `dir` with a `dc_ripdb` table holding `rows`.
pub fn create_rip_database(dir: &Path, rows: &[RipRow<'_>]) -> PathBuf {
    let db_path = dir.join("ripdb.sqlite");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE dc_ripdb (
            id INTEGER PRIMARY KEY,
            game_name TEXT NOT NULL,
            downsample TEXT,
            binhack TEXT,
            status TEXT,
            comments TEXT,
            user_name TEXT,
            date TEXT
        );",
    )
    .unwrap();

    for row in rows {
        conn.execute(
            "INSERT INTO dc_ripdb (id, game_name, downsample, binhack, status, comments, user_name, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![row.0, row.1, row.2, row.3, row.4, row.5, row.6, row.7],
        )
        .unwrap();
    }

    db_path
}

/// Page files in `dir`, i.e. every `.md` except the index.
pub fn page_files(dir: &Path) -> Vec<PathBuf> {
    let mut pages: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "md"))
        .filter(|path| path.file_name().map_or(false, |name| name != "README.md"))
        .collect();
    pages.sort();
    pages
}
