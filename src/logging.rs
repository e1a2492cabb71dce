//! Logger initialization.

use std::io::Write;

use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is read first and `level` then overrides it for this crate, so
/// `RUST_LOG=rusqlite=trace` style filters for other crates keep working.
/// Uses `try_init`, so calling it more than once is harmless.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("ripdb_export", level);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    let _ = builder.try_init();
}
