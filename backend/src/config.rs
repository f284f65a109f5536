use std::env;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Fallback database location: `todo.db` next to the running executable.
static DEFAULT_DB_PATH: Lazy<PathBuf> = Lazy::new(|| {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todo.db")
});

#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved location of the SQLite database file.
    pub db_path: PathBuf,
    /// Raw `DB_PATH` value as seen in the environment, surfaced by `/config`.
    pub env_db_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let env_db_path = env::var("DB_PATH").ok();
        let db_path = resolve_db_path(env_db_path.as_deref());
        Config {
            db_path,
            env_db_path,
        }
    }
}

/// Resolves the database file location. A non-blank override wins (surrounding
/// whitespace stripped); anything else falls back to [`DEFAULT_DB_PATH`].
pub fn resolve_db_path(override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => DEFAULT_DB_PATH.clone(),
    }
}
