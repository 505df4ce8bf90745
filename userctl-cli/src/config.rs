//! Environment loading
//!
//! Settings come from flags, then environment variables, then `.env` files.
//! `.env` files never override variables already set.

use std::path::PathBuf;

/// The userctl config directory (~/.userctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".userctl"))
}

/// Load `.env` from the current directory, then `~/.userctl/.env`.
///
/// Returns the files that were loaded. Runs before tracing is
/// initialized, so the caller logs the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.is_file() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}
