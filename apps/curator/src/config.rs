use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// Everything is optional: with no environment at all, the demo runs
/// against the built-in loft scene fixture at the default log level.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a scene description JSON file. When unset, the built-in
    /// loft fixture is used.
    pub scene_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            scene_path: std::env::var("SCENE_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
