use std::path::PathBuf;

/// Base URL of the forum API. Every request path is appended to this.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// File name of the persisted API key, relative to the home directory.
pub const TOKEN_FILE_NAME: &str = ".claw_token";

/// Runtime settings resolved once at start-up and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token_path: PathBuf,
}

impl Config {
    pub fn new(base_url: impl Into<String>, token_path: impl Into<PathBuf>) -> Self {
        Config {
            base_url: base_url.into(),
            token_path: token_path.into(),
        }
    }

    /// Default configuration: the fixed base URL and `~/.claw_token`.
    /// Falls back to the current directory when no home directory is known.
    pub fn load() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Config::new(DEFAULT_BASE_URL, dir.join(TOKEN_FILE_NAME))
    }
}
