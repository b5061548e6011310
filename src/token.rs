// Token persistence: the API key returned by `register` lives in a single
// plain-text file and is read back once per invocation.

use crate::error::Result;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the token file with `token` as its only content.
    pub fn save(&self, token: &str) -> Result<()> {
        std::fs::write(&self.path, token)?;
        debug!("token written to {}", self.path.display());
        Ok(())
    }

    /// Read the stored token, trimmed. A missing file is `None`, not an error.
    pub fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
