//! File-backed session store

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::APP_DIR;
use crate::error::AppError;

use super::{SessionStore, SessionToken};

const SESSION_FILE_NAME: &str = "session.txt";

pub(crate) struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/aoc-cli/session.txt`, or `~/.aoc-cli/session.txt` on
    /// platforms without a config dir
    pub(crate) fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            return config_dir.join(APP_DIR).join(SESSION_FILE_NAME);
        }
        dirs::home_dir()
            .unwrap_or_default()
            .join(format!(".{APP_DIR}"))
            .join(SESSION_FILE_NAME)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty placeholder so the user can find and edit the file
    fn ensure_exists(&self) -> Result<(), AppError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(AppError::filesystem(parent))?;
        }
        tracing::debug!(path = %self.path.display(), "creating empty session file");
        fs::write(&self.path, "").map_err(AppError::filesystem(&self.path))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<SessionToken, AppError> {
        self.ensure_exists()?;
        let content = fs::read_to_string(&self.path).map_err(AppError::filesystem(&self.path))?;
        let token = SessionToken::normalize(&content).ok_or_else(|| AppError::MissingCredential {
            path: self.path.clone(),
        })?;
        tracing::debug!(chars = token.value().len(), "loaded session cookie");
        Ok(token)
    }

    fn save(&self, raw: &str) -> Result<SessionToken, AppError> {
        let token = SessionToken::normalize(raw).ok_or_else(|| AppError::EmptyCredential {
            path: self.path.clone(),
        })?;
        self.ensure_exists()?;
        fs::write(&self.path, token.header_value()).map_err(AppError::filesystem(&self.path))?;
        tracing::debug!(path = %self.path.display(), "stored session cookie");
        Ok(token)
    }
}
