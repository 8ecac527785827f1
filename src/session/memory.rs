//! In-memory session store for tests

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use crate::error::AppError;

use super::{SessionStore, SessionToken};

#[derive(Default)]
pub(crate) struct MemorySessionStore {
    stored: RefCell<Option<String>>,
    loads: Cell<usize>,
}

impl MemorySessionStore {
    pub(crate) fn with_value(raw: &str) -> Self {
        Self {
            stored: RefCell::new(Some(raw.to_string())),
            loads: Cell::new(0),
        }
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads.get()
    }

    pub(crate) fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<SessionToken, AppError> {
        self.loads.set(self.loads.get() + 1);
        self.stored
            .borrow()
            .as_deref()
            .and_then(SessionToken::normalize)
            .ok_or_else(|| AppError::MissingCredential {
                path: PathBuf::from("<memory>"),
            })
    }

    fn save(&self, raw: &str) -> Result<SessionToken, AppError> {
        let token = SessionToken::normalize(raw).ok_or_else(|| AppError::EmptyCredential {
            path: PathBuf::from("<memory>"),
        })?;
        *self.stored.borrow_mut() = Some(token.header_value().to_string());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_reports_missing() {
        let store = MemorySessionStore::default();
        assert!(matches!(
            store.load().unwrap_err(),
            AppError::MissingCredential { .. }
        ));
        assert_eq!(store.loads(), 1);
    }

    #[test]
    fn save_normalizes() {
        let store = MemorySessionStore::default();
        store.save("abc123").unwrap();
        assert_eq!(store.stored().as_deref(), Some("session=abc123"));
        assert_eq!(store.load().unwrap().header_value(), "session=abc123");
    }

    #[test]
    fn save_of_empty_value_is_rejected() {
        let store = MemorySessionStore::with_value("session=old");
        assert!(matches!(
            store.save("session=").unwrap_err(),
            AppError::EmptyCredential { .. }
        ));
        assert_eq!(store.stored().as_deref(), Some("session=old"));
    }
}
