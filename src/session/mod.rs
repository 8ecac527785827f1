//! Session credential storage
//!
//! The site authenticates every personalized request with one `session`
//! cookie. Stores persist it as a single `session=<value>` line.

mod file;
#[cfg(test)]
pub(crate) mod memory;

use std::fmt;

use crate::consts::SESSION_KEY;
use crate::error::AppError;

pub(crate) use file::FileSessionStore;

/// Normalized session credential (`session=<value>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionToken(String);

impl SessionToken {
    /// Trim the raw input and make sure the `session=` prefix appears once.
    /// Returns `None` when no value is left.
    pub(crate) fn normalize(raw: &str) -> Option<Self> {
        let mut value = raw.trim();
        while let Some(rest) = value
            .strip_prefix(SESSION_KEY)
            .and_then(|rest| rest.strip_prefix('='))
        {
            value = rest.trim_start();
        }
        if value.is_empty() {
            return None;
        }
        Some(Self(format!("{SESSION_KEY}={value}")))
    }

    /// Full `Cookie` header value
    pub(crate) fn header_value(&self) -> &str {
        &self.0
    }

    /// Bare cookie value without the key
    pub(crate) fn value(&self) -> &str {
        &self.0[SESSION_KEY.len() + 1..]
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistent home of the session credential
pub(crate) trait SessionStore {
    /// Read the stored credential, failing with `MissingCredential` when
    /// nothing usable is stored.
    fn load(&self) -> Result<SessionToken, AppError>;

    /// Normalize and persist `raw`, returning what was stored.
    fn save(&self, raw: &str) -> Result<SessionToken, AppError>;
}
