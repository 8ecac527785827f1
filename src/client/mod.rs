//! Site access
//!
//! Commands talk to the site through `PuzzleClient` so tests can swap in a
//! fake. `HttpClient` is the only real implementation.

mod http;
#[cfg(test)]
pub(crate) mod fake;

use std::time::Duration;

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::AppError;
use crate::puzzle::{PuzzleId, Submission};
use crate::session::SessionToken;

pub(crate) use http::HttpClient;

pub(crate) trait PuzzleClient {
    /// Raw puzzle input for `puzzle`
    fn fetch_input(&self, puzzle: PuzzleId, token: &SessionToken) -> Result<String, AppError>;

    /// Post an answer and return the full response page
    fn submit_answer(
        &self,
        submission: &Submission,
        token: &SessionToken,
    ) -> Result<String, AppError>;
}

/// Connection settings for `HttpClient`
#[derive(Debug, Clone)]
pub(crate) struct ClientSettings {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("aoc-cli/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientSettings {
    pub(crate) fn input_url(&self, puzzle: PuzzleId) -> String {
        format!("{}/input", self.day_url(puzzle))
    }

    pub(crate) fn answer_url(&self, puzzle: PuzzleId) -> String {
        format!("{}/answer", self.day_url(puzzle))
    }

    fn day_url(&self, puzzle: PuzzleId) -> String {
        format!(
            "{}/{}/day/{}",
            self.base_url.trim_end_matches('/'),
            puzzle.year(),
            puzzle.day()
        )
    }
}
