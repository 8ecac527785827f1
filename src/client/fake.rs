//! Scripted client for tests; never touches the network

use std::cell::{Cell, RefCell};

use crate::error::AppError;
use crate::puzzle::{PuzzleId, Submission};
use crate::session::SessionToken;

use super::PuzzleClient;

#[derive(Default)]
pub(crate) struct FakeClient {
    pub(crate) input: String,
    pub(crate) answer_page: String,
    pub(crate) fail_with: Option<String>,
    calls: Cell<usize>,
    last_cookie: RefCell<Option<String>>,
    last_submission: Cell<Option<Submission>>,
}

impl FakeClient {
    pub(crate) fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn with_answer_page(page: &str) -> Self {
        Self {
            answer_page: page.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_cookie(&self) -> Option<String> {
        self.last_cookie.borrow().clone()
    }

    pub(crate) fn last_submission(&self) -> Option<Submission> {
        self.last_submission.get()
    }

    fn record(&self, token: &SessionToken, url: &str) -> Result<(), AppError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_cookie.borrow_mut() = Some(token.header_value().to_string());
        match &self.fail_with {
            Some(message) => Err(AppError::Transport {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl PuzzleClient for FakeClient {
    fn fetch_input(&self, puzzle: PuzzleId, token: &SessionToken) -> Result<String, AppError> {
        self.record(token, &format!("fake://{puzzle}/input"))?;
        Ok(self.input.clone())
    }

    fn submit_answer(
        &self,
        submission: &Submission,
        token: &SessionToken,
    ) -> Result<String, AppError> {
        self.record(token, &format!("fake://{}/answer", submission.puzzle))?;
        self.last_submission.set(Some(*submission));
        Ok(self.answer_page.clone())
    }
}
