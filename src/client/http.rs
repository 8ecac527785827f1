use crate::error::AppError;
use crate::puzzle::{PuzzleId, Submission};
use crate::session::SessionToken;

use super::{ClientSettings, PuzzleClient};

/// Blocking client for the live site
pub(crate) struct HttpClient {
    agent: ureq::Agent,
    settings: ClientSettings,
}

impl HttpClient {
    pub(crate) fn new(settings: ClientSettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .build()
            .into();
        Self { agent, settings }
    }
}

impl PuzzleClient for HttpClient {
    fn fetch_input(&self, puzzle: PuzzleId, token: &SessionToken) -> Result<String, AppError> {
        let url = self.settings.input_url(puzzle);
        tracing::debug!(%url, "fetching input");

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Cookie", token.header_value())
            .header("User-Agent", self.settings.user_agent.as_str())
            .call()
            .map_err(|e| transport_error(&url, &e))?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(&url, &e))?;

        tracing::debug!(bytes = body.len(), "input received");
        Ok(body)
    }

    fn submit_answer(
        &self,
        submission: &Submission,
        token: &SessionToken,
    ) -> Result<String, AppError> {
        let url = self.settings.answer_url(submission.puzzle);
        let answer = submission.answer.to_string();
        tracing::debug!(%url, level = submission.part.level(), %answer, "posting answer");

        let mut response = self
            .agent
            .post(url.as_str())
            .header("Cookie", token.header_value())
            .header("User-Agent", self.settings.user_agent.as_str())
            .send_form([
                ("level", submission.part.level()),
                ("answer", answer.as_str()),
            ])
            .map_err(|e| transport_error(&url, &e))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(&url, &e))
    }
}

fn transport_error(url: &str, err: &ureq::Error) -> AppError {
    let message = match err {
        ureq::Error::StatusCode(400) => {
            "http status: 400 (session cookie missing, invalid or expired?)".to_string()
        }
        other => other.to_string(),
    };
    AppError::Transport {
        url: url.to_string(),
        message,
    }
}
