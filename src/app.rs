use std::path::Path;

use chrono::NaiveDate;

use crate::cli::Commands;
use crate::client::PuzzleClient;
use crate::consts::ANSWER_TAG;
use crate::error::AppError;
use crate::extract::extract_fragment;
use crate::puzzle::{Part, PuzzleId, Submission, latest_cycle_year, validate_day};
use crate::scaffold::Scaffolder;
use crate::session::SessionStore;

pub(crate) struct CommandContext<'a> {
    pub(crate) store: &'a dyn SessionStore,
    pub(crate) client: &'a dyn PuzzleClient,
    pub(crate) scaffolder: &'a Scaffolder,
    pub(crate) today: NaiveDate,
}

impl CommandContext<'_> {
    fn puzzle(&self, year: Option<i32>, day: u32) -> Result<PuzzleId, AppError> {
        let latest = latest_cycle_year(self.today);
        Ok(PuzzleId::new(year.unwrap_or(latest), day, latest)?)
    }
}

/// Run one command and return the text to print on stdout
pub(crate) fn run_command(command: &Commands, ctx: &CommandContext<'_>) -> Result<String, AppError> {
    match command {
        Commands::Download { path, day, year } => handle_download(path, *day, *year, ctx),
        Commands::Submit {
            solution,
            day,
            year,
            part,
        } => handle_submit(*solution, *day, *year, *part, ctx),
        Commands::Cookie { value } => handle_cookie(value.as_deref(), ctx),
    }
}

fn handle_download(
    path: &Path,
    day: u32,
    year: Option<i32>,
    ctx: &CommandContext<'_>,
) -> Result<String, AppError> {
    let puzzle = ctx.puzzle(year, day)?;
    let token = ctx.store.load()?;

    tracing::info!("downloading input for {puzzle}");
    let input = ctx.client.fetch_input(puzzle, &token)?;
    let report = ctx.scaffolder.materialize(path, puzzle.day(), &input)?;
    Ok(report.summary())
}

fn handle_submit(
    answer: i64,
    day: u32,
    year: Option<i32>,
    part: u8,
    ctx: &CommandContext<'_>,
) -> Result<String, AppError> {
    let part = Part::try_from(part)?;
    validate_day(day)?;
    let submission = Submission {
        puzzle: ctx.puzzle(year, day)?,
        part,
        answer,
    };
    let token = ctx.store.load()?;

    tracing::info!("submitting {answer} for {} part {}", submission.puzzle, part.level());
    let page = ctx.client.submit_answer(&submission, &token)?;
    let message = extract_fragment(&page, ANSWER_TAG);
    if message.is_empty() {
        tracing::warn!("response page had no <{ANSWER_TAG}> content");
    }
    Ok(message)
}

fn handle_cookie(value: Option<&str>, ctx: &CommandContext<'_>) -> Result<String, AppError> {
    let token = match value.filter(|v| !v.trim().is_empty()) {
        Some(raw) => ctx.store.save(raw)?,
        None => ctx.store.load()?,
    };
    Ok(token.to_string())
}
