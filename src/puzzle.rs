//! Puzzle identity
//!
//! A puzzle is addressed by (year, day); answers are posted per part.
//! Everything here is validated before any request or file write happens.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::consts::{FIRST_YEAR, LAST_DAY};
use crate::error::ValidationError;

/// Most recent year whose event has started: the current year once
/// December begins, the previous one before that.
pub(crate) fn latest_cycle_year(today: NaiveDate) -> i32 {
    if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Two-digit day label used in every generated file name ("03", "25")
pub(crate) fn pad_day(day: u32) -> String {
    format!("{day:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PuzzleId {
    year: i32,
    day: u32,
}

impl PuzzleId {
    pub(crate) fn new(year: i32, day: u32, latest_year: i32) -> Result<Self, ValidationError> {
        let day = validate_day(day)?;
        if !(FIRST_YEAR..=latest_year).contains(&year) {
            return Err(ValidationError::InvalidYear {
                year,
                latest: latest_year,
            });
        }
        Ok(Self { year, day })
    }

    pub(crate) fn year(self) -> i32 {
        self.year
    }

    pub(crate) fn day(self) -> u32 {
        self.day
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

pub(crate) fn validate_day(day: u32) -> Result<u32, ValidationError> {
    if (1..=LAST_DAY).contains(&day) {
        Ok(day)
    } else {
        Err(ValidationError::InvalidDay { day })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part {
    One,
    Two,
}

impl Part {
    /// Value of the `level` form field
    pub(crate) fn level(self) -> &'static str {
        match self {
            Part::One => "1",
            Part::Two => "2",
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = ValidationError;

    fn try_from(part: u8) -> Result<Self, Self::Error> {
        match part {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            _ => Err(ValidationError::InvalidPart { part }),
        }
    }
}

/// A candidate answer for one part of one puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Submission {
    pub(crate) puzzle: PuzzleId,
    pub(crate) part: Part,
    pub(crate) answer: i64,
}
