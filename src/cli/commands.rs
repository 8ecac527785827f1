//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Download an Advent of Code puzzle input and scaffold its files
    Download {
        /// The path in which the inputs, samples and sources will be created
        path: PathBuf,

        /// The Advent of Code day to download, a number between 1 and 25
        #[arg(short, long)]
        day: u32,

        /// The Advent of Code year to download from, 2015 up to the latest event
        /// (defaults to the latest event)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Submit your solution to Advent of Code
    Submit {
        /// The solution to submit
        #[arg(allow_negative_numbers = true)]
        solution: i64,

        /// The Advent of Code day to submit, a number between 1 and 25
        #[arg(short, long)]
        day: u32,

        /// The Advent of Code year to submit to, 2015 up to the latest event
        /// (defaults to the latest event)
        #[arg(short, long)]
        year: Option<i32>,

        /// The Advent of Code part you want to submit, 1 or 2
        #[arg(short, long)]
        part: u8,
    },
    /// Set and get your Advent of Code session cookie
    Cookie {
        /// Set your session cookie; prints the active one when omitted
        value: Option<String>,
    },
}
