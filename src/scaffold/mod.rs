//! Per-day project layout
//!
//! ```text
//! <base>/inputs/day_NN.txt    puzzle input, refreshed on every download
//! <base>/samples/day_NN.txt   empty placeholder, never overwritten
//! <base>/src/day_NN.<ext>     rendered template, never overwritten
//! ```

mod template;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::puzzle::pad_day;

pub(crate) use template::Template;

const INPUTS_DIR: &str = "inputs";
const SAMPLES_DIR: &str = "samples";
const SRC_DIR: &str = "src";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileStatus {
    Created,
    Kept,
}

/// What `materialize` did, for printing back to the user
#[derive(Debug)]
pub(crate) struct ScaffoldReport {
    pub(crate) input: PathBuf,
    pub(crate) sample: (PathBuf, FileStatus),
    pub(crate) solution: (PathBuf, FileStatus),
}

impl FileStatus {
    fn label(self) -> &'static str {
        match self {
            FileStatus::Created => "created",
            FileStatus::Kept => "kept",
        }
    }
}

impl ScaffoldReport {
    pub(crate) fn summary(&self) -> String {
        [
            ("written", &self.input),
            (self.sample.1.label(), &self.sample.0),
            (self.solution.1.label(), &self.solution.0),
        ]
        .iter()
        .map(|(label, path)| format!("{label:>7}  {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

pub(crate) struct Scaffolder {
    template: Template,
}

impl Scaffolder {
    pub(crate) fn new(template: Template) -> Self {
        Self { template }
    }

    /// Lay out `base` for `day` and store `input`. Safe to re-run: only the
    /// input file is ever overwritten.
    pub(crate) fn materialize(
        &self,
        base: &Path,
        day: u32,
        input: &str,
    ) -> Result<ScaffoldReport, AppError> {
        let inputs = base.join(INPUTS_DIR);
        let samples = base.join(SAMPLES_DIR);
        let src = base.join(SRC_DIR);
        for dir in [base, inputs.as_path(), samples.as_path(), src.as_path()] {
            fs::create_dir_all(dir).map_err(AppError::filesystem(dir))?;
        }

        let padded = pad_day(day);
        let txt_name = format!("day_{padded}.txt");

        let input_path = inputs.join(&txt_name);
        fs::write(&input_path, input).map_err(AppError::filesystem(&input_path))?;
        tracing::debug!(path = %input_path.display(), bytes = input.len(), "wrote input");

        let sample_path = samples.join(&txt_name);
        let sample_status = create_new(&sample_path, "")?;

        let solution_path = src.join(format!("day_{padded}.{}", self.template.extension()));
        let solution_status = if solution_path.exists() {
            FileStatus::Kept
        } else {
            create_new(&solution_path, &self.template.render(&padded))?
        };
        tracing::debug!(
            sample = ?sample_status,
            solution = ?solution_status,
            "scaffolded day {padded}"
        );

        Ok(ScaffoldReport {
            input: input_path,
            sample: (sample_path, sample_status),
            solution: (solution_path, solution_status),
        })
    }
}

/// Write `content` to a file that must not exist yet
fn create_new(path: &Path, content: &str) -> Result<FileStatus, AppError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(FileStatus::Kept),
        Err(e) => return Err(AppError::filesystem(path)(e)),
    };
    file.write_all(content.as_bytes())
        .map_err(AppError::filesystem(path))?;
    Ok(FileStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaffolder() -> Scaffolder {
        Scaffolder::new(Template::new("fn REPLACE_DAY() {} // REPLACE_DAY_NUM", "rs"))
    }

    #[test]
    fn creates_full_layout() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("aoc").join("2023");

        let report = scaffolder().materialize(&base, 3, "1\n2\n3\n").unwrap();

        assert_eq!(report.input, base.join("inputs/day_03.txt"));
        assert_eq!(fs::read_to_string(&report.input).unwrap(), "1\n2\n3\n");
        assert_eq!(report.sample.1, FileStatus::Created);
        assert_eq!(fs::read_to_string(base.join("samples/day_03.txt")).unwrap(), "");
        assert_eq!(report.solution.1, FileStatus::Created);
        assert_eq!(
            fs::read_to_string(base.join("src/day_03.rs")).unwrap(),
            "fn day_03() {} // 03"
        );
    }

    #[test]
    fn rerun_refreshes_input_but_keeps_solution() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        let scaffolder = scaffolder();

        scaffolder.materialize(base, 25, "first").unwrap();
        let solution = base.join("src/day_25.rs");
        fs::write(&solution, "my work").unwrap();
        fs::write(base.join("samples/day_25.txt"), "sample").unwrap();

        let report = scaffolder.materialize(base, 25, "second").unwrap();

        assert_eq!(fs::read_to_string(base.join("inputs/day_25.txt")).unwrap(), "second");
        assert_eq!(fs::read_to_string(&solution).unwrap(), "my work");
        assert_eq!(fs::read_to_string(base.join("samples/day_25.txt")).unwrap(), "sample");
        assert_eq!(report.sample.1, FileStatus::Kept);
        assert_eq!(report.solution.1, FileStatus::Kept);
    }

    #[test]
    fn extension_follows_template() {
        let dir = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(Template::new("def REPLACE_DAY(): pass", "py"));

        let report = scaffolder.materialize(dir.path(), 9, "").unwrap();
        assert_eq!(report.solution.0, dir.path().join("src/day_09.py"));
    }

    #[test]
    fn base_that_is_a_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("taken");
        fs::write(&base, "").unwrap();

        let err = scaffolder().materialize(&base, 1, "x").unwrap_err();
        assert!(matches!(err, AppError::Filesystem { .. }));
    }

    #[test]
    fn summary_lists_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = scaffolder().materialize(dir.path(), 1, "x").unwrap();
        let summary = report.summary();
        assert!(summary.contains("day_01.txt"));
        assert!(summary.contains("created"));
        assert_eq!(summary.lines().count(), 3);
        assert!(summary.contains("day_01.rs"));
    }
}
