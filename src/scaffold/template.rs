use std::fs;
use std::path::Path;

use crate::error::AppError;

const BUILTIN_TEMPLATE: &str = include_str!("../../templates/solution.rs.tmpl");
const BUILTIN_EXTENSION: &str = "rs";

/// Replaced with the padded day number, e.g. `07`
const DAY_NUM_PLACEHOLDER: &str = "REPLACE_DAY_NUM";
/// Replaced with the day symbol, e.g. `day_07`
const DAY_PLACEHOLDER: &str = "REPLACE_DAY";

/// Solution stub written to `src/day_<NN>.<ext>`
#[derive(Debug, Clone)]
pub(crate) struct Template {
    body: String,
    extension: String,
}

impl Template {
    pub(crate) fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE, BUILTIN_EXTENSION)
    }

    pub(crate) fn new(body: &str, extension: &str) -> Self {
        Self {
            body: body.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Custom template file. The extension defaults to the template's own.
    pub(crate) fn from_file(path: &Path, extension: Option<&str>) -> Result<Self, AppError> {
        let body = fs::read_to_string(path).map_err(|source| AppError::Template {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = extension
            .map(str::to_string)
            .or_else(|| {
                path.extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| BUILTIN_EXTENSION.to_string());
        Ok(Self::new(&body, &extension))
    }

    pub(crate) fn extension(&self) -> &str {
        &self.extension
    }

    /// Fill in the placeholders for `padded_day`. The longer placeholder
    /// goes first since the shorter one is its prefix.
    pub(crate) fn render(&self, padded_day: &str) -> String {
        self.body
            .trim()
            .replace(DAY_NUM_PLACEHOLDER, padded_day)
            .replace(DAY_PLACEHOLDER, &format!("day_{padded_day}"))
    }
}
