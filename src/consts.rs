use std::time::Duration;

/// Default site root; both endpoints hang off `/<year>/day/<day>/`
pub(crate) const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Cookie name the site uses for the login session
pub(crate) const SESSION_KEY: &str = "session";

pub(crate) const FIRST_YEAR: i32 = 2015;
pub(crate) const LAST_DAY: u32 = 25;

/// Tag wrapping the human-readable result on the answer page
pub(crate) const ANSWER_TAG: &str = "article";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Env override for the session file location
pub(crate) const SESSION_FILE_ENV: &str = "AOC_SESSION_FILE";

/// Directory name under the platform config dir
pub(crate) const APP_DIR: &str = "aoc-cli";
